//! Command dispatch: maps parsed flags onto services
//!
//! Action flags combine the way the original tool combines them: each
//! requested action runs in a fixed order (print, readme, init, day), and the
//! brief is printed when no action flag is given.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::services::{ReadmeService, ScaffoldService};
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::content::render_brief;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let root = resolve_root(cli)?;
    let settings = Settings::load(Some(&root)).map_err(CliError::Application)?;
    debug!("root: {}, settings: {:?}", root.display(), settings);

    let no_action = !cli.print && !cli.init && !cli.readme && cli.day.is_none();

    if cli.print || no_action {
        print_brief(&settings);
    }
    if cli.readme {
        generate_readme(&root, &settings)?;
    }
    if cli.init {
        scaffold_all(&root, &settings)?;
    }
    if let Some(day) = cli.day {
        create_single_day(day, &root, &settings)?;
    }

    Ok(())
}

/// Working root: `-C/--root` if given, else the current directory.
fn resolve_root(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.root {
        Some(root) => Ok(root.clone()),
        None => std::env::current_dir().map_err(|e| CliError::Io {
            context: "resolve current directory".to_string(),
            source: e,
        }),
    }
}

fn filesystem() -> Arc<dyn FileSystem> {
    Arc::new(RealFileSystem)
}

#[instrument(skip(settings))]
fn print_brief(settings: &Settings) {
    output::info(&render_brief(&settings.course_title, settings.days));
}

#[instrument(skip(settings))]
fn generate_readme(root: &std::path::Path, settings: &Settings) -> CliResult<()> {
    let service = ReadmeService::new(filesystem(), settings.clone());
    let destination = service.default_destination(root);
    let path = service.generate(&destination)?;
    output::action("Generated", &path.display());
    Ok(())
}

#[instrument(skip(settings))]
fn scaffold_all(root: &std::path::Path, settings: &Settings) -> CliResult<()> {
    let service = ScaffoldService::new(filesystem(), settings.clone());
    let folder = service.scaffold(settings.days, root)?;
    output::success(&format!(
        "scaffolded {} ({} day templates)",
        folder.display(),
        settings.days
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn create_single_day(day: u32, root: &std::path::Path, settings: &Settings) -> CliResult<()> {
    let service = ScaffoldService::new(filesystem(), settings.clone());
    let path = service.create_day_template(day, root)?;
    output::action("Created template", &path.display());
    Ok(())
}
