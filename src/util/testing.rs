use std::env;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Initialize the global tracing subscriber for tests, exactly once.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );

        if !tracing::dispatcher::has_been_set() {
            subscriber.try_init().unwrap_or_else(|e| {
                eprintln!("Error: Failed to set up logging: {}", e);
            });
        }
        info!("Test Setup complete");
    });
}
