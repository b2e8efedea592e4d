//! Course content: static text blocks and pure renderers
//!
//! Everything here is string assembly only; services decide where the
//! rendered documents land on disk.

use crate::domain::DayIndex;

/// Ordered project suggestions, printed with the brief and listed in the README.
pub const PROJECT_IDEAS: [&str; 7] = [
    "Personal portfolio website (Flask) with contact form and blog",
    "To-do app with persistent storage and authentication",
    "Data analysis project: analyze a public dataset (CSV) and visualize insights",
    "Web scraper that collects structured data and exports to CSV",
    "Desktop GUI app (expense tracker) using Tkinter or PySimpleGUI",
    "REST API for a simple resource with token-based auth",
    "Automation script: batch file renamer / CSV merger / email sender",
];

/// Short study tips printed at the end of the brief.
pub const STUDY_TIPS: [&str; 8] = [
    "Follow the daily plan but be flexible; consistency beats intensity.",
    "Code every day. Even 30-60 minutes daily is highly effective.",
    "Write small programs that solve real problems you care about.",
    "Read and run examples, then modify them to see different behaviors.",
    "Use version control (git) and push your work to GitHub frequently.",
    "Write tests for non-trivial code; testing clarifies design.",
    "When stuck, break the problem into smaller parts and debug step by step.",
    "Discuss your solutions in community forums or with a study partner.",
];

/// The static overview block of the course brief.
pub fn course_overview(title: &str, days: u32) -> String {
    format!(
        r#"{title}

Overview
--------
This course is designed to take you from a complete beginner to confident
Python developer. It covers core Python concepts, best practices, and multiple
application domains, including:

- Core Python: variables, data types, control flow, functions, OOP, modules,
  error handling, testing and packaging.
- Web development: fundamentals of HTTP, Flask and/or Django basics, building
  REST APIs, templating, authentication, and deployment basics.
- Data science: NumPy, pandas, basic statistics, data visualization, and an
  end-to-end mini project analyzing a dataset.
- GUI: building desktop apps with Tkinter (or PySimpleGUI) and event-driven
  programming basics.
- Web scraping: requests, BeautifulSoup, handling pagination, rate limiting,
  and polite scraping.
- Automation & scripting: file handling, CSV/JSON processing, interacting with
  external APIs, and practical automation tasks.

Course structure
----------------
There are {days} days. Typical day pattern:
1. Concept introduction (short reading + code examples)
2. Guided exercises to practice the concept
3. Short challenge or mini-task to apply learning
4. Periodic project days where multiple concepts are combined into a
   real-world project.

Every 7-10 days you will find a "project day" to consolidate learning.
The course culminates in several capstone projects spanning different
domains.

Learning objectives
-------------------
By the end of the course you should be able to:
- Write idiomatic Python code and use common standard-library modules.
- Build small to medium web applications and REST APIs.
- Perform basic data analysis and visualizations.
- Write GUI applications for desktop use-cases.
- Scrape and process data from the web responsibly.
- Design and complete end-to-end projects and publish them (GitHub).
"#
    )
}

/// Render the full course brief: overview, numbered projects, study tips.
pub fn render_brief(title: &str, days: u32) -> String {
    let mut brief = course_overview(title, days);
    brief.push_str("\nSuggested projects:\n\n");
    for (i, project) in PROJECT_IDEAS.iter().enumerate() {
        brief.push_str(&format!("{}. {}\n", i + 1, project));
    }
    brief.push_str("\nStudy tips:\n\n");
    for tip in STUDY_TIPS {
        brief.push_str(&format!("- {}\n", tip));
    }
    brief
}

/// Render the markdown template for one day.
///
/// The heading carries the zero-padded day number (`# Day 007`); the body
/// sections are fixed and meant to be filled in by hand.
pub fn render_day(day: DayIndex) -> String {
    format!(
        r#"# Day {day}

## Topic
Brief description of the topic(s) for day {n}.

## Goals
- Explain what you should be able to do after completing this day.

## Notes
- Add code snippets, explanations, and links here.

## Exercises
1. Exercise 1 - write and run code that demonstrates the core idea.
2. Exercise 2 - small challenge to apply the concept.

## Reflection
- What did you find difficult? What was easy?

## Links / Resources
- Useful links, docs, or videos used for this day.
"#,
        day = day,
        n = day.get(),
    )
}

/// Render the repository README: title, usage instructions, project bullets.
pub fn render_readme(title: &str, days: u32, days_dir: &str) -> String {
    let mut content = format!(
        r#"# {title}

This repository contains notes, exercises, and projects for the
"{title}" course. The course teaches core Python and
multiple application areas over {days} days. Each day has a short note file
and exercises.

## How to use this repo

1. Run `dayplan` to print a course brief.
2. Use `dayplan --init` to scaffold the `{days_dir}/` folder with
   day template files (optional).
3. Keep your solutions in `{days_dir}/day_XXX/` or `solutions/` as you prefer.

## Project ideas

"#
    );
    for project in PROJECT_IDEAS {
        content.push_str(&format!("- {}\n", project));
    }
    content.push_str("\nGood luck and happy coding!\n");
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_title_when_rendering_brief_then_contains_title_and_projects() {
        let brief = render_brief("100 Days of Code", 100);
        assert!(brief.starts_with("100 Days of Code"));
        assert!(brief.contains("1. Personal portfolio website"));
        assert!(brief.contains(&format!("{}. {}", PROJECT_IDEAS.len(), PROJECT_IDEAS[6])));
        for tip in STUDY_TIPS {
            assert!(brief.contains(tip), "missing tip: {}", tip);
        }
    }

    #[test]
    fn given_day_when_rendering_template_then_heading_is_zero_padded() {
        let day = DayIndex::new(7, 100).unwrap();
        let doc = render_day(day);
        assert!(doc.starts_with("# Day 007\n"));
        assert!(doc.contains("for day 7."));
        assert!(doc.contains("## Reflection"));
    }

    #[test]
    fn given_readme_when_rendering_then_each_project_is_a_bullet() {
        let readme = render_readme("100 Days of Code", 100, "days");
        for project in PROJECT_IDEAS {
            assert!(readme.contains(&format!("- {}", project)));
        }
        assert!(readme.contains("`days/`"));
        assert!(readme.ends_with("Good luck and happy coding!\n"));
    }
}
