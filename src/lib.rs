//! dayplan: course brief printing and day-template scaffolding
//!
//! Layers:
//! - `domain`: course content and day index rules (no I/O)
//! - `application`: services orchestrating scaffolding over I/O boundary traits
//! - `infrastructure`: real filesystem implementations
//! - `cli`: argument parsing, dispatch, and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
