//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod readme;
mod scaffold;

pub use readme::ReadmeService;
pub use scaffold::ScaffoldService;
