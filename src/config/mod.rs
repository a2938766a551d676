//! Process configuration: built once at startup and passed down explicitly.

mod loader;
mod types;

pub use loader::parse_duration;
pub use types::*;
