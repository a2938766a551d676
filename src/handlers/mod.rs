//! HTTP handlers. They only extract raw path and body and delegate to the service.

pub mod book;
pub use book::*;
