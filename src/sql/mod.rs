//! Fixed parameterized statements. Values are always bound, never formatted into SQL.

mod book;
pub use book::*;
