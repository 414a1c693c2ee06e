//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, UserSource};
pub use global::GlobalOptions;
