pub mod checker;
pub mod cli;
pub mod error;
pub mod output;
pub mod path_utils;
pub mod resolver;
pub mod schema;

pub use error::{AssetGuardError, Result, Violation};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
