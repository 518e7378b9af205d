/// Shared utilities - error types, result alias, logging setup
pub mod error;
pub mod logging;
pub mod result;

pub use result::Result;
