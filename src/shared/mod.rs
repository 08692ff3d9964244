//! Common utilities shared by every layer: the crate-wide `Result` alias,
//! user-facing error types and file-safety checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
