//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod get;
