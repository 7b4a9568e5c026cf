//! Subcommand implementations.

pub mod parse;
pub mod payload;
pub mod records;
pub mod shapes;
