pub mod cli;
pub mod formatters;
pub mod traversal;
pub mod types;
