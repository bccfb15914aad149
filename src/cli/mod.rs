pub mod commands;
pub mod import;

pub use commands::Cli;
