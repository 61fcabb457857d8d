pub mod commands;
pub mod generate;
pub mod validate;

pub use commands::{Cli, Commands};
