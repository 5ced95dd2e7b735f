//! Command handlers, one module per subcommand.

pub mod adventures;
pub mod categories;
pub mod completions;
pub mod config;

mod preview;
