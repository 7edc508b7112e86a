//! CLI module
//!
//! Command-line interface for driving the provider.
//!
//! # Commands
//!
//! - `schema` - Print provider and resource schemas as JSON
//! - `docs` - Print Markdown documentation
//! - `create` / `read` / `update` / `delete` / `import` - Run one resource operation
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
