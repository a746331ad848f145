//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`commitly commit`, `commitly lint`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod commit;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod lint;
pub mod scopes;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
