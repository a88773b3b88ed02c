//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`envlint lint`, `envlint scan`)
//! - Shared initialization logic
//! - Consistent global flag handling
//!
//! # Exit codes
//!
//! - `0` - nothing to report
//! - `1` - lint issues, failed syntax checks, or `init` refusing to overwrite
//!   (`fix` exits `0` whether or not it changed anything)
//! - `2` - a file or the configuration could not be processed

pub mod check;
pub mod dispatcher;
pub mod fix;
pub mod init;
pub mod lint;
pub mod scan;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
