//! Storage array management client.
//!
//! Issues administrative commands to an array through a
//! [`CommandExecutor`], parses the tabular responses, and maps vendor
//! error conditions to the typed errors of `sanctl-common`. The actual
//! transport (SSH, local vendor binary, ...) is supplied by the caller;
//! this crate ships the executor seam, a deterministic mock for tests,
//! and the pool resource built on top.

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod parse;
pub mod pool;

pub use command::CmdBuilder;
pub use config::ClientConfig;
pub use error::ClientError;
pub use executor::{CmdResponse, CommandExecutor, ExecError, MockExecutor};
pub use parse::{Record, ResponseParseError, parse_records};
pub use pool::{Pool, PoolInfo};
