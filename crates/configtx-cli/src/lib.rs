//! configtx command line
//!
//! Reads a channel configuration block, adds an orderer endpoint to one
//! organization and reports (optionally writes back) the result.
//!
//! # Pipeline
//!
//! ```text
//! --configPath ─▶ block::read_block ─▶ endpoint::set_orderer_endpoint ─▶ report
//!                        │                         │                      │
//!                        └──────── ConfigBackend (decode / set / encode) ─┘
//!                                                              └─▶ block::write_block (--output)
//! ```
//!
//! Everything is synchronous and fails fast: the first error is returned to
//! [`commands::dispatch`], which prints it and picks the exit status.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod backend;
pub mod block;
pub mod commands;
pub mod endpoint;
pub mod error;
pub mod logging;

// Re-exports
pub use backend::{ConfigBackend, ProtoBackend};
pub use endpoint::NetworkAddress;
pub use error::{
    BackendError, CommandError, CommandResult, ReadError, UpdateError, ValidationError, WriteError,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
