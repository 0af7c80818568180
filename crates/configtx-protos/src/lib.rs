//! Channel configuration wire messages
//!
//! Hand-maintained `prost` definitions for the subset of the ledger's
//! `common` protobuf package that a configuration block travels in:
//!
//! ```text
//! Block ─ data.data[0] ─▶ Payload ─ data ─▶ Config ─ channel_group ─▶ ConfigGroup (tree)
//! ```
//!
//! Field tags follow the upstream `.proto` files so blocks produced by a
//! ledger node decode unchanged. Maps are `BTreeMap`s which keeps
//! re-encoding deterministic.

#![forbid(unsafe_code)]

mod block;
mod config;

pub use block::{Block, BlockData, BlockHeader, BlockMetadata, Header, Payload};
pub use config::{Config, ConfigGroup, ConfigPolicy, ConfigValue, OrdererAddresses, Policy};

/// Re-exported so dependents agree on one `prost` version.
pub use prost::{DecodeError, Message};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
