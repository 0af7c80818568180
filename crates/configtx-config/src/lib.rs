//! Channel Configuration Layer
//!
//! Decodes configuration blocks and applies semantic updates to the channel
//! configuration they carry.
//!
//! # Core Operations
//!
//! - **Decode**: unwrap `Block → Payload → Config` into a [`ConfigBlock`]
//! - **Update**: apply changes through [`ConfigTx`], which keeps the original
//!   config next to the updated one
//! - **Encode**: wrap the updated config back into the same envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use configtx_config::{Address, ConfigBlock};
//!
//! let mut block = ConfigBlock::decode(&bytes)?;
//! block
//!     .config_mut()
//!     .set_orderer_endpoint("Org1", &Address::new("127.0.0.1", 7050))?;
//! std::fs::write("updated.block", block.encode())?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod address;
pub mod block;
pub mod configtx;
pub mod error;

// Re-exports for convenience
pub use address::Address;
pub use block::ConfigBlock;
pub use configtx::{ConfigTx, EndpointUpdate, ADMINS_POLICY_KEY, ENDPOINTS_KEY, ORDERER_GROUP_KEY};
pub use error::{BlockError, ConfigError, DecodeStage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
