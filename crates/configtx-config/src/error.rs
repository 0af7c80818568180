//! Error types for configuration decoding and updates
//!
//! - [`BlockError`]: block → payload → config envelope decoding
//! - [`ConfigError`]: semantic updates against the configuration tree

use configtx_protos::DecodeError;
use std::fmt;

/// Envelope layer a decode failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Outer block message
    Block,
    /// First block data entry, read as a payload
    Payload,
    /// Payload body, read as a channel config
    Config,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Payload => "payload",
            Self::Config => "config",
        })
    }
}

/// Errors while unwrapping a configuration block
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// Bytes at one envelope layer are not a valid message
    #[error("error unmarshalling {stage}: {source}")]
    Decode {
        /// Layer that failed
        stage: DecodeStage,
        /// Underlying protobuf error
        #[source]
        source: DecodeError,
    },

    /// Block decoded but carries no data entries
    #[error("block contains no data entries")]
    MissingData,
}

impl BlockError {
    /// Create decode error for stage
    pub fn decode(stage: DecodeStage, source: DecodeError) -> Self {
        Self::Decode { stage, source }
    }

    /// Envelope layer the error was raised in
    #[must_use]
    pub fn stage(&self) -> DecodeStage {
        match self {
            Self::Decode { stage, .. } => *stage,
            Self::MissingData => DecodeStage::Block,
        }
    }
}

/// Errors from updates to a channel configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Channel config has no orderer group at all
    #[error("channel config has no orderer group")]
    MissingOrdererGroup,

    /// Named organization is not part of the orderer group
    #[error("orderer org {0} does not exist in channel config")]
    OrdererOrgNotFound(String),

    /// Existing `Endpoints` value is not an `OrdererAddresses` message
    #[error("failed unmarshalling endpoints of orderer org {org}: {source}")]
    InvalidEndpointsValue {
        /// Organization owning the value
        org: String,
        /// Underlying protobuf error
        #[source]
        source: DecodeError,
    },

    /// A stored endpoint is not in `host:port` form
    #[error("orderer org {org} has malformed endpoint '{endpoint}'")]
    MalformedEndpoint {
        /// Organization owning the entry
        org: String,
        /// Entry as stored
        endpoint: String,
    },
}
