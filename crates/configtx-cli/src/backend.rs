//! Configuration backend seam
//!
//! The command pipeline only needs a handful of operations from whatever
//! understands the block format. [`ConfigBackend`] names them so the
//! pipeline can run against [`ProtoBackend`] in production and against a
//! fake in tests.

use crate::endpoint::NetworkAddress;
use crate::error::BackendError;
use configtx_config::{Address, ConfigBlock, EndpointUpdate};

/// Operations the command pipeline needs from a configuration codec
pub trait ConfigBackend {
    /// Decoded, mutable configuration
    type Handle;

    /// Decode file contents into a handle
    ///
    /// # Errors
    /// Returns error if the bytes are not a well-formed configuration
    fn decode(&self, bytes: &[u8]) -> Result<Self::Handle, BackendError>;

    /// Add an orderer endpoint to an organization, in place
    ///
    /// Must return `EndpointUpdate::Unchanged` and leave the handle as-is
    /// when the organization already lists `address`.
    ///
    /// # Errors
    /// Returns error if the organization is unknown or its endpoint list is
    /// unreadable
    fn set_orderer_endpoint(
        &self,
        handle: &mut Self::Handle,
        org_name: &str,
        address: &NetworkAddress,
    ) -> Result<EndpointUpdate, BackendError>;

    /// Current orderer endpoints of an organization, as stored
    ///
    /// Entries are reported verbatim; one that is not `host:port` is not an
    /// error.
    ///
    /// # Errors
    /// Returns error if the organization is unknown or its endpoint list is
    /// unreadable
    fn orderer_endpoints(
        &self,
        handle: &Self::Handle,
        org_name: &str,
    ) -> Result<Vec<String>, BackendError>;

    /// Encode a handle back into file contents
    ///
    /// # Errors
    /// Returns error if the handle cannot be encoded
    fn encode(&self, handle: &Self::Handle) -> Result<Vec<u8>, BackendError>;
}

/// Protobuf configuration blocks via `configtx-config`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoBackend;

impl ConfigBackend for ProtoBackend {
    type Handle = ConfigBlock;

    fn decode(&self, bytes: &[u8]) -> Result<ConfigBlock, BackendError> {
        let block = ConfigBlock::decode(bytes)?;
        tracing::debug!(
            number = ?block.number(),
            orgs = ?block.config().orderer_org_names(),
            "decoded configuration block"
        );
        Ok(block)
    }

    fn set_orderer_endpoint(
        &self,
        handle: &mut ConfigBlock,
        org_name: &str,
        address: &NetworkAddress,
    ) -> Result<EndpointUpdate, BackendError> {
        let update = handle
            .config_mut()
            .set_orderer_endpoint(org_name, &Address::from(address))?;
        Ok(update)
    }

    fn orderer_endpoints(
        &self,
        handle: &ConfigBlock,
        org_name: &str,
    ) -> Result<Vec<String>, BackendError> {
        Ok(handle.config().orderer_endpoint_entries(org_name)?)
    }

    fn encode(&self, handle: &ConfigBlock) -> Result<Vec<u8>, BackendError> {
        Ok(handle.encode())
    }
}
