//! Endpoint Mutator
//!
//! Validates a `host:port` string and hands the resulting address to the
//! configuration backend for one organization.

use crate::backend::ConfigBackend;
use crate::error::{CommandResult, UpdateError, ValidationError};
use configtx_config::{Address, EndpointUpdate};
use std::fmt;
use std::str::FromStr;

/// Ordering service endpoint.
///
/// Immutable once constructed; parse from `host:port` with [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    host: String,
    port: i64,
}

impl NetworkAddress {
    /// Create address from already validated parts
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>, port: i64) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host segment
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port segment
    #[inline]
    #[must_use]
    pub fn port(&self) -> i64 {
        self.port
    }
}

impl FromStr for NetworkAddress {
    type Err = ValidationError;

    /// Requires exactly one `:`; the port must be a base-10 integer.
    fn from_str(endpoint: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = endpoint.split(':').collect();
        let [host, port] = segments.as_slice() else {
            return Err(ValidationError::InvalidEndpoint(endpoint.to_string()));
        };

        let port = port
            .parse::<i64>()
            .map_err(|source| ValidationError::InvalidPort {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(Self::new(*host, port))
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl From<&NetworkAddress> for Address {
    fn from(address: &NetworkAddress) -> Self {
        Address::new(address.host.clone(), address.port)
    }
}

impl From<Address> for NetworkAddress {
    fn from(address: Address) -> Self {
        Self::new(address.host, address.port)
    }
}

/// Add `endpoint` to `org_name`'s orderer endpoints in `handle`.
///
/// Leaves the handle untouched if the endpoint is already listed. Returns the
/// validated address with the outcome.
///
/// # Errors
/// - `CommandError::Validation` if `endpoint` is not `host:port`
/// - `CommandError::Update` if the backend rejects the change
pub fn set_orderer_endpoint<B: ConfigBackend>(
    backend: &B,
    handle: &mut B::Handle,
    org_name: &str,
    endpoint: &str,
) -> CommandResult<(NetworkAddress, EndpointUpdate)> {
    let address: NetworkAddress = endpoint.parse()?;

    let update = backend
        .set_orderer_endpoint(handle, org_name, &address)
        .map_err(|source| UpdateError::Rejected {
            org: org_name.to_string(),
            endpoint: address.to_string(),
            source,
        })?;

    match update {
        EndpointUpdate::Added => {
            tracing::info!(org = org_name, %address, "added orderer endpoint");
        }
        EndpointUpdate::Unchanged => {
            tracing::info!(org = org_name, %address, "orderer endpoint already present");
        }
    }
    Ok((address, update))
}
