//! Working copy of a channel configuration
//!
//! [`ConfigTx`] keeps the configuration as it was decoded next to the copy
//! that updates are applied to, so callers can tell whether anything changed.

use crate::address::Address;
use crate::error::ConfigError;
use configtx_protos::{Config, ConfigGroup, ConfigValue, Message, OrdererAddresses};

/// Key of the orderer subgroup under the channel group
pub const ORDERER_GROUP_KEY: &str = "Orderer";

/// Key of an orderer organization's endpoint list value
pub const ENDPOINTS_KEY: &str = "Endpoints";

/// Modification policy given to newly created values
pub const ADMINS_POLICY_KEY: &str = "Admins";

/// Outcome of adding an orderer endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointUpdate {
    /// Endpoint was appended to the organization's list
    Added,
    /// Endpoint was already present; configuration untouched
    Unchanged,
}

impl EndpointUpdate {
    /// Whether the configuration was modified
    #[inline]
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Channel configuration under update
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTx {
    original: Config,
    updated: Config,
}

impl ConfigTx {
    /// Wrap a decoded configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            original: config.clone(),
            updated: config,
        }
    }

    /// Configuration as decoded
    #[inline]
    #[must_use]
    pub fn original(&self) -> &Config {
        &self.original
    }

    /// Configuration with all updates applied
    #[inline]
    #[must_use]
    pub fn updated(&self) -> &Config {
        &self.updated
    }

    /// Consume and return the updated configuration
    #[inline]
    #[must_use]
    pub fn into_updated(self) -> Config {
        self.updated
    }

    /// Whether any update changed the configuration
    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.original != self.updated
    }

    /// Names of the organizations in the orderer group, sorted
    #[must_use]
    pub fn orderer_org_names(&self) -> Vec<&str> {
        orderer_group(&self.updated)
            .map(|group| group.groups.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Endpoints stored for an orderer organization, verbatim and in order
    ///
    /// Entries are not parsed, so values written by other tooling that are
    /// not `host:port` are listed as they are.
    ///
    /// # Errors
    /// - `ConfigError::MissingOrdererGroup` / `OrdererOrgNotFound` if the org is absent
    /// - `ConfigError::InvalidEndpointsValue` if the stored value does not decode
    pub fn orderer_endpoint_entries(&self, org_name: &str) -> Result<Vec<String>, ConfigError> {
        let org = orderer_group(&self.updated)
            .ok_or(ConfigError::MissingOrdererGroup)?
            .groups
            .get(org_name)
            .ok_or_else(|| ConfigError::OrdererOrgNotFound(org_name.to_string()))?;

        read_endpoints(org_name, org)
    }

    /// Endpoints currently configured for an orderer organization, parsed
    ///
    /// # Errors
    /// - any error of [`ConfigTx::orderer_endpoint_entries`]
    /// - `ConfigError::MalformedEndpoint` if a stored entry is not `host:port`
    pub fn orderer_endpoints(&self, org_name: &str) -> Result<Vec<Address>, ConfigError> {
        self.orderer_endpoint_entries(org_name)?
            .into_iter()
            .map(|endpoint| {
                Address::from_config_str(&endpoint).ok_or_else(|| ConfigError::MalformedEndpoint {
                    org: org_name.to_string(),
                    endpoint,
                })
            })
            .collect()
    }

    /// Add an endpoint to an orderer organization.
    ///
    /// No-op if the organization already lists the exact same `host:port`.
    /// An existing `Endpoints` value keeps its version and modification
    /// policy; a new one is created under the `Admins` policy.
    ///
    /// # Errors
    /// - `ConfigError::MissingOrdererGroup` if the channel has no orderer group
    /// - `ConfigError::OrdererOrgNotFound` if `org_name` is not an orderer org
    /// - `ConfigError::InvalidEndpointsValue` if the stored value does not decode
    pub fn set_orderer_endpoint(
        &mut self,
        org_name: &str,
        address: &Address,
    ) -> Result<EndpointUpdate, ConfigError> {
        let org = self
            .updated
            .channel_group
            .as_mut()
            .and_then(|channel| channel.groups.get_mut(ORDERER_GROUP_KEY))
            .ok_or(ConfigError::MissingOrdererGroup)?
            .groups
            .get_mut(org_name)
            .ok_or_else(|| ConfigError::OrdererOrgNotFound(org_name.to_string()))?;

        let mut addresses = read_endpoints(org_name, org)?;
        let endpoint = address.to_string();
        if addresses.contains(&endpoint) {
            tracing::debug!(org = org_name, %endpoint, "orderer endpoint already present");
            return Ok(EndpointUpdate::Unchanged);
        }
        addresses.push(endpoint);

        let value = org
            .values
            .entry(ENDPOINTS_KEY.to_string())
            .or_insert_with(|| ConfigValue {
                mod_policy: ADMINS_POLICY_KEY.to_string(),
                ..ConfigValue::default()
            });
        value.value = OrdererAddresses { addresses }.encode_to_vec();

        tracing::debug!(org = org_name, %address, "orderer endpoint added");
        Ok(EndpointUpdate::Added)
    }
}

fn orderer_group(config: &Config) -> Option<&ConfigGroup> {
    config.channel_group.as_ref()?.groups.get(ORDERER_GROUP_KEY)
}

fn read_endpoints(org_name: &str, org: &ConfigGroup) -> Result<Vec<String>, ConfigError> {
    let Some(value) = org.values.get(ENDPOINTS_KEY) else {
        return Ok(Vec::new());
    };
    OrdererAddresses::decode(value.value.as_slice())
        .map(|decoded| decoded.addresses)
        .map_err(|source| ConfigError::InvalidEndpointsValue {
            org: org_name.to_string(),
            source,
        })
}
