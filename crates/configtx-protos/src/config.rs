//! Channel configuration tree

use std::collections::BTreeMap;

/// Full channel configuration at a given sequence number
#[derive(Clone, PartialEq, prost::Message)]
pub struct Config {
    /// Number of configuration updates applied so far
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    /// Root of the configuration tree
    #[prost(message, optional, tag = "2")]
    pub channel_group: Option<ConfigGroup>,
}

/// A node in the configuration tree.
///
/// The channel group holds `Application` and `Orderer` subgroups, which in
/// turn hold one subgroup per organization.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigGroup {
    /// Incremented on every modification of this group
    #[prost(uint64, tag = "1")]
    pub version: u64,
    /// Child groups by name
    #[prost(btree_map = "string, message", tag = "2")]
    pub groups: BTreeMap<String, ConfigGroup>,
    /// Leaf values by key
    #[prost(btree_map = "string, message", tag = "3")]
    pub values: BTreeMap<String, ConfigValue>,
    /// Policies by name
    #[prost(btree_map = "string, message", tag = "4")]
    pub policies: BTreeMap<String, ConfigPolicy>,
    /// Policy required to modify this group
    #[prost(string, tag = "5")]
    pub mod_policy: String,
}

/// A leaf value; `value` holds a serialized message whose type depends on
/// the key it is stored under.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigValue {
    /// Incremented on every modification of this value
    #[prost(uint64, tag = "1")]
    pub version: u64,
    /// Serialized value message
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    /// Policy required to modify this value
    #[prost(string, tag = "3")]
    pub mod_policy: String,
}

/// A named policy node in the configuration tree
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigPolicy {
    /// Incremented on every modification of this policy
    #[prost(uint64, tag = "1")]
    pub version: u64,
    /// The policy itself
    #[prost(message, optional, tag = "2")]
    pub policy: Option<Policy>,
    /// Policy required to modify this policy
    #[prost(string, tag = "3")]
    pub mod_policy: String,
}

/// Policy of a given kind with its serialized body
#[derive(Clone, PartialEq, prost::Message)]
pub struct Policy {
    /// Policy kind discriminant
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    /// Serialized policy body, interpreted per `type`
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// Value stored under an orderer organization's `Endpoints` key
#[derive(Clone, PartialEq, prost::Message)]
pub struct OrdererAddresses {
    /// Endpoints as `host:port` strings
    #[prost(string, repeated, tag = "1")]
    pub addresses: Vec<String>,
}
