//! Testing utilities for configtx workspace
//!
//! Shared fixtures: channel configs, encoded blocks, and block files on disk.

#![allow(missing_docs)]

use configtx_protos::{
    Block, BlockData, BlockHeader, Config, ConfigGroup, ConfigValue, Header, Message,
    OrdererAddresses, Payload,
};
use std::path::PathBuf;
use tempfile::TempDir;

pub const ORG1: &str = "Org1";

/// Orderer organization group; no `Endpoints` value when `endpoints` is empty.
pub fn orderer_org(endpoints: &[&str]) -> ConfigGroup {
    let mut group = ConfigGroup {
        mod_policy: "Admins".to_string(),
        ..ConfigGroup::default()
    };
    if !endpoints.is_empty() {
        let addresses = OrdererAddresses {
            addresses: endpoints.iter().map(|e| (*e).to_string()).collect(),
        };
        group.values.insert(
            "Endpoints".to_string(),
            ConfigValue {
                version: 0,
                value: addresses.encode_to_vec(),
                mod_policy: "Admins".to_string(),
            },
        );
    }
    group
}

pub fn config_with_orderer_orgs(orgs: &[(&str, &[&str])]) -> Config {
    let mut orderer = ConfigGroup {
        mod_policy: "Admins".to_string(),
        ..ConfigGroup::default()
    };
    for (name, endpoints) in orgs {
        orderer.groups.insert((*name).to_string(), orderer_org(endpoints));
    }

    let mut channel = ConfigGroup {
        mod_policy: "Admins".to_string(),
        ..ConfigGroup::default()
    };
    channel
        .groups
        .insert("Application".to_string(), ConfigGroup::default());
    channel.groups.insert("Orderer".to_string(), orderer);

    Config {
        sequence: 0,
        channel_group: Some(channel),
    }
}

/// Single orderer org `Org1` with no endpoints
pub fn minimal_config() -> Config {
    config_with_orderer_orgs(&[(ORG1, &[])])
}

pub fn payload_bytes(config: &Config) -> Vec<u8> {
    Payload {
        header: Some(Header {
            channel_header: b"mychannel".to_vec(),
            signature_header: Vec::new(),
        }),
        data: config.encode_to_vec(),
    }
    .encode_to_vec()
}

/// Genesis-style block with the config as its only entry
pub fn block_bytes(config: &Config) -> Vec<u8> {
    Block {
        header: Some(BlockHeader::default()),
        data: Some(BlockData {
            data: vec![payload_bytes(config)],
        }),
        metadata: None,
    }
    .encode_to_vec()
}

/// Decode `Endpoints` of an orderer org straight from the wire messages
pub fn orderer_endpoints(config: &Config, org: &str) -> Vec<String> {
    config
        .channel_group
        .as_ref()
        .and_then(|channel| channel.groups.get("Orderer"))
        .and_then(|orderer| orderer.groups.get(org))
        .and_then(|group| group.values.get("Endpoints"))
        .map(|value| {
            OrdererAddresses::decode(value.value.as_slice())
                .unwrap()
                .addresses
        })
        .unwrap_or_default()
}

/// Decode the config carried by block bytes without going through the
/// library under test
pub fn config_from_block(bytes: &[u8]) -> Config {
    let block = Block::decode(bytes).unwrap();
    let payload = Payload::decode(block.data.unwrap().data[0].as_slice()).unwrap();
    Config::decode(payload.data.as_slice()).unwrap()
}

/// Temporary directory holding block files; removed on drop
pub struct BlockDir {
    dir: TempDir,
}

impl BlockDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Path of a file in the directory, which need not exist
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    pub fn write_config(&self, name: &str, config: &Config) -> PathBuf {
        self.write(name, &block_bytes(config))
    }
}

impl Default for BlockDir {
    fn default() -> Self {
        Self::new()
    }
}
