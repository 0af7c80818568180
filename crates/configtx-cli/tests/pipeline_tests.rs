//! Pipeline tests against an in-memory backend.
//!
//! The fake backend stores one `Org=host:port,host:port` line per
//! organization, which keeps these tests independent of the block wire
//! format while exercising the same read → update → write path.

use configtx_cli::block::{read_block, write_block};
use configtx_cli::commands::endpoints::{update_endpoints, EndpointsOptions};
use configtx_cli::endpoint::set_orderer_endpoint;
use configtx_cli::{
    BackendError, CommandError, ConfigBackend, NetworkAddress, ReadError, UpdateError,
};
use configtx_config::EndpointUpdate;
use configtx_test_utils::BlockDir;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

type Orgs = BTreeMap<String, Vec<NetworkAddress>>;

#[derive(Debug, Default)]
struct FakeBackend;

impl ConfigBackend for FakeBackend {
    type Handle = Orgs;

    fn decode(&self, bytes: &[u8]) -> Result<Orgs, BackendError> {
        let text = std::str::from_utf8(bytes)?;
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let (org, endpoints) = line.split_once('=').ok_or("missing '='")?;
                let endpoints = endpoints
                    .split(',')
                    .filter(|e| !e.is_empty())
                    .map(str::parse)
                    .collect::<Result<Vec<NetworkAddress>, _>>()?;
                Ok::<_, BackendError>((org.to_string(), endpoints))
            })
            .collect()
    }

    fn set_orderer_endpoint(
        &self,
        handle: &mut Orgs,
        org_name: &str,
        address: &NetworkAddress,
    ) -> Result<EndpointUpdate, BackendError> {
        let endpoints = handle
            .get_mut(org_name)
            .ok_or_else(|| format!("orderer org {org_name} does not exist"))?;
        if endpoints.contains(address) {
            return Ok(EndpointUpdate::Unchanged);
        }
        endpoints.push(address.clone());
        Ok(EndpointUpdate::Added)
    }

    fn orderer_endpoints(
        &self,
        handle: &Orgs,
        org_name: &str,
    ) -> Result<Vec<String>, BackendError> {
        handle
            .get(org_name)
            .map(|endpoints| endpoints.iter().map(ToString::to_string).collect())
            .ok_or_else(|| format!("orderer org {org_name} does not exist").into())
    }

    fn encode(&self, handle: &Orgs) -> Result<Vec<u8>, BackendError> {
        let lines: Vec<String> = handle
            .iter()
            .map(|(org, endpoints)| {
                let endpoints: Vec<String> = endpoints.iter().map(ToString::to_string).collect();
                format!("{org}={}", endpoints.join(","))
            })
            .collect();
        Ok(lines.join("\n").into_bytes())
    }
}

fn options(dir: &BlockDir, contents: &str, org: &str, endpoint: &str) -> EndpointsOptions {
    EndpointsOptions {
        config_path: dir.write("config.txt", contents.as_bytes()),
        org_name: org.to_string(),
        endpoint: endpoint.to_string(),
        ..EndpointsOptions::default()
    }
}

#[test]
fn same_endpoint_twice_equals_once() {
    let dir = BlockDir::new();
    let path = dir.write("config.txt", b"Org1=\nOrg2=o2:7050");
    let backend = FakeBackend;

    let mut once = read_block(&backend, &path).unwrap();
    set_orderer_endpoint(&backend, &mut once, "Org1", "127.0.0.1:8080").unwrap();

    let mut twice = once.clone();
    let (_, update) =
        set_orderer_endpoint(&backend, &mut twice, "Org1", "127.0.0.1:8080").unwrap();

    assert_eq!(update, EndpointUpdate::Unchanged);
    assert_eq!(once, twice);
}

#[test]
fn update_reports_resulting_endpoints() {
    let dir = BlockDir::new();
    let opts = options(&dir, "Org1=o1:7050", "Org1", "127.0.0.1:8080");

    let report = update_endpoints(&FakeBackend, &opts).unwrap();

    assert!(report.changed);
    assert_eq!(report.endpoint, "127.0.0.1:8080");
    assert_eq!(report.endpoints, vec!["o1:7050", "127.0.0.1:8080"]);
    assert_eq!(report.output, None);
}

#[test]
fn update_without_output_leaves_input_alone() {
    let dir = BlockDir::new();
    let opts = options(&dir, "Org1=", "Org1", "127.0.0.1:8080");

    update_endpoints(&FakeBackend, &opts).unwrap();

    assert_eq!(std::fs::read_to_string(&opts.config_path).unwrap(), "Org1=");
}

#[test]
fn update_writes_output_when_requested() {
    let dir = BlockDir::new();
    let mut opts = options(&dir, "Org1=\nOrg2=", "Org2", "o2:7050");
    opts.output = Some(dir.join("updated.txt"));

    let report = update_endpoints(&FakeBackend, &opts).unwrap();

    assert_eq!(report.output.as_deref(), Some(dir.join("updated.txt").as_path()));
    assert_eq!(
        std::fs::read_to_string(dir.join("updated.txt")).unwrap(),
        "Org1=\nOrg2=o2:7050"
    );
}

#[test]
fn unchanged_update_still_writes_output() {
    let dir = BlockDir::new();
    let mut opts = options(&dir, "Org1=o1:7050", "Org1", "o1:7050");
    opts.output = Some(dir.join("updated.txt"));

    let report = update_endpoints(&FakeBackend, &opts).unwrap();

    assert!(!report.changed);
    assert_eq!(
        std::fs::read_to_string(dir.join("updated.txt")).unwrap(),
        "Org1=o1:7050"
    );
}

#[test]
fn invalid_endpoint_fails_validation_and_writes_nothing() {
    let dir = BlockDir::new();
    let mut opts = options(&dir, "Org1=", "Org1", "1.2.3.4");
    opts.output = Some(dir.join("updated.txt"));

    let err = update_endpoints(&FakeBackend, &opts).unwrap_err();

    assert!(matches!(err, CommandError::Validation(_)));
    assert!(!dir.join("updated.txt").exists());
}

#[test]
fn unknown_org_is_an_update_error() {
    let dir = BlockDir::new();
    let opts = options(&dir, "Org1=", "Org9", "127.0.0.1:8080");

    let err = update_endpoints(&FakeBackend, &opts).unwrap_err();

    assert!(matches!(
        err,
        CommandError::Update(UpdateError::Rejected { ref org, .. }) if org == "Org9"
    ));
    assert!(err.to_string().contains("orderer org Org9 does not exist"));
}

#[test]
fn undecodable_input_is_a_read_error() {
    let dir = BlockDir::new();
    let opts = options(&dir, "no separator here", "Org1", "127.0.0.1:8080");

    let err = update_endpoints(&FakeBackend, &opts).unwrap_err();

    assert!(matches!(err, CommandError::Read(ReadError::Decode { .. })));
}

#[test]
fn write_block_reports_unwritable_path() {
    let dir = BlockDir::new();
    let handle = Orgs::new();
    let target = dir.join("missing-dir").join("out.txt");

    let err = write_block(&FakeBackend, &handle, &target).unwrap_err();

    assert!(err.to_string().contains("missing-dir"));
}
