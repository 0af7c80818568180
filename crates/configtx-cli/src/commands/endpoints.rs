//! `endpoints` subcommand
//!
//! ```text
//! configtx endpoints --configPath config.block --orgName Org1 --endpoint 127.0.0.1:8080
//! ```

use super::{env_key, CommandSpec};
use crate::backend::{ConfigBackend, ProtoBackend};
use crate::block::{read_block, write_block};
use crate::endpoint::set_orderer_endpoint;
use crate::error::{CommandResult, UpdateError};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::path::PathBuf;

/// Subcommand name
pub const NAME: &str = "endpoints";

const CONFIG_PATH: &str = "configPath";
const ORG_NAME: &str = "orgName";
const ENDPOINT: &str = "endpoint";
const OUTPUT: &str = "output";
const JSON: &str = "json";

/// Descriptor registered with the root command
#[must_use]
pub fn spec() -> CommandSpec {
    CommandSpec {
        name: NAME,
        command,
        run,
    }
}

/// Clap definition of `endpoints`
#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Updates orderer endpoint")
        .long_about(
            "Adds an orderer's endpoint to an existing channel config block. If \
             the same endpoint already exists in the current configuration, this \
             is a no-op.\n\nFor example:\n  configtx endpoints --configPath \
             config.block --orgName Org1 --endpoint 127.0.0.1:8080",
        )
        .arg(
            Arg::new(CONFIG_PATH)
                .long(CONFIG_PATH)
                .visible_alias("config")
                .env(env_key(CONFIG_PATH))
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Configuration block to update"),
        )
        .arg(
            Arg::new(ORG_NAME)
                .long(ORG_NAME)
                .env(env_key(ORG_NAME))
                .value_name("ORG")
                .help("Orderer organization to update"),
        )
        .arg(
            Arg::new(ENDPOINT)
                .long(ENDPOINT)
                .env(env_key(ENDPOINT))
                .value_name("HOST:PORT")
                .help("Ordering service endpoint to add"),
        )
        .arg(
            Arg::new(OUTPUT)
                .long(OUTPUT)
                .short('o')
                .env(env_key(OUTPUT))
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Write the updated block to this file"),
        )
        .arg(
            Arg::new(JSON)
                .long(JSON)
                .env(env_key(JSON))
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
}

/// Parsed `endpoints` arguments
///
/// Missing organization or endpoint are left empty; they surface as update
/// and validation errors respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointsOptions {
    /// Block file to read
    pub config_path: PathBuf,
    /// Orderer organization to update
    pub org_name: String,
    /// Endpoint to add, as `host:port`
    pub endpoint: String,
    /// Where to write the updated block
    pub output: Option<PathBuf>,
    /// Print the report as JSON
    pub json: bool,
}

impl EndpointsOptions {
    /// Extract options from parsed arguments
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config_path: matches
                .get_one::<PathBuf>(CONFIG_PATH)
                .cloned()
                .unwrap_or_default(),
            org_name: matches
                .get_one::<String>(ORG_NAME)
                .cloned()
                .unwrap_or_default(),
            endpoint: matches
                .get_one::<String>(ENDPOINT)
                .cloned()
                .unwrap_or_default(),
            output: matches.get_one::<PathBuf>(OUTPUT).cloned(),
            json: matches.get_flag(JSON),
        }
    }
}

/// What an `endpoints` run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointsReport {
    /// Organization that was updated
    pub org: String,
    /// Endpoint that was requested
    pub endpoint: String,
    /// Whether the endpoint was newly added
    pub changed: bool,
    /// Organization's endpoints after the update
    pub endpoints: Vec<String>,
    /// Where the updated block was written, if anywhere
    pub output: Option<PathBuf>,
}

impl EndpointsReport {
    /// Render for standard output
    ///
    /// # Errors
    /// Returns error if JSON serialization fails
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            return serde_json::to_string_pretty(self);
        }

        let mut lines = Vec::with_capacity(self.endpoints.len() + 2);
        if self.changed {
            lines.push(format!(
                "added orderer endpoint {} to {}",
                self.endpoint, self.org
            ));
        } else {
            lines.push(format!(
                "orderer endpoint {} already present for {}",
                self.endpoint, self.org
            ));
        }
        lines.extend(self.endpoints.iter().map(|e| format!("  {e}")));
        if let Some(path) = &self.output {
            lines.push(format!("wrote updated block to {}", path.display()));
        }
        Ok(lines.join("\n"))
    }
}

/// Read the block, add the endpoint, optionally write the block back
///
/// Nothing is written unless `options.output` is set; the output file is
/// written even when the endpoint was already present, and before the
/// organization's endpoints are listed for the report.
///
/// # Errors
/// Any read, validation, update or write failure, in pipeline order
pub fn update_endpoints<B: ConfigBackend>(
    backend: &B,
    options: &EndpointsOptions,
) -> CommandResult<EndpointsReport> {
    let mut handle = read_block(backend, &options.config_path)?;

    let (address, update) =
        set_orderer_endpoint(backend, &mut handle, &options.org_name, &options.endpoint)?;

    if let Some(output) = &options.output {
        write_block(backend, &handle, output)?;
    }

    let endpoints = backend
        .orderer_endpoints(&handle, &options.org_name)
        .map_err(|source| UpdateError::Listing {
            org: options.org_name.clone(),
            source,
        })?;

    Ok(EndpointsReport {
        org: options.org_name.clone(),
        endpoint: address.to_string(),
        changed: update.is_changed(),
        endpoints,
        output: options.output.clone(),
    })
}

fn run(matches: &ArgMatches) -> CommandResult<()> {
    let options = EndpointsOptions::from_matches(matches);
    let report = update_endpoints(&ProtoBackend, &options)?;
    println!("{}", report.render(options.json)?);
    Ok(())
}
