//! Error types for the configtx command line
//!
//! One enum per pipeline stage:
//! - [`ReadError`]: block file → config handle
//! - [`ValidationError`]: endpoint string → address
//! - [`UpdateError`]: backend rejected or could not report the update
//! - [`WriteError`]: config handle → block file
//!
//! [`CommandError`] aggregates them for the top-level handler.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Error raised by a [`ConfigBackend`](crate::backend::ConfigBackend)
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors while loading a block
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// File could not be read
    #[error("could not read block from file {path}: {source}")]
    Io {
        /// Block file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a well-formed configuration block
    #[error("could not decode block from file {path}: {source}")]
    Decode {
        /// Block file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: BackendError,
    },
}

impl ReadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path the failed read was attempted on
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// Malformed endpoint input
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Not exactly one `:` separator
    #[error("ordering service endpoint '{0}' is not valid or missing")]
    InvalidEndpoint(String),

    /// Port segment is not a base-10 integer
    #[error("ordering service endpoint '{endpoint}' has invalid port: {source}")]
    InvalidPort {
        /// Endpoint as given
        endpoint: String,
        /// Underlying error
        #[source]
        source: ParseIntError,
    },
}

/// Errors from the configuration backend during an update
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Backend refused the endpoint (unknown org, corrupt value, ...)
    #[error("failed to set orderer endpoint {endpoint} for org {org}: {source}")]
    Rejected {
        /// Organization being updated
        org: String,
        /// Endpoint being added
        endpoint: String,
        /// Underlying error
        #[source]
        source: BackendError,
    },

    /// Endpoints could not be listed after the update
    #[error("failed to list orderer endpoints of org {org}: {source}")]
    Listing {
        /// Organization being listed
        org: String,
        /// Underlying error
        #[source]
        source: BackendError,
    },
}

/// Errors while writing a block back out
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Backend could not encode the handle
    #[error("could not encode block: {0}")]
    Encode(#[source] BackendError),

    /// File could not be written
    #[error("could not write block to file {path}: {source}")]
    Io {
        /// Block file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined command error
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Block could not be loaded
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Endpoint input is malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend rejected the update
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// Updated block could not be written
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Result report could not be rendered
    #[error("could not render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias for command operations
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_mentions_path() {
        let err = ReadError::io_error(
            "/no/such/config.block",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err
            .to_string()
            .starts_with("could not read block from file /no/such/config.block"));
        assert_eq!(err.path(), std::path::Path::new("/no/such/config.block"));
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::InvalidEndpoint("1.2.3.4".to_string());
        assert_eq!(
            err.to_string(),
            "ordering service endpoint '1.2.3.4' is not valid or missing"
        );
    }

    #[test]
    fn command_error_is_transparent() {
        let err: CommandError = ValidationError::InvalidEndpoint(String::new()).into();
        assert_eq!(
            err.to_string(),
            "ordering service endpoint '' is not valid or missing"
        );
        assert!(matches!(err, CommandError::Validation(_)));
    }

    #[test]
    fn backend_errors_chain() {
        let err = UpdateError::Rejected {
            org: "Org9".to_string(),
            endpoint: "h:1".to_string(),
            source: "unknown org".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to set orderer endpoint h:1 for org Org9: unknown org"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
