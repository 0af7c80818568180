//! Orderer endpoint address as stored in channel configuration

use std::fmt;

/// Host and port of an ordering service node.
///
/// Stored in configuration as the string `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Host name or IP address
    pub host: String,
    /// Port number, unchecked range
    pub port: i64,
}

impl Address {
    /// Create address
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>, port: i64) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse an endpoint read back from configuration.
    ///
    /// Splits on the last colon so bracketless IPv6 entries written by other
    /// tooling still yield a port. Returns `None` if there is no colon or the
    /// port is not an integer.
    ///
    /// More lenient than command-line endpoint parsing, which requires
    /// exactly one colon: an entry such as `::1:7050` parses here but would
    /// be rejected as `--endpoint`.
    #[must_use]
    pub fn from_config_str(endpoint: &str) -> Option<Self> {
        let (host, port) = endpoint.rsplit_once(':')?;
        let port = port.parse().ok()?;
        Some(Self::new(host, port))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
