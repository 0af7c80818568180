//! Diagnostic logging setup
//!
//! Logs go to standard error so command output on standard out stays
//! machine readable. `RUST_LOG` wins over the legacy `--logging-level` flag.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--logging-level` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter for the given `--logging-level` value
///
/// An invalid level falls back to [`DEFAULT_LEVEL`].
#[must_use]
pub fn filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            let level = level.filter(|l| !l.trim().is_empty()).unwrap_or(DEFAULT_LEVEL);
            EnvFilter::try_new(level.to_ascii_lowercase())
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber.
///
/// A no-op if one is already installed (e.g. several commands run in one test
/// process).
pub fn init(level: Option<&str>) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::trace!("log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(Some("debug"));
        init(None);
    }

    #[test]
    fn legacy_level_is_case_insensitive() {
        // RUST_LOG overrides the flag
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter(Some("INFO")).to_string(), "info");
            assert_eq!(filter(Some("  ")).to_string(), DEFAULT_LEVEL);
        }
    }
}
