//! Process-wide one-time initialization

use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber
///
/// Safe to call any number of times: only the first call does anything. The
/// filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(format: LogFormat) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let installed = match format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };

        // Another subscriber (e.g. a test harness) may already own the slot.
        if installed.is_err() {
            debug!("Global tracing subscriber already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(LogFormat::Pretty);
        init_tracing(LogFormat::Json);
        init_tracing(LogFormat::Pretty);

        assert!(TRACING_INIT.get().is_some());
    }
}
