//! Console logging for the cardbox CLI
//!
//! `RUST_LOG` wins when set (e.g. `RUST_LOG=sqlx=debug cardbox serve`);
//! otherwise the level is `info`, or `debug` with `--debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is absent or unparseable
fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber; module targets are printed only with `--debug`.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_default_level() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }
}
