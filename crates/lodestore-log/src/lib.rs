//! Structured logging for the lodestore mod.
//!
//! Library crates emit through the `tracing` ecosystem; this crate wires up
//! the subscriber once at mod init: console output with uptime timestamps
//! and module targets, an optional JSON file in debug builds, and filtering
//! that honors `RUST_LOG` with the config's log level as fallback.

use std::path::Path;

use lodestore_config::ModConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor the config overrides it:
/// info-level for everything, with the chatty wire layer kept at warn.
const DEFAULT_FILTER: &str = "info,lodestore_net=warn";

/// Initialize the tracing subscriber for the mod.
///
/// * `log_dir` — optional directory for a JSON log file (debug builds only)
/// * `debug_build` — enables the file layer
/// * `config` — optional config whose `debug.log_level` overrides the default
///
/// Call once; a second call will panic inside `tracing-subscriber`, so hosts
/// that embed multiple mods should initialize logging themselves and skip
/// this.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&ModConfig>) {
    let filter_str = match config {
        Some(cfg) if !cfg.debug.log_level.is_empty() => cfg.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("lodestore.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The default [`EnvFilter`], for tests and embedders that build their own
/// subscriber stack.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_wire_layer() {
        let filter = default_env_filter();
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("lodestore_net=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_level_overrides_default() {
        let mut config = ModConfig::default();
        config.debug.log_level = "trace".to_string();
        // Mirrors the selection logic in init_logging.
        let selected = if config.debug.log_level.is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            config.debug.log_level.clone()
        };
        assert_eq!(selected, "trace");
    }

    #[test]
    fn test_filter_strings_parse() {
        for s in ["info", "debug,lodestore_grid=trace", "warn"] {
            assert!(EnvFilter::try_from(s).is_ok(), "failed to parse {s}");
        }
    }

    #[test]
    fn test_log_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lodestore.log");
        assert_eq!(path.file_name().unwrap(), "lodestore.log");
    }
}
