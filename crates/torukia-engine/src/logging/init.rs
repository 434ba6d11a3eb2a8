use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
const DEFAULT_FILTER: &str = "info";

/// How the sandbox (or an embedding binary) wants engine logs printed.
///
/// Useful targets:
/// - `torukia_engine::observer` (trace): subscriptions and removals
/// - `torukia_engine::texture` (debug/warn): finished animations, failed asset loads
/// - `torukia_engine::engine` (info/error): loop start/stop, failed frames
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string. Overrides `RUST_LOG` when set.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Picks the filter string: explicit config, then `rust_log`, then `info`.
fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    config
        .env_filter
        .clone()
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend, at most once per process.
///
/// Returns `true` only for the call that installed it. Later calls, and calls
/// made after the host installed its own logger, return `false` and change
/// nothing.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized with filter '{filter}'");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_filter(filter: &str) -> LoggingConfig {
        LoggingConfig {
            env_filter: Some(filter.into()),
            ..LoggingConfig::default()
        }
    }

    // ── filter precedence ─────────────────────────────────────────────────

    #[test]
    fn config_filter_beats_rust_log() {
        let got = resolve_filter(&with_filter("torukia_engine=debug"), Some("warn".into()));
        assert_eq!(got, "torukia_engine=debug");
    }

    #[test]
    fn rust_log_used_when_config_is_silent() {
        let got = resolve_filter(&LoggingConfig::default(), Some("warn".into()));
        assert_eq!(got, "warn");
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(resolve_filter(&LoggingConfig::default(), None), "info");
        assert_eq!(resolve_filter(&with_filter("  "), None), "info");
    }

    // ── init ──────────────────────────────────────────────────────────────

    #[test]
    fn second_init_is_a_noop() {
        init_logging(with_filter("torukia_engine=debug"));
        assert!(!init_logging(LoggingConfig::default()));
        log::debug!("still fine");
    }
}
