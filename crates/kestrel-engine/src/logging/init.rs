use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "kestrel_engine::input=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Raises `kestrel_engine::input` to `trace` on top of the base filter,
    /// so per-event tracing from `InputConfig::trace_events` is visible.
    pub trace_input: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            trace_input: false,
        }
    }
}

const INPUT_TARGET: &str = "kestrel_engine::input";

static INIT: Once = Once::new();

/// Installs the global `env_logger` logger on first call.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Returns `false` when a logger was already installed (later calls, or a
/// test harness that got there first).
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;

    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized with filter {filter:?}");
        }
    });

    installed
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> String {
    let base = config
        .env_filter
        .clone()
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| "info".to_string());

    if config.trace_input {
        format!("{base},{INPUT_TARGET}=trace")
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_filter_beats_env() {
        let config = LoggingConfig { env_filter: Some("warn".into()), ..Default::default() };
        assert_eq!(resolve_filter(&config, Some("debug".into())), "warn");
    }

    #[test]
    fn falls_back_to_env_then_info() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_filter(&config, Some("debug".into())), "debug");
        assert_eq!(resolve_filter(&config, None), "info");
        assert_eq!(resolve_filter(&config, Some("  ".into())), "info");
    }

    #[test]
    fn trace_input_appends_directive() {
        let config = LoggingConfig { trace_input: true, ..Default::default() };
        assert_eq!(resolve_filter(&config, None), "info,kestrel_engine::input=trace");
    }
}
