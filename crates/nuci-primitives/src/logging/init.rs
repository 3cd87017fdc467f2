use std::sync::Once;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "NUCI_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "nuci_primitives=trace").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
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

impl LoggingConfig {
    /// Resolves the filter: explicit value, then `NUCI_LOG`, then `RUST_LOG`.
    /// Blank values are skipped.
    ///
    /// `None` means no filter was supplied anywhere and the caller should fall
    /// back to a default level.
    pub fn resolved_filter(&self) -> Option<String> {
        let non_blank = |f: &String| !f.trim().is_empty();
        self.env_filter
            .clone()
            .filter(non_blank)
            .or_else(|| std::env::var(LOG_ENV_VAR).ok().filter(non_blank))
            .or_else(|| std::env::var("RUST_LOG").ok().filter(non_blank))
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`. The library itself never calls it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolved_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // A logger installed by someone else wins; ours is then dropped.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
