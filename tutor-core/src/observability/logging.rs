use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::str::FromStr;
use std::sync::OnceLock;

static LOG_INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Install the global subscriber once. Later calls are no-ops.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Logs go to stderr so
/// quote output on stdout stays machine-readable.
pub fn setup_logging(format: LogFormat) {
    LOG_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);

        let result = match format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        // Another subscriber may already be installed by an embedding application.
        let _ = result;
    });
}

#[macro_export]
macro_rules! log_quote {
    ($level:ident, $quote:ident, $($arg:tt)*) => {
        tracing::$level!(
            target: "quote",
            language = %$quote.language,
            level = %$quote.level,
            hours = $quote.hours,
            total = $quote.total,
            $($arg)*
        );
    };
}
