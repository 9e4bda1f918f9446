use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt as fmt_layer, layer::SubscriberExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::TcoError;

static LOG_INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = TcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(TcoError::InvalidConfig(format!("unknown log format '{}'", other))),
        }
    }
}

/// Install the global subscriber once. Logs go to stderr so stdout stays free
/// for command output. `RUST_LOG` overrides the configured level.
pub fn setup_logging(config: &LoggingConfig) {
    LOG_INIT.get_or_init(|| {
        // A host application may already own the global subscriber
        if let Err(err) = try_install(config) {
            tracing::debug!(error = %err, "global subscriber already installed, keeping it");
        }
    });
}

fn try_install(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt_layer::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt_layer::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
}

/// Emit an event under the `vehicle` target tagged with the vehicle's name
#[macro_export]
macro_rules! log_vehicle {
    ($level:ident, $vehicle:expr, $($arg:tt)*) => {
        tracing::$level!(
            target: "vehicle",
            vehicle = $vehicle,
            $($arg)*
        );
    };
}
