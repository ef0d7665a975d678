//! Tracing subscriber setup for the `bootstrap` binary.
//!
//! ```no_run
//! use bootstrap::telemetry::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! TracingConfig::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("bootstrap=debug,aster_models=debug")
//!     .init();
//! ```
//!
//! # Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ASTER_LOG` | Filter directives, e.g. `bootstrap=info,aster_agent=debug` |
//! | `ASTER_LOG_FORMAT` | `pretty`, `compact`, or `json` |
//! | `NO_COLOR` | Disables ANSI colors when set |

use core::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

/// Unrecognized [`TracingFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}', expected pretty, compact, or json")]
pub struct UnknownFormat(String);

impl FromStr for TracingFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    level: Level,
    format: TracingFormat,
    env_filter: Option<String>,
    span_events: bool,
    ansi: bool,
    // Format name from the environment that failed to parse.
    rejected_format: Option<UnknownFormat>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
            ansi: true,
            rejected_format: None,
        }
    }
}

impl TracingConfig {
    /// Reads `ASTER_LOG`, `ASTER_LOG_FORMAT`, and `NO_COLOR` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the same variables as [`from_env`](Self::from_env) from an arbitrary lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("ASTER_LOG").filter(|f| !f.trim().is_empty()) {
            config.env_filter = Some(filter);
        }

        if let Some(format) = lookup("ASTER_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(err) => config.rejected_format = Some(err),
            }
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.ansi = false;
        }

        config
    }

    /// Sets the maximum log level used when no filter is given.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a filter string: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Enables or disables ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    /// Returns the configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the configured format.
    #[must_use]
    pub fn format(&self) -> TracingFormat {
        self.format
    }

    fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Does nothing if a global subscriber is already installed.
    pub fn init(&self) {
        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let registry = tracing_subscriber::registry().with(self.filter());
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.ansi)
            .with_span_events(span_events);

        // try_init().ok() ignores errors if already initialized
        match self.format {
            TracingFormat::Pretty => registry.with(layer.pretty()).try_init().ok(),
            TracingFormat::Compact => registry.with(layer.compact()).try_init().ok(),
            TracingFormat::Json => registry.with(layer.json()).try_init().ok(),
        };

        if let Some(err) = &self.rejected_format {
            tracing::warn!(%err, "falling back to {:?} log format", self.format);
        }
    }
}
