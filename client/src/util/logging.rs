//! Browser logging setup.
//!
//! Records go through `log` to the browser console. The logger is wrapped in a
//! filter that can drop error/warning records caused by known browser
//! extensions (see [`crate::util::hydration::is_extension_noise`]), replacing
//! any need to patch `console.error` globally.
//!
//! The filter only sees records emitted through `log`. Leptos reports
//! hydration mismatches with its own `console.warn`/`console.error` calls, so
//! extension-caused mismatch warnings still reach the console. The
//! [`crate::util::hydration`] body watch keeps later re-renders clean by
//! stripping injected attributes once the body has hydrated.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::util::hydration::is_extension_noise;

/// Logger configuration injected at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    /// Drop error/warning records that only report extension-injected attributes.
    pub suppress_known_warnings: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl LoggingConfig {
    /// Build config from compile-time variables.
    ///
    /// - `SITE_LOG_LEVEL`: `error`..`trace` (default `debug` in debug builds, `warn` otherwise)
    /// - `SITE_SUPPRESS_EXTENSION_WARNINGS`: `true`/`false` (default on in debug builds)
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SITE_LOG_LEVEL"), option_env!("SITE_SUPPRESS_EXTENSION_WARNINGS"))
    }

    fn from_values(level: Option<&str>, suppress: Option<&str>) -> Self {
        let default_level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Warn };
        let level = parse_or(level, default_level);
        let suppress_known_warnings = parse_or(suppress, cfg!(debug_assertions));
        Self { level, suppress_known_warnings }
    }
}

/// Parse an optional raw setting, keeping `default` when it is unset or invalid.
fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    match raw.map(|raw| raw.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) | None => default,
    }
}

/// `log` wrapper applying the level cap and the extension-noise filter.
pub struct FilteredLogger<L> {
    inner: L,
    config: LoggingConfig,
}

impl<L: Log> FilteredLogger<L> {
    pub fn new(inner: L, config: LoggingConfig) -> Self {
        Self { inner, config }
    }

    fn suppresses(&self, record: &Record<'_>) -> bool {
        self.config.suppress_known_warnings
            && record.level() <= Level::Warn
            && is_extension_noise(&record.args().to_string())
    }
}

impl<L: Log> Log for FilteredLogger<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.config.level && self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) || self.suppresses(record) {
            return;
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

#[cfg(feature = "hydrate")]
struct ConsoleSink;

#[cfg(feature = "hydrate")]
impl Log for ConsoleSink {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        console_log::log(record);
    }

    fn flush(&self) {}
}

/// Install the filtered console logger. A second call is ignored.
#[cfg(feature = "hydrate")]
pub fn init(config: LoggingConfig) {
    let level = config.level;
    if log::set_boxed_logger(Box::new(FilteredLogger::new(ConsoleSink, config))).is_ok() {
        log::set_max_level(level);
    }
}
