use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

fn emit<L: Log>(logger: &L, level: Level, message: &str) {
    logger.log(&Record::builder().level(level).args(format_args!("{message}")).build());
}

fn config(level: LevelFilter, suppress: bool) -> LoggingConfig {
    LoggingConfig { level, suppress_known_warnings: suppress }
}

#[test]
fn suppression_drops_extension_errors_and_warnings() {
    let logger = FilteredLogger::new(Capture::default(), config(LevelFilter::Trace, true));
    emit(&logger, Level::Error, "Extra attributes from the server: data-gr-ext-installed");
    emit(&logger, Level::Warn, "cz-shortcut-listen mismatch");
    emit(&logger, Level::Error, "real failure");
    assert_eq!(logger.inner.lines(), vec!["ERROR real failure".to_owned()]);
}

#[test]
fn suppression_keeps_debug_records_mentioning_extensions() {
    let logger = FilteredLogger::new(Capture::default(), config(LevelFilter::Trace, true));
    emit(&logger, Level::Debug, "removed browser extension attribute: data-lt-installed");
    assert_eq!(logger.inner.lines().len(), 1);
}

#[test]
fn disabled_suppression_passes_everything_through() {
    let logger = FilteredLogger::new(Capture::default(), config(LevelFilter::Trace, false));
    emit(&logger, Level::Error, "data-new-gr-c-s-check-loaded differs");
    assert_eq!(logger.inner.lines(), vec!["ERROR data-new-gr-c-s-check-loaded differs".to_owned()]);
}

#[test]
fn level_cap_filters_verbose_records() {
    let logger = FilteredLogger::new(Capture::default(), config(LevelFilter::Warn, false));
    emit(&logger, Level::Info, "hello");
    emit(&logger, Level::Warn, "careful");
    assert_eq!(logger.inner.lines(), vec!["WARN careful".to_owned()]);
}

#[test]
fn from_values_parses_overrides() {
    let cfg = LoggingConfig::from_values(Some("trace"), Some("false"));
    assert_eq!(cfg, config(LevelFilter::Trace, false));
}

#[test]
fn from_values_ignores_garbage() {
    let cfg = LoggingConfig::from_values(Some("loud"), Some("maybe"));
    assert_eq!(cfg, LoggingConfig::default());
}

#[test]
fn from_values_trims_overrides() {
    let cfg = LoggingConfig::from_values(Some(" error\n"), Some(" true "));
    assert_eq!(cfg, config(LevelFilter::Error, true));
}

#[test]
fn parse_or_falls_back_when_unset() {
    assert_eq!(parse_or::<bool>(None, true), true);
    assert_eq!(parse_or(Some("7"), 0_u8), 7);
}
