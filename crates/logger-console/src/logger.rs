//! Console logger writing one rendered line per record

use crate::config::RenderConfig;
use crate::render::Renderer;
use arc_swap::ArcSwap;
use huelog::{Attr, Level, Logger, Record, Result, Scope};
use parking_lot::Mutex;
use std::fmt;
use std::io::{IsTerminal, Write};
use std::sync::Arc;
use termcolor::{ColorChoice, StandardStream, WriteColor};

type Sink = Arc<Mutex<Box<dyn WriteColor + Send>>>;

/// Logger that renders records as colorized single lines
///
/// Derived loggers from [`Logger::with_attrs`] and [`Logger::with_group`] share the sink
/// and the configuration, so [`ConsoleLogger::reconfigure`] on any of them applies to
/// all.
#[derive(Clone)]
pub struct ConsoleLogger {
    min_level: Level,
    scope: Scope,
    config: Arc<ArcSwap<RenderConfig>>,
    /// Lock for the sink (to prevent interleaving)
    sink: Sink,
    color: bool,
}

impl ConsoleLogger {
    /// Colorized stdout logger with the default configuration
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for a customized logger
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::default()
    }

    /// Replace the render configuration for subsequent lines
    pub fn reconfigure(&self, config: RenderConfig) {
        self.config.store(Arc::new(config));
    }

    /// Current configuration snapshot
    pub fn config(&self) -> Arc<RenderConfig> {
        self.config.load_full()
    }

    /// Minimum level this logger accepts
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether lines carry escape sequences
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Render `record` exactly as [`Logger::log`] would write it
    pub fn render(&self, record: &Record<'_>) -> String {
        let config = self.config.load();
        Renderer::new(&config)
            .with_color(self.color)
            .render(record, &self.scope)
    }

    fn derive(&self, scope: Scope) -> Arc<dyn Logger> {
        Arc::new(Self {
            scope,
            ..self.clone()
        })
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("min_level", &self.min_level)
            .field("scope", &self.scope)
            .field("config", &self.config.load_full())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, record: Record<'_>) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }
        let line = self.render(&record);

        // Write with lock
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Logger> {
        self.derive(self.scope.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Logger> {
        self.derive(self.scope.with_group(name))
    }
}

/// Builder for [`ConsoleLogger`]
pub struct ConsoleLoggerBuilder {
    sink: Option<Box<dyn WriteColor + Send>>,
    color_choice: ColorChoice,
    min_level: Level,
    config: RenderConfig,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self {
            sink: None,
            color_choice: ColorChoice::Auto,
            min_level: Level::INFO,
            config: RenderConfig::default(),
        }
    }
}

impl fmt::Debug for ConsoleLoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLoggerBuilder")
            .field("sink", &self.sink.as_ref().map(|_| "custom"))
            .field("color_choice", &self.color_choice)
            .field("min_level", &self.min_level)
            .field("config", &self.config)
            .finish()
    }
}

impl ConsoleLoggerBuilder {
    /// Write to `sink` instead of stdout
    pub fn sink(mut self, sink: impl WriteColor + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Color policy; [`ColorChoice::Never`] disables escape sequences for any sink
    pub fn color_choice(mut self, color_choice: ColorChoice) -> Self {
        self.color_choice = color_choice;
        self
    }

    /// Minimum level to write
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Initial render configuration
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the logger
    pub fn build(self) -> ConsoleLogger {
        let sink = match self.sink {
            Some(sink) => sink,
            None => Box::new(StandardStream::stdout(stdout_choice(self.color_choice))),
        };
        let color = !matches!(self.color_choice, ColorChoice::Never) && sink.supports_color();

        ConsoleLogger {
            min_level: self.min_level,
            scope: Scope::new(),
            config: Arc::new(ArcSwap::from_pointee(self.config)),
            sink: Arc::new(Mutex::new(sink)),
            color,
        }
    }

    /// Build the logger and install it as the process-wide logger
    pub fn init(self) -> Result<Arc<ConsoleLogger>> {
        let logger = Arc::new(self.build());
        huelog::init(logger.clone())?;
        Ok(logger)
    }

    /// Like [`ConsoleLoggerBuilder::init`], also routing `log` and `tracing` events
    #[cfg(feature = "bridges")]
    pub fn init_with_bridges(self) -> Result<Arc<ConsoleLogger>> {
        let logger = Arc::new(self.build());
        huelog::compat::init_with_bridges(logger.clone())?;
        Ok(logger)
    }
}

/// `Auto` only colors stdout when it is a terminal
fn stdout_choice(choice: ColorChoice) -> ColorChoice {
    match choice {
        ColorChoice::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
        choice => choice,
    }
}

/// Install a colorized stdout logger with the default configuration
///
/// # Example
/// ```no_run
/// huelog_console::init().expect("Failed to install console logger");
/// huelog::info!("listening"; "port" => 8080).unwrap();
/// ```
pub fn init() -> Result<Arc<ConsoleLogger>> {
    ConsoleLogger::builder().init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use huelog::{Error, LoggerExt};
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for BrokenPipe {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &termcolor::ColorSpec) -> io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain_config() -> RenderConfig {
        RenderConfig::default()
            .with_time_format("Z")
            .with_local_time(false)
    }

    #[test]
    fn default_min_level_is_info() {
        let logger = ConsoleLogger::builder().sink(MemorySink::new()).build();
        assert_eq!(logger.min_level(), Level::INFO);
        assert!(!logger.is_enabled(Level::DEBUG));
        assert!(logger.is_enabled(Level::INFO));
        assert!(logger.is_enabled(Level::WARN.offset(1)));
    }

    #[test]
    fn write_failure_is_returned() {
        let logger = ConsoleLogger::builder().sink(BrokenPipe).build();
        let err = logger.info("lost").unwrap_err();
        match err {
            Error::Write(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn disabled_record_passed_directly_is_dropped() {
        let sink = MemorySink::new();
        let logger = ConsoleLogger::builder().sink(sink.clone()).build();
        logger.log(Record::new(Level::DEBUG, "quiet")).unwrap();
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn never_choice_overrides_color_sink() {
        let logger = ConsoleLogger::builder()
            .sink(MemorySink::new())
            .color_choice(ColorChoice::Never)
            .build();
        assert!(!logger.is_colored());

        let logger = ConsoleLogger::builder().sink(MemorySink::no_color()).build();
        assert!(!logger.is_colored());

        let logger = ConsoleLogger::builder().sink(MemorySink::new()).build();
        assert!(logger.is_colored());
    }

    #[test]
    fn derived_loggers_share_configuration() {
        let sink = MemorySink::no_color();
        let logger = ConsoleLogger::builder()
            .sink(sink.clone())
            .config(plain_config())
            .build();
        let child = logger.with_attrs(vec![Attr::string("svc", "api")]);

        logger.reconfigure(plain_config().with_delimiter(":"));
        child.info("ready").unwrap();

        assert_eq!(sink.to_string_lossy(), "INFO   Z ready svc:api \n");
        assert_eq!(logger.config().delimiter, ":");
    }
}
