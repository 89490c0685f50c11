//! Main logger implementation: the format-and-emit pipeline

use super::{
    config::{Config, FatalHandler},
    error::Result,
    log_level::Level,
    timestamp::TimeFormat,
};
use chrono::Utc;
use colored::Colorize;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Sink handle shared by loggers derived from a common ancestor.
///
/// The mutex makes the `&mut` access required by [`Write`] sound under
/// concurrent emission from independent loggers; it is held only for the
/// duration of a single write call.
type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// A leveled, prefix-aware text logger.
///
/// Every emission runs the same pipeline: gate by level, lock the scratch
/// buffer, compose the time / tag / caller / prefix / message segments, then
/// hand the whole line to the sink in one write call. The scratch buffer is
/// private to this instance and reused across calls, so steady-state logging
/// does not allocate.
///
/// Logging is best-effort: a failed sink write is dropped, never retried and
/// never surfaced to the caller. Only [`Logger::flush`] reports IO errors.
pub struct Logger {
    level: Level,
    print_color: bool,
    print_caller_line: bool,
    print_time: bool,
    time_format: TimeFormat,
    prefix: String,
    buf: Mutex<Vec<u8>>,
    output: SharedSink,
    on_fatal: FatalHandler,
}

impl Logger {
    pub(crate) fn from_config(config: Config) -> Self {
        let sink: Box<dyn Write + Send> = match config.output {
            Some(sink) => sink,
            None => Box::new(std::io::stderr()),
        };

        Self {
            level: config.level,
            print_color: config.print_color,
            print_caller_line: config.print_caller_line,
            print_time: config.print_time,
            time_format: config.time_format,
            prefix: config.prefix,
            buf: Mutex::new(Vec::with_capacity(256)),
            output: Arc::new(Mutex::new(sink)),
            on_fatal: config
                .on_fatal
                .unwrap_or_else(|| Arc::new(|| std::process::exit(1))),
        }
    }

    /// Derive a logger that shares this one's sink and options but extends
    /// the prefix with `segment`.
    ///
    /// The new prefix is resolved here, once: the parent's prefix, the new
    /// segment, then a trailing `": "` for the next derivation. Chaining
    /// `with_prefix("A").with_prefix("B")` renders `A: B: ` before every
    /// message. The derived logger owns an independent scratch buffer and
    /// lock, so parent and children never contend on formatting.
    #[must_use]
    pub fn with_prefix(&self, segment: &str) -> Logger {
        Logger {
            level: self.level,
            print_color: self.print_color,
            print_caller_line: self.print_caller_line,
            print_time: self.print_time,
            time_format: self.time_format.clone(),
            prefix: format!("{}{}: ", self.prefix, segment),
            buf: Mutex::new(Vec::with_capacity(256)),
            output: Arc::clone(&self.output),
            on_fatal: Arc::clone(&self.on_fatal),
        }
    }

    #[inline]
    fn should_print(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Compose one line in the scratch buffer and write it to the sink.
    ///
    /// Segment order is fixed: time, level tag, caller, prefix, message.
    /// The buffer lock is held across the sink write so lines from one
    /// logger can never interleave. The write result is dropped by design.
    fn emit<F>(&self, tag: Option<Level>, caller: &Location<'_>, print: F)
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let now = Utc::now();

        let mut buf = self.buf.lock();
        buf.clear();

        if self.print_time {
            let _ = write!(buf, "{} ", self.time_format.format(&now));
        }

        if let Some(level) = tag {
            if self.print_color {
                let _ = write!(buf, "[{}] ", level.tag().color(level.color_code()));
            } else {
                let _ = write!(buf, "[{}] ", level.tag());
            }
        }

        if self.print_caller_line {
            let file = Path::new(caller.file())
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_else(|| caller.file());
            let _ = write!(buf, "{}:{} ", file, caller.line());
        }

        buf.extend_from_slice(self.prefix.as_bytes());

        print(&mut *buf);

        let _ = self.output.lock().write(buf.as_slice());
    }

    /// Gate, then run the pipeline with the level's tag.
    ///
    /// A suppressed level costs a single comparison: neither lock is taken
    /// and the message is never rendered.
    fn leveled<F>(&self, level: Level, caller: &Location<'_>, print: F)
    where
        F: FnOnce(&mut Vec<u8>),
    {
        if !self.should_print(level) {
            return;
        }
        self.emit(Some(level), caller, print);
    }

    /// Log `msg` at `level` with a trailing newline.
    ///
    /// A `Fatal` level additionally invokes the termination handler after
    /// the line is written and all locks are released.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl fmt::Display) {
        let caller = Location::caller();
        self.leveled(level, caller, |buf| {
            let _ = writeln!(buf, "{msg}");
        });
        if level == Level::Fatal {
            (self.on_fatal)();
        }
    }

    /// Log pre-built format arguments at `level`, without a forced newline
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.leveled(level, caller, |buf| {
            let _ = buf.write_fmt(args);
        });
        if level == Level::Fatal {
            (self.on_fatal)();
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: impl fmt::Display) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, msg: impl fmt::Display) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, msg);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, msg: impl fmt::Display) {
        self.log(Level::Error, msg);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Log `msg` through the error display path, then terminate.
    ///
    /// Fatal messages pass gating at every configured level. The
    /// termination handler runs only after the emission pipeline has
    /// finished and released its locks.
    #[track_caller]
    pub fn fatal(&self, msg: impl fmt::Display) {
        self.log(Level::Fatal, msg);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
    }

    /// Write `msg` with a trailing newline, bypassing level gating.
    ///
    /// No level tag is written; the time, caller, and prefix segments still
    /// apply. This is the always-on channel into the configured log stream.
    #[track_caller]
    pub fn print(&self, msg: impl fmt::Display) {
        self.emit(None, Location::caller(), |buf| {
            let _ = writeln!(buf, "{msg}");
        });
    }

    /// Like [`Logger::print`] but with pre-built format arguments and no
    /// forced newline
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(None, Location::caller(), |buf| {
            let _ = buf.write_fmt(args);
        });
    }

    /// Write raw bytes through the pipeline: no gating, no level tag, no
    /// added newline
    #[track_caller]
    pub fn write(&self, bytes: &[u8]) {
        self.emit(None, Location::caller(), |buf| {
            buf.extend_from_slice(bytes);
        });
    }

    /// String variant of [`Logger::write`]
    #[track_caller]
    pub fn write_str(&self, s: &str) {
        self.write(s.as_bytes());
    }

    /// Flush the underlying sink
    pub fn flush(&self) -> Result<()> {
        self.output.lock().flush()?;
        Ok(())
    }
}
