//! Native console logger
//!
//! `log` facade backend for local native debug builds. Records are written
//! to stderr as single lines:
//!
//! ```text
//! 2026-08-06 14:03:21.512 [main] src/player.rs:88 INFO | spawned
//! ```
//!
//! The bracketed label defaults to the current thread's name; processes
//! hosting several logical game instances can replace it per thread with
//! [`init_for_instance`] so output stays attributable.

use std::cell::RefCell;
use std::io::Write;
use std::sync::Once;

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

thread_local! {
    static THREAD_LABEL: RefCell<Option<String>> = const { RefCell::new(None) };
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = chrono::Local::now();
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "{} [{}] {}:{} {:>5}| {}",
            now.format("%Y-%m-%d %H:%M:%S%.3f"),
            thread_label(),
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the console logger process-wide. Safe to call more than once;
/// repeated calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level_from_env());
        }
    });
}

/// Maximum level from `RUST_LOG`, defaulting to `info`.
fn level_from_env() -> LevelFilter {
    match std::env::var("RUST_LOG").ok().as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Replace the current thread's label in log output with `name`.
///
/// The default thread label rarely identifies which game instance is
/// talking when several share a process. Calling this again with the same
/// name changes nothing; no state accumulates across calls.
pub fn init_for_instance(name: &str) {
    init();
    THREAD_LABEL.with(|label| {
        *label.borrow_mut() = Some(name.to_string());
    });
}

/// Label used for the current thread in log output.
pub fn thread_label() -> String {
    THREAD_LABEL.with(|label| label.borrow().clone()).unwrap_or_else(|| {
        std::thread::current()
            .name()
            .unwrap_or("unnamed")
            .to_string()
    })
}
