//! Process-wide logging facade
//!
//! The facade holds a single shared filter configuration behind a
//! `OnceLock`, created either explicitly from the manifest during startup or
//! lazily from the environment on first use. [`log`] and [`obj_log`] build a
//! record (caller location, timestamp, app identity), run it through the
//! severity filter and forward it to `tracing`. Suppressed records are
//! downgraded to a single debug notice instead of vanishing, and the facade
//! itself never fails outward.

use std::panic::Location;
use std::sync::{OnceLock, RwLock};

use chrono::{SecondsFormat, Utc};

use super::level::LogLevel;
use crate::manifest::Manifest;

const LOG_LEVEL_ENV: &str = "FORGE_LOG_LEVEL";
const DEBUG_ENV: &str = "FORGE_DEBUG";
const SHOW_TRACE_ENV: &str = "FORGE_SHOW_TRACE";

/// Snapshot of a filter configuration.
///
/// The process-wide instance lives inside the facade; per-object handles
/// carry an independent copy of the same fields and borrow the shared
/// `tracing` sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
    debug: bool,
    show_trace: bool,
}

impl Logger {
    pub fn new(level: LogLevel, debug: bool, show_trace: bool) -> Self {
        Self {
            level,
            debug,
            show_trace,
        }
    }

    /// The explicitly configured threshold, regardless of debug mode.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn show_trace(&self) -> bool {
        self.show_trace
    }

    /// Whether record context should be rendered by the sink.
    pub fn trace_visible(&self) -> bool {
        self.debug || self.show_trace
    }

    /// Whether a record at `level` passes the filter. Debug mode passes
    /// everything; otherwise debug/fatal/panic rank zero and the rest must
    /// reach the threshold rank.
    pub fn will_print(&self, level: LogLevel) -> bool {
        if self.debug {
            return true;
        }
        level.filter_rank() >= self.level.threshold_rank()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Error, false, false)
    }
}

/// Capability for owners that carry their own logger handle.
///
/// Types opt in by returning a configured snapshot; the default resolves to
/// nothing, which makes [`obj_log`] fall back to the process-wide logger.
pub trait HasLogger {
    fn logger(&self) -> Option<Logger> {
        None
    }
}

struct Facade {
    app_name: String,
    bin: String,
    version: String,
    config: RwLock<Logger>,
}

static FACADE: OnceLock<Facade> = OnceLock::new();

impl Facade {
    fn new(manifest: &Manifest) -> Self {
        Self {
            app_name: manifest.name.clone(),
            bin: manifest.bin.clone(),
            version: manifest.version.clone(),
            config: RwLock::new(config_from_env()),
        }
    }

    fn anonymous() -> Self {
        Self {
            app_name: String::new(),
            bin: String::new(),
            version: String::new(),
            config: RwLock::new(config_from_env()),
        }
    }
}

/// Binds the facade to the application identity. Effective only once: the
/// first caller (or the first lazy `log`) wins, subsequent calls are no-ops.
pub fn init(manifest: &Manifest) {
    let _ = FACADE.set(Facade::new(manifest));
}

fn facade() -> &'static Facade {
    FACADE.get_or_init(Facade::anonymous)
}

fn config_from_env() -> Logger {
    config_from_values(
        std::env::var(LOG_LEVEL_ENV).ok(),
        std::env::var(DEBUG_ENV).ok(),
        std::env::var(SHOW_TRACE_ENV).ok(),
    )
}

fn config_from_values(
    level: Option<String>,
    debug: Option<String>,
    show_trace: Option<String>,
) -> Logger {
    Logger::new(
        level
            .map(|value| LogLevel::from_name(&value))
            .unwrap_or(LogLevel::Error),
        debug.as_deref().map(parse_bool).unwrap_or(false),
        show_trace.as_deref().map(parse_bool).unwrap_or(false),
    )
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Current process-wide configuration snapshot.
pub fn global() -> Logger {
    *facade().config.read().expect("log config lock poisoned")
}

pub fn get_log_level() -> LogLevel {
    global().level()
}

pub fn get_debug() -> bool {
    global().debug()
}

pub fn get_show_trace() -> bool {
    global().show_trace()
}

/// Enables or disables debug mode. Enabling lets every record through;
/// disabling restores the last explicitly configured threshold.
pub fn set_debug(enabled: bool) {
    let mut config = facade().config.write().expect("log config lock poisoned");
    let current = *config;
    *config = Logger::new(current.level(), enabled, current.show_trace());
}

pub fn set_show_trace(enabled: bool) {
    let mut config = facade().config.write().expect("log config lock poisoned");
    let current = *config;
    *config = Logger::new(current.level(), current.debug(), enabled);
}

/// Sets the threshold from a level name. Unrecognized names reset the
/// threshold to `error`.
pub fn set_log_level(name: &str) {
    let mut config = facade().config.write().expect("log config lock poisoned");
    let current = *config;
    *config = Logger::new(LogLevel::from_name(name), current.debug(), current.show_trace());
}

/// Logs through the process-wide configuration.
#[track_caller]
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    let caller = Location::caller();
    dispatch(global(), level, message.as_ref(), caller);
}

/// Logs through the logger bound to `owner`, falling back to the
/// process-wide configuration when the owner carries none.
#[track_caller]
pub fn obj_log<T: HasLogger + ?Sized>(owner: &T, level: LogLevel, message: impl AsRef<str>) {
    let caller = Location::caller();
    let logger = owner.logger().unwrap_or_else(global);
    dispatch(logger, level, message.as_ref(), caller);
}

fn dispatch(logger: Logger, level: LogLevel, message: &str, caller: &Location<'_>) {
    let facade = facade();
    let caller = format!("{}:{}", caller.file(), caller.line());
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let show_data = logger.trace_visible();

    if !logger.will_print(level) {
        tracing::debug!(
            caller = %caller,
            timestamp = %timestamp,
            app = %facade.app_name,
            bin = %facade.bin,
            version = %facade.version,
            level = level.as_str(),
            show_data = false,
            "message not printed due to log level: {message}"
        );
        return;
    }

    macro_rules! emit {
        ($mac:ident) => {
            tracing::$mac!(
                caller = %caller,
                timestamp = %timestamp,
                app = %facade.app_name,
                bin = %facade.bin,
                version = %facade.version,
                level = level.as_str(),
                show_data,
                "{message}"
            )
        };
    }

    match level {
        LogLevel::Debug => emit!(debug),
        LogLevel::Notice | LogLevel::Info | LogLevel::Success => emit!(info),
        LogLevel::Warn => emit!(warn),
        LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => emit!(error),
    }
}
