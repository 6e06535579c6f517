//! Level-filtered logging facade
//!
//! Every diagnostic in the application flows through this facade, which
//! decides whether a message is forwarded to the underlying `tracing`
//! dispatcher based on a process-wide severity threshold.
//!
//! # Modules
//!
//! - [`level`]: the closed, ordered [`level::LogLevel`] enumeration
//! - [`facade`]: the process-wide filter, the [`facade::Logger`] handle and
//!   the [`facade::HasLogger`] capability for per-object logger resolution

pub mod facade;
pub mod level;

pub use facade::{
    HasLogger, Logger, get_debug, get_log_level, get_show_trace, global, init, log, obj_log,
    set_debug, set_log_level, set_show_trace,
};
pub use level::LogLevel;
