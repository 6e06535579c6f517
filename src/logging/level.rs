/// Severity of a log record.
///
/// The variants form a total order used by the filter threshold:
/// `Debug < Notice < Info < Success < Warn < Error < Fatal < Panic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Notice,
    Info,
    Success,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// Maps a level name to a level. Total: unrecognized names map to
    /// [`LogLevel::Error`], which callers treat as an implicit reset rather
    /// than a failure.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "notice" => Self::Notice,
            "info" => Self::Info,
            "success" => Self::Success,
            "warn" => Self::Warn,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            "panic" => Self::Panic,
            _ => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Rank of a record when checked against the threshold. Debug, fatal and
    /// panic records rank zero; the rest rank by their position in the order.
    pub(crate) fn filter_rank(self) -> u8 {
        match self {
            Self::Debug | Self::Fatal | Self::Panic => 0,
            other => other as u8,
        }
    }

    /// Rank of the threshold itself, which always uses the full order.
    pub(crate) fn threshold_rank(self) -> u8 {
        self as u8
    }
}
