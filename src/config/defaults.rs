use crate::config::app::{CliSettings, LoggingSettings, TraceSettings};
use crate::enums::{CipherKind, TraceFormat};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_trace() -> TraceSettings {
    TraceSettings {
        show_visualization: true,
        format: TraceFormat::Text,
    }
}

pub fn default_cli() -> CliSettings {
    CliSettings {
        default_cipher: CipherKind::Caesar,
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
