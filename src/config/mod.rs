// src/config/mod.rs
//! Configuration system for cipher-trace
//!
//! Central, lazy-loaded global config with TOML + env override.

pub use app::{config_path, load, load_from, CliSettings, Config, LoggingSettings, TraceSettings};
pub use defaults::DEFAULT_LOG_FILTER;

mod app;
mod defaults;
