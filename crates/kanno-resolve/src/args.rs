//! Command-line arguments.
//!
//! Logging options can also come from the environment (`KANNO_LOG`, `KANNO_LOG_FORMAT`, `KANNO_LOG_TZ`).

use std::path::PathBuf;

use clap::Parser;
use kanno_observe::{LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Resolve resource annotations into typed route and upstream settings.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// JSON object of string annotations (`-` reads stdin)
    pub annotations: PathBuf,

    /// JSON object overriding annotation key names
    pub keys: Option<PathBuf>,

    /// Log filter directive (e.g. `info`, `kanno_core=debug,warn`)
    #[arg(long, env = "KANNO_LOG")]
    pub log: Option<LoggerLevel>,

    /// Log output format: text, json or journald
    #[arg(long, env = "KANNO_LOG_FORMAT")]
    pub log_format: Option<LoggerFormat>,

    /// Timezone for log timestamps: utc or local
    #[arg(long, env = "KANNO_LOG_TZ")]
    pub log_tz: Option<LoggerTimeZone>,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl Arguments {
    /// Logger configuration with the given options applied over the defaults.
    pub fn logger_config(&self) -> LoggerConfig {
        let defaults = LoggerConfig::default();
        LoggerConfig {
            level: self.log.clone().unwrap_or(defaults.level),
            format: self.log_format.unwrap_or(defaults.format),
            tz: self.log_tz.unwrap_or(defaults.tz),
            use_color: defaults.use_color && !self.no_color,
            ..defaults
        }
    }
}
