//! Process settings, resolved once at start-up and passed down immutably.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Args;
use courts_engine::{MinStartStep, ProcessorConfig};
use serde::Deserialize;

/// Default base URL of the GotCourts public API.
pub const DEFAULT_API_BASE: &str = "https://apps.gotcourts.com";

/// Flags shared by every subcommand. Each falls back to an environment variable.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the GotCourts API
    #[arg(long, global = true, env = "GOTCOURTS_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Timeout for a single reservations request, in seconds
    #[arg(long, global = true, env = "GOTCOURTS_HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,

    /// IANA timezone whose calendar date anchors weekday selection
    #[arg(long, global = true, env = "GOTCOURTS_TIMEZONE", default_value = "Europe/Zurich")]
    pub timezone: String,

    /// Earliest start hour to report (compared as hour * 60 against grid steps)
    #[arg(long, global = true, env = "GOTCOURTS_MIN_START_HOUR", default_value_t = 13)]
    pub min_start_hour: u32,

    /// Days ahead searched for requested weekdays in bot commands
    #[arg(long, global = true, env = "GOTCOURTS_COMMAND_NDAYS", default_value_t = 7)]
    pub command_ndays: u32,

    /// Token for Telegram bot access
    #[arg(long, global = true, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub ttoken: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
    pub http_timeout: Duration,
    pub telegram_token: Option<String>,
    pub processor: ProcessorConfig,
}

impl Settings {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let timezone: Tz = args
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid timezone: '{}'", args.timezone))?;

        Ok(Self {
            api_base: args.api_base.trim_end_matches('/').to_string(),
            http_timeout: Duration::from_secs(args.http_timeout_secs),
            telegram_token: args.ttoken.clone().filter(|t| !t.trim().is_empty()),
            processor: ProcessorConfig {
                window_days: args.command_ndays,
                timezone,
                min_start: MinStartStep::from_hour(args.min_start_hour),
            },
        })
    }
}

/// Broadcast destinations, loaded from YAML:
///
/// ```yaml
/// chat_ids:
///   - 123456789
///   - -100987654321
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub chat_ids: Vec<i64>,
}

impl ChatConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse chat config YAML")
    }

    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chat config: {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }
}
