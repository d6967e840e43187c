//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::builder::TypedValueParser;

use crate::view_model::{DEFAULT_PAGE_SIZE, FallbackPolicy};

/// Default API base URL (local backend)
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Log file name used when no path is given
pub const DEFAULT_LOG_FILE: &str = "commit-deck.log";

/// commit-deck - compose and browse structured commit messages
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "commit-deck", version, about, long_about = None)]
pub struct Config {
    /// Base URL of the commit API (`/commits` is appended).
    #[arg(long, env = "COMMIT_DECK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Rows per table page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub page_size: usize,

    /// Keep the previous rows when loading fails instead of showing demo data.
    #[arg(long)]
    pub no_demo_fallback: bool,

    /// Abort an outstanding load when a newer one starts.
    #[arg(long)]
    pub cancel_superseded_loads: bool,

    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Where to write the log (defaults to the temp directory).
    #[arg(long, env = "COMMIT_DECK_LOG", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            no_demo_fallback: false,
            cancel_superseded_loads: false,
            request_timeout: None,
            log_file: None,
            verbose: 0,
        }
    }
}

impl Config {
    pub fn fallback_policy(&self) -> FallbackPolicy {
        if self.no_demo_fallback {
            FallbackPolicy::Keep
        } else {
            FallbackPolicy::Demo
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }

    /// Filter directive for the given verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("commit-deck").chain(args.iter().copied());
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.fallback_policy(), FallbackPolicy::Demo);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.log_level(), "warn");
        assert!(config.log_path().ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "--api-url",
            "http://api.internal/v1",
            "--page-size",
            "25",
            "--no-demo-fallback",
            "--cancel-superseded-loads",
            "--request-timeout",
            "15",
            "-vv",
        ]);
        assert_eq!(config.api_url, "http://api.internal/v1");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.fallback_policy(), FallbackPolicy::Keep);
        assert!(config.cancel_superseded_loads);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let argv = ["commit-deck", "--page-size", "0"];
        assert!(Config::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
