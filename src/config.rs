// src/config.rs
use crate::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_BASE_URL, NOTION_VERSION,
};
use crate::error::AppError;
use crate::types::{ApiKey, ListOptions};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// Environment variable holding the integration token.
pub const API_KEY_ENV_VAR: &str = "NOTION_API_KEY";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable memoization of page and block lookups
    #[arg(long, global = true, default_value_t = false)]
    pub no_cache: bool,

    /// Lifetime of memoized lookups, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Per-request timeout, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the blocks under a page or block
    Blocks {
        /// Notion page/block URL or ID
        target: String,
        /// Walk the whole block tree breadth first instead of one level
        #[arg(short, long, default_value_t = false)]
        recursive: bool,
        /// Maximum number of blocks to yield in a recursive walk
        #[arg(long)]
        limit: Option<u32>,
        #[command(flatten)]
        listing: ListingArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the rows of a database as plain text
    Rows {
        /// Notion database URL or ID
        database: String,
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// Print the comments on a page or block
    Comments {
        /// Notion page/block URL or ID
        target: String,
        /// Include comments on every descendant block
        #[arg(short, long, default_value_t = false)]
        recursive: bool,
        /// Maximum number of blocks to visit in a recursive walk
        #[arg(long)]
        limit: Option<u32>,
        #[command(flatten)]
        listing: ListingArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print a page's title and properties
    Page {
        /// Notion page URL or ID
        page: String,
    },
    /// Print what kind of object an id refers to
    Info {
        /// Notion page/database/block URL or ID
        target: String,
    },
    /// Append text to a block as a new paragraph
    AppendText {
        /// Notion page/block URL or ID
        block: String,
        /// Text to append; long text is split across several spans
        text: String,
    },
}

/// Options shared by list subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct ListingArgs {
    /// Fetch one page of at most this many items instead of everything (1-100)
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl ListingArgs {
    pub fn to_options(self) -> Result<ListOptions, AppError> {
        match self.page_size {
            Some(size) => Ok(ListOptions::single_page(size)?),
            None => Ok(ListOptions::all()),
        }
    }
}

/// Output format options for rendering subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Render rich text as HTML instead of Markdown
    #[arg(long, default_value_t = false)]
    pub html: bool,
}

/// Everything the HTTP client needs, validated at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub notion_version: String,
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            notion_version: NOTION_VERSION.to_string(),
            base_url: NOTION_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }

    /// Reads the API key from `NOTION_API_KEY`.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = std::env::var(API_KEY_ENV_VAR).map_err(|_| {
            AppError::MissingConfiguration(format!("{} environment variable not set", API_KEY_ENV_VAR))
        })?;
        Self::from_key(&raw)
    }

    /// Validates `raw` as an API key and builds a default config around it.
    pub fn from_key(raw: &str) -> Result<Self, AppError> {
        Ok(Self::new(ApiKey::new(raw)?))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    const KEY: &str = "secret_abcdefghijklmnopqrstuvwxyz";

    #[test]
    fn defaults_follow_constants() {
        let config = ClientConfig::from_key(KEY).unwrap();
        assert_eq!(config.notion_version, NOTION_VERSION);
        assert_eq!(config.base_url, NOTION_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::from_key(KEY)
            .unwrap()
            .with_base_url("http://localhost:8080/v1/")
            .with_cache_ttl(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.cache_ttl, Duration::from_secs(5));

        let config = ClientConfig::from_key(KEY)
            .unwrap()
            .with_notion_version("2025-09-03")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.notion_version, "2025-09-03");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_malformed_key() {
        assert!(matches!(
            ClientConfig::from_key("nope"),
            Err(AppError::Validation(ValidationError::InvalidApiKey { .. }))
        ));
    }

    #[test]
    fn parses_subcommands() {
        let cli = CommandLineInput::try_parse_from([
            "notionkit",
            "blocks",
            "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6",
            "--recursive",
            "--limit",
            "10",
            "--html",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.timeout, DEFAULT_REQUEST_TIMEOUT_SECS);
        match cli.command {
            Command::Blocks {
                recursive,
                limit,
                output,
                ..
            } => {
                assert!(recursive);
                assert_eq!(limit, Some(10));
                assert!(output.html);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = CommandLineInput::try_parse_from([
            "notionkit",
            "info",
            "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6",
            "--timeout",
            "5",
            "--cache-ttl",
            "60",
            "--no-cache",
        ])
        .unwrap();
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.cache_ttl, 60);
        assert!(cli.no_cache);
    }

    #[test]
    fn page_size_is_validated() {
        let listing = ListingArgs {
            page_size: Some(500),
        };
        assert!(listing.to_options().is_err());
        let listing = ListingArgs {
            page_size: Some(20),
        };
        assert_eq!(listing.to_options().unwrap().page_size, Some(20));
    }
}
