// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the Notion concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Largest page size any Notion list endpoint accepts.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Base URL of the public Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Base URL used when turning an object id into a browser link.
pub const NOTION_WEB_BASE_URL: &str = "https://www.notion.so";

/// Maximum characters Notion stores in a single rich text span.
///
/// Longer text written back to Notion is split into spans of this size.
pub const RICH_TEXT_MAX_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Client defaults
// ---------------------------------------------------------------------------

/// Per-request timeout applied by the HTTP client, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// How long memoized page and block lookups stay valid, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Number of objects kept by the lookup memoizer.
pub const CACHE_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
