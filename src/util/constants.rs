//! Application-wide constants for TimelineSleuth.
//!
//! Centralising magic numbers, epochs and placeholder strings here keeps the
//! plugins free of literals and makes tuning straightforward.

/// Application display name used in logs and the CLI banner.
pub const APP_NAME: &str = "TimelineSleuth";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds between the Unix epoch and the Cocoa reference date
/// (2001-01-01T00:00:00Z).
pub const COCOA_EPOCH_UNIX_SECS: i64 = 978_307_200;

/// Number of events buffered by the reader thread before a batch is sent
/// to the writer. Smaller batches lower latency; larger batches lower
/// channel overhead.
pub const EVENT_BATCH_SIZE: usize = 500;

/// Bound of the reader → writer channel. Applies back-pressure when the
/// output sink falls behind.
pub const CHANNEL_BOUND: usize = 256;

/// Leading bytes of every SQLite 3 database file.
pub const SQLITE_MAGIC: &[u8] = b"SQLite format 3\0";

/// Leading bytes of a binary property list.
pub const BPLIST_MAGIC: &[u8] = b"bplist00";

/// Number of leading bytes read when sniffing an artifact's format.
pub const MAGIC_PROBE_LEN: usize = 64;

/// Prefix shared by tables SQLite maintains internally. They never take part
/// in schema matching.
pub const SQLITE_INTERNAL_TABLE_PREFIX: &str = "sqlite_";

// ── KnowledgeC ──────────────────────────────────────────────────────────

/// Stream-name prefix of Safari browsing activity rows.
pub const KNOWLEDGEC_SAFARI_PREFIX: &str = "/safari/";

/// Stream-name prefix of application usage rows.
pub const KNOWLEDGEC_APP_PREFIX: &str = "/app/";

// ── Apple account plist ─────────────────────────────────────────────────

/// File-name prefix of the Apple ID authentication info plist.
pub const APPLE_ACCOUNT_PLIST_PREFIX: &str = "com.apple.coreservices.appleidauthenticationinfo";

/// Top-level key holding one dictionary per configured account.
pub const APPLE_ACCOUNTS_KEY: &str = "Accounts";

/// Root path recorded on account event data.
pub const APPLE_ACCOUNTS_ROOT: &str = "/Accounts";

/// Placeholder used when an account has no `FirstName` entry.
pub const FIRST_NAME_PLACEHOLDER: &str = "<FirstName>";

/// Placeholder used when an account has no `LastName` entry.
pub const LAST_NAME_PLACEHOLDER: &str = "<LastName>";

/// Rendered in descriptions for an optional field that is absent.
pub const UNKNOWN_FIELD_PLACEHOLDER: &str = "<unknown>";

// ── Logging ─────────────────────────────────────────────────────────────

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
