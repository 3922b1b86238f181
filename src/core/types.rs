//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A record identifier (32 lowercase hex characters when allocated here).
///
/// Opaque to callers; ids are assigned once and never reused.
pub type RecordId = String;

/// Free-text grouping label, stored in plaintext.
pub type Category = String;

/// Unix timestamp in seconds.
pub type Timestamp = i64;
