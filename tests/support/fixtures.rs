//! Test fixtures and constants.

/// Master password used by every test environment.
pub const MASTER_PASSWORD: &str = "correct horse battery";

/// Standard records used across multiple tests: (category, account, password).
pub const STANDARD_RECORDS: &[(&str, &str, &str)] = &[
    ("mail", "alice@example.com", "hunter22"),
    ("mail", "bob@example.com", "tr0ub4dor&3"),
    ("bank", "alice-checking", "0000-1234"),
    ("work", "alice", "p@ssw0rd!#$%"),
];
