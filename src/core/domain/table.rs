//! Row-oriented query results.
//!
//! Columns are fixed; how they are laid out is up to the renderer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::domain::Record;
use crate::core::types::{RecordId, Timestamp};

/// Column titles, in cell order.
pub const HEADER: [&str; 6] = ["ID", "CATEGORY", "ACCOUNT", "PASSWORD", "CREATED", "UPDATED"];

/// One decrypted record, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: RecordId,
    pub category: String,
    pub account: String,
    #[serde(serialize_with = "expose")]
    pub password: Zeroizing<String>,
    pub created_at: Timestamp,
    pub last_updated_at: Timestamp,
}

impl Row {
    /// Cells in [`HEADER`] order. Timestamps are rendered as UTC.
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.category.clone(),
            self.account.clone(),
            self.password.to_string(),
            format_timestamp(self.created_at),
            format_timestamp(self.last_updated_at),
        ]
    }
}

impl From<&Record> for Row {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id().to_string(),
            category: record.category().to_string(),
            account: record.account().into_owned(),
            password: Zeroizing::new(record.password().into_owned()),
            created_at: record.created_at(),
            last_updated_at: record.last_updated_at(),
        }
    }
}

/// Query result: rows in ascending id order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> &'static [&'static str] {
        &HEADER
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> FromIterator<&'a Record> for Table {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Row::from).collect())
    }
}

fn expose<S: serde::Serializer>(value: &Zeroizing<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

fn format_timestamp(ts: Timestamp) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
