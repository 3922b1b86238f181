//! Password record.
//!
//! A record carries its plaintext account and password in memory only; the
//! serialized form holds the ciphertext and the per-field IVs.
//!
//! Plaintext is kept as raw bytes. Decrypting under a different master
//! password yields bytes that need not be text, and those must survive a
//! re-save unchanged.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::core::types::{Category, RecordId, Timestamp};

/// One credential entry.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub(crate) id: RecordId,
    #[serde(default)]
    pub(crate) category: Category,
    #[serde(skip)]
    pub(crate) plain_account: Vec<u8>,
    #[serde(skip)]
    pub(crate) plain_password: Vec<u8>,
    #[serde(rename = "account", default, with = "b64")]
    pub(crate) cipher_account: Vec<u8>,
    #[serde(rename = "password", default, with = "b64")]
    pub(crate) cipher_password: Vec<u8>,
    #[serde(default, with = "b64")]
    pub(crate) account_iv: Vec<u8>,
    #[serde(default, with = "b64")]
    pub(crate) password_iv: Vec<u8>,
    #[serde(default)]
    pub(crate) created_at: Timestamp,
    #[serde(default)]
    pub(crate) last_updated_at: Timestamp,
}

impl Record {
    /// Create an unsaved record with no id and no ciphertext yet.
    pub fn new(category: &str, account: &str, password: &str) -> Self {
        Self {
            id: RecordId::new(),
            category: category.to_string(),
            plain_account: account.as_bytes().to_vec(),
            plain_password: password.as_bytes().to_vec(),
            cipher_account: Vec::new(),
            cipher_password: Vec::new(),
            account_iv: Vec::new(),
            password_iv: Vec::new(),
            created_at: 0,
            last_updated_at: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Plaintext account. Empty until decrypted; bytes that are not UTF-8
    /// show as replacement characters.
    pub fn account(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.plain_account)
    }

    /// Plaintext password, decoded like [`Record::account`].
    pub fn password(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.plain_password)
    }

    pub fn account_bytes(&self) -> &[u8] {
        &self.plain_account
    }

    pub fn password_bytes(&self) -> &[u8] {
        &self.plain_password
    }

    pub fn cipher_account(&self) -> &[u8] {
        &self.cipher_account
    }

    pub fn cipher_password(&self) -> &[u8] {
        &self.cipher_password
    }

    pub fn account_iv(&self) -> &[u8] {
        &self.account_iv
    }

    pub fn password_iv(&self) -> &[u8] {
        &self.password_iv
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_updated_at(&self) -> Timestamp {
        self.last_updated_at
    }

    /// Fold an update into this record.
    ///
    /// Non-empty fields of `draft` replace the stored ones. The id, creation
    /// time and IVs are kept.
    pub(crate) fn merge(&mut self, draft: &Draft, now: Timestamp) {
        if !draft.category.is_empty() {
            self.category = draft.category.clone();
        }
        if !draft.account.is_empty() {
            self.plain_account.zeroize();
            self.plain_account = draft.account.as_bytes().to_vec();
        }
        if !draft.password.is_empty() {
            self.plain_password.zeroize();
            self.plain_password = draft.password.as_bytes().to_vec();
        }
        self.last_updated_at = now;
    }

    /// Drop the plaintext fields, e.g. before handing a record to a caller
    /// that should only see the persisted form.
    pub fn clear_plaintext(&mut self) {
        self.plain_account.zeroize();
        self.plain_password.zeroize();
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        self.clear_plaintext();
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("account", &"<redacted>")
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("last_updated_at", &self.last_updated_at)
            .finish()
    }
}

/// Incoming payload for [`Vault::add`](crate::core::vault::Vault::add).
///
/// An empty `id` creates a new record; a non-empty one updates the record
/// with exactly that id.
#[derive(Clone, Default)]
pub struct Draft {
    pub id: RecordId,
    pub category: Category,
    pub account: String,
    pub password: String,
}

impl Draft {
    /// Payload for a new record.
    pub fn new(category: &str, account: &str, password: &str) -> Self {
        Self {
            id: String::new(),
            category: category.to_string(),
            account: account.to_string(),
            password: password.to_string(),
        }
    }

    /// Payload updating the record `id`; set only the fields that change.
    pub fn update(id: &str) -> Self {
        Self {
            id: id.to_string(),
            category: Category::new(),
            account: String::new(),
            password: String::new(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_account(mut self, account: &str) -> Self {
        self.account = account.to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Build a fresh record under `id`, stamped with `now`.
    pub(crate) fn into_record(self, id: RecordId, now: Timestamp) -> Record {
        let mut record = Record::new(&self.category, &self.account, &self.password);
        record.id = id;
        record.created_at = now;
        record.last_updated_at = now;
        record
    }
}

impl Drop for Draft {
    fn drop(&mut self) {
        self.account.zeroize();
        self.password.zeroize();
    }
}

impl std::fmt::Debug for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft")
            .field("id", &self.id)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Byte fields travel as standard base64 strings. `null` reads as empty.
mod b64 {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
