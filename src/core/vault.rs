//! Vault.
//!
//! The password box: owns the records, the key derived from the master
//! password and the random source, all behind one reader/writer lock.
//!
//! Writers (`initialize`, `add`, `remove`, `remove_by_account`, `clear`,
//! `save`) hold the lock exclusively for their whole duration, including the
//! call into the [`Repository`]. Readers (`list`, `find`) share it.
//!
//! Every mutation is validated before anything changes. If encryption or the
//! save fails afterwards, the in-memory records are restored to what they were
//! before the call.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::core::cipher::Codec;
use crate::core::constants::MIN_MASTER_PASSWORD_LEN;
use crate::core::domain::{Draft, Record, Table};
use crate::core::id;
use crate::core::query;
use crate::core::store::Repository;
use crate::core::types::RecordId;
use crate::error::{Result, VaultError};

type Records = HashMap<RecordId, Record>;

struct State {
    /// `None` until a master password has been accepted.
    codec: Option<Codec>,
    records: Records,
    rng: StdRng,
}

/// The password box.
pub struct Vault {
    repo: Box<dyn Repository>,
    state: RwLock<State>,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("initialized", &self.is_initialized().ok())
            .field("records", &self.len().ok())
            .finish_non_exhaustive()
    }
}

impl Vault {
    // --- Construction ---
    /// Create an empty, locked vault backed by `repo`.
    ///
    /// The random source for ids and IVs is seeded once from the OS.
    pub fn new(repo: impl Repository + 'static) -> Self {
        Self::with_rng(repo, StdRng::from_entropy())
    }

    /// Create an empty, locked vault with an explicit random source.
    pub fn with_rng(repo: impl Repository + 'static, rng: StdRng) -> Self {
        Self {
            repo: Box::new(repo),
            state: RwLock::new(State {
                codec: None,
                records: HashMap::new(),
                rng,
            }),
        }
    }

    /// Unlock the vault with the master password.
    ///
    /// Loads the saved box, decrypts every record, re-encrypts it and saves
    /// the box again. Nothing changes in memory or in the repository if any
    /// step fails.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::MasterPasswordTooShort` for passwords under six
    /// bytes, `CipherError::InvalidIvLength` for a record with a malformed IV,
    /// and repository or JSON errors from loading and saving.
    ///
    /// A wrong master password is not detected: records decrypt to garbage
    /// and the re-save writes the same ciphertext back.
    pub fn initialize(&self, master_password: &str) -> Result<()> {
        if master_password.len() < MIN_MASTER_PASSWORD_LEN {
            return Err(VaultError::MasterPasswordTooShort {
                min: MIN_MASTER_PASSWORD_LEN,
            }
            .into());
        }

        let mut guard = self.write()?;
        let state = &mut *guard;

        let codec = Codec::new(master_password);
        let mut records = self.load_records(&codec)?;
        self.save_records(&codec, &mut records, &mut state.rng)?;

        info!(records = records.len(), "password box unlocked");
        state.codec = Some(codec);
        state.records = records;
        Ok(())
    }

    /// Whether a master password has been accepted.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.read()?.codec.is_some())
    }

    /// Number of records in memory.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Current record ids, ascending.
    pub fn ids(&self) -> Result<Vec<RecordId>> {
        let state = self.read()?;
        let mut ids: Vec<RecordId> = state.records.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    // --- Mutation ---
    /// Add a record, or update one.
    ///
    /// With an empty `draft.id` a new record is created under a freshly
    /// allocated id. With a non-empty id the non-empty fields of the draft are
    /// merged into the existing record and its update time is bumped.
    ///
    /// # Returns
    ///
    /// The record id and whether a new record was created.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::EmptyMasterPassword` before initialization,
    /// `VaultError::PasswordNotFound` for an unknown non-empty id, and
    /// `VaultError::AllocateIdFailed` if no free id could be drawn.
    pub fn add(&self, draft: Draft) -> Result<(RecordId, bool)> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        let codec = state
            .codec
            .as_ref()
            .ok_or(VaultError::EmptyMasterPassword)?;
        let now = Utc::now().timestamp();

        if draft.id.is_empty() {
            let records = &state.records;
            let id = id::allocate(&mut state.rng, |c| records.contains_key(c))?;
            let mut record = draft.into_record(id.clone(), now);
            codec.encrypt(&mut record, &mut state.rng)?;
            state.records.insert(id.clone(), record);

            if let Err(e) = self.save_records(codec, &mut state.records, &mut state.rng) {
                state.records.remove(&id);
                return Err(e);
            }
            info!(id = %id, "added password");
            return Ok((id, true));
        }

        let id = draft.id.clone();
        let existing = state
            .records
            .get_mut(&id)
            .ok_or_else(|| VaultError::PasswordNotFound(id.clone()))?;
        let previous = existing.clone();
        existing.merge(&draft, now);

        let mut result = codec.encrypt(existing, &mut state.rng);
        if result.is_ok() {
            result = self.save_records(codec, &mut state.records, &mut state.rng);
        }
        if let Err(e) = result {
            state.records.insert(id, previous);
            return Err(e);
        }
        info!(id = %id, "updated password");
        Ok((id, false))
    }

    /// Remove records by id or id prefix.
    ///
    /// Each requested id resolves to the record with exactly that id or,
    /// failing that, to every record whose id starts with it. All requested
    /// ids are resolved before anything is deleted, so a failure anywhere in
    /// the batch leaves the vault unchanged.
    ///
    /// # Returns
    ///
    /// The deleted ids, in resolution order.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::PasswordNotFound` when an id matches nothing and
    /// `VaultError::Ambiguous` when a prefix matches several records and
    /// `all` is false.
    pub fn remove<S: AsRef<str>>(&self, ids: &[S], all: bool) -> Result<Vec<RecordId>> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        let codec = state
            .codec
            .as_ref()
            .ok_or(VaultError::EmptyMasterPassword)?;

        let mut resolved: Vec<RecordId> = Vec::new();
        for id in ids {
            let id = id.as_ref();
            if state.records.contains_key(id) {
                resolved.push(id.to_string());
                continue;
            }
            let matches = query::ids_with_prefix(state.records.keys(), id);
            if matches.is_empty() {
                return Err(VaultError::PasswordNotFound(id.to_string()).into());
            }
            if matches.len() > 1 && !all {
                return Err(VaultError::Ambiguous(matches).into());
            }
            resolved.extend(matches);
        }

        let removed = take_records(&mut state.records, &resolved);
        if let Err(e) = self.save_records(codec, &mut state.records, &mut state.rng) {
            restore_records(&mut state.records, removed);
            return Err(e);
        }

        let deleted: Vec<RecordId> = removed.iter().map(|r| r.id.clone()).collect();
        info!(ids = ?deleted, "removed passwords");
        Ok(deleted)
    }

    /// Remove records by exact category and plaintext account.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::PasswordNotFoundWithAccount` when nothing matches
    /// and `VaultError::Ambiguous` when several records match and `all` is
    /// false.
    pub fn remove_by_account(
        &self,
        category: &str,
        account: &str,
        all: bool,
    ) -> Result<Vec<RecordId>> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        let codec = state
            .codec
            .as_ref()
            .ok_or(VaultError::EmptyMasterPassword)?;

        let mut matches: Vec<RecordId> = state
            .records
            .values()
            .filter(|r| query::is_account(r, category, account))
            .map(|r| r.id.clone())
            .collect();
        matches.sort();

        if matches.is_empty() {
            return Err(VaultError::PasswordNotFoundWithAccount {
                category: category.to_string(),
                account: account.to_string(),
            }
            .into());
        }
        if matches.len() > 1 && !all {
            return Err(VaultError::Ambiguous(matches).into());
        }

        let removed = take_records(&mut state.records, &matches);
        if let Err(e) = self.save_records(codec, &mut state.records, &mut state.rng) {
            restore_records(&mut state.records, removed);
            return Err(e);
        }

        info!(ids = ?matches, "removed passwords by account");
        Ok(matches)
    }

    /// Remove every record.
    ///
    /// An empty box, locked or not, returns no ids and is not saved.
    ///
    /// # Returns
    ///
    /// The deleted ids, ascending.
    pub fn clear(&self) -> Result<Vec<RecordId>> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        if state.records.is_empty() {
            return Ok(Vec::new());
        }
        let codec = state
            .codec
            .as_ref()
            .ok_or(VaultError::EmptyMasterPassword)?;

        let previous = std::mem::take(&mut state.records);
        let mut ids: Vec<RecordId> = previous.keys().cloned().collect();
        ids.sort();

        if let Err(e) = self.save_records(codec, &mut state.records, &mut state.rng) {
            state.records = previous;
            return Err(e);
        }
        info!(count = ids.len(), "cleared password box");
        Ok(ids)
    }

    /// Re-encrypt every record and write the box to the repository.
    pub fn save(&self) -> Result<()> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        let codec = state
            .codec
            .as_ref()
            .ok_or(VaultError::EmptyMasterPassword)?;
        self.save_records(codec, &mut state.records, &mut state.rng)
    }

    // --- Queries ---
    /// All records, ascending by id.
    pub fn list(&self) -> Result<Table> {
        let state = self.read_unlocked()?;
        let mut records: Vec<&Record> = state.records.values().collect();
        query::sort_by_id(&mut records);
        Ok(records.into_iter().collect())
    }

    /// Records whose category or account contains `word`, ignoring case,
    /// ascending by id.
    pub fn find(&self, word: &str) -> Result<Table> {
        let state = self.read_unlocked()?;
        let mut records: Vec<&Record> = state
            .records
            .values()
            .filter(|r| query::matches(r, word))
            .collect();
        query::sort_by_id(&mut records);
        debug!(word_len = word.len(), found = records.len(), "find");
        Ok(records.into_iter().collect())
    }

    // --- Internals ---
    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| VaultError::LockPoisoned.into())
    }

    /// Shared access that also requires a master password.
    fn read_unlocked(&self) -> Result<RwLockReadGuard<'_, State>> {
        let state = self.read()?;
        if state.codec.is_none() {
            return Err(VaultError::EmptyMasterPassword.into());
        }
        Ok(state)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| VaultError::LockPoisoned.into())
    }

    fn load_records(&self, codec: &Codec) -> Result<Records> {
        let data = self.repo.load()?;
        if data.is_empty() {
            debug!("empty box");
            return Ok(Records::new());
        }

        let loaded: Vec<Record> = serde_json::from_slice(&data)?;
        debug!(records = loaded.len(), bytes = data.len(), "loaded records");

        let mut records = Records::with_capacity(loaded.len());
        for mut record in loaded {
            codec.decrypt(&mut record)?;
            records.insert(record.id.clone(), record);
        }
        Ok(records)
    }

    fn save_records(&self, codec: &Codec, records: &mut Records, rng: &mut StdRng) -> Result<()> {
        for record in records.values_mut() {
            codec.encrypt(record, rng)?;
        }
        let data = marshal(records)?;
        self.repo.save(&data)?;
        debug!(records = records.len(), bytes = data.len(), "saved records");
        Ok(())
    }
}

/// Serialize records as a JSON array, ascending by id, indented by four
/// spaces.
fn marshal(records: &Records) -> Result<Vec<u8>> {
    let mut sorted: Vec<&Record> = records.values().collect();
    query::sort_by_id(&mut sorted);

    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    sorted.serialize(&mut ser)?;
    Ok(out)
}

/// Remove `ids` from `records`, skipping duplicates and ids already gone.
fn take_records(records: &mut Records, ids: &[RecordId]) -> Vec<Record> {
    ids.iter().filter_map(|id| records.remove(id)).collect()
}

fn restore_records(records: &mut Records, removed: Vec<Record>) {
    for record in removed {
        records.insert(record.id.clone(), record);
    }
}
