//! Record codec.
//!
//! Encrypts and decrypts the account and password of a [`Record`] with a
//! key derived from the master password.
//!
//! ## Key derivation
//!
//! The key is the lowercase hex MD5 digest of the master password, taken as
//! 32 ASCII bytes, which selects AES-256. The block size (and IV length) is
//! 16 bytes. This is a single unsalted hash and the mode is unauthenticated:
//! a wrong master password decrypts to garbage instead of failing. The
//! scheme is kept as-is so existing password boxes stay readable; changing
//! it needs a versioned blob format.
//!
//! ## IV handling
//!
//! Encryption reuses an IV that already has the right length and only
//! generates a fresh one otherwise, so re-encrypting an unchanged record under
//! the same master password reproduces the same ciphertext. Decryption never
//! generates an IV.

mod cfb;

use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::BLOCK_SIZE;
use crate::core::domain::Record;
use crate::error::{CipherError, Result};

/// Length of the derived key in bytes.
pub const KEY_LEN: usize = 32;

/// Derive the record key from a master password.
pub fn derive_key(master_password: &str) -> Zeroizing<[u8; KEY_LEN]> {
    let hex = Zeroizing::new(format!("{:x}", md5::compute(master_password.as_bytes())));
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(hex.as_bytes());
    key
}

/// Per-field record encryption under one master password.
pub struct Codec {
    key: Zeroizing<[u8; KEY_LEN]>,
}

impl Codec {
    pub fn new(master_password: &str) -> Self {
        Self {
            key: derive_key(master_password),
        }
    }

    /// Encrypt the plaintext account and password into the record's
    /// ciphertext fields.
    ///
    /// IVs of the wrong length (including empty ones on a new record) are
    /// replaced with fresh random bytes from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the cipher cannot be initialized.
    pub fn encrypt<R: RngCore + CryptoRng>(&self, record: &mut Record, rng: &mut R) -> Result<()> {
        let account_iv = fresh_iv_if_invalid(&record.account_iv, rng);
        let password_iv = fresh_iv_if_invalid(&record.password_iv, rng);

        let cipher_account = cfb::encrypt(&*self.key, &account_iv, &record.plain_account)?;
        let cipher_password =
            cfb::encrypt(&*self.key, &password_iv, &record.plain_password)?;

        trace!(
            id = %record.id,
            account_len = cipher_account.len(),
            password_len = cipher_password.len(),
            "encrypted record"
        );

        record.account_iv = account_iv;
        record.password_iv = password_iv;
        record.cipher_account = cipher_account;
        record.cipher_password = cipher_password;
        Ok(())
    }

    /// Decrypt the ciphertext fields into the record's plaintext fields.
    ///
    /// The record is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidIvLength` if either IV is not exactly one
    /// block long.
    ///
    /// The decrypted content is never checked. Under a different master
    /// password the plaintext is garbage, and encrypting it again under that
    /// same password reproduces the stored ciphertext byte for byte.
    pub fn decrypt(&self, record: &mut Record) -> Result<()> {
        check_iv(&record.account_iv)?;
        check_iv(&record.password_iv)?;

        let mut account = cfb::decrypt(&*self.key, &record.account_iv, &record.cipher_account)?;
        let mut password =
            cfb::decrypt(&*self.key, &record.password_iv, &record.cipher_password)?;

        trace!(id = %record.id, "decrypted record");

        record.clear_plaintext();
        record.plain_account = std::mem::take(&mut *account);
        record.plain_password = std::mem::take(&mut *password);
        Ok(())
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

fn check_iv(iv: &[u8]) -> Result<()> {
    if iv.len() != BLOCK_SIZE {
        return Err(CipherError::InvalidIvLength {
            expected: BLOCK_SIZE,
            actual: iv.len(),
        }
        .into());
    }
    Ok(())
}

fn fresh_iv_if_invalid<R: RngCore + CryptoRng>(iv: &[u8], rng: &mut R) -> Vec<u8> {
    if iv.len() == BLOCK_SIZE {
        return iv.to_vec();
    }
    let mut fresh = vec![0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut fresh);
    fresh
}
