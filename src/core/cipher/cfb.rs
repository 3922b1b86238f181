//! AES in full-block cipher feedback mode.
//!
//! CFB is a self-synchronizing stream mode: ciphertext length equals
//! plaintext length and there is no authentication tag.

use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

type Encryptor = cfb_mode::Encryptor<aes::Aes256>;
type Decryptor = cfb_mode::Decryptor<aes::Aes256>;

pub(super) fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut buf = plaintext.to_vec();
    Encryptor::new_from_slices(key, iv)
        .map_err(|e| CipherError::InvalidKey(e.to_string()))?
        .encrypt(&mut buf);
    Ok(buf)
}

pub(super) fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(ciphertext.to_vec());
    Decryptor::new_from_slices(key, iv)
        .map_err(|e| CipherError::InvalidKey(e.to_string()))?
        .decrypt(&mut buf);
    Ok(buf)
}
