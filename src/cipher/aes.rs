//! AES-256-GCM implementation of the [`Cipher`] contract.
//!
//! Blob format: `ENC1:` followed by base64 of `nonce || ciphertext`, with a
//! random 12-byte nonce per encryption. The prefix plus decodability is what
//! [`Cipher::is_encrypted`] sniffs for; actual authentication happens in
//! `decrypt`.

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;

use super::{Cipher, CipherError};

/// AES-256-GCM encryption key size.
pub const KEY_SIZE: usize = 32;

/// Nonce size for AES-GCM.
const NONCE_SIZE: usize = 12;

/// Marker prefix identifying this cipher's blobs.
const BLOB_PREFIX: &str = "ENC1:";

/// AES-256-GCM cipher over a fixed symmetric key.
#[derive(Clone)]
pub struct AesGcmCipher {
    key: [u8; KEY_SIZE],
}

impl AesGcmCipher {
    /// Creates a cipher from a 32-byte key.
    #[must_use]
    pub fn new(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Generates a random encryption key.
    #[must_use]
    pub fn generate_key() -> [u8; KEY_SIZE] {
        let mut key = [0u8; KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut key);
        key
    }

    fn aead(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key))
    }
}

impl std::fmt::Debug for AesGcmCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcmCipher").finish_non_exhaustive()
    }
}

impl Cipher for AesGcmCipher {
    fn is_encrypted(&self, blob: &str) -> bool {
        blob.strip_prefix(BLOB_PREFIX)
            .and_then(|encoded| BASE64.decode(encoded).ok())
            .is_some_and(|bytes| bytes.len() > NONCE_SIZE)
    }

    fn decrypt(&self, blob: &str) -> Result<String, CipherError> {
        let encoded = blob
            .strip_prefix(BLOB_PREFIX)
            .ok_or_else(|| CipherError::Malformed("missing blob prefix".into()))?;
        let bytes = BASE64
            .decode(encoded)
            .map_err(|err| CipherError::Malformed(err.to_string()))?;
        if bytes.len() <= NONCE_SIZE {
            return Err(CipherError::Malformed("blob shorter than nonce".into()));
        }

        let nonce = Nonce::from_slice(&bytes[..NONCE_SIZE]);
        let plain = self
            .aead()
            .decrypt(nonce, &bytes[NONCE_SIZE..])
            .map_err(|_| CipherError::Decrypt)?;
        String::from_utf8(plain).map_err(|err| CipherError::Malformed(err.to_string()))
    }

    fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .aead()
            .encrypt(nonce, plain.as_bytes())
            .map_err(|_| CipherError::Encrypt)?;

        // Prepend nonce to ciphertext, then armor
        let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(format!("{BLOB_PREFIX}{}", BASE64.encode(blob)))
    }
}
