//! The cipher collaborator contract and the decryption gateway.
//!
//! Stored values may be cleartext or encrypted blobs. A [`Cipher`] knows how
//! to recognize its own blob format and decrypt it; [`resolve_cleartext`]
//! wraps that contract so rendering code always works with the best available
//! cleartext and never fails.
//!
//! The bundled AES-256-GCM implementation lives in [`aes`] behind the `aes`
//! feature.

#[cfg(feature = "aes")]
pub mod aes;

/// Error produced by a [`Cipher`] operation.
///
/// These errors are reported to the gateway, never raised to rendering
/// callers: [`resolve_cleartext`] absorbs them and degrades to the raw value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The blob does not match the cipher's format.
    #[error("malformed ciphertext: {0}")]
    Malformed(String),
    /// Authenticated decryption failed (wrong key, tampered blob).
    #[error("decryption failed")]
    Decrypt,
    /// Encryption failed.
    #[error("encryption failed")]
    Encrypt,
}

/// A symmetric cipher as consumed by this crate.
///
/// Implementations are expected to be cheap, synchronous, and local. The
/// contract:
///
/// - [`is_encrypted`](Cipher::is_encrypted) is a format sniff, not exhaustive
///   validation, and must not fail.
/// - [`decrypt`](Cipher::decrypt) fails cleanly on malformed input.
/// - [`encrypt`](Cipher::encrypt) is used by producers of stored values; the
///   disclosure component itself never encrypts.
pub trait Cipher {
    /// Returns whether `blob` is recognized as one of this cipher's
    /// encrypted blobs.
    fn is_encrypted(&self, blob: &str) -> bool;

    /// Decrypts an encrypted blob back to cleartext.
    fn decrypt(&self, blob: &str) -> Result<String, CipherError>;

    /// Encrypts cleartext into a blob that [`is_encrypted`](Cipher::is_encrypted)
    /// recognizes.
    fn encrypt(&self, plain: &str) -> Result<String, CipherError>;
}

/// Resolves a stored value to the best available cleartext.
///
/// Values the cipher does not recognize as encrypted are returned verbatim.
/// Recognized blobs are decrypted; on any decryption failure the stored value
/// is returned verbatim instead, even though it may be unreadable ciphertext
/// rather than genuine cleartext. Decryption failure never surfaces to the
/// caller.
///
/// Masking always runs against the result of this function, never against
/// ciphertext.
#[must_use]
pub fn resolve_cleartext(cipher: &dyn Cipher, raw: &str) -> String {
    if !cipher.is_encrypted(raw) {
        return raw.to_string();
    }
    match cipher.decrypt(raw) {
        Ok(plain) => plain,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "decryption failed, treating stored value as cleartext");
            raw.to_string()
        }
    }
}
