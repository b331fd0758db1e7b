//! Pluggable decryption capability for private block lists.
//!
//! Private block lists are encrypted to their author with either the legacy
//! NIP-04 scheme or the modern NIP-44 scheme, and the key may live behind an
//! external signer (browser extension, bunker, hardware device). The
//! resolver therefore depends only on the [`Decryptor`] trait: it probes
//! which schemes are available, picks one, and makes exactly one decryption
//! attempt. A failed attempt is never retried on the other scheme.

use std::fmt;

use nostr::nips::{nip04, nip44};
use nostr::{Keys, PublicKey};
use thiserror::Error;

/// Encryption schemes a decryption capability may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionScheme {
    /// Legacy AES-CBC scheme (NIP-04); its ciphertexts carry an `?iv=` marker.
    Nip04,
    /// Modern versioned-payload scheme (NIP-44).
    Nip44,
}

impl fmt::Display for EncryptionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nip04 => f.write_str("nip04"),
            Self::Nip44 => f.write_str("nip44"),
        }
    }
}

/// Errors surfaced by a [`Decryptor`] implementation.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The capability does not support the requested scheme.
    #[error("Scheme {0} is not supported")]
    Unsupported(EncryptionScheme),

    /// The underlying decryption primitive failed.
    #[error("Decryption failed: {0}")]
    Decryption(String),
}

/// A decryption capability covering zero or more schemes.
///
/// `decrypt` may suspend for an unbounded time: an external signer can sit
/// behind IPC or the network. Callers own timeouts, cancellation, and any
/// retry policy; one call makes at most one attempt.
#[allow(async_fn_in_trait)]
pub trait Decryptor {
    /// Whether this capability can decrypt payloads of `scheme`.
    fn supports(&self, scheme: EncryptionScheme) -> bool;

    /// Decrypts a ciphertext produced for the conversation with
    /// `counterparty`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is unsupported or the ciphertext does
    /// not decrypt.
    async fn decrypt(
        &self,
        scheme: EncryptionScheme,
        counterparty: &PublicKey,
        ciphertext: &str,
    ) -> Result<String, DecryptError>;
}

/// Decryption capability backed by an in-process key pair.
///
/// The headless equivalent of a NIP-07 browser signer: supports both
/// schemes directly through the `nostr` crate primitives, with no IPC hop.
#[derive(Debug, Clone)]
pub struct LocalDecryptor {
    keys: Keys,
}

impl LocalDecryptor {
    /// Creates a capability over the given key pair.
    #[must_use]
    pub fn new(keys: Keys) -> Self {
        Self { keys }
    }
}

impl Decryptor for LocalDecryptor {
    fn supports(&self, _scheme: EncryptionScheme) -> bool {
        true
    }

    async fn decrypt(
        &self,
        scheme: EncryptionScheme,
        counterparty: &PublicKey,
        ciphertext: &str,
    ) -> Result<String, DecryptError> {
        match scheme {
            EncryptionScheme::Nip04 => {
                nip04::decrypt(self.keys.secret_key(), counterparty, ciphertext)
                    .map_err(|e| DecryptError::Decryption(e.to_string()))
            }
            EncryptionScheme::Nip44 => {
                nip44::decrypt(self.keys.secret_key(), counterparty, ciphertext)
                    .map_err(|e| DecryptError::Decryption(e.to_string()))
            }
        }
    }
}
