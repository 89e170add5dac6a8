// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Symmetric Encryption (XChaCha20-Poly1305 / AES-256-GCM)
//!
//! Authenticated encryption with caller-supplied nonce and associated data.
//! The nonce travels next to the ciphertext (in the backup envelope), so unlike
//! a self-describing blob the algorithm is selected explicitly by [`Cipher`].
//!
//! Both ciphers append a 16-byte tag: `ciphertext || tag`.
//!   - AES-256-GCM: 12-byte nonce
//!   - XChaCha20-Poly1305: 24-byte nonce

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::XChaCha20Poly1305;
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use thiserror::Error;
use zeroize::Zeroize;

use super::random_bytes;

/// Encryption error types.
#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("Encryption failed")]
    EncryptionFailed,
    #[error("Decryption failed: data may be corrupted or wrong key")]
    DecryptionFailed,
    #[error("Ciphertext too short")]
    CiphertextTooShort,
    #[error("Invalid nonce length (expected {expected} bytes, got {actual})")]
    InvalidNonceLength { expected: usize, actual: usize },
    #[error("System random number generator unavailable")]
    RandomUnavailable,
}

/// Nonce size for AES-256-GCM (96 bits = 12 bytes).
const AES_GCM_NONCE_SIZE: usize = 12;
/// Nonce size for XChaCha20-Poly1305 (192 bits = 24 bytes).
const XCHACHA20_NONCE_SIZE: usize = 24;
/// Authentication tag size (16 bytes for both algorithms).
pub const TAG_SIZE: usize = 16;

/// Supported AEAD algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    Aes256Gcm,
    XChaCha20Poly1305,
}

impl Cipher {
    /// Nonce length in bytes.
    pub fn nonce_size(self) -> usize {
        match self {
            Cipher::Aes256Gcm => AES_GCM_NONCE_SIZE,
            Cipher::XChaCha20Poly1305 => XCHACHA20_NONCE_SIZE,
        }
    }

    /// Human-readable algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Cipher::Aes256Gcm => "AES-256-GCM",
            Cipher::XChaCha20Poly1305 => "XChaCha20-Poly1305",
        }
    }

    /// Draws a fresh random nonce of the right size.
    pub fn generate_nonce(self) -> Result<Vec<u8>, EncryptionError> {
        random_bytes(self.nonce_size())
    }

    fn check_nonce(self, nonce: &[u8]) -> Result<(), EncryptionError> {
        if nonce.len() != self.nonce_size() {
            return Err(EncryptionError::InvalidNonceLength {
                expected: self.nonce_size(),
                actual: nonce.len(),
            });
        }
        Ok(())
    }
}

/// 256-bit symmetric encryption key.
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: [u8; 32],
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose key bytes in debug output
        f.debug_struct("SymmetricKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl SymmetricKey {
    /// Generates a new random symmetric key.
    pub fn generate() -> Result<Self, EncryptionError> {
        let mut random = random_bytes(32)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&random);
        random.zeroize();
        Ok(SymmetricKey { bytes })
    }

    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SymmetricKey { bytes }
    }

    /// Returns a reference to the key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

/// Encrypts `plaintext`, authenticating `aad` alongside it.
///
/// Output format: `ciphertext || tag (16 bytes)`
pub fn seal(
    cipher: Cipher,
    key: &SymmetricKey,
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, EncryptionError> {
    cipher.check_nonce(nonce)?;

    match cipher {
        Cipher::XChaCha20Poly1305 => {
            let aead = XChaCha20Poly1305::new(key.as_bytes().into());
            aead.encrypt(
                chacha20poly1305::XNonce::from_slice(nonce),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| EncryptionError::EncryptionFailed)
        }
        Cipher::Aes256Gcm => {
            let nonce = Nonce::try_assume_unique_for_key(nonce)
                .map_err(|_| EncryptionError::EncryptionFailed)?;
            let unbound_key = UnboundKey::new(&AES_256_GCM, key.as_bytes())
                .map_err(|_| EncryptionError::EncryptionFailed)?;
            let sealing_key = LessSafeKey::new(unbound_key);

            let mut in_out = plaintext.to_vec();
            sealing_key
                .seal_in_place_append_tag(nonce, Aad::from(aad), &mut in_out)
                .map_err(|_| EncryptionError::EncryptionFailed)?;
            Ok(in_out)
        }
    }
}

/// Decrypts `ciphertext || tag`, verifying the tag over ciphertext and `aad`.
///
/// A wrong key, a wrong nonce, modified associated data and a modified
/// ciphertext are indistinguishable: all yield [`EncryptionError::DecryptionFailed`].
pub fn open(
    cipher: Cipher,
    key: &SymmetricKey,
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, EncryptionError> {
    cipher.check_nonce(nonce)?;
    if ciphertext.len() < TAG_SIZE {
        return Err(EncryptionError::CiphertextTooShort);
    }

    match cipher {
        Cipher::XChaCha20Poly1305 => {
            let aead = XChaCha20Poly1305::new(key.as_bytes().into());
            aead.decrypt(
                chacha20poly1305::XNonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| EncryptionError::DecryptionFailed)
        }
        Cipher::Aes256Gcm => {
            let nonce = Nonce::try_assume_unique_for_key(nonce)
                .map_err(|_| EncryptionError::DecryptionFailed)?;
            let unbound_key = UnboundKey::new(&AES_256_GCM, key.as_bytes())
                .map_err(|_| EncryptionError::DecryptionFailed)?;
            let opening_key = LessSafeKey::new(unbound_key);

            let mut buffer = ciphertext.to_vec();
            let plaintext = opening_key
                .open_in_place(nonce, Aad::from(aad), &mut buffer)
                .map_err(|_| EncryptionError::DecryptionFailed)?;
            let plaintext = plaintext.to_vec();
            buffer.zeroize();
            Ok(plaintext)
        }
    }
}
