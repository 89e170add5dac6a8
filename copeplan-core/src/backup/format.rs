// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup Format Versions
//!
//! A format version fixes every cryptographic parameter of a backup:
//!
//! | version | KDF                                   | cipher             | iv  |
//! |---------|---------------------------------------|--------------------|-----|
//! | 1       | PBKDF2-HMAC-SHA256, 600,000 iterations| AES-256-GCM        | 12B |
//! | 2       | Argon2id m=64MB t=3 p=4               | XChaCha20-Poly1305 | 24B |
//!
//! Salts are 16 bytes in both. Parameters are never read from the file itself.

use crate::crypto::{
    derive_key_argon2id, derive_key_pbkdf2, Argon2Params, Cipher, PasswordKdfError, SymmetricKey,
};

/// Salt length for every format version.
pub const SALT_SIZE: usize = 16;

/// PBKDF2 iterations for format version 1.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Version used for new exports.
pub const CURRENT_FORMAT_VERSION: FormatVersion = FormatVersion::V2;

/// Supported backup format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// PBKDF2-HMAC-SHA256 + AES-256-GCM.
    V1,
    /// Argon2id + XChaCha20-Poly1305.
    V2,
}

/// Password KDF bound to a format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfAlgorithm {
    Pbkdf2Sha256 { iterations: u32 },
    Argon2id(Argon2Params),
}

impl KdfAlgorithm {
    /// Human-readable description including cost parameters.
    pub fn describe(&self) -> String {
        match self {
            KdfAlgorithm::Pbkdf2Sha256 { iterations } => {
                format!("PBKDF2-HMAC-SHA256 ({} iterations)", iterations)
            }
            KdfAlgorithm::Argon2id(p) => format!(
                "Argon2id (m={} KiB, t={}, p={})",
                p.m_cost, p.t_cost, p.p_cost
            ),
        }
    }
}

impl FormatVersion {
    /// All versions this build can read, oldest first.
    pub const SUPPORTED: [FormatVersion; 2] = [FormatVersion::V1, FormatVersion::V2];

    /// Looks up a version number from an envelope.
    pub fn from_number(number: u64) -> Option<Self> {
        match number {
            1 => Some(FormatVersion::V1),
            2 => Some(FormatVersion::V2),
            _ => None,
        }
    }

    /// The number written to `formatVersion`.
    pub fn number(self) -> u32 {
        match self {
            FormatVersion::V1 => 1,
            FormatVersion::V2 => 2,
        }
    }

    pub fn kdf(self) -> KdfAlgorithm {
        match self {
            FormatVersion::V1 => KdfAlgorithm::Pbkdf2Sha256 {
                iterations: PBKDF2_ITERATIONS,
            },
            FormatVersion::V2 => KdfAlgorithm::Argon2id(Argon2Params::OWASP),
        }
    }

    pub fn cipher(self) -> Cipher {
        match self {
            FormatVersion::V1 => Cipher::Aes256Gcm,
            FormatVersion::V2 => Cipher::XChaCha20Poly1305,
        }
    }

    /// Associated data binding the ciphertext to its version.
    pub fn associated_data(self) -> Vec<u8> {
        format!("copeplan-backup/v{}", self.number()).into_bytes()
    }

    /// Derives the backup key for this version.
    pub fn derive_key(self, passphrase: &str, salt: &[u8]) -> Result<SymmetricKey, PasswordKdfError> {
        match self.kdf() {
            KdfAlgorithm::Pbkdf2Sha256 { iterations } => {
                derive_key_pbkdf2(passphrase.as_bytes(), salt, iterations)
            }
            KdfAlgorithm::Argon2id(params) => {
                derive_key_argon2id(passphrase.as_bytes(), salt, &params)
            }
        }
    }
}
