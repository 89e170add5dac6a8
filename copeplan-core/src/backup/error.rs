// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup Error Types
//!
//! Restore failures are raised as typed variants at the point they happen and
//! then folded into the four-value [`RestoreErrorType`] a UI renders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::{EncryptionError, PasswordKdfError};

/// Why a restore attempt failed, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreErrorType {
    /// Authentication failed: wrong passphrase or modified ciphertext.
    WrongPassphrase,
    /// The file is not a readable backup container.
    CorruptFile,
    /// The container is readable but its version or plan is not usable.
    WrongFormat,
    /// Any other failure, such as the key derivation running out of memory.
    Unknown,
}

impl RestoreErrorType {
    /// Stable snake_case code.
    pub fn as_str(self) -> &'static str {
        match self {
            RestoreErrorType::WrongPassphrase => "wrong_passphrase",
            RestoreErrorType::CorruptFile => "corrupt_file",
            RestoreErrorType::WrongFormat => "wrong_format",
            RestoreErrorType::Unknown => "unknown",
        }
    }

    /// Inline message for the person restoring their plan.
    pub fn user_message(self) -> &'static str {
        match self {
            RestoreErrorType::WrongPassphrase => "Passphrase didn't match, try again.",
            RestoreErrorType::CorruptFile => {
                "This backup file is damaged or incomplete. Try another copy."
            }
            RestoreErrorType::WrongFormat => {
                "This file isn't a plan backup this version can open."
            }
            RestoreErrorType::Unknown => "Something went wrong restoring your plan. Please try again.",
        }
    }
}

impl std::fmt::Display for RestoreErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restore failure with the detail of where it happened.
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("Passphrase didn't match or backup was modified")]
    WrongPassphrase,
    #[error("Backup file is not valid: {0}")]
    MalformedContainer(String),
    #[error("Backup field {field} has invalid length (expected {expected} bytes, got {actual})")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Backup ciphertext is truncated")]
    Truncated,
    #[error("Unsupported backup format version: {0}")]
    UnsupportedVersion(i128),
    #[error("Decrypted data is not a plan: {0}")]
    InvalidPlanData(String),
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
    #[error("Restore failed: {0}")]
    Internal(String),
}

impl RestoreError {
    /// Classifies this failure for display.
    pub fn kind(&self) -> RestoreErrorType {
        match self {
            RestoreError::WrongPassphrase => RestoreErrorType::WrongPassphrase,
            RestoreError::MalformedContainer(_)
            | RestoreError::InvalidFieldLength { .. }
            | RestoreError::Truncated => RestoreErrorType::CorruptFile,
            RestoreError::UnsupportedVersion(_)
            | RestoreError::InvalidPlanData(_) => RestoreErrorType::WrongFormat,
            RestoreError::KeyDerivation(_) | RestoreError::Internal(_) => {
                RestoreErrorType::Unknown
            }
        }
    }
}

impl From<EncryptionError> for RestoreError {
    fn from(err: EncryptionError) -> Self {
        match err {
            EncryptionError::DecryptionFailed => RestoreError::WrongPassphrase,
            EncryptionError::CiphertextTooShort => RestoreError::Truncated,
            EncryptionError::InvalidNonceLength { expected, actual } => {
                RestoreError::InvalidFieldLength {
                    field: "iv",
                    expected,
                    actual,
                }
            }
            other => RestoreError::Internal(other.to_string()),
        }
    }
}

impl From<PasswordKdfError> for RestoreError {
    fn from(err: PasswordKdfError) -> Self {
        RestoreError::KeyDerivation(err.to_string())
    }
}

/// Export failures. These indicate caller error or a broken environment and
/// are not classified for display.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Passphrase cannot be empty")]
    EmptyPassphrase,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Key derivation failed: {0}")]
    KeyDerivation(#[from] PasswordKdfError),
    #[error("Encryption failed: {0}")]
    Encryption(#[from] EncryptionError),
}
