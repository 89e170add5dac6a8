// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup Envelope
//!
//! JSON container written to disk by callers:
//!
//! ```json
//! { "formatVersion": 2, "salt": "<b64>", "iv": "<b64>", "ciphertext": "<b64>" }
//! ```
//!
//! Parsing reads `formatVersion` first, so a file from a newer release is
//! reported as an unsupported format even if its other fields changed shape.
//! Any JSON integer counts as a version there, including negative values and
//! values wider than 64 bits.

use ring::digest;
use serde::{Deserialize, Serialize};

use super::error::{ExportError, RestoreError};
use super::format::{FormatVersion, SALT_SIZE};
use crate::crypto::TAG_SIZE;

/// Passphrase-encrypted plan backup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    /// Envelope schema version (see [`FormatVersion`]).
    pub format_version: u64,
    /// KDF salt, unique per export.
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
    /// Cipher nonce, unique per export.
    #[serde(with = "base64_bytes")]
    pub iv: Vec<u8>,
    /// Encrypted plan followed by the 16-byte authentication tag.
    #[serde(with = "base64_bytes")]
    pub ciphertext: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeHeader {
    format_version: i128,
}

impl EnvelopeHeader {
    fn version(&self) -> Result<FormatVersion, RestoreError> {
        u64::try_from(self.format_version)
            .ok()
            .and_then(FormatVersion::from_number)
            .ok_or(RestoreError::UnsupportedVersion(self.format_version))
    }
}

/// What can be learned about a backup without its passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSummary {
    pub format_version: FormatVersion,
    pub kdf: String,
    pub cipher: &'static str,
    pub fingerprint: String,
    pub ciphertext_len: usize,
}

impl BackupFile {
    /// Parses and structurally checks an envelope.
    ///
    /// Fails with a `corrupt_file` error for anything that is not a complete
    /// envelope and with `wrong_format` for an unknown version.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RestoreError> {
        let header: EnvelopeHeader = serde_json::from_slice(bytes)
            .map_err(|e| RestoreError::MalformedContainer(e.to_string()))?;
        header.version()?;

        let file: BackupFile = serde_json::from_slice(bytes)
            .map_err(|e| RestoreError::MalformedContainer(e.to_string()))?;
        file.check_structure()?;
        Ok(file)
    }

    /// Parses an envelope from its text form.
    pub fn from_json(json: &str) -> Result<Self, RestoreError> {
        Self::from_slice(json.as_bytes())
    }

    /// Compact JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Indented JSON, as written to backup files.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Returns the supported version of this envelope.
    pub fn version(&self) -> Result<FormatVersion, RestoreError> {
        FormatVersion::from_number(self.format_version)
            .ok_or(RestoreError::UnsupportedVersion(i128::from(self.format_version)))
    }

    /// Short hex digest of the ciphertext, for telling backups apart.
    pub fn fingerprint(&self) -> String {
        let hash = digest::digest(&digest::SHA256, &self.ciphertext);
        hex::encode(&hash.as_ref()[..8])
    }

    /// Checks the version and the byte lengths the version requires.
    pub fn check_structure(&self) -> Result<FormatVersion, RestoreError> {
        let version = self.version()?;

        if self.salt.len() != SALT_SIZE {
            return Err(RestoreError::InvalidFieldLength {
                field: "salt",
                expected: SALT_SIZE,
                actual: self.salt.len(),
            });
        }
        let nonce_size = version.cipher().nonce_size();
        if self.iv.len() != nonce_size {
            return Err(RestoreError::InvalidFieldLength {
                field: "iv",
                expected: nonce_size,
                actual: self.iv.len(),
            });
        }
        if self.ciphertext.len() < TAG_SIZE {
            return Err(RestoreError::Truncated);
        }

        Ok(version)
    }

    /// Describes the envelope without decrypting it.
    pub fn summary(&self) -> Result<BackupSummary, RestoreError> {
        let version = self.check_structure()?;
        Ok(BackupSummary {
            format_version: version,
            kdf: version.kdf().describe(),
            cipher: version.cipher().name(),
            fingerprint: self.fingerprint(),
            ciphertext_len: self.ciphertext.len(),
        })
    }
}

/// Parses raw file bytes and summarizes the backup. No passphrase needed.
pub fn inspect_backup(bytes: &[u8]) -> Result<BackupSummary, RestoreError> {
    BackupFile::from_slice(bytes)?.summary()
}

/// Standard base64 (padded) for byte fields.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(s.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
