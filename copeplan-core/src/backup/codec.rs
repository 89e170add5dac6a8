// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup Codec
//!
//! Export: fresh salt and IV → KDF → canonical JSON → AEAD.
//! Restore: parse envelope → check version → KDF → AEAD open → parse plan.
//! Each step fails with its own [`RestoreError`] variant.
//!
//! The plan is opaque here. Editing limits belong to [`PlanPayload`]'s
//! mutators, so any plan serde accepts round-trips.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::envelope::BackupFile;
use super::error::{ExportError, RestoreError};
use super::format::{FormatVersion, CURRENT_FORMAT_VERSION, SALT_SIZE};
use crate::crypto::{open, random_bytes, seal};
use crate::plan::PlanPayload;

/// Encrypts a plan under the current format version.
pub fn export_plan(payload: &PlanPayload, passphrase: &str) -> Result<BackupFile, ExportError> {
    export_plan_with_version(payload, passphrase, CURRENT_FORMAT_VERSION)
}

/// Encrypts a plan under a specific format version.
///
/// New backups should use [`export_plan`]; older versions stay writable for
/// compatibility testing.
pub fn export_plan_with_version(
    payload: &PlanPayload,
    passphrase: &str,
    version: FormatVersion,
) -> Result<BackupFile, ExportError> {
    if passphrase.is_empty() {
        return Err(ExportError::EmptyPassphrase);
    }

    let cipher = version.cipher();
    let salt = random_bytes(SALT_SIZE)?;
    let iv = cipher.generate_nonce()?;

    let key = version.derive_key(passphrase, &salt)?;

    let plaintext = Zeroizing::new(
        serde_json::to_vec(payload).map_err(|e| ExportError::Serialization(e.to_string()))?,
    );
    let ciphertext = seal(cipher, &key, &iv, &version.associated_data(), &plaintext)?;

    debug!(
        format_version = version.number(),
        plaintext_len = plaintext.len(),
        "exported plan backup"
    );

    Ok(BackupFile {
        format_version: u64::from(version.number()),
        salt,
        iv,
        ciphertext,
    })
}

/// Decrypts a backup back into a plan.
pub fn restore_plan(file: &BackupFile, passphrase: &str) -> Result<PlanPayload, RestoreError> {
    let result = decrypt_plan(file, passphrase);
    if let Err(err) = &result {
        warn!(kind = %err.kind(), "plan restore failed");
    }
    result
}

/// Parses raw backup file bytes and decrypts them.
pub fn restore_plan_bytes(bytes: &[u8], passphrase: &str) -> Result<PlanPayload, RestoreError> {
    let file = match BackupFile::from_slice(bytes) {
        Ok(file) => file,
        Err(err) => {
            warn!(kind = %err.kind(), "backup file rejected");
            return Err(err);
        }
    };
    restore_plan(&file, passphrase)
}

fn decrypt_plan(file: &BackupFile, passphrase: &str) -> Result<PlanPayload, RestoreError> {
    let version = file.check_structure()?;
    debug!(format_version = version.number(), "restoring plan backup");

    let key = version.derive_key(passphrase, &file.salt)?;
    let plaintext = Zeroizing::new(open(
        version.cipher(),
        &key,
        &file.iv,
        &version.associated_data(),
        &file.ciphertext,
    )?);
    drop(key);

    let payload: PlanPayload = serde_json::from_slice(&plaintext)
        .map_err(|e| RestoreError::InvalidPlanData(e.to_string()))?;

    debug!(format_version = version.number(), "restored plan backup");
    Ok(payload)
}
