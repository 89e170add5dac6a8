// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Secure random bytes from the OS CSPRNG.

use ring::rand::{SecureRandom, SystemRandom};

use super::EncryptionError;

/// Returns `len` bytes from the system RNG.
///
/// Every call draws fresh bytes; salts and nonces are never reused.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, EncryptionError> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| EncryptionError::RandomUnavailable)?;
    Ok(bytes)
}
