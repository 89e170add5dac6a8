// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Password-Based Key Derivation
//!
//! Argon2id for current backups, PBKDF2-HMAC-SHA256 for format version 1.
//! Parameters are owned by the backup format version that uses them, so a
//! stronger default never changes how an old file is read.

use ring::pbkdf2;
use std::num::NonZeroU32;
use zeroize::Zeroize;

use super::SymmetricKey;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB.
    pub m_cost: u32,
    /// Time cost (iterations).
    pub t_cost: u32,
    /// Parallelism.
    pub p_cost: u32,
}

impl Argon2Params {
    /// m=64MB, t=3, p=4 (OWASP recommended).
    pub const OWASP: Argon2Params = Argon2Params {
        m_cost: 65536,
        t_cost: 3,
        p_cost: 4,
    };
}

/// Derives a 32-byte symmetric key from a password using Argon2id.
pub fn derive_key_argon2id(
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
) -> Result<SymmetricKey, PasswordKdfError> {
    let params = argon2::Params::new(params.m_cost, params.t_cost, params.p_cost, Some(32))
        .map_err(|e| PasswordKdfError::DerivationFailed(e.to_string()))?;

    let argon2 = argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut key_bytes = [0u8; 32];
    argon2
        .hash_password_into(password, salt, &mut key_bytes)
        .map_err(|e| PasswordKdfError::DerivationFailed(e.to_string()))?;

    let key = SymmetricKey::from_bytes(key_bytes);
    key_bytes.zeroize();
    Ok(key)
}

/// Derives a 32-byte symmetric key from a password using PBKDF2-HMAC-SHA256.
pub fn derive_key_pbkdf2(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<SymmetricKey, PasswordKdfError> {
    let mut key_bytes = [0u8; 32];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        NonZeroU32::new(iterations).ok_or(PasswordKdfError::DerivationFailed(
            "iterations must be non-zero".into(),
        ))?,
        salt,
        password,
        &mut key_bytes,
    );

    let key = SymmetricKey::from_bytes(key_bytes);
    key_bytes.zeroize();
    Ok(key)
}

/// Password KDF error types.
#[derive(Debug, thiserror::Error)]
pub enum PasswordKdfError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}
