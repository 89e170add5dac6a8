// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod encryption;
pub mod password_kdf;
pub mod random;

pub use encryption::{open, seal, Cipher, EncryptionError, SymmetricKey, TAG_SIZE};
pub use password_kdf::{derive_key_argon2id, derive_key_pbkdf2, Argon2Params, PasswordKdfError};
pub use random::random_bytes;
