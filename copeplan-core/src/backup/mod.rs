// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan Backup Module
//!
//! Passphrase-encrypted, versioned backups of a plan for moving it between
//! devices without a server. No I/O happens here; reading and writing the
//! file is the caller's job.

mod codec;
mod envelope;
mod error;
pub mod format;

pub use codec::{export_plan, export_plan_with_version, restore_plan, restore_plan_bytes};
pub use envelope::{inspect_backup, BackupFile, BackupSummary};
pub use error::{ExportError, RestoreError, RestoreErrorType};
pub use format::{FormatVersion, KdfAlgorithm, CURRENT_FORMAT_VERSION};
