//! Copeplan Core Library
//!
//! Local-first well-being action plans: the plan data model and
//! passphrase-encrypted backups that move a plan between devices.

pub mod backup;
pub mod crypto;
pub mod passphrase;
pub mod plan;

pub use backup::{
    export_plan, inspect_backup, restore_plan, restore_plan_bytes, BackupFile, BackupSummary,
    ExportError, FormatVersion, RestoreError, RestoreErrorType,
};
pub use crypto::SymmetricKey;
pub use passphrase::{check_passphrase, PassphraseCheck, PassphraseStrength};
pub use plan::{
    CrisisResource, HelpMethod, PlanError, PlanPayload, PlanValidationError, SelectedSkill,
    SupportiveAdult,
};
