//! Backup Commands
//!
//! Export, import, and inspect encrypted plan backups.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use copeplan_core::{
    check_passphrase, export_plan, inspect_backup, restore_plan, BackupFile, PlanPayload,
    RestoreError, RestoreErrorType,
};
use dialoguer::{Confirm, Password};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::config::CliConfig;
use crate::display;

/// Passphrase attempts allowed per interactive import.
const MAX_ATTEMPTS: usize = 3;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Turns a restore failure into the message shown to the user.
fn restore_failure(err: RestoreError) -> anyhow::Error {
    debug!(error = %err, "restore failed");
    let kind = err.kind();
    anyhow!("{} [{}]", kind.user_message(), kind)
}

fn prompt_new_passphrase() -> Result<String> {
    let passphrase = Password::new()
        .with_prompt("Backup passphrase")
        .with_confirmation("Confirm passphrase", "Passphrases didn't match")
        .interact()?;

    let check = check_passphrase(&passphrase);
    if !check.is_recommended {
        display::warning(&format!(
            "Passphrase strength: {}. {}",
            check.strength.label(),
            check.feedback
        ));
        let proceed = Confirm::new()
            .with_prompt("Use it anyway?")
            .default(false)
            .interact()?;
        if !proceed {
            bail!("Export cancelled");
        }
    }
    Ok(passphrase)
}

/// Exports the plan to an encrypted backup file.
pub fn export(config: &CliConfig, output: &Path) -> Result<()> {
    let plan = config.load_plan()?;

    let passphrase = match &config.passphrase {
        Some(passphrase) => {
            let check = check_passphrase(passphrase);
            if !check.is_recommended {
                display::warning(&format!(
                    "Passphrase strength: {}. {}",
                    check.strength.label(),
                    check.feedback
                ));
            }
            passphrase.clone()
        }
        None => prompt_new_passphrase()?,
    };

    let pb = spinner("Encrypting plan...");
    let result = export_plan(&plan, &passphrase);
    pb.finish_and_clear();
    let backup = result?;

    fs::write(output, backup.to_json_pretty()?)
        .with_context(|| format!("Failed to write {:?}", output))?;

    display::success(&format!("Backup written to {:?}", output));
    println!("  Fingerprint: {}", backup.fingerprint());
    display::info("Keep your passphrase safe. The backup cannot be opened without it.");

    Ok(())
}

/// Restores the plan from an encrypted backup file.
pub fn import(config: &CliConfig, input: &Path, force: bool) -> Result<()> {
    if config.is_initialized() && !force {
        bail!("A plan already exists on this device. Use --force to replace it.");
    }

    let bytes = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    let file = BackupFile::from_slice(&bytes).map_err(restore_failure)?;

    let plan = match &config.passphrase {
        Some(passphrase) => decrypt(&file, passphrase).map_err(restore_failure)?,
        None => decrypt_interactive(&file)?,
    };

    config.save_plan(&plan)?;
    display::success(&format!("Restored {}'s plan", plan.patient_nickname));
    if let Err(err) = plan.validate() {
        display::warning(&format!(
            "The restored plan is outside this device's limits ({}). Some edits may be refused.",
            err
        ));
    }
    Ok(())
}

fn decrypt(file: &BackupFile, passphrase: &str) -> Result<PlanPayload, RestoreError> {
    let pb = spinner("Decrypting backup...");
    let result = restore_plan(file, passphrase);
    pb.finish_and_clear();
    result
}

fn decrypt_interactive(file: &BackupFile) -> Result<PlanPayload> {
    let mut attempt = 1;
    loop {
        let passphrase = Password::new()
            .with_prompt("Backup passphrase")
            .allow_empty_password(true)
            .interact()?;

        match decrypt(file, &passphrase) {
            Ok(plan) => return Ok(plan),
            Err(err)
                if err.kind() == RestoreErrorType::WrongPassphrase && attempt < MAX_ATTEMPTS =>
            {
                display::warning(RestoreErrorType::WrongPassphrase.user_message());
                attempt += 1;
            }
            Err(err) => return Err(restore_failure(err)),
        }
    }
}

/// Prints backup details without a passphrase.
pub fn inspect(input: &Path) -> Result<()> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    let summary = inspect_backup(&bytes).map_err(restore_failure)?;

    display::success(&format!("{:?} is a Copeplan backup", input));
    display::backup_summary(&summary);
    Ok(())
}
