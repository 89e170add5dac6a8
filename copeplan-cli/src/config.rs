//! CLI Configuration

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use copeplan_core::PlanPayload;

/// CLI configuration.
#[derive(Clone)]
pub struct CliConfig {
    /// Data directory for the local plan.
    pub data_dir: PathBuf,
    /// Backup passphrase supplied through the environment, if any.
    pub passphrase: Option<String>,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("data_dir", &self.data_dir)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CliConfig {
    /// Returns the local plan file path.
    pub fn plan_path(&self) -> PathBuf {
        self.data_dir.join("plan.json")
    }

    /// Returns true if a plan exists on this device.
    pub fn is_initialized(&self) -> bool {
        self.plan_path().exists()
    }

    /// Loads the local plan.
    pub fn load_plan(&self) -> Result<PlanPayload> {
        if !self.is_initialized() {
            bail!("No plan found. Create one with: copeplan init <nickname>");
        }
        let bytes = fs::read(self.plan_path())
            .with_context(|| format!("Failed to read {:?}", self.plan_path()))?;
        let plan: PlanPayload =
            serde_json::from_slice(&bytes).context("Local plan file is not readable")?;
        Ok(plan)
    }

    /// Saves the plan, replacing the file in one rename.
    pub fn save_plan(&self, plan: &PlanPayload) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {:?}", self.data_dir))?;

        let json = serde_json::to_vec_pretty(plan)?;
        let tmp_path = self.data_dir.join("plan.json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, self.plan_path())?;
        Ok(())
    }
}
