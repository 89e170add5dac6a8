//! Init Command
//!
//! Creates a new plan on this device.

use anyhow::{bail, Result};
use copeplan_core::plan::validate_nickname;
use copeplan_core::PlanPayload;

use crate::config::CliConfig;
use crate::display;

/// Creates a new plan with the default crisis resources.
pub fn run(nickname: &str, config: &CliConfig) -> Result<()> {
    if config.is_initialized() {
        bail!(
            "A plan already exists in {:?}. Use --data-dir to specify a different location.",
            config.data_dir
        );
    }
    validate_nickname(nickname)?;

    let plan = PlanPayload::new(nickname).with_default_crisis_resources();
    config.save_plan(&plan)?;

    display::success(&format!("Plan created for {}", nickname));
    println!();
    println!("  Data dir: {:?}", config.data_dir);
    println!();
    display::info("Add a coping skill with: copeplan skill add <id>");

    Ok(())
}
