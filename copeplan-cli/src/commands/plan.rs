//! Plan Commands
//!
//! Show and edit the local plan.

use anyhow::Result;
use copeplan_core::{HelpMethod, SelectedSkill, SupportiveAdult};

use crate::config::CliConfig;
use crate::display;

/// Shows the plan.
pub fn show(config: &CliConfig) -> Result<()> {
    let plan = config.load_plan()?;
    display::plan(&plan);
    Ok(())
}

/// Adds a coping skill.
pub fn add_skill(config: &CliConfig, id: &str, fill_in: Option<&str>) -> Result<()> {
    let mut plan = config.load_plan()?;

    let mut skill = SelectedSkill::new(id);
    if let Some(text) = fill_in {
        skill = skill.with_fill_in(text);
    }
    plan.add_skill(skill)?;
    config.save_plan(&plan)?;

    display::success(&format!("Added skill: {}", id));
    Ok(())
}

/// Removes a coping skill.
pub fn remove_skill(config: &CliConfig, id: &str) -> Result<()> {
    let mut plan = config.load_plan()?;
    plan.remove_skill(id)?;
    config.save_plan(&plan)?;

    display::success(&format!("Removed skill: {}", id));
    Ok(())
}

/// Adds a supportive adult.
pub fn add_adult(config: &CliConfig, name: &str, contact: &str, primary: bool) -> Result<()> {
    let mut plan = config.load_plan()?;

    let mut adult = SupportiveAdult::new(name, contact);
    if primary {
        adult = adult.primary();
    }
    plan.add_supportive_adult(adult)?;
    config.save_plan(&plan)?;

    if primary {
        display::success(&format!("Added {} as your first contact", name));
    } else {
        display::success(&format!("Added {}", name));
    }
    Ok(())
}

/// Removes a supportive adult.
pub fn remove_adult(config: &CliConfig, name: &str) -> Result<()> {
    let mut plan = config.load_plan()?;
    let removed = plan.remove_supportive_adult(name)?;
    config.save_plan(&plan)?;

    display::success(&format!("Removed {}", removed.name));
    if removed.is_primary && !plan.supportive_adults.is_empty() {
        display::info("Pick a new first contact with: copeplan adult add <name> --primary");
    }
    Ok(())
}

/// Adds a help method.
pub fn add_method(config: &CliConfig, id: &str, text: Option<&str>) -> Result<()> {
    let mut plan = config.load_plan()?;

    let mut method = HelpMethod::new(id);
    if let Some(text) = text {
        method = method.with_custom_text(text);
    }
    plan.add_help_method(method)?;
    config.save_plan(&plan)?;

    display::success(&format!("Added help method: {}", id));
    Ok(())
}

/// Removes a help method.
pub fn remove_method(config: &CliConfig, id: &str) -> Result<()> {
    let mut plan = config.load_plan()?;
    plan.remove_help_method(id)?;
    config.save_plan(&plan)?;

    display::success(&format!("Removed help method: {}", id));
    Ok(())
}
