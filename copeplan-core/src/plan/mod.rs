// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Action Plan Module
//!
//! The patient's coping plan: chosen skills, supportive adults, help methods
//! and crisis resources. Serialized as camelCase JSON; field order follows the
//! struct declarations, so serialization is canonical.

mod items;
mod validation;

pub use items::{
    default_crisis_resources, CrisisResource, HelpMethod, SelectedSkill, SupportiveAdult,
};
pub use validation::{validate_nickname, validate_plan, PlanValidationError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum nickname length in characters.
pub const MAX_NICKNAME_LENGTH: usize = 64;

/// Maximum entries in any one plan list.
pub const MAX_LIST_ITEMS: usize = 50;

/// Maximum length of a fill-in or custom text, in characters.
pub const MAX_FREE_TEXT_LENGTH: usize = 500;

/// Plan editing errors.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Skill already in plan: {0}")]
    DuplicateSkill(String),
    #[error("Help method already in plan: {0}")]
    DuplicateHelpMethod(String),
    #[error("Skill not found: {0}")]
    SkillNotFound(String),
    #[error("Supportive adult not found: {0}")]
    AdultNotFound(String),
    #[error("Help method not found: {0}")]
    HelpMethodNotFound(String),
    #[error("Invalid plan: {0}")]
    Invalid(#[from] PlanValidationError),
}

/// A patient's complete action plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub patient_nickname: String,
    #[serde(default)]
    pub selected_skills: Vec<SelectedSkill>,
    #[serde(default)]
    pub supportive_adults: Vec<SupportiveAdult>,
    #[serde(default)]
    pub help_methods: Vec<HelpMethod>,
    #[serde(default)]
    pub crisis_resources: Vec<CrisisResource>,
}

impl PlanPayload {
    /// Creates an empty plan for the given nickname.
    pub fn new(nickname: &str) -> Self {
        PlanPayload {
            patient_nickname: nickname.to_string(),
            selected_skills: Vec::new(),
            supportive_adults: Vec::new(),
            help_methods: Vec::new(),
            crisis_resources: Vec::new(),
        }
    }

    /// Replaces the crisis resources with the built-in defaults.
    pub fn with_default_crisis_resources(mut self) -> Self {
        self.crisis_resources = default_crisis_resources();
        self
    }

    /// Sets the nickname after validating it.
    pub fn set_nickname(&mut self, nickname: &str) -> Result<(), PlanError> {
        validate_nickname(nickname)?;
        self.patient_nickname = nickname.to_string();
        Ok(())
    }

    /// Adds a skill. Skill ids are unique within a plan.
    pub fn add_skill(&mut self, skill: SelectedSkill) -> Result<(), PlanError> {
        if self.selected_skills.len() >= MAX_LIST_ITEMS {
            return Err(PlanValidationError::TooManyItems {
                list: "skills",
                max: MAX_LIST_ITEMS,
            }
            .into());
        }
        if skill.skill_id.trim().is_empty() {
            return Err(PlanValidationError::BlankField {
                list: "skills",
                index: self.selected_skills.len(),
                field: "skill id",
            }
            .into());
        }
        validation::check_text(skill.fill_in.as_deref())?;
        if self
            .selected_skills
            .iter()
            .any(|s| s.skill_id == skill.skill_id)
        {
            return Err(PlanError::DuplicateSkill(skill.skill_id));
        }
        self.selected_skills.push(skill);
        Ok(())
    }

    /// Removes a skill by id.
    pub fn remove_skill(&mut self, skill_id: &str) -> Result<SelectedSkill, PlanError> {
        let index = self
            .selected_skills
            .iter()
            .position(|s| s.skill_id == skill_id)
            .ok_or_else(|| PlanError::SkillNotFound(skill_id.to_string()))?;
        Ok(self.selected_skills.remove(index))
    }

    /// Adds a supportive adult.
    ///
    /// Adding a primary adult demotes whoever was primary before.
    pub fn add_supportive_adult(&mut self, adult: SupportiveAdult) -> Result<(), PlanError> {
        if self.supportive_adults.len() >= MAX_LIST_ITEMS {
            return Err(PlanValidationError::TooManyItems {
                list: "supportive adults",
                max: MAX_LIST_ITEMS,
            }
            .into());
        }
        if adult.name.trim().is_empty() {
            return Err(PlanValidationError::BlankField {
                list: "supportive adults",
                index: self.supportive_adults.len(),
                field: "name",
            }
            .into());
        }
        if adult.is_primary {
            for existing in &mut self.supportive_adults {
                existing.is_primary = false;
            }
        }
        self.supportive_adults.push(adult);
        Ok(())
    }

    /// Removes the first supportive adult with the given name.
    pub fn remove_supportive_adult(&mut self, name: &str) -> Result<SupportiveAdult, PlanError> {
        let index = self
            .supportive_adults
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| PlanError::AdultNotFound(name.to_string()))?;
        Ok(self.supportive_adults.remove(index))
    }

    /// Returns the primary supportive adult, if one is set.
    pub fn primary_adult(&self) -> Option<&SupportiveAdult> {
        self.supportive_adults.iter().find(|a| a.is_primary)
    }

    /// Adds a help method. Method ids are unique within a plan.
    pub fn add_help_method(&mut self, method: HelpMethod) -> Result<(), PlanError> {
        if self.help_methods.len() >= MAX_LIST_ITEMS {
            return Err(PlanValidationError::TooManyItems {
                list: "help methods",
                max: MAX_LIST_ITEMS,
            }
            .into());
        }
        if method.method_id.trim().is_empty() {
            return Err(PlanValidationError::BlankField {
                list: "help methods",
                index: self.help_methods.len(),
                field: "method id",
            }
            .into());
        }
        validation::check_text(method.custom_text.as_deref())?;
        if self
            .help_methods
            .iter()
            .any(|m| m.method_id == method.method_id)
        {
            return Err(PlanError::DuplicateHelpMethod(method.method_id));
        }
        self.help_methods.push(method);
        Ok(())
    }

    /// Removes a help method by id.
    pub fn remove_help_method(&mut self, method_id: &str) -> Result<HelpMethod, PlanError> {
        let index = self
            .help_methods
            .iter()
            .position(|m| m.method_id == method_id)
            .ok_or_else(|| PlanError::HelpMethodNotFound(method_id.to_string()))?;
        Ok(self.help_methods.remove(index))
    }

    /// Checks all plan invariants.
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        validate_plan(self)
    }
}
