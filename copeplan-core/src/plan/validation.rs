// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan Validation
//!
//! Editing limits for plans built on this device. The backup codec does not
//! apply them, so a restored plan may need checking before further edits.

use std::collections::HashSet;

use thiserror::Error;

use super::{PlanPayload, MAX_FREE_TEXT_LENGTH, MAX_LIST_ITEMS, MAX_NICKNAME_LENGTH};

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    #[error("Nickname cannot be empty")]
    EmptyNickname,
    #[error("Nickname too long (max {max} characters)")]
    NicknameTooLong { max: usize },
    #[error("{list} entry {index} is missing its {field}")]
    BlankField {
        list: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("Too many {list} (max {max})")]
    TooManyItems { list: &'static str, max: usize },
    #[error("Free text too long (max {max} characters)")]
    TextTooLong { max: usize },
    #[error("Only one supportive adult can be primary")]
    MultiplePrimaryAdults,
    #[error("Duplicate {list} id: {id}")]
    DuplicateId { list: &'static str, id: String },
}

/// Checks every plan invariant, returning the first violation.
pub fn validate_plan(plan: &PlanPayload) -> Result<(), PlanValidationError> {
    validate_nickname(&plan.patient_nickname)?;

    check_count("skills", plan.selected_skills.len())?;
    check_count("supportive adults", plan.supportive_adults.len())?;
    check_count("help methods", plan.help_methods.len())?;
    check_count("crisis resources", plan.crisis_resources.len())?;

    let mut skill_ids = HashSet::new();
    for (index, skill) in plan.selected_skills.iter().enumerate() {
        check_not_blank(&skill.skill_id, "skills", index, "skill id")?;
        check_text(skill.fill_in.as_deref())?;
        if !skill_ids.insert(skill.skill_id.as_str()) {
            return Err(PlanValidationError::DuplicateId {
                list: "skills",
                id: skill.skill_id.clone(),
            });
        }
    }

    for (index, adult) in plan.supportive_adults.iter().enumerate() {
        check_not_blank(&adult.name, "supportive adults", index, "name")?;
    }
    let primaries = plan
        .supportive_adults
        .iter()
        .filter(|a| a.is_primary)
        .count();
    if primaries > 1 {
        return Err(PlanValidationError::MultiplePrimaryAdults);
    }

    let mut method_ids = HashSet::new();
    for (index, method) in plan.help_methods.iter().enumerate() {
        check_not_blank(&method.method_id, "help methods", index, "method id")?;
        check_text(method.custom_text.as_deref())?;
        if !method_ids.insert(method.method_id.as_str()) {
            return Err(PlanValidationError::DuplicateId {
                list: "help methods",
                id: method.method_id.clone(),
            });
        }
    }

    for (index, resource) in plan.crisis_resources.iter().enumerate() {
        check_not_blank(&resource.name, "crisis resources", index, "name")?;
    }

    Ok(())
}

/// Validates a patient nickname on its own.
pub fn validate_nickname(nickname: &str) -> Result<(), PlanValidationError> {
    if nickname.trim().is_empty() {
        return Err(PlanValidationError::EmptyNickname);
    }
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(PlanValidationError::NicknameTooLong {
            max: MAX_NICKNAME_LENGTH,
        });
    }
    Ok(())
}

fn check_count(list: &'static str, len: usize) -> Result<(), PlanValidationError> {
    if len > MAX_LIST_ITEMS {
        return Err(PlanValidationError::TooManyItems {
            list,
            max: MAX_LIST_ITEMS,
        });
    }
    Ok(())
}

fn check_not_blank(
    value: &str,
    list: &'static str,
    index: usize,
    field: &'static str,
) -> Result<(), PlanValidationError> {
    if value.trim().is_empty() {
        return Err(PlanValidationError::BlankField { list, index, field });
    }
    Ok(())
}

pub(super) fn check_text(text: Option<&str>) -> Result<(), PlanValidationError> {
    match text {
        Some(t) if t.chars().count() > MAX_FREE_TEXT_LENGTH => {
            Err(PlanValidationError::TextTooLong {
                max: MAX_FREE_TEXT_LENGTH,
            })
        }
        _ => Ok(()),
    }
}
