// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the plan model and its validation

mod common;

use copeplan_core::plan::{
    default_crisis_resources, MAX_FREE_TEXT_LENGTH, MAX_LIST_ITEMS, MAX_NICKNAME_LENGTH,
};
use copeplan_core::{
    HelpMethod, PlanError, PlanPayload, PlanValidationError, SelectedSkill, SupportiveAdult,
};

use common::fixtures::full_plan;

// ============================================================
// Serialization
// ============================================================

#[test]
fn test_json_uses_camel_case_and_skips_absent_options() {
    let mut plan = PlanPayload::new("Sam");
    plan.add_skill(SelectedSkill::new("s1")).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    assert_eq!(
        json,
        r#"{"patientNickname":"Sam","selectedSkills":[{"skillId":"s1"}],"supportiveAdults":[],"helpMethods":[],"crisisResources":[]}"#
    );
}

#[test]
fn test_missing_lists_default_to_empty() {
    let plan: PlanPayload = serde_json::from_str(r#"{ "patientNickname": "Sam" }"#).unwrap();
    assert!(plan.selected_skills.is_empty());
    assert!(plan.supportive_adults.is_empty());
    assert!(plan.help_methods.is_empty());
    assert!(plan.crisis_resources.is_empty());
}

#[test]
fn test_adult_contact_and_primary_default() {
    let plan: PlanPayload = serde_json::from_str(
        r#"{ "patientNickname": "Sam", "supportiveAdults": [{ "name": "Mom" }] }"#,
    )
    .unwrap();
    assert_eq!(plan.supportive_adults[0], SupportiveAdult::new("Mom", ""));
}

#[test]
fn test_missing_nickname_does_not_deserialize() {
    let result: Result<PlanPayload, _> = serde_json::from_str(r#"{ "selectedSkills": [] }"#);
    assert!(result.is_err());
}

#[test]
fn test_serialization_is_stable() {
    let plan = full_plan();
    let first = serde_json::to_vec(&plan).unwrap();
    let reparsed: PlanPayload = serde_json::from_slice(&first).unwrap();
    assert_eq!(serde_json::to_vec(&reparsed).unwrap(), first);
}

// ============================================================
// Editing
// ============================================================

#[test]
fn test_default_crisis_resources() {
    let plan = PlanPayload::new("Sam").with_default_crisis_resources();
    assert_eq!(plan.crisis_resources, default_crisis_resources());
    assert!(plan.crisis_resources.iter().any(|r| r.contact == "988"));
    assert!(plan.validate().is_ok());
}

#[test]
fn test_duplicate_skill_rejected() {
    let mut plan = PlanPayload::new("Sam");
    plan.add_skill(SelectedSkill::new("walk")).unwrap();
    let err = plan.add_skill(SelectedSkill::new("walk")).unwrap_err();
    assert!(matches!(err, PlanError::DuplicateSkill(id) if id == "walk"));
}

#[test]
fn test_remove_skill() {
    let mut plan = full_plan();
    let removed = plan.remove_skill("music").unwrap();
    assert_eq!(removed.fill_in.as_deref(), Some("my calm playlist"));
    assert!(matches!(
        plan.remove_skill("music"),
        Err(PlanError::SkillNotFound(_))
    ));
}

#[test]
fn test_new_primary_adult_demotes_previous() {
    let mut plan = PlanPayload::new("Sam");
    plan.add_supportive_adult(SupportiveAdult::new("A", "1").primary())
        .unwrap();
    plan.add_supportive_adult(SupportiveAdult::new("B", "2").primary())
        .unwrap();

    assert_eq!(plan.primary_adult().unwrap().name, "B");
    assert_eq!(plan.supportive_adults.iter().filter(|a| a.is_primary).count(), 1);
    assert!(plan.validate().is_ok());
}

#[test]
fn test_blank_adult_name_rejected() {
    let mut plan = PlanPayload::new("Sam");
    let err = plan
        .add_supportive_adult(SupportiveAdult::new("  ", "1"))
        .unwrap_err();
    assert!(matches!(
        err,
        PlanError::Invalid(PlanValidationError::BlankField { field: "name", .. })
    ));
}

#[test]
fn test_help_methods() {
    let mut plan = PlanPayload::new("Sam");
    plan.add_help_method(HelpMethod::new("call")).unwrap();
    assert!(matches!(
        plan.add_help_method(HelpMethod::new("call")),
        Err(PlanError::DuplicateHelpMethod(_))
    ));
    plan.remove_help_method("call").unwrap();
    assert!(matches!(
        plan.remove_help_method("call"),
        Err(PlanError::HelpMethodNotFound(_))
    ));
}

#[test]
fn test_list_limit_enforced_on_add() {
    let mut plan = PlanPayload::new("Sam");
    for i in 0..MAX_LIST_ITEMS {
        plan.add_skill(SelectedSkill::new(&format!("skill-{}", i)))
            .unwrap();
    }
    let err = plan.add_skill(SelectedSkill::new("one-more")).unwrap_err();
    assert!(matches!(
        err,
        PlanError::Invalid(PlanValidationError::TooManyItems { .. })
    ));
}

#[test]
fn test_set_nickname() {
    let mut plan = PlanPayload::new("Sam");
    plan.set_nickname("Samantha").unwrap();
    assert_eq!(plan.patient_nickname, "Samantha");
    assert!(plan.set_nickname("").is_err());
    assert_eq!(plan.patient_nickname, "Samantha");
}

// ============================================================
// Validation
// ============================================================

#[test]
fn test_full_plan_is_valid() {
    assert!(full_plan().validate().is_ok());
}

#[test]
fn test_nickname_rules() {
    assert_eq!(
        PlanPayload::new("").validate(),
        Err(PlanValidationError::EmptyNickname)
    );
    assert_eq!(
        PlanPayload::new(" \t").validate(),
        Err(PlanValidationError::EmptyNickname)
    );

    let at_limit = "é".repeat(MAX_NICKNAME_LENGTH);
    assert!(PlanPayload::new(&at_limit).validate().is_ok());

    let too_long = "x".repeat(MAX_NICKNAME_LENGTH + 1);
    assert_eq!(
        PlanPayload::new(&too_long).validate(),
        Err(PlanValidationError::NicknameTooLong {
            max: MAX_NICKNAME_LENGTH
        })
    );
}

#[test]
fn test_two_primary_adults_invalid() {
    let mut plan = PlanPayload::new("Sam");
    plan.supportive_adults = vec![
        SupportiveAdult::new("A", "1").primary(),
        SupportiveAdult::new("B", "2").primary(),
    ];
    assert_eq!(
        plan.validate(),
        Err(PlanValidationError::MultiplePrimaryAdults)
    );
}

#[test]
fn test_duplicate_ids_invalid() {
    let mut plan = PlanPayload::new("Sam");
    plan.selected_skills = vec![SelectedSkill::new("s1"), SelectedSkill::new("s1")];
    assert!(matches!(
        plan.validate(),
        Err(PlanValidationError::DuplicateId { list: "skills", .. })
    ));

    let mut plan = PlanPayload::new("Sam");
    plan.help_methods = vec![HelpMethod::new("m"), HelpMethod::new("m")];
    assert!(matches!(
        plan.validate(),
        Err(PlanValidationError::DuplicateId {
            list: "help methods",
            ..
        })
    ));
}

#[test]
fn test_free_text_limit() {
    let mut plan = PlanPayload::new("Sam");
    plan.selected_skills =
        vec![SelectedSkill::new("s1").with_fill_in(&"a".repeat(MAX_FREE_TEXT_LENGTH + 1))];
    assert_eq!(
        plan.validate(),
        Err(PlanValidationError::TextTooLong {
            max: MAX_FREE_TEXT_LENGTH
        })
    );
}

#[test]
fn test_blank_ids_invalid() {
    let mut plan = PlanPayload::new("Sam");
    plan.selected_skills = vec![SelectedSkill::new("ok"), SelectedSkill::new("")];
    assert_eq!(
        plan.validate(),
        Err(PlanValidationError::BlankField {
            list: "skills",
            index: 1,
            field: "skill id"
        })
    );
}
