// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Strategies produce plans that pass validation.

use copeplan_core::{CrisisResource, HelpMethod, PlanPayload, SelectedSkill, SupportiveAdult};
use proptest::prelude::*;

/// Strategy for nicknames (non-blank, within length limits).
pub fn nickname_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

/// Strategy for catalog ids.
pub fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}

/// Strategy for free text, including non-ASCII.
pub fn free_text_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// Strategy for non-empty passphrases.
pub fn passphrase_strategy() -> impl Strategy<Value = String> {
    "\\PC{1,40}"
}

pub fn skill_strategy() -> impl Strategy<Value = SelectedSkill> {
    (id_strategy(), proptest::option::of(free_text_strategy()))
        .prop_map(|(skill_id, fill_in)| SelectedSkill { skill_id, fill_in })
}

pub fn adult_strategy() -> impl Strategy<Value = SupportiveAdult> {
    ("[A-Z][a-z]{1,12}", "[0-9]{3}-[0-9]{4}").prop_map(|(name, contact)| SupportiveAdult {
        name,
        contact,
        is_primary: false,
    })
}

pub fn help_method_strategy() -> impl Strategy<Value = HelpMethod> {
    (id_strategy(), proptest::option::of(free_text_strategy()))
        .prop_map(|(method_id, custom_text)| HelpMethod {
            method_id,
            custom_text,
        })
}

pub fn crisis_resource_strategy() -> impl Strategy<Value = CrisisResource> {
    ("[A-Z][A-Za-z ]{2,20}", "[0-9]{3,6}").prop_map(|(name, contact)| CrisisResource {
        name,
        contact,
        description: None,
    })
}

/// Strategy for valid plans: unique ids, at most one primary adult.
pub fn plan_strategy() -> impl Strategy<Value = PlanPayload> {
    (
        nickname_strategy(),
        prop::collection::vec(skill_strategy(), 0..5),
        prop::collection::vec(adult_strategy(), 0..4),
        any::<prop::sample::Index>(),
        prop::collection::vec(help_method_strategy(), 0..4),
        prop::collection::vec(crisis_resource_strategy(), 0..3),
    )
        .prop_map(
            |(nickname, skills, mut adults, primary, methods, crisis_resources)| {
                let mut plan = PlanPayload::new(&nickname);
                for skill in skills {
                    if !plan.selected_skills.iter().any(|s| s.skill_id == skill.skill_id) {
                        plan.selected_skills.push(skill);
                    }
                }
                if !adults.is_empty() {
                    let i = primary.index(adults.len());
                    adults[i].is_primary = true;
                }
                plan.supportive_adults = adults;
                for method in methods {
                    if !plan.help_methods.iter().any(|m| m.method_id == method.method_id) {
                        plan.help_methods.push(method);
                    }
                }
                plan.crisis_resources = crisis_resources;
                plan
            },
        )
}
