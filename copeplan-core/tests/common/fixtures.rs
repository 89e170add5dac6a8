// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan Fixtures

use copeplan_core::{HelpMethod, PlanPayload, SelectedSkill, SupportiveAdult};

/// Passphrase used by most backup tests.
pub const PASSPHRASE: &str = "correct-horse-battery";

/// The smallest plan a patient can export.
pub fn minimal_plan() -> PlanPayload {
    let mut plan = PlanPayload::new("Sam");
    plan.selected_skills.push(SelectedSkill::new("s1"));
    plan
}

/// A plan exercising every list and optional field.
pub fn full_plan() -> PlanPayload {
    let mut plan = PlanPayload::new("Riley").with_default_crisis_resources();
    plan.add_skill(SelectedSkill::new("deep-breathing")).unwrap();
    plan.add_skill(SelectedSkill::new("music").with_fill_in("my calm playlist"))
        .unwrap();
    plan.add_supportive_adult(SupportiveAdult::new("Ms. Lopez", "555-0100").primary())
        .unwrap();
    plan.add_supportive_adult(SupportiveAdult::new("Uncle Dee", "dee@example.com"))
        .unwrap();
    plan.add_help_method(HelpMethod::new("text-first")).unwrap();
    plan.add_help_method(HelpMethod::new("custom").with_custom_text("Say \"code blue\""))
        .unwrap();
    plan
}
