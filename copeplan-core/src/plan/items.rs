// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan Items
//!
//! The entries a patient picks when building a plan.

use serde::{Deserialize, Serialize};

/// A coping skill chosen from the catalog, optionally personalised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSkill {
    /// Catalog identifier of the skill.
    pub skill_id: String,
    /// Free-text fill-in (e.g. "listen to ___").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_in: Option<String>,
}

impl SelectedSkill {
    pub fn new(skill_id: &str) -> Self {
        SelectedSkill {
            skill_id: skill_id.to_string(),
            fill_in: None,
        }
    }

    pub fn with_fill_in(mut self, fill_in: &str) -> Self {
        self.fill_in = Some(fill_in.to_string());
        self
    }
}

/// A trusted adult the patient can reach out to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportiveAdult {
    pub name: String,
    /// Phone number, email, or any free-form way to reach them.
    #[serde(default)]
    pub contact: String,
    /// The first person to contact.
    #[serde(default)]
    pub is_primary: bool,
}

impl SupportiveAdult {
    pub fn new(name: &str, contact: &str) -> Self {
        SupportiveAdult {
            name: name.to_string(),
            contact: contact.to_string(),
            is_primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

/// A way the patient prefers to ask for help.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpMethod {
    /// Catalog identifier of the help method.
    pub method_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl HelpMethod {
    pub fn new(method_id: &str) -> Self {
        HelpMethod {
            method_id: method_id.to_string(),
            custom_text: None,
        }
    }

    pub fn with_custom_text(mut self, text: &str) -> Self {
        self.custom_text = Some(text.to_string());
        self
    }
}

/// A static crisis line shown on every plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisResource {
    pub name: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CrisisResource {
    pub fn new(name: &str, contact: &str) -> Self {
        CrisisResource {
            name: name.to_string(),
            contact: contact.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Crisis resources included in every new plan.
pub fn default_crisis_resources() -> Vec<CrisisResource> {
    vec![
        CrisisResource::new("988 Suicide & Crisis Lifeline", "988")
            .with_description("Call or text 988, available 24/7"),
        CrisisResource::new("Crisis Text Line", "741741")
            .with_description("Text HOME to 741741"),
        CrisisResource::new("Emergency Services", "911")
            .with_description("If you are in immediate danger"),
    ]
}
