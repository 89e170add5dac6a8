// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Passphrase Strength Advice
//!
//! Uses zxcvbn for entropy-based strength estimation. Advisory only: the
//! backup codec accepts any non-empty passphrase, and callers decide whether
//! to warn, insist, or let the user continue.

use zxcvbn::Score;

/// Passphrase strength levels based on zxcvbn scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PassphraseStrength {
    /// Score 0: Too guessable (risky password)
    TooWeak,
    /// Score 1: Very guessable (protection from throttled online attacks)
    Weak,
    /// Score 2: Somewhat guessable (protection from unthrottled online attacks)
    Fair,
    /// Score 3: Safely unguessable (moderate protection from offline attacks)
    Strong,
    /// Score 4: Very unguessable (strong protection from offline attacks)
    VeryStrong,
}

impl From<Score> for PassphraseStrength {
    fn from(score: Score) -> Self {
        match score {
            Score::Zero => PassphraseStrength::TooWeak,
            Score::One => PassphraseStrength::Weak,
            Score::Two => PassphraseStrength::Fair,
            Score::Three => PassphraseStrength::Strong,
            Score::Four => PassphraseStrength::VeryStrong,
            // Handle any future additions to the Score enum
            _ => PassphraseStrength::VeryStrong,
        }
    }
}

impl PassphraseStrength {
    pub fn label(self) -> &'static str {
        match self {
            PassphraseStrength::TooWeak => "Too weak",
            PassphraseStrength::Weak => "Weak",
            PassphraseStrength::Fair => "Fair",
            PassphraseStrength::Strong => "Strong",
            PassphraseStrength::VeryStrong => "Very strong",
        }
    }
}

/// Recommended minimum passphrase length.
pub const RECOMMENDED_MIN_LENGTH: usize = 8;

/// Recommended minimum zxcvbn score (0-4 scale).
const RECOMMENDED_SCORE: Score = Score::Three;

/// Result of a passphrase strength check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseCheck {
    pub strength: PassphraseStrength,
    /// Whether the passphrase meets the recommended bar.
    pub is_recommended: bool,
    /// Suggestions for improvement (empty when none apply).
    pub feedback: String,
}

/// Estimates passphrase strength.
///
/// # Examples
/// ```
/// use copeplan_core::passphrase::check_passphrase;
///
/// assert!(!check_passphrase("password").is_recommended);
/// assert!(check_passphrase("correct-horse-battery-staple").is_recommended);
/// ```
pub fn check_passphrase(passphrase: &str) -> PassphraseCheck {
    if passphrase.chars().count() < RECOMMENDED_MIN_LENGTH {
        return PassphraseCheck {
            strength: PassphraseStrength::TooWeak,
            is_recommended: false,
            feedback: format!(
                "Use at least {} characters. A few unrelated words work well.",
                RECOMMENDED_MIN_LENGTH
            ),
        };
    }

    let estimate = zxcvbn::zxcvbn(passphrase, &[]);
    let score = estimate.score();

    PassphraseCheck {
        strength: PassphraseStrength::from(score),
        is_recommended: score >= RECOMMENDED_SCORE,
        feedback: passphrase_feedback(passphrase),
    }
}

/// Returns zxcvbn's warning and suggestions for a passphrase.
pub fn passphrase_feedback(passphrase: &str) -> String {
    let estimate = zxcvbn::zxcvbn(passphrase, &[]);

    let mut feedback_parts = Vec::new();

    if let Some(feedback) = estimate.feedback() {
        if let Some(warning) = feedback.warning() {
            feedback_parts.push(warning.to_string());
        }

        for suggestion in feedback.suggestions() {
            feedback_parts.push(suggestion.to_string());
        }
    }

    feedback_parts.join(" ")
}
