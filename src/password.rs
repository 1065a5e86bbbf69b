//! Password-strength policy shared with the credential flows.
//!
//! Pure classification only; hashing and credential storage live with the
//! authentication provider.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use strum_macros::EnumIter;

const MIN_LENGTH: usize = 8;
/// Four or more identical consecutive characters is rejected.
const MAX_RUN: usize = 3;

/// Frequently breached passwords, matched case-insensitively.
static COMMON_PASSWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "password",
        "password1",
        "password123",
        "12345678",
        "123456789",
        "1234567890",
        "qwerty123",
        "qwertyuiop",
        "iloveyou",
        "admin123",
        "welcome1",
        "letmein1",
        "sunshine",
        "football",
        "baseball",
        "superman",
        "abc12345",
        "passw0rd",
        "p@ssword",
        "trustno1",
    ])
});

/// One policy rule a candidate password can violate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
    CommonPassword,
    RepeatedRun,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PasswordRule::MinLength => "must be at least 8 characters long",
            PasswordRule::Uppercase => "must contain an uppercase letter",
            PasswordRule::Lowercase => "must contain a lowercase letter",
            PasswordRule::Digit => "must contain a digit",
            PasswordRule::SpecialChar => "must contain a special character",
            PasswordRule::CommonPassword => "is too common",
            PasswordRule::RepeatedRun => "must not repeat a character four or more times in a row",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Outcome of checking one candidate password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordCheck {
    pub acceptable: bool,
    pub strength: PasswordStrength,
    pub violations: Vec<PasswordRule>,
}

/// Checks a candidate password against the policy and scores its strength.
///
/// Length and character-class rules each contribute to the point score;
/// the common-password and repeated-run rules gate the result instead,
/// capping it at weak no matter the score.
pub fn check_password(password: &str) -> PasswordCheck {
    let mut violations = Vec::new();

    let length = password.chars().count();
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if length < MIN_LENGTH {
        violations.push(PasswordRule::MinLength);
    }
    if !has_upper {
        violations.push(PasswordRule::Uppercase);
    }
    if !has_lower {
        violations.push(PasswordRule::Lowercase);
    }
    if !has_digit {
        violations.push(PasswordRule::Digit);
    }
    if !has_special {
        violations.push(PasswordRule::SpecialChar);
    }
    if COMMON_PASSWORDS.contains(password.to_lowercase().as_str()) {
        violations.push(PasswordRule::CommonPassword);
    }
    if longest_run(password) > MAX_RUN {
        violations.push(PasswordRule::RepeatedRun);
    }

    let mut score = 0u32;
    if length >= MIN_LENGTH {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }
    score += u32::from(has_upper);
    score += u32::from(has_lower);
    score += u32::from(has_digit);
    score += u32::from(has_special);

    let gated = violations
        .iter()
        .any(|v| matches!(v, PasswordRule::CommonPassword | PasswordRule::RepeatedRun));

    let strength = if gated {
        PasswordStrength::Weak
    } else {
        match score {
            0..=3 => PasswordStrength::Weak,
            4..=5 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    };

    PasswordCheck {
        acceptable: violations.is_empty(),
        strength,
        violations,
    }
}

fn longest_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in password.chars() {
        if previous == Some(c) {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}
