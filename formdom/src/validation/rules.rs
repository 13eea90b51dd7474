//! Validation rules: pure predicates with fixed messages.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::field::{FieldKind, FieldState};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn expiry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").expect("expiry pattern is valid"))
}

fn cvv_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3,4}$").expect("cvv pattern is valid"))
}

/// Shape check for an email address: something before the `@`, something
/// after it, and a dot somewhere in the domain part.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Card number check: after stripping spaces, 13 to 19 digits that satisfy
/// the Luhn checksum.
pub fn is_valid_card_number(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() < 13 || cleaned.len() > 19 {
        return false;
    }
    passes_luhn(&cleaned)
}

/// Luhn checksum: double every second digit counting from the right,
/// subtract 9 from doubled values above 9, and require the sum to be a
/// multiple of ten. Non-digit input fails.
fn passes_luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for ch in digits.chars().rev() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }
    sum % 10 == 0
}

/// Expiry check: `MM/YY` with a real month, not earlier than `today`'s
/// (year mod 100, month).
pub fn is_valid_expiry(value: &str, today: NaiveDate) -> bool {
    if !expiry_regex().is_match(value) {
        return false;
    }
    let (month, year) = match (value[..2].parse::<u32>(), value[3..5].parse::<u32>()) {
        (Ok(m), Ok(y)) => (m, y),
        _ => return false,
    };
    let current_year = today.year().rem_euclid(100) as u32;
    let current_month = today.month();
    !(year < current_year || (year == current_year && month < current_month))
}

/// CVV check: exactly 3 or 4 ASCII digits.
pub fn is_valid_cvv(value: &str) -> bool {
    cvv_regex().is_match(value)
}

/// A single validation rule with its fixed, human-readable message.
///
/// Rules are evaluated in the order they were attached to a field; the
/// first failure wins and its message becomes the field's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required { message: String },
    /// At least `min` characters.
    MinLength { min: usize, message: String },
    Email { message: String },
    /// Integer within `min..=max`; unparseable input fails.
    IntRange { min: i64, max: i64, message: String },
    /// Checkbox must be checked.
    Checked { message: String },
    /// Select must have a chosen value.
    Selected { message: String },
    CardNumber { message: String },
    ExpiryDate { message: String },
    Cvv { message: String },
    /// Value must equal the named peer field's value. Re-evaluated live on
    /// every keystroke of the field carrying it.
    MatchesField { other: String, message: String },
}

impl Rule {
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::Email { message }
            | Rule::IntRange { message, .. }
            | Rule::Checked { message }
            | Rule::Selected { message }
            | Rule::CardNumber { message }
            | Rule::ExpiryDate { message }
            | Rule::Cvv { message }
            | Rule::MatchesField { message, .. } => message,
        }
    }

    /// Whether this rule is re-checked on every keystroke of its field.
    pub fn is_live(&self) -> bool {
        matches!(self, Rule::MatchesField { .. })
    }

    /// Evaluate the rule against a field. `peers` is the owning form's full
    /// field list (for peer lookups); `today` feeds date-sensitive rules.
    pub fn check(
        &self,
        field: &FieldState,
        peers: &[FieldState],
        today: NaiveDate,
    ) -> Result<(), String> {
        let ok = match self {
            Rule::Required { .. } => !field.value.trim().is_empty(),
            Rule::MinLength { min, .. } => field.value.chars().count() >= *min,
            Rule::Email { .. } => is_valid_email(&field.value),
            Rule::IntRange { min, max, .. } => field
                .value
                .trim()
                .parse::<i64>()
                .map(|v| v >= *min && v <= *max)
                .unwrap_or(false),
            Rule::Checked { .. } => field.checked,
            Rule::Selected { .. } => !field.value.is_empty(),
            Rule::CardNumber { .. } => is_valid_card_number(&field.value),
            Rule::ExpiryDate { .. } => is_valid_expiry(&field.value, today),
            Rule::Cvv { .. } => is_valid_cvv(&field.value),
            Rule::MatchesField { other, .. } => peers
                .iter()
                .find(|peer| peer.id == *other)
                .is_some_and(|peer| peer.value == field.value),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message().to_string())
        }
    }
}

/// Checkbox and select fields answer `Required` through their own shapes;
/// everything else goes through the trimmed value. Used by builders to pick
/// the right required-rule variant for a kind.
pub fn required_rule(kind: FieldKind, message: impl Into<String>) -> Rule {
    let message = message.into();
    match kind {
        FieldKind::Checkbox => Rule::Checked { message },
        FieldKind::Select => Rule::Selected { message },
        _ => Rule::Required { message },
    }
}
