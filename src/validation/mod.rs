//! Field validation
//!
//! Pure rule predicates, the kinds a field may declare, and the phone
//! number formatter applied while typing.

mod phone;
mod rules;

pub use phone::{format_phone, pop_phone_digit};
pub use rules::{FileSelection, ValidationKind};

use chrono::NaiveDate;

/// Input handed to a rule: either a text value or a file selection
#[derive(Debug, Clone, Copy)]
pub enum RuleInput<'a> {
    Text(&'a str),
    File(Option<&'a FileSelection>),
}

/// Outcome of running every declared kind against one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    /// Message of the first failing kind
    pub message: Option<&'static str>,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message: Some(message),
        }
    }
}

/// Run `kinds` in declaration order, stopping at the first failure.
///
/// A field that declares no kinds is always valid.
pub fn evaluate(kinds: &[ValidationKind], input: RuleInput<'_>, today: NaiveDate) -> Verdict {
    for kind in kinds {
        if !kind.check(input, today) {
            return Verdict::invalid(kind.message());
        }
    }
    Verdict::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_no_kinds_is_valid() {
        let verdict = evaluate(&[], RuleInput::Text(""), today());
        assert_eq!(verdict, Verdict::valid());
    }

    #[test]
    fn test_first_failing_kind_wins() {
        let kinds = ValidationKind::parse_list("required,email");
        let verdict = evaluate(&kinds, RuleInput::Text(""), today());
        assert_eq!(verdict.message, Some("This field is required"));

        let verdict = evaluate(&kinds, RuleInput::Text("nope"), today());
        assert_eq!(verdict.message, Some("Please enter a valid email address"));
    }

    #[test]
    fn test_all_kinds_pass() {
        let kinds = ValidationKind::parse_list("required,name");
        let verdict = evaluate(&kinds, RuleInput::Text("Ada"), today());
        assert!(verdict.is_valid);
        assert!(verdict.message.is_none());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let kinds = ValidationKind::parse_list("required,zipcode");
        let verdict = evaluate(&kinds, RuleInput::Text("12345"), today());
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, Some("Invalid value"));
    }
}
