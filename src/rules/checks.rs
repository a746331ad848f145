//! Field-level check implementations.
//!
//! Each check validates one part of a pseudo-commit against a rule's
//! condition and value, returning `(is_valid, error_message)`. Messages
//! follow the commitlint phrasing (`"type must be one of [feat, fix]"`).

use crate::config::{Condition, RuleValue};
use crate::rules::Field;
use regex::Regex;
use std::sync::LazyLock;

/// Outcome of evaluating one check: validity plus the message to show when
/// invalid.
pub type RuleOutcome = (bool, String);

static RE_CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());
static RE_KEBAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
static RE_SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());
static RE_PASCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());
static RE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\S*(?:\s+|$))+$").unwrap());

/// Whether `input` conforms to a named case style.
fn matches_case(input: &str, case: &str) -> bool {
    match case {
        "lower-case" | "lowercase" => input == input.to_lowercase(),
        "upper-case" | "uppercase" => input == input.to_uppercase(),
        "camel-case" => RE_CAMEL.is_match(input),
        "kebab-case" => RE_KEBAB.is_match(input),
        "snake-case" => RE_SNAKE.is_match(input),
        "pascal-case" => RE_PASCAL.is_match(input),
        "start-case" => RE_START.is_match(input),
        "sentence-case" => input
            .chars()
            .find(|c| c.is_alphabetic())
            .is_none_or(|c| c.is_uppercase()),
        other => {
            tracing::debug!("Unknown case style in rule value: {}", other);
            false
        }
    }
}

fn negate(valid: bool, condition: Condition) -> bool {
    match condition {
        Condition::Always => valid,
        Condition::Never => !valid,
    }
}

fn verb(condition: Condition) -> &'static str {
    match condition {
        Condition::Always => "must",
        Condition::Never => "must not",
    }
}

/// `<field>-enum`: input must (not) be one of the listed values.
pub fn check_enum(
    input: &str,
    field: Field,
    condition: Condition,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let Some(allowed) = value.and_then(RuleValue::as_list) else {
        return (true, String::new());
    };
    if input.is_empty() || allowed.is_empty() {
        return (true, String::new());
    }
    let found = allowed.iter().any(|v| v == input);
    (
        negate(found, condition),
        format!(
            "{} {} be one of [{}]",
            field.as_str(),
            verb(condition),
            allowed.join(", ")
        ),
    )
}

/// `<field>-case`: input must (not) match one of the named case styles.
pub fn check_case(
    input: &str,
    field: Field,
    condition: Condition,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    if input.is_empty() {
        return (true, String::new());
    }
    let cases: Vec<&str> = match value {
        Some(RuleValue::String(s)) => vec![s.as_str()],
        Some(RuleValue::List(items)) => items.iter().map(String::as_str).collect(),
        _ => return (true, String::new()),
    };
    let matched = cases.iter().any(|case| matches_case(input, case));
    (
        negate(matched, condition),
        format!(
            "{} {} be {}",
            field.as_str(),
            verb(condition),
            cases.join(" or ")
        ),
    )
}

/// `<field>-empty`: input must (not) be empty.
pub fn check_empty(
    input: &str,
    field: Field,
    condition: Condition,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    let empty = input.is_empty();
    let message = match condition {
        Condition::Always => format!("{} must be empty", field.as_str()),
        Condition::Never => format!("{} may not be empty", field.as_str()),
    };
    (negate(empty, condition), message)
}

/// `<field>-full-stop`: input must (not) end with the given character.
pub fn check_full_stop(
    input: &str,
    field: Field,
    condition: Condition,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let stop = value.and_then(RuleValue::as_str).unwrap_or(".");
    if input.is_empty() {
        return (true, String::new());
    }
    let ends = input.ends_with(stop);
    (
        negate(ends, condition),
        format!("{} {} end with '{}'", field.as_str(), verb(condition), stop),
    )
}

/// `<field>-max-length`: input must be at most `value` characters.
/// The condition is ignored, as commitlint does for length rules.
pub fn check_max_length(
    input: &str,
    field: Field,
    _condition: Condition,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let Some(max) = value.and_then(RuleValue::as_number) else {
        return (true, String::new());
    };
    let length = input.chars().count() as u64;
    (
        length <= max,
        format!(
            "{} must not be longer than {} characters, current length is {}",
            field.as_str(),
            max,
            length
        ),
    )
}

/// `<field>-min-length`: input must be at least `value` characters.
pub fn check_min_length(
    input: &str,
    field: Field,
    _condition: Condition,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let Some(min) = value.and_then(RuleValue::as_number) else {
        return (true, String::new());
    };
    let length = input.chars().count() as u64;
    (
        length >= min,
        format!(
            "{} must not be shorter than {} characters, current length is {}",
            field.as_str(),
            min,
            length
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_accepts_listed_value() {
        let value = RuleValue::List(vec!["feat".into(), "fix".into()]);
        let (valid, _) = check_enum("feat", Field::Type, Condition::Always, Some(&value));
        assert!(valid);
    }

    #[test]
    fn enum_rejects_unlisted_value_with_message() {
        let value = RuleValue::List(vec!["feat".into(), "fix".into()]);
        let (valid, message) = check_enum("docs", Field::Type, Condition::Always, Some(&value));
        assert!(!valid);
        assert_eq!(message, "type must be one of [feat, fix]");
    }

    #[test]
    fn enum_negates_under_never() {
        let value = RuleValue::List(vec!["wip".into()]);
        let (valid, message) = check_enum("wip", Field::Type, Condition::Never, Some(&value));
        assert!(!valid);
        assert!(message.contains("must not be one of"));
    }

    #[test]
    fn enum_passes_empty_input() {
        let value = RuleValue::List(vec!["feat".into()]);
        let (valid, _) = check_enum("", Field::Type, Condition::Always, Some(&value));
        assert!(valid);
    }

    #[test]
    fn enum_passes_without_value() {
        let (valid, _) = check_enum("anything", Field::Type, Condition::Always, None);
        assert!(valid);
    }

    #[test]
    fn case_lower_case() {
        let value = RuleValue::String("lower-case".into());
        assert!(check_case("api", Field::Scope, Condition::Always, Some(&value)).0);
        assert!(!check_case("Api", Field::Scope, Condition::Always, Some(&value)).0);
    }

    #[test]
    fn case_accepts_any_of_list() {
        let value = RuleValue::List(vec!["kebab-case".into(), "snake-case".into()]);
        assert!(check_case("my-scope", Field::Scope, Condition::Always, Some(&value)).0);
        assert!(check_case("my_scope", Field::Scope, Condition::Always, Some(&value)).0);
        assert!(!check_case("MyScope", Field::Scope, Condition::Always, Some(&value)).0);
    }

    #[test]
    fn case_styles_match_expected_shapes() {
        assert!(matches_case("myCamelCase", "camel-case"));
        assert!(!matches_case("MyCamelCase", "camel-case"));
        assert!(matches_case("PascalCase", "pascal-case"));
        assert!(matches_case("Start Case Words", "start-case"));
        assert!(!matches_case("Start lower words", "start-case"));
        assert!(matches_case("Sentence case here", "sentence-case"));
        assert!(!matches_case("sentence case here", "sentence-case"));
        assert!(matches_case("UPPER", "upper-case"));
    }

    #[test]
    fn case_sentence_ignores_leading_digits() {
        assert!(matches_case("2 Fast", "sentence-case"));
    }

    #[test]
    fn case_never_rejects_match() {
        let value = RuleValue::String("upper-case".into());
        let (valid, message) = check_case("SHOUT", Field::Subject, Condition::Never, Some(&value));
        assert!(!valid);
        assert_eq!(message, "subject must not be upper-case");
    }

    #[test]
    fn empty_never_rejects_empty_input() {
        let (valid, message) = check_empty("", Field::Subject, Condition::Never, None);
        assert!(!valid);
        assert_eq!(message, "subject may not be empty");
    }

    #[test]
    fn empty_never_accepts_non_empty_input() {
        let (valid, _) = check_empty("something", Field::Subject, Condition::Never, None);
        assert!(valid);
    }

    #[test]
    fn empty_always_rejects_non_empty_input() {
        let (valid, message) = check_empty("x", Field::Scope, Condition::Always, None);
        assert!(!valid);
        assert_eq!(message, "scope must be empty");
    }

    #[test]
    fn full_stop_never_rejects_trailing_period() {
        let value = RuleValue::String(".".into());
        let (valid, message) =
            check_full_stop("add parser.", Field::Subject, Condition::Never, Some(&value));
        assert!(!valid);
        assert_eq!(message, "subject must not end with '.'");
    }

    #[test]
    fn full_stop_defaults_to_period() {
        let (valid, _) = check_full_stop("done.", Field::Subject, Condition::Never, None);
        assert!(!valid);
    }

    #[test]
    fn full_stop_always_requires_trailing_character() {
        let value = RuleValue::String(".".into());
        let (valid, _) =
            check_full_stop("no stop", Field::Body, Condition::Always, Some(&value));
        assert!(!valid);
    }

    #[test]
    fn max_length_counts_characters() {
        let value = RuleValue::Number(5);
        let (valid, message) =
            check_max_length("abcdef", Field::Header, Condition::Always, Some(&value));
        assert!(!valid);
        assert_eq!(
            message,
            "header must not be longer than 5 characters, current length is 6"
        );
        assert!(check_max_length("abcde", Field::Header, Condition::Always, Some(&value)).0);
    }

    #[test]
    fn min_length_counts_characters() {
        let value = RuleValue::Number(3);
        let (valid, message) =
            check_min_length("ab", Field::Subject, Condition::Always, Some(&value));
        assert!(!valid);
        assert_eq!(
            message,
            "subject must not be shorter than 3 characters, current length is 2"
        );
        assert!(check_min_length("abc", Field::Subject, Condition::Always, Some(&value)).0);
    }

    #[test]
    fn length_checks_pass_without_numeric_value() {
        assert!(check_max_length("anything", Field::Header, Condition::Always, None).0);
        assert!(check_min_length("", Field::Footer, Condition::Always, None).0);
    }
}
