//! Rule evaluation table.
//!
//! Commitlint rule keys are `<field>-<check>` (e.g. `type-enum`,
//! `subject-full-stop`). [`rule_fn`] resolves a key to an evaluation
//! function over a pseudo-commit; unknown keys resolve to `None` and lint
//! as valid.

pub mod checks;

pub use checks::RuleOutcome;

use crate::config::{Condition, RuleValue};
use checks::{check_case, check_empty, check_enum, check_full_stop, check_max_length, check_min_length};

/// The commit message part a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Scope,
    Subject,
    Header,
    Body,
    Footer,
}

impl Field {
    /// The field name as it appears in rule keys and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Header => "header",
            Field::Body => "body",
            Field::Footer => "footer",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "type" => Some(Field::Type),
            "scope" => Some(Field::Scope),
            "subject" => Some(Field::Subject),
            "header" => Some(Field::Header),
            "body" => Some(Field::Body),
            "footer" => Some(Field::Footer),
            _ => None,
        }
    }
}

/// A pseudo-commit: one value per message part, empty unless set.
///
/// Lint operations populate a single field and evaluate the rules for that
/// field against it.
#[derive(Debug, Clone, Default)]
pub struct Commit {
    pub r#type: String,
    pub scope: String,
    pub subject: String,
    pub header: String,
    pub body: String,
    pub footer: String,
}

impl Commit {
    /// A pseudo-commit with a single populated field.
    pub fn with_field(field: Field, value: &str) -> Self {
        let mut commit = Self::default();
        *commit.field_mut(field) = value.to_string();
        commit
    }

    /// The value of one field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.r#type,
            Field::Scope => &self.scope,
            Field::Subject => &self.subject,
            Field::Header => &self.header,
            Field::Body => &self.body,
            Field::Footer => &self.footer,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Type => &mut self.r#type,
            Field::Scope => &mut self.scope,
            Field::Subject => &mut self.subject,
            Field::Header => &mut self.header,
            Field::Body => &mut self.body,
            Field::Footer => &mut self.footer,
        }
    }
}

type CheckFn = fn(&str, Field, Condition, Option<&RuleValue>) -> RuleOutcome;

/// An evaluation function bound to a rule key.
pub struct RuleFn {
    field: Field,
    check: CheckFn,
}

impl RuleFn {
    /// Evaluate the rule against a pseudo-commit.
    pub fn eval(
        &self,
        commit: &Commit,
        condition: Condition,
        value: Option<&RuleValue>,
    ) -> RuleOutcome {
        (self.check)(commit.field(self.field), self.field, condition, value)
    }
}

/// Resolve a rule key to its evaluation function.
pub fn rule_fn(key: &str) -> Option<RuleFn> {
    let (field_name, check_name) = key.split_once('-')?;
    let field = Field::from_str(field_name)?;
    let check: CheckFn = match check_name {
        "enum" => check_enum,
        "case" => check_case,
        "empty" => check_empty,
        "full-stop" => check_full_stop,
        "max-length" => check_max_length,
        "min-length" => check_min_length,
        _ => return None,
    };
    Some(RuleFn { field, check })
}
