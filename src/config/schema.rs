//! Configuration schema types.
//!
//! This module defines the serde data structures for commitlint
//! configuration: the rule table, the prompt definitions, and the
//! `commitly:` plugin block consumed by the scope classifier.
//!
//! Rules are serialized as heterogeneous arrays
//! (`[severity, condition, value?]`), so [`Rule`] carries a hand-written
//! `Deserialize`/`Serialize` pair instead of a derive.

use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Value;
use std::fmt;

/// Severity level of a rule: `0` disabled, `1` warning, `2` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, String> {
        match n {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("rule severity must be 0, 1 or 2, got {}", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> u8 {
        match s {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// Applicability condition of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Always,
    Never,
}

/// The optional third element of a rule array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(u64),
    String(String),
    List(Vec<String>),
}

impl RuleValue {
    /// The value as a list of strings, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value as a number, if it is one.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a single string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A single rule entry: `[severity, condition, value?]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub severity: Severity,
    pub condition: Condition,
    pub value: Option<RuleValue>,
}

impl Rule {
    /// Construct a rule with no value payload.
    pub fn new(severity: Severity, condition: Condition) -> Self {
        Self {
            severity,
            condition,
            value: None,
        }
    }

    /// Construct a rule with a value payload.
    pub fn with_value(severity: Severity, condition: Condition, value: RuleValue) -> Self {
        Self {
            severity,
            condition,
            value: Some(value),
        }
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = Rule;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a rule array [severity, condition, value?]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Rule, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                // Disabled rules may legitimately be just `[0]`.
                let condition: Condition = seq.next_element()?.unwrap_or_default();
                let value: Option<RuleValue> = seq.next_element()?;
                Ok(Rule {
                    severity,
                    condition,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(RuleVisitor)
    }
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.condition)?;
        if let Some(value) = &self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// The loaded rule table, keyed by rule name (e.g. `type-enum`).
pub type RulesConfig = IndexMap<String, Rule>;

/// A named, free-form metadata record attached to an enumeration value.
///
/// Keys are arbitrary; `description` is used verbatim for display and the
/// classification field's name is configurable (see
/// [`PluginConfig::scope_classification_key`]). Values are kept as raw YAML
/// values: a non-string classification value never matches a group label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeRecord {
    pub fields: IndexMap<String, Value>,
}

impl ScopeRecord {
    /// Look up a field as a string. Non-string values return `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The display description, or empty if absent.
    pub fn description(&self) -> &str {
        self.get_str("description").unwrap_or("")
    }

    /// Whether a field holds a truthy value. Absent fields, nulls, empty
    /// strings, `false` and `0` are falsy; everything else is truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Set a field to a string value.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// An order-preserving enumeration of named records.
pub type EnumConfig = IndexMap<String, ScopeRecord>;

/// One prompt question (e.g. the `scope` question) with its enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "enum", skip_serializing_if = "IndexMap::is_empty")]
    pub values: EnumConfig,
}

/// Prompt-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSettings {
    #[serde(default)]
    pub enable_multiple_scopes: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_enum_separator: Option<String>,
}

/// The `prompt` section of a commitlint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub questions: IndexMap<String, Question>,

    #[serde(default)]
    pub settings: PromptSettings,
}

impl PromptConfig {
    /// The enumeration configured for a question, empty if absent.
    pub fn question_values(&self, name: &str) -> EnumConfig {
        self.questions
            .get(name)
            .map(|q| q.values.clone())
            .unwrap_or_default()
    }

    /// Look up one record in a question's enumeration.
    pub fn question_detail(&self, name: &str, value: &str) -> Option<&ScopeRecord> {
        self.questions.get(name)?.values.get(value)
    }
}

/// The `commitly:` block: options for scope classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Recognized group labels, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope_list_order: Vec<String>,

    /// Field name within each scope record holding its group label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_classification_key: Option<String>,

    /// Group label assigned to records with no classification value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unclassified_name: Option<String>,
}

/// A complete loaded commitlint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitlintConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: RulesConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default, rename = "commitly", skip_serializing_if = "Option::is_none")]
    pub plugin: Option<PluginConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_rejects_out_of_range() {
        assert!(Severity::try_from(3).is_err());
        assert_eq!(Severity::try_from(2), Ok(Severity::Error));
    }

    #[test]
    fn rule_deserializes_with_value() {
        let rule: Rule = serde_yaml::from_str(r#"[2, "always", ["feat", "fix"]]"#).unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.condition, Condition::Always);
        assert_eq!(
            rule.value.unwrap().as_list().unwrap(),
            &["feat".to_string(), "fix".to_string()]
        );
    }

    #[test]
    fn rule_deserializes_without_value() {
        let rule: Rule = serde_yaml::from_str(r#"[2, "never"]"#).unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.condition, Condition::Never);
        assert!(rule.value.is_none());
    }

    #[test]
    fn rule_deserializes_numeric_value() {
        let rule: Rule = serde_yaml::from_str(r#"[2, "always", 72]"#).unwrap();
        assert_eq!(rule.value.unwrap().as_number(), Some(72));
    }

    #[test]
    fn rule_roundtrips_through_yaml() {
        let rule = Rule::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::String(".".into()),
        );
        let yaml = serde_yaml::to_string(&rule).unwrap();
        let back: Rule = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn rule_rejects_bad_severity() {
        let result: Result<Rule, _> = serde_yaml::from_str(r#"[5, "always"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn config_parses_json_input() {
        // .commitlintrc.json goes through the same parser.
        let config: CommitlintConfig = serde_yaml::from_str(
            r#"{"rules": {"type-enum": [2, "always", ["feat"]]}, "prompt": {}}"#,
        )
        .unwrap();
        assert!(config.rules.contains_key("type-enum"));
    }

    #[test]
    fn scope_enum_preserves_insertion_order() {
        let config: CommitlintConfig = serde_yaml::from_str(
            r#"
prompt:
  questions:
    scope:
      enum:
        zeta: { title: infra }
        alpha: { title: app }
        mid: { title: infra }
"#,
        )
        .unwrap();
        let names: Vec<_> = config
            .prompt
            .question_values("scope")
            .keys()
            .cloned()
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn scope_record_truthiness() {
        let record: ScopeRecord = serde_yaml::from_str(
            r#"
empty: ""
zero: 0
disabled: false
name: api
flag: true
"#,
        )
        .unwrap();
        assert!(!record.is_truthy("empty"));
        assert!(!record.is_truthy("zero"));
        assert!(!record.is_truthy("disabled"));
        assert!(!record.is_truthy("missing"));
        assert!(record.is_truthy("name"));
        assert!(record.is_truthy("flag"));
    }

    #[test]
    fn scope_record_non_string_field_is_not_a_string() {
        let record: ScopeRecord = serde_yaml::from_str("title: 3").unwrap();
        assert!(record.is_truthy("title"));
        assert_eq!(record.get_str("title"), None);
    }

    #[test]
    fn scope_record_description_defaults_empty() {
        let record = ScopeRecord::default();
        assert_eq!(record.description(), "");
    }

    #[test]
    fn scope_record_set_str_overwrites() {
        let mut record = ScopeRecord::default();
        record.set_str("title", "custom");
        assert_eq!(record.get_str("title"), Some("custom"));
        record.set_str("title", "infra");
        assert_eq!(record.get_str("title"), Some("infra"));
    }

    #[test]
    fn prompt_settings_use_camel_case_keys() {
        let config: PromptConfig = serde_yaml::from_str(
            r#"
settings:
  enableMultipleScopes: true
  scopeEnumSeparator: "/"
"#,
        )
        .unwrap();
        assert!(config.settings.enable_multiple_scopes);
        assert_eq!(config.settings.scope_enum_separator.as_deref(), Some("/"));
    }

    #[test]
    fn plugin_config_uses_camel_case_keys() {
        let plugin: PluginConfig = serde_yaml::from_str(
            r#"
scopeListOrder: [app, infra]
scopeClassificationKey: kind
unclassifiedName: misc
"#,
        )
        .unwrap();
        assert_eq!(plugin.scope_list_order, vec!["app", "infra"]);
        assert_eq!(plugin.scope_classification_key.as_deref(), Some("kind"));
        assert_eq!(plugin.unclassified_name.as_deref(), Some("misc"));
    }

    #[test]
    fn empty_config_parses() {
        let config: CommitlintConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.rules.is_empty());
        assert!(config.prompt.questions.is_empty());
        assert!(config.plugin.is_none());
    }
}
