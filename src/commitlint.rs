//! The rule configuration facade.
//!
//! [`Commitlint`] owns the loaded rule and prompt configuration for one
//! working directory and exposes the typed accessors the prompt flow and
//! lint command use: value enumerations, per-field lint operations, and the
//! classified scope list.
//!
//! Loading is deliberately non-fatal: a missing configuration logs a
//! warning, a broken one logs an error, and either way the facade proceeds
//! with an empty configuration so every getter degrades gracefully.

use std::path::Path;

use crate::config::{
    load_config, CommitlintConfig, Condition, PluginConfig, PromptConfig, PromptSettings,
    RulesConfig, ScopeRecord, Severity,
};
use crate::rules::{rule_fn, Commit, Field};
use crate::scope::{ScopeClassifier, ScopeItem};

/// Rule keys evaluated per field, in evaluation order. The first failing
/// rule short-circuits the rest.
const TYPE_RULES: &[&str] = &[
    "type-enum",
    "type-case",
    "type-empty",
    "type-min-length",
    "type-max-length",
];
const SCOPE_RULES: &[&str] = &[
    "scope-enum",
    "scope-case",
    "scope-empty",
    "scope-max-length",
    "scope-min-length",
];
const SUBJECT_RULES: &[&str] = &[
    "subject-case",
    "subject-empty",
    "subject-full-stop",
    "subject-min-length",
    "subject-max-length",
];
const HEADER_RULES: &[&str] = &[
    "header-case",
    "header-full-stop",
    "header-max-length",
    "header-min-length",
];
const BODY_RULES: &[&str] = &["body-full-stop", "body-min-length", "body-max-length"];
const FOOTER_RULES: &[&str] = &["footer-min-length", "footer-max-length"];

/// Facade over the loaded commitlint configuration for one working
/// directory. Reloading constructs a fresh instance, discarding the held
/// enumeration and classifier.
#[derive(Debug, Clone)]
pub struct Commitlint {
    rules: RulesConfig,
    prompt: PromptConfig,
    plugin: Option<PluginConfig>,
    classifier: ScopeClassifier,
}

impl Commitlint {
    /// Load the configuration for a working directory.
    ///
    /// Never fails: a missing configuration is logged as a warning, any
    /// other load error as an error, and the facade falls back to an empty
    /// configuration.
    pub fn load(cwd: &Path) -> Self {
        let config = match load_config(cwd) {
            Ok(config) => {
                tracing::info!("Load commitlint configuration successfully.");
                config
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("commitlint: The cwd is {}", cwd.display());
                tracing::warn!("commitlint: {}", e);
                CommitlintConfig::default()
            }
            Err(e) => {
                tracing::error!("commitlint: The cwd is {}", cwd.display());
                tracing::error!("commitlint: {}", e);
                CommitlintConfig::default()
            }
        };
        Self::from_config(config)
    }

    /// Build the facade from an already-parsed configuration.
    pub fn from_config(config: CommitlintConfig) -> Self {
        let classifier = ScopeClassifier::new(&config.prompt, config.plugin.as_ref());
        Self {
            rules: config.rules,
            prompt: config.prompt,
            plugin: config.plugin,
            classifier,
        }
    }

    /// The loaded rule table.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// The loaded prompt configuration.
    pub fn prompt(&self) -> &PromptConfig {
        &self.prompt
    }

    /// The loaded plugin block, if any.
    pub fn plugin(&self) -> Option<&PluginConfig> {
        self.plugin.as_ref()
    }

    /// Prompt-wide settings.
    pub fn prompt_settings(&self) -> &PromptSettings {
        &self.prompt.settings
    }

    /// The allowed values of an enum rule. Empty when the rule is absent,
    /// negated (`never`), or its value is not a list.
    fn enum_values(&self, key: &str) -> Vec<String> {
        let Some(rule) = self.rules.get(key) else {
            return Vec::new();
        };
        if rule.condition == Condition::Never {
            return Vec::new();
        }
        rule.value
            .as_ref()
            .and_then(|v| v.as_list())
            .map(|items| items.to_vec())
            .unwrap_or_default()
    }

    /// Allowed commit types from the `type-enum` rule.
    pub fn type_enum(&self) -> Vec<String> {
        self.enum_values("type-enum")
    }

    /// Allowed scopes from the `scope-enum` rule.
    pub fn scope_enum(&self) -> Vec<String> {
        self.enum_values("scope-enum")
    }

    /// Metadata record for a commit type, from the prompt configuration.
    pub fn type_detail(&self, commit_type: &str) -> Option<&ScopeRecord> {
        self.prompt.question_detail("type", commit_type)
    }

    /// Metadata record for a scope, from the prompt configuration.
    pub fn scope_detail(&self, scope: &str) -> Option<&ScopeRecord> {
        self.prompt.question_detail("scope", scope)
    }

    /// The classified, ordered scope list for display.
    pub fn sorted_scope_items(&mut self) -> Vec<ScopeItem> {
        self.classifier.run()
    }

    /// Evaluate one rule. Returns the error message, or empty when the rule
    /// is absent, below error severity, unknown, or satisfied.
    fn lint_rule(&self, commit: &Commit, key: &str) -> String {
        let Some(rule) = self.rules.get(key) else {
            return String::new();
        };
        if rule.severity != Severity::Error {
            return String::new();
        }
        let Some(f) = rule_fn(key) else {
            return String::new();
        };
        let (valid, error) = f.eval(commit, rule.condition, rule.value.as_ref());
        if valid {
            String::new()
        } else {
            error
        }
    }

    /// Evaluate rules in order, returning the first error message.
    fn lint_rules(&self, commit: &Commit, keys: &[&str]) -> String {
        for key in keys {
            let error = self.lint_rule(commit, key);
            if !error.is_empty() {
                return error;
            }
        }
        String::new()
    }

    /// Lint a commit type. Empty result means valid.
    pub fn lint_type(&self, commit_type: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Type, commit_type), TYPE_RULES)
    }

    /// Lint a scope.
    pub fn lint_scope(&self, scope: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Scope, scope), SCOPE_RULES)
    }

    /// Lint a subject.
    pub fn lint_subject(&self, subject: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Subject, subject), SUBJECT_RULES)
    }

    /// Lint a full header line.
    pub fn lint_header(&self, header: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Header, header), HEADER_RULES)
    }

    /// Lint a body.
    pub fn lint_body(&self, body: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Body, body), BODY_RULES)
    }

    /// Lint a footer.
    pub fn lint_footer(&self, footer: &str) -> String {
        self.lint_rules(&Commit::with_field(Field::Footer, footer), FOOTER_RULES)
    }

    /// Whether an empty scope is permitted: forbidden only when the
    /// `scope-empty` rule is exactly `[error, "never", ...]`.
    pub fn can_scope_be_empty(&self) -> bool {
        match self.rules.get("scope-empty") {
            Some(rule) => {
                !(rule.severity == Severity::Error && rule.condition == Condition::Never)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn facade(yaml: &str) -> Commitlint {
        Commitlint::from_config(parse_config(yaml, Path::new("test.yml")).unwrap())
    }

    #[test]
    fn load_degrades_to_empty_config_without_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let facade = Commitlint::load(temp.path());
        assert!(facade.type_enum().is_empty());
        assert!(facade.scope_enum().is_empty());
        assert_eq!(facade.lint_type("anything"), "");
        assert!(facade.can_scope_be_empty());
    }

    #[test]
    fn load_degrades_to_empty_config_on_parse_error() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(".commitlintrc.yml"), "rules: [broken").unwrap();
        let facade = Commitlint::load(temp.path());
        assert!(facade.rules().is_empty());
    }

    #[test]
    fn type_enum_lists_allowed_values() {
        let facade = facade(
            r#"
rules:
  type-enum: [2, "always", [feat, fix, docs]]
"#,
        );
        assert_eq!(facade.type_enum(), vec!["feat", "fix", "docs"]);
    }

    #[test]
    fn enum_values_empty_when_condition_is_never() {
        let facade = facade(
            r#"
rules:
  type-enum: [2, "never", [feat]]
"#,
        );
        assert!(facade.type_enum().is_empty());
    }

    #[test]
    fn enum_values_empty_when_value_is_not_a_list() {
        let facade = facade(
            r#"
rules:
  scope-enum: [2, "always", 5]
"#,
        );
        assert!(facade.scope_enum().is_empty());
    }

    #[test]
    fn lint_reports_first_failing_rule_only() {
        // type-enum fails and type-case would fail too; the enum message
        // must win.
        let facade = facade(
            r#"
rules:
  type-enum: [2, "always", [feat, fix]]
  type-case: [2, "always", lower-case]
"#,
        );
        let error = facade.lint_type("DOCS");
        assert_eq!(error, "type must be one of [feat, fix]");
    }

    #[test]
    fn lint_falls_through_to_later_rules() {
        let facade = facade(
            r#"
rules:
  type-enum: [2, "always", [feat, FIX]]
  type-case: [2, "always", lower-case]
"#,
        );
        assert_eq!(facade.lint_type("FIX"), "type must be lower-case");
    }

    #[test]
    fn lint_skips_warning_severity() {
        let facade = facade(
            r#"
rules:
  type-enum: [1, "always", [feat]]
"#,
        );
        assert_eq!(facade.lint_type("docs"), "");
    }

    #[test]
    fn lint_skips_disabled_rules() {
        let facade = facade(
            r#"
rules:
  subject-empty: [0, "never"]
"#,
        );
        assert_eq!(facade.lint_subject(""), "");
    }

    #[test]
    fn lint_subject_reports_empty_subject() {
        let facade = facade(
            r#"
rules:
  subject-empty: [2, "never"]
"#,
        );
        assert_eq!(facade.lint_subject(""), "subject may not be empty");
        assert_eq!(facade.lint_subject("add parser"), "");
    }

    #[test]
    fn lint_header_reports_overlong_header() {
        let facade = facade(
            r#"
rules:
  header-max-length: [2, "always", 10]
"#,
        );
        assert!(facade
            .lint_header("this header is far too long")
            .contains("longer than 10"));
    }

    #[test]
    fn lint_unknown_rule_key_is_ignored() {
        let facade = facade(
            r#"
rules:
  type-enum: [2, "always", [feat]]
  type-made-up: [2, "always"]
"#,
        );
        assert_eq!(facade.lint_type("feat"), "");
    }

    #[test]
    fn can_scope_be_empty_false_only_for_error_never() {
        let forbid = facade("rules: { scope-empty: [2, \"never\"] }");
        assert!(!forbid.can_scope_be_empty());

        let warn_only = facade("rules: { scope-empty: [1, \"never\"] }");
        assert!(warn_only.can_scope_be_empty());

        let always = facade("rules: { scope-empty: [2, \"always\"] }");
        assert!(always.can_scope_be_empty());

        let absent = facade("rules: {}");
        assert!(absent.can_scope_be_empty());
    }

    #[test]
    fn details_come_from_prompt_config() {
        let facade = facade(
            r#"
prompt:
  questions:
    type:
      enum:
        feat: { description: "A new feature" }
    scope:
      enum:
        api: { title: app, description: "HTTP API" }
"#,
        );
        assert_eq!(
            facade.type_detail("feat").unwrap().description(),
            "A new feature"
        );
        assert_eq!(facade.scope_detail("api").unwrap().description(), "HTTP API");
        assert!(facade.type_detail("missing").is_none());
    }

    #[test]
    fn sorted_scope_items_use_plugin_order() {
        let mut facade = facade(
            r#"
prompt:
  questions:
    scope:
      enum:
        a: { title: fix }
        b: { title: feat }
commitly:
  scopeListOrder: [feat, fix]
"#,
        );
        let items = facade.sorted_scope_items();
        let labels: Vec<_> = items.iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["feat", "b", "fix", "a"]);
    }

    #[test]
    fn sorted_scope_items_empty_without_scope_question() {
        let mut facade = facade("rules: {}");
        assert!(facade.sorted_scope_items().is_empty());
    }
}
