//! Commitlint configuration loading and schema.
//!
//! Discovery and parsing live in [`loader`]; the serde data model lives in
//! [`schema`].

pub mod loader;
pub mod schema;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILES};
pub use schema::{
    CommitlintConfig, Condition, EnumConfig, PluginConfig, PromptConfig, PromptSettings, Question,
    Rule, RuleValue, RulesConfig, ScopeRecord, Severity,
};
