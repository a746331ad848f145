//! Commitly - Conventional-commit authoring driven by commitlint configuration.
//!
//! Commitly loads a project's commitlint configuration, lints commit message
//! parts against it, and walks authors through an interactive prompt flow
//! with the configured scopes organized into a classified, ordered list.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`commitlint`] - Facade over the loaded rule and prompt configuration
//! - [`config`] - Configuration discovery, parsing, and schema
//! - [`error`] - Error types and result aliases
//! - [`rules`] - Rule evaluation table for commit message parts
//! - [`scope`] - Scope classification and ordering
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use commitly::commitlint::Commitlint;
//! use commitly::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     r#"rules: { type-enum: [2, "always", [feat, fix]] }"#,
//!     Path::new(".commitlintrc.yml"),
//! )
//! .unwrap();
//! let commitlint = Commitlint::from_config(config);
//! assert_eq!(commitlint.lint_type("docs"), "type must be one of [feat, fix]");
//! assert_eq!(commitlint.lint_type("feat"), "");
//! ```

pub mod cli;
pub mod commitlint;
pub mod config;
pub mod error;
pub mod rules;
pub mod scope;
pub mod ui;

pub use commitlint::Commitlint;
pub use error::{CommitlyError, Result};
pub use scope::{ScopeClassifier, ScopeItem};
