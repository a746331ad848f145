//! Scope classification for the interactive prompt.

pub mod classifier;

pub use classifier::{
    ScopeClassifier, ScopeItem, DEFAULT_CLASSIFICATION_KEY, DEFAULT_UNCLASSIFIED_NAME,
    UNKNOWN_SCOPE_TYPE,
};
