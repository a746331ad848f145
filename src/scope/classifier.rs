//! Scope classification and ordering.
//!
//! [`ScopeClassifier`] turns the configured scope enumeration into a flat,
//! display-ready sequence: group headers in the configured order, each
//! followed by its scopes in enumeration order, with unrecognized
//! classifications bucketed under a trailing "unknown scope type" group.
//!
//! The classifier owns a copy of the enumeration taken at construction.
//! [`ScopeClassifier::backfill_defaults`] mutates that copy in place, so
//! later passes over it see the backfilled classification values. A
//! classifier is built once per loaded configuration and replaced wholesale
//! on reload.

use crate::config::{EnumConfig, PluginConfig, PromptConfig};
use serde::Serialize;

/// Default name of the record field holding the group label.
pub const DEFAULT_CLASSIFICATION_KEY: &str = "title";

/// Default group label for records with no classification value.
pub const DEFAULT_UNCLASSIFIED_NAME: &str = "custom";

/// Group label for scopes whose classification is not in the configured
/// order list.
pub const UNKNOWN_SCOPE_TYPE: &str = "unknown scope type";

/// One element of the flattened display sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScopeItem {
    /// A group-label marker with no associated scope.
    Header { label: String },

    /// A selectable scope with the group it belongs to and its display
    /// detail (the record's description, or empty).
    Entry {
        label: String,
        group: String,
        detail: String,
    },
}

impl ScopeItem {
    fn header(label: &str) -> Self {
        ScopeItem::Header {
            label: label.to_string(),
        }
    }

    fn entry(label: &str, group: &str, detail: &str) -> Self {
        ScopeItem::Entry {
            label: label.to_string(),
            group: group.to_string(),
            detail: detail.to_string(),
        }
    }

    /// The displayed label of this item.
    pub fn label(&self) -> &str {
        match self {
            ScopeItem::Header { label } => label,
            ScopeItem::Entry { label, .. } => label,
        }
    }

    /// Whether this item is a group header.
    pub fn is_header(&self) -> bool {
        matches!(self, ScopeItem::Header { .. })
    }
}

/// Classifies and orders the configured scope enumeration.
#[derive(Debug, Clone)]
pub struct ScopeClassifier {
    scopes: EnumConfig,
    classification_key: String,
    group_order: Vec<String>,
    unclassified_name: String,
}

impl ScopeClassifier {
    /// Build a classifier from the prompt configuration's scope enumeration
    /// and the optional plugin settings. Absent settings fall back to their
    /// defaults; an absent scope question yields an empty enumeration.
    pub fn new(prompt: &PromptConfig, plugin: Option<&PluginConfig>) -> Self {
        Self::from_scopes(prompt.question_values("scope"), plugin)
    }

    /// Build a classifier over an explicit enumeration.
    pub fn from_scopes(scopes: EnumConfig, plugin: Option<&PluginConfig>) -> Self {
        let classification_key = plugin
            .and_then(|p| p.scope_classification_key.clone())
            .unwrap_or_else(|| DEFAULT_CLASSIFICATION_KEY.to_string());
        let group_order = plugin.map(|p| p.scope_list_order.clone()).unwrap_or_default();
        let unclassified_name = plugin
            .and_then(|p| p.unclassified_name.clone())
            .unwrap_or_else(|| DEFAULT_UNCLASSIFIED_NAME.to_string());

        Self {
            scopes,
            classification_key,
            group_order,
            unclassified_name,
        }
    }

    /// The held enumeration (backfilled once [`Self::backfill_defaults`]
    /// has run).
    pub fn scopes(&self) -> &EnumConfig {
        &self.scopes
    }

    /// Assign the default group label to every record whose classification
    /// field is absent or falsy. In-place and idempotent.
    pub fn backfill_defaults(&mut self) {
        let key = self.classification_key.clone();
        for record in self.scopes.values_mut() {
            if !record.is_truthy(&key) {
                record.set_str(&key, &self.unclassified_name);
            }
        }
    }

    /// Produce the ordered display sequence: one lazily-emitted header per
    /// group label with matches, entries in enumeration order within each
    /// group, then the unhandled bucket.
    pub fn sort_scopes(&self) -> Vec<ScopeItem> {
        let mut items = Vec::new();
        for label in &self.group_order {
            let mut header_emitted = false;
            for (name, record) in &self.scopes {
                if record.get_str(&self.classification_key) == Some(label.as_str()) {
                    if !header_emitted {
                        items.push(ScopeItem::header(label));
                        header_emitted = true;
                    }
                    items.push(ScopeItem::entry(name, label, record.description()));
                }
            }
        }
        items.extend(self.unhandled_items());
        items
    }

    /// Collect scopes whose classification is absent, non-string, or not
    /// listed in the group order, under the "unknown scope type" header.
    ///
    /// This scan is independent of the grouped pass: membership is decided
    /// purely by the classification value, so a scope can never land in
    /// both sections.
    fn unhandled_items(&self) -> Vec<ScopeItem> {
        let mut unhandled_names: Vec<&str> = Vec::new();
        let mut items = Vec::new();
        for (name, record) in &self.scopes {
            let handled = record
                .get_str(&self.classification_key)
                .map(|cls| self.group_order.iter().any(|label| label == cls))
                .unwrap_or(false);
            if !handled {
                if items.is_empty() {
                    items.push(ScopeItem::header(UNKNOWN_SCOPE_TYPE));
                }
                items.push(ScopeItem::entry(name, UNKNOWN_SCOPE_TYPE, record.description()));
                unhandled_names.push(name);
            }
        }
        if !unhandled_names.is_empty() {
            tracing::warn!(
                "Scope types not in scopeListOrder: {}",
                unhandled_names.join(",")
            );
        }
        items
    }

    /// Backfill defaults, then sort. The entry point external callers use.
    pub fn run(&mut self) -> Vec<ScopeItem> {
        self.backfill_defaults();
        self.sort_scopes()
    }
}
