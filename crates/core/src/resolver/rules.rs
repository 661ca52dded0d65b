//! Ordered rename rules applied to incoming filenames.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::error::ResolverError;

/// A single `(pattern, replacement)` transform.
///
/// Rules are applied in order; later rules operate on the output of
/// earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRule {
    /// Regular expression matched against the filename.
    pub pattern: String,
    /// Replacement text for every match.
    pub replacement: String,
}

impl RenameRule {
    /// Creates a new rename rule.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Default sanitization rules: strip characters outside word characters and
/// dots, strip a leading dot, collapse runs of dots into one.
pub fn default_rename_rules() -> Vec<RenameRule> {
    vec![
        RenameRule::new(r"[^\w.]", ""),
        RenameRule::new(r"^\.", ""),
        RenameRule::new(r"\.\.+", "."),
    ]
}

/// A rename rule with its pattern compiled.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    regex: Regex,
    replacement: String,
}

pub(crate) fn compile_rules(rules: &[RenameRule]) -> Result<Vec<CompiledRule>, ResolverError> {
    rules
        .iter()
        .map(|rule| {
            Regex::new(&rule.pattern)
                .map(|regex| CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                })
                .map_err(|source| ResolverError::InvalidPattern {
                    pattern: rule.pattern.clone(),
                    source,
                })
        })
        .collect()
}

pub(crate) fn apply_rules(rules: &[CompiledRule], name: &str) -> String {
    rules.iter().fold(name.to_string(), |name, rule| {
        rule.regex
            .replace_all(&name, rule.replacement.as_str())
            .into_owned()
    })
}
