use crate::error::ScopeError;
use std::fmt;
use std::str::FromStr;

/// The class every rule gets nested under, e.g. `.dark-theme`.
pub const DEFAULT_SCOPE_CLASS: &str = ".dark-theme";

/// A validated scope selector.
///
/// It is injected verbatim in front of selectors, so it must not contain whitespace,
/// braces or commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeClass(String);

impl ScopeClass {
    pub fn new(class: impl Into<String>) -> Result<Self, ScopeError> {
        let class = class.into();
        let invalid = class.is_empty()
            || class
                .chars()
                .any(|ch| ch.is_whitespace() || matches!(ch, '{' | '}' | ','));
        if invalid {
            return Err(ScopeError::InvalidScopeClass(class));
        }
        Ok(ScopeClass(class))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScopeClass {
    fn default() -> Self {
        ScopeClass(DEFAULT_SCOPE_CLASS.to_string())
    }
}

impl FromStr for ScopeClass {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScopeClass::new(s)
    }
}

impl fmt::Display for ScopeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
