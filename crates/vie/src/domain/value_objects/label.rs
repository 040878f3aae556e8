//! Label - validated display name of a Vie

use crate::domain::errors::DomainError;

/// Maximum label length, matching the persisted column
pub const LABEL_MAX_LEN: usize = 100;

/// A label that is present, not blank, and fits the column.
///
/// The original text is kept as submitted; trimming is only used for the
/// blank check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn parse(raw: Option<String>) -> Result<Self, DomainError> {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(DomainError::Validation("Label is required".to_string())),
        };

        if raw.chars().count() > LABEL_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "Label must be at most {} characters",
                LABEL_MAX_LEN
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
