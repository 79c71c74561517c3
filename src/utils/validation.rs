use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// A date field holding a string that is neither RFC 3339 nor `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is not a valid date")]
pub struct InvalidDate {
    pub field: &'static str,
}

/// Collects the names of required fields that are absent or blank.
#[derive(Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.missing.push(name);
        }
        self
    }

    pub fn present<T>(mut self, name: &'static str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                missing: self.missing,
            })
        }
    }
}
