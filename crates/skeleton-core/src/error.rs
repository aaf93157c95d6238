use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of skeleton composition errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkeletonErrorKind {
    /// A value outside the documented domain reached the resolver.
    InvalidConfig,
}

impl fmt::Display for SkeletonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkeletonErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error returned by the resolver, the composers and the
/// configuration parsers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkeletonError {
    pub kind: SkeletonErrorKind,
    pub message: String,
    /// Name of the offending configuration field, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl SkeletonError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::InvalidConfig,
            message: message.into(),
            field: None,
        }
    }

    /// Same as [`SkeletonError::invalid_config`], tagged with the field name.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        tracing::debug!(field = %field, "rejected skeleton configuration value");
        Self {
            kind: SkeletonErrorKind::InvalidConfig,
            message: message.into(),
            field: Some(field),
        }
    }
}

impl fmt::Display for SkeletonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {} ({})", self.kind, self.message, field),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for SkeletonError {}

impl From<serde_json::Error> for SkeletonError {
    fn from(err: serde_json::Error) -> Self {
        SkeletonError::invalid_config(format!("invalid JSON configuration: {err}"))
    }
}

impl From<toml::de::Error> for SkeletonError {
    fn from(err: toml::de::Error) -> Self {
        SkeletonError::invalid_config(format!("invalid TOML configuration: {}", err.message()))
    }
}

pub type Result<T> = std::result::Result<T, SkeletonError>;
