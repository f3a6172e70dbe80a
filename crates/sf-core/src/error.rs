//! Core error types for Stockflow
//!
//! Every failure the client can observe, from a transport hiccup to a rejected form,
//! is expressed as an [`SfError`]. HTTP statuses are classified once, here.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Standard Result type for Stockflow operations
pub type SfResult<T> = Result<T, SfError>;

/// Core error type for all Stockflow operations
#[derive(Error, Debug)]
pub enum SfError {
    #[error("Not found{}", detail(.message))]
    NotFound { message: Option<String> },

    #[error("Conflict{}", detail(.message))]
    Conflict { message: Option<String> },

    #[error("Rate limited{}", detail(.message))]
    RateLimited { message: Option<String> },

    #[error("Server error (HTTP {status}){}", detail(.message))]
    Server { status: u16, message: Option<String> },

    #[error("Unexpected response (HTTP {status}){}", detail(.message))]
    Http { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request cancelled")]
    Cancelled,
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => format!(": {}", m),
        _ => String::new(),
    }
}

impl SfError {
    /// Classify a non-success HTTP status, keeping the body's `message` if any
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => SfError::NotFound { message },
            409 => SfError::Conflict { message },
            429 => SfError::RateLimited { message },
            500..=599 => SfError::Server { status, message },
            _ => SfError::Http { status, message },
        }
    }

    /// The HTTP status this error carries or maps to
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SfError::NotFound { .. } => Some(404),
            SfError::Conflict { .. } => Some(409),
            SfError::RateLimited { .. } => Some(429),
            SfError::Server { status, .. } | SfError::Http { status, .. } => Some(*status),
            SfError::Validation(_) => Some(422),
            SfError::Transport(_)
            | SfError::Decode(_)
            | SfError::Config(_)
            | SfError::Cancelled => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SfError::NotFound { .. } => "not_found",
            SfError::Conflict { .. } => "conflict",
            SfError::RateLimited { .. } => "rate_limited",
            SfError::Server { .. } => "server_error",
            SfError::Http { .. } => "http_error",
            SfError::Transport(_) => "transport_error",
            SfError::Decode(_) => "decode_error",
            SfError::Validation(_) => "validation_failed",
            SfError::Config(_) => "configuration_error",
            SfError::Cancelled => "cancelled",
        }
    }

    /// Only rate-limited responses are eligible for automatic retry
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SfError::RateLimited { .. })
    }

    /// The `message` field returned by the server, when the body carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SfError::NotFound { message }
            | SfError::Conflict { message }
            | SfError::RateLimited { message }
            | SfError::Server { message, .. }
            | SfError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Validation errors collection, keyed by wire field name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{}: {}", field, msg));
            }
        }
        messages
    }

    /// `Ok(())` when empty, otherwise the collection itself as the error
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, field_errors) in source.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("is invalid ({})", error.code),
                };
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(SfError::from_status(404, None), SfError::NotFound { .. }));
        assert!(matches!(SfError::from_status(409, None), SfError::Conflict { .. }));
        assert!(SfError::from_status(429, None).is_rate_limited());
        assert!(matches!(
            SfError::from_status(503, None),
            SfError::Server { status: 503, .. }
        ));
        assert!(matches!(
            SfError::from_status(400, None),
            SfError::Http { status: 400, .. }
        ));
    }

    #[test]
    fn test_only_429_is_retryable() {
        for status in [400, 401, 404, 409, 500, 502] {
            assert!(!SfError::from_status(status, None).is_rate_limited());
        }
        assert!(!SfError::Transport("connection reset".into()).is_rate_limited());
    }

    #[test]
    fn test_server_message_is_kept() {
        let err = SfError::from_status(409, Some("Détail déjà créé".into()));
        assert_eq!(err.server_message(), Some("Détail déjà créé"));
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.to_string(), "Conflict: Détail déjà créé");
        assert_eq!(SfError::from_status(404, None).to_string(), "Not found");
    }

    #[test]
    fn test_validation_errors_messages() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.add("articleQte", "must be greater than 0");
        errors.add("articleName", "is required");
        errors.add_base("form rejected");

        assert!(errors.has_error("articleQte"));
        assert_eq!(
            errors.full_messages(),
            vec![
                "form rejected".to_string(),
                "articleName: is required".to_string(),
                "articleQte: must be greater than 0".to_string(),
            ]
        );
        assert!(errors.into_result().is_err());
    }
}
