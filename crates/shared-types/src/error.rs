use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of console errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    ValidationError,
    Conflict,
    /// A collaborator failed to return the data a page asked for.
    DataFetch,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::DataFetch => write!(f, "DataFetch"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the console's services, hooks and pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn data_fetch(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DataFetch, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    pub fn is_data_fetch(&self) -> bool {
        self.kind == AppErrorKind::DataFetch
    }

    /// Message suitable for a toast.
    ///
    /// Validation errors with field details list the first offending field
    /// (alphabetically, so the output is stable) after the summary.
    pub fn user_message(&self) -> String {
        if self.message.is_empty() {
            return "Something went wrong. Please try again.".to_string();
        }
        let mut fields: Vec<_> = self.field_errors.iter().collect();
        fields.sort();
        match fields.first() {
            Some((field, detail)) => format!("{}: {} {}", self.message, field, detail),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_fetch_error_has_correct_kind() {
        let err = AppError::data_fetch("customers unavailable");
        assert_eq!(err.kind, AppErrorKind::DataFetch);
        assert!(err.is_data_fetch());
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn not_found_is_not_a_fetch_error() {
        assert!(!AppError::not_found("missing").is_data_fetch());
    }

    #[test]
    fn user_message_includes_first_field_error() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "is required".to_string());
        fields.insert("email".to_string(), "is invalid".to_string());
        let err = AppError::validation("Check the form", fields);
        assert_eq!(err.user_message(), "Check the form: email is invalid");
    }

    #[test]
    fn user_message_falls_back_for_empty_message() {
        assert_eq!(
            AppError::internal("").user_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_survives_json() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "is invalid".to_string());
        let err = AppError::validation("Validation failed", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn missing_field_errors_deserialize_empty() {
        let err: AppError =
            serde_json::from_str(r#"{"kind":"Forbidden","message":"Admins only"}"#).unwrap();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert!(err.field_errors.is_empty());
    }
}
