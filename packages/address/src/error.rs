//! Error types for address parsing.
//!
//! Uses the dual-error pattern: `AddressError` for library consumers and
//! `CliError` for the command-line tool, which wraps it.

use serde::Serialize;
use thiserror::Error;

use crate::config::MESSAGE_ADDRESS_CONSTRAINTS;
use crate::types::AddressField;

/// Main error type for address construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The trimmed input does not have the required structure.
    ///
    /// Always displays the fixed user-facing constraint message; the
    /// offending input is kept for callers that want to show it.
    #[error("{}", MESSAGE_ADDRESS_CONSTRAINTS)]
    InvalidAddress { input: String },

    /// A token was rejected by its field type under the strict policy.
    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

/// Why a token wrapper refused its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenRejection {
    /// Token is empty (two separators in a row).
    Empty,
    /// Token contains whitespace other than the separator, e.g. a tab.
    ContainsWhitespace,
}

impl TokenRejection {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "token is empty",
            Self::ContainsWhitespace => "token contains whitespace",
        }
    }
}

impl std::fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token rejected by its field type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Invalid {field} '{token}': {reason}")]
pub struct FieldError {
    pub field: AddressField,
    pub token: String,
    pub reason: TokenRejection,
}

impl FieldError {
    #[must_use]
    pub fn new(field: AddressField, token: impl Into<String>, reason: TokenRejection) -> Self {
        Self {
            field,
            token: token.into(),
            reason,
        }
    }
}

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Address could not be constructed.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Address failed the structural check in `validate`.
    #[error("Address is not valid: '{0}'")]
    NotValid(String),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;
