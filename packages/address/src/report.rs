//! Diagnostic reporting for address parsing.
//!
//! Parsing does not write to any global stream. Diagnostics go through a
//! [`Reporter`] passed in by the caller; [`TracingReporter`] forwards them
//! to `tracing` and is what [`Address::new`](crate::Address::new) uses.

use std::sync::{Mutex, PoisonError};

use crate::config::MESSAGE_USAGE;
use crate::error::FieldError;

/// Receives diagnostics emitted while parsing an address.
pub trait Reporter {
    /// Called before a structural failure is returned.
    fn usage_hint(&self, input: &str);

    /// Called for every token rejected by its field type.
    fn field_rejected(&self, error: &FieldError);
}

/// Logs diagnostics as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn usage_hint(&self, input: &str) {
        tracing::warn!(input, "{MESSAGE_USAGE}");
    }

    fn field_rejected(&self, error: &FieldError) {
        tracing::warn!(
            field = %error.field,
            token = %error.token,
            reason = %error.reason,
            "Address field rejected"
        );
    }
}

/// Drops all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn usage_hint(&self, _input: &str) {}

    fn field_rejected(&self, _error: &FieldError) {}
}

/// A diagnostic captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Usage hint for the given (untrimmed) input.
    UsageHint { input: String, message: String },
    /// A rejected token.
    FieldRejected(FieldError),
}

/// Keeps diagnostics in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the recorded diagnostics, leaving the reporter empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn push(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

impl Reporter for RecordingReporter {
    fn usage_hint(&self, input: &str) {
        self.push(Diagnostic::UsageHint {
            input: input.to_string(),
            message: MESSAGE_USAGE.to_string(),
        });
    }

    fn field_rejected(&self, error: &FieldError) {
        self.push(Diagnostic::FieldRejected(error.clone()));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn usage_hint(&self, input: &str) {
        (**self).usage_hint(input);
    }

    fn field_rejected(&self, error: &FieldError) {
        (**self).field_rejected(error);
    }
}
