//! Response normalization — maps a completion outcome to text that is always
//! safe to show.

use std::fmt;

/// Shown when the completion call succeeds without usable text.
pub const NO_ADVICE_FALLBACK: &str = "Sorry, no advice available now.";

/// Diagnostic detail from a failed completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail(String);

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one call to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(String),
    SuccessEmpty,
    Failure(ErrorDetail),
}

impl CompletionOutcome {
    /// Folds a collaborator call result into an outcome. This is the only
    /// place a completion error is observed.
    pub fn from_result<E: fmt::Display>(result: Result<Option<String>, E>) -> Self {
        match result {
            Ok(Some(text)) if !text.trim().is_empty() => CompletionOutcome::Success(text),
            Ok(_) => CompletionOutcome::SuccessEmpty,
            Err(e) => CompletionOutcome::Failure(ErrorDetail::new(e.to_string())),
        }
    }
}

/// Apology shown for a failed completion, embedding the error detail.
pub fn failure_message(error: &ErrorDetail) -> String {
    format!(
        "⚠️ Sorry, advice could not be generated right now. \
        The service may have hit its API quota or rate limit; please try again later. \
        (Error: {error})"
    )
}

/// Maps an outcome to display text. Never empty.
pub fn normalize(outcome: CompletionOutcome) -> String {
    match outcome {
        CompletionOutcome::Success(text) if !text.trim().is_empty() => text,
        CompletionOutcome::Success(_) | CompletionOutcome::SuccessEmpty => {
            NO_ADVICE_FALLBACK.to_string()
        }
        CompletionOutcome::Failure(error) => failure_message(&error),
    }
}
