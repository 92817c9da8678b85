//! Error-raising policy.
//!
//! A completed command hands its output here; the policy decides
//! whether that output means failure, and if so, which typed error to
//! surface. Two modes:
//!
//! - no expected-error filter: any non-empty output is a failure
//!   (used for commands whose only legitimate output is a blank
//!   success marker);
//! - with a filter: fail only when the matcher confirms one of the
//!   expected signatures — other non-empty output is the caller's
//!   problem, not ours.

use tracing::error;

use super::catalog::FaultSignature;
use super::classify::{RawOutput, has_error};
use crate::error::ArrayError;

/// Anything the policy layer can inspect for faults.
///
/// The seam between the transport (which owns response types) and the
/// classifier: a normalized output view, plus an optional preferred
/// status message for diagnostics.
pub trait FaultSource {
    /// Normalized output used for signature matching.
    fn raw_output(&self) -> RawOutput;

    /// Preferred human-readable status message, when the producer has
    /// a better one than the raw text.
    fn status_message(&self) -> Option<String> {
        None
    }
}

impl FaultSource for RawOutput {
    fn raw_output(&self) -> RawOutput {
        self.clone()
    }
}

impl FaultSource for &str {
    fn raw_output(&self) -> RawOutput {
        RawOutput::from(*self)
    }
}

impl FaultSource for String {
    fn raw_output(&self) -> RawOutput {
        RawOutput::from(self.as_str())
    }
}

/// How [`raise_if_err`] should judge an output.
#[derive(Clone, Copy)]
pub struct OutputCheck<'a> {
    error_kind: fn(String) -> ArrayError,
    message: Option<&'a str>,
    expected: Option<&'a [FaultSignature]>,
}

impl Default for OutputCheck<'_> {
    fn default() -> Self {
        Self {
            error_kind: ArrayError::Command,
            message: None,
            expected: None,
        }
    }
}

impl<'a> OutputCheck<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error constructor used on failure (default: generic command
    /// failure).
    pub fn kind(mut self, error_kind: fn(String) -> ArrayError) -> Self {
        self.error_kind = error_kind;
        self
    }

    /// Caller-supplied message; the raw output is appended as detail.
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Restrict failure to these signatures.
    pub fn expected(mut self, expected: &'a [FaultSignature]) -> Self {
        self.expected = Some(expected);
        self
    }
}

/// Judge a completed command's output; log and return a typed error on
/// failure.
///
/// The resolved message prefers, in order: the caller's message (with
/// the raw output appended as detail), the producer's status message,
/// the raw output text.
pub fn raise_if_err<S: FaultSource>(output: &S, check: OutputCheck<'_>) -> Result<(), ArrayError> {
    let raw = output.raw_output();
    let failed = match check.expected {
        None => !raw.is_empty(),
        Some(expected) => has_error(&raw, expected),
    };
    if !failed {
        return Ok(());
    }

    let message = match check.message {
        Some(message) => format!("{message}  detail:\n{}", raw.matchable()),
        None => output
            .status_message()
            .unwrap_or_else(|| raw.matchable().into_owned()),
    };
    error!("{message}");
    Err((check.error_kind)(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_is_success() {
        assert!(raise_if_err(&"", OutputCheck::new()).is_ok());
        assert!(raise_if_err(&String::new(), OutputCheck::new()).is_ok());
    }

    #[test]
    fn test_any_output_is_error_without_filter() {
        let err = raise_if_err(&"Error: cannot find pool", OutputCheck::new()).unwrap_err();
        assert!(matches!(err, ArrayError::Command(_)));
    }

    #[test]
    fn test_expected_filter_matches() {
        let out = "Error: cannot find pool";
        let err = raise_if_err(
            &out,
            OutputCheck::new()
                .kind(ArrayError::PoolNotFound)
                .expected(&[FaultSignature::GeneralNotFound]),
        )
        .unwrap_err();
        assert!(matches!(err, ArrayError::PoolNotFound(_)));
    }

    #[test]
    fn test_expected_filter_ignores_unrelated_output() {
        // Non-empty output that misses the filter is not this call's
        // error to raise.
        let out = "Error: cannot find pool";
        let result = raise_if_err(
            &out,
            OutputCheck::new().expected(&[FaultSignature::SgNameInUse]),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_caller_message_gets_output_as_detail() {
        let err = raise_if_err(
            &"raw vendor text",
            OutputCheck::new().message("creating pool p0 failed"),
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("creating pool p0 failed"));
        assert!(text.contains("detail:\nraw vendor text"));
    }

    struct WithStatus;

    impl FaultSource for WithStatus {
        fn raw_output(&self) -> RawOutput {
            RawOutput::from("something broke")
        }

        fn status_message(&self) -> Option<String> {
            Some("command returned 1: something broke".to_string())
        }
    }

    #[test]
    fn test_status_message_preferred_over_raw_text() {
        let err = raise_if_err(&WithStatus, OutputCheck::new()).unwrap_err();
        assert!(err.to_string().contains("command returned 1"));
    }
}
