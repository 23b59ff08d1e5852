//! Structured error types shared across annot crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AnnotError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (kind, subject, expected value, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for annotation assertions.
///
/// `Usage` means the test itself is broken (a selector the resolver cannot
/// interpret, a member that was never registered). `Assertion` means the
/// subject under test does not carry what the test asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AnnotError {
    /// Caller usage defects.
    #[error("usage error: {0}")]
    Usage(ErrorInfo),
    /// Assertion failures against the subject under test.
    #[error("assertion failed: {0}")]
    Assertion(ErrorInfo),
}

impl AnnotError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AnnotError::Usage(info) | AnnotError::Assertion(info) => info,
        }
    }

    /// Whether the error is a usage defect in the calling test.
    pub fn is_usage(&self) -> bool {
        matches!(self, AnnotError::Usage(_))
    }

    /// Whether the error is an assertion failure against the subject.
    pub fn is_assertion(&self) -> bool {
        matches!(self, AnnotError::Assertion(_))
    }

    /// Stable code of the underlying payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Human readable message of the underlying payload.
    pub fn message(&self) -> &str {
        &self.info().message
    }
}

/// Error codes emitted by the annot crates.
pub mod codes {
    /// Selector body is not a single call or member access on the parameter.
    pub const INVALID_EXPRESSION_SHAPE: &str = "annot.invalid_expression_shape";
    /// Selector names a member the type never registered.
    pub const UNKNOWN_MEMBER: &str = "annot.unknown_member";
    /// Metadata declares the same member twice.
    pub const DUPLICATE_MEMBER: &str = "annot.duplicate_member";
    /// Matcher options could not be parsed.
    pub const OPTIONS_PARSE: &str = "annot.options_parse";
    /// A requested annotation kind is not attached to the subject.
    pub const MISSING_ANNOTATION: &str = "annot.missing_annotation";
    /// A canonical field differs from the expected value.
    pub const VALUE_MISMATCH: &str = "annot.value_mismatch";
    /// An expected value was supplied for a kind without a comparison rule.
    pub const UNSUPPORTED_KIND: &str = "annot.unsupported_kind";
}
