//! Matcher configuration.

use annot_core::errors::{codes, AnnotError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// What happens when an expected value targets a kind without a
/// comparison rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKindPolicy {
    /// Presence is asserted and the value is ignored.
    #[default]
    Permissive,
    /// The call fails with `annot.unsupported_kind`.
    Strict,
}

/// Options controlling how the matcher reports violations.
///
/// ```toml
/// unknown_kind_policy = "strict"
/// report_all = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherOptions {
    pub unknown_kind_policy: UnknownKindPolicy,
    /// Check every requested kind and report all violations together
    /// instead of stopping at the first one.
    pub report_all: bool,
}

impl MatcherOptions {
    pub fn strict() -> Self {
        Self {
            unknown_kind_policy: UnknownKindPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_report_all(mut self, report_all: bool) -> Self {
        self.report_all = report_all;
        self
    }

    /// Parses options from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AnnotError> {
        toml::from_str(contents).map_err(|err| {
            AnnotError::Usage(ErrorInfo::new(codes::OPTIONS_PARSE, err.to_string()))
        })
    }

    pub fn to_toml_string(&self) -> Result<String, AnnotError> {
        toml::to_string(self).map_err(|err| {
            AnnotError::Usage(ErrorInfo::new(codes::OPTIONS_PARSE, err.to_string()))
        })
    }
}
