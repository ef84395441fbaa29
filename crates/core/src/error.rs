//! Hard decode / compare failures.

use std::collections::BTreeMap;

use orderkey_catalog::Family;
use orderkey_diagnostics::{Diagnostic, codes};

/// Conditions that prevent a code from being decoded at all.
///
/// Everything recoverable (defaulted, malformed or trailing fields) is
/// reported as a [`Diagnostic`] on a successful result instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No code was given, or it normalized to an empty string.
    #[error("Code ist erforderlich")]
    MissingInput,

    /// One or both codes of a comparison are empty.
    #[error("Beide Codes sind erforderlich")]
    MissingCompareInput,

    /// The code does not start with a known family prefix.
    #[error("Unbekannter Produkttyp. Unterstützt: {supported}")]
    UnknownFamily {
        /// Comma-separated list of supported prefixes.
        supported: String,
    },

    /// The code was decoded against a family it does not belong to.
    #[error("Code muss mit '{expected}' beginnen")]
    WrongFamily {
        /// Family whose prefix was required.
        expected: Family,
    },

    /// The code ended before `field` (only with `IncompletePolicy::Reject`).
    #[error("Unvollständiger Code: Feld '{field}' fehlt")]
    IncompleteCode {
        /// Family being decoded.
        family: Family,
        /// First missing field.
        field: &'static str,
    },
}

impl DecodeError {
    /// Stable diagnostic ID for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::MissingInput | DecodeError::MissingCompareInput => codes::MISSING_INPUT,
            DecodeError::UnknownFamily { .. } => codes::UNKNOWN_FAMILY,
            DecodeError::WrongFamily { .. } => codes::WRONG_FAMILY,
            DecodeError::IncompleteCode { .. } => codes::INCOMPLETE_CODE,
        }
    }

    /// Short machine-readable error kind (`snake_case`).
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::MissingInput | DecodeError::MissingCompareInput => "missing_input",
            DecodeError::UnknownFamily { .. } => "unknown_family",
            DecodeError::WrongFamily { .. } => "wrong_family",
            DecodeError::IncompleteCode { .. } => "incomplete_code",
        }
    }

    /// Convert into an error [`Diagnostic`] with structured context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string(), None);
        match self {
            DecodeError::UnknownFamily { supported } => {
                diag.with_context(BTreeMap::from([("supported".into(), supported.clone())]))
            }
            DecodeError::WrongFamily { expected } => {
                diag.with_context(BTreeMap::from([("expected".into(), expected.to_string())]))
            }
            DecodeError::IncompleteCode { family, field } => diag.with_context(BTreeMap::from([
                ("family".into(), family.to_string()),
                ("field".into(), (*field).to_string()),
            ])),
            _ => diag,
        }
    }
}
