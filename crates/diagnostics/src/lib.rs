//! Diagnostics for the orderkey toolchain.
//!
//! Provides [`Diagnostic`], [`Severity`] and [`Span`] used to report hard
//! failures and recoverable conditions (defaulted fields, malformed fields,
//! trailing input) from the decoder. Diagnostic codes are defined in the
//! [`codes`] module.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error: the code cannot be decoded.
    Error,
    /// Warning: the code decoded, but part of it was not understood.
    Warn,
    /// Informational note.
    Info,
}

/// Character span in a normalized order code.
///
/// Offsets count characters, not bytes, since codes are displayed and
/// compared character by character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first character (0-based).
    pub start: usize,
    /// Offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A diagnostic message produced by the decoder or comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"OK2001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional character span in the normalized code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling. Keys and values are free-form strings.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, span)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Info, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Keys are short descriptors like `"field"`, `"value"`, `"default"`.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }

    /// Whether this diagnostic is a hard error.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::MISSING_INPUT => Some(
            "No order code was given. Decoding needs one code, comparing needs two; \
             a code consisting only of hyphens and whitespace counts as empty.",
        ),
        codes::UNKNOWN_FAMILY => Some(
            "The code does not start with a supported product family prefix. \
             Supported families are DSX (Schlitzdurchlass), ASK (Anschlusskasten) \
             and EW (Eckwinkel).",
        ),
        codes::WRONG_FAMILY => Some(
            "The code was decoded against a specific family catalog but does not \
             carry that family's prefix.",
        ),
        codes::INCOMPLETE_CODE => Some(
            "The code ended before all fields were read. Only reported when \
             incomplete codes are rejected instead of filled with standard values.",
        ),
        codes::FIELD_DEFAULTED => Some(
            "A field was not present in the code (or was not understood) and its \
             standard value was used instead.",
        ),
        codes::FIELD_MALFORMED => Some(
            "A field's characters do not match the values or shape accepted for it. \
             Depending on the decode policy the raw characters are kept or replaced \
             by the field's standard value.",
        ),
        codes::TRAILING_INPUT => Some(
            "Characters remain after the last field of the product family. They are \
             ignored and not part of the formatted code.",
        ),
        _ => None,
    }
}
