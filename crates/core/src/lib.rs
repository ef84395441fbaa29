//! orderkey core library.
//!
//! Normalizes, decodes and compares order codes (Bestellschlüssel) of the
//! DSX, ASK and EW product families.  The main entry points are [`decode`]
//! for a single code and [`compare`] for two codes; both take
//! [`DecodeOptions`] selecting how malformed and incomplete codes are handled.

#![warn(missing_docs)]

/// Comparison of two codes.
pub mod compare;
/// Positional decoder and decode options.
pub mod decode;
/// JSON serialization helpers.
pub mod dump;
/// Hard failures.
pub mod error;
/// Code normalization.
pub mod normalize;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Decoder
pub use decode::options::{DecodeOptions, IncompletePolicy, MalformedPolicy};
pub use decode::{DecodeResult, DecodedField, SEPARATOR, decode, decode_with_catalog};

// Comparator
pub use compare::{CompareResult, Difference, MAX_DIFFERENCES, compare};

// Errors and diagnostics
pub use error::DecodeError;
pub use orderkey_diagnostics::{Diagnostic, Severity, Span, codes};

// Catalogs
pub use orderkey_catalog::{Family, FieldCatalog};

// Helpers
pub use dump::to_pretty_json;
pub use normalize::normalize;
