//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete.  `OK1xxx` IDs are hard failures, `OK2xxx` IDs are
//! recoverable conditions attached to a successful decode.

/// The code (or one of the two codes to compare) is empty.
pub const MISSING_INPUT: &str = "OK1001";

/// The code does not start with any supported family prefix.
pub const UNKNOWN_FAMILY: &str = "OK1002";

/// The code was decoded against a family whose prefix it does not carry.
pub const WRONG_FAMILY: &str = "OK1003";

/// The code ended before a required field (strict completeness only).
pub const INCOMPLETE_CODE: &str = "OK1004";

/// A field was filled with its standard value.
pub const FIELD_DEFAULTED: &str = "OK2001";

/// A field's content did not match its accepted values.
pub const FIELD_MALFORMED: &str = "OK2002";

/// Characters remained after the last field.
pub const TRAILING_INPUT: &str = "OK2003";

/// Every known diagnostic ID, in numeric order.
pub const ALL: &[&str] = &[
    MISSING_INPUT,
    UNKNOWN_FAMILY,
    WRONG_FAMILY,
    INCOMPLETE_CODE,
    FIELD_DEFAULTED,
    FIELD_MALFORMED,
    TRAILING_INPUT,
];
