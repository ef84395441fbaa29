//! Decode policy configuration.

use serde::Serialize;

/// Decoder configuration: how to treat malformed and missing fields.
///
/// The same options apply to every family catalog.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeOptions {
    /// What to do when a field's content fails its value rule.
    pub malformed: MalformedPolicy,
    /// What to do when the code ends before the last field.
    pub incomplete: IncompletePolicy,
}

impl DecodeOptions {
    /// Accept any content of the right width; only end-of-input defaults.
    pub fn lenient() -> Self {
        Self {
            malformed: MalformedPolicy::Accept,
            incomplete: IncompletePolicy::FillDefaults,
        }
    }

    /// Set the malformed-field policy (builder pattern).
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Set the incomplete-code policy (builder pattern).
    pub fn with_incomplete(mut self, policy: IncompletePolicy) -> Self {
        self.incomplete = policy;
        self
    }
}

/// Handling of a field whose content does not match its value rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedPolicy {
    /// Keep the raw characters and advance (a warning is still emitted).
    Accept,
    /// Use the default value without advancing the cursor. The next field
    /// is read from the same offset.
    Stall,
    /// Use the default value and advance by the nominal width.
    #[default]
    Skip,
}

/// Handling of a code that ends before its last field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IncompletePolicy {
    /// Fill the missing fields with their standard values.
    #[default]
    FillDefaults,
    /// Fail with [`DecodeError::IncompleteCode`](crate::DecodeError::IncompleteCode).
    Reject,
}
