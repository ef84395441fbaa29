//! Shared test helpers for `orderkey_core` integration tests.

#![allow(unreachable_pub)]

use orderkey_core::{DecodeOptions, DecodeResult, decode};

/// Canonical complete codes, one per family, with their expected field counts.
#[allow(dead_code)]
pub const CANONICAL: &[(&str, usize)] = &[
    ("DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0", 12),
    ("ASK-21-2-N-01000-VM-SV-DK2-GD1-I0-KHS-KVS-S1-SDS-E0", 15),
    ("EW-21-2-S0-ELOX-B9005-090-000-000", 9),
];

/// Decode with default options, panicking with the error on failure.
#[allow(dead_code)]
pub fn decode_ok(code: &str) -> DecodeResult {
    decode(code, &DecodeOptions::default())
        .unwrap_or_else(|e| panic!("expected {code:?} to decode, got: {e}"))
}

/// Field values in order.
#[allow(dead_code)]
pub fn values(result: &DecodeResult) -> Vec<&str> {
    result.fields.iter().map(|f| f.value.as_str()).collect()
}

/// Diagnostic IDs in order.
#[allow(dead_code)]
pub fn diag_ids(result: &DecodeResult) -> Vec<String> {
    result.diagnostics.iter().map(|d| d.id.to_string()).collect()
}
