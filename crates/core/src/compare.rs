//! Semantic comparison of two order codes.

use orderkey_catalog::Family;
use serde::Serialize;
use tracing::debug;

use crate::decode::{decode, options::DecodeOptions};
use crate::error::DecodeError;
use crate::normalize::normalize;

/// Maximum number of differences reported by [`compare`].
pub const MAX_DIFFERENCES: usize = 10;

/// A single mismatch between two normalized codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Difference {
    /// The codes belong to different product families.
    Family {
        /// Family tag of the first code.
        left: String,
        /// Family tag of the second code.
        right: String,
    },
    /// The normalized codes differ in length (characters).
    Length {
        /// Length of the first code.
        left: usize,
        /// Length of the second code.
        right: usize,
    },
    /// The characters at a 1-based position differ; `None` marks a position
    /// past the end of the shorter code.
    Position {
        /// 1-based character position.
        position: usize,
        /// Character in the first code.
        left: Option<char>,
        /// Character in the second code.
        right: Option<char>,
    },
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difference::Family { left, right } => {
                write!(f, "Unterschiedliche Produkttypen: {left} vs {right}")
            }
            Difference::Length { left, right } => {
                write!(f, "Unterschiedliche Längen: {left} vs {right} Zeichen")
            }
            Difference::Position {
                position,
                left,
                right,
            } => write!(
                f,
                "Position {position}: '{}' vs '{}'",
                missing_or(*left),
                missing_or(*right)
            ),
        }
    }
}

fn missing_or(c: Option<char>) -> String {
    c.map_or_else(|| "(fehlt)".to_string(), |c| c.to_string())
}

/// Outcome of comparing two codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareResult {
    /// Whether both codes normalize to the same string.
    pub identical: bool,
    /// Formatted form of the shared code (identical codes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_code: Option<String>,
    /// Formatted first code; `None` when identical or when it cannot be decoded.
    pub formatted_code1: Option<String>,
    /// Formatted second code; `None` when identical or when it cannot be decoded.
    pub formatted_code2: Option<String>,
    /// Ordered differences, at most [`MAX_DIFFERENCES`].
    pub differences: Vec<Difference>,
}

/// Compare two raw codes, ignoring hyphens, surrounding whitespace and case.
///
/// Decode failures of either side do not abort the comparison; the
/// corresponding formatted code is reported as `None`.
pub fn compare(
    code1: &str,
    code2: &str,
    options: &DecodeOptions,
) -> Result<CompareResult, DecodeError> {
    let clean1 = normalize(code1);
    let clean2 = normalize(code2);
    if clean1.is_empty() || clean2.is_empty() {
        return Err(DecodeError::MissingCompareInput);
    }

    if clean1 == clean2 {
        let formatted = decode(&clean1, options)
            .map(|r| r.formatted_code)
            .unwrap_or_else(|_| clean1.clone());
        return Ok(CompareResult {
            identical: true,
            formatted_code: Some(formatted),
            formatted_code1: None,
            formatted_code2: None,
            differences: Vec::new(),
        });
    }

    let formatted_code1 = decode(&clean1, options).ok().map(|r| r.formatted_code);
    let formatted_code2 = decode(&clean2, options).ok().map(|r| r.formatted_code);
    let differences = differences(&clean1, &clean2);
    debug!(count = differences.len(), "codes differ");

    Ok(CompareResult {
        identical: false,
        formatted_code: None,
        formatted_code1,
        formatted_code2,
        differences,
    })
}

/// Family tag used for the family check: the detected prefix, or the first
/// three characters when no family matches.
fn family_tag(code: &str) -> String {
    match Family::detect(code) {
        Some(f) => f.prefix().to_string(),
        None => code.chars().take(3).collect(),
    }
}

/// Family, length, then per-position differences, capped at [`MAX_DIFFERENCES`].
fn differences(clean1: &str, clean2: &str) -> Vec<Difference> {
    let mut out = Vec::new();

    let (tag1, tag2) = (family_tag(clean1), family_tag(clean2));
    if tag1 != tag2 {
        out.push(Difference::Family {
            left: tag1,
            right: tag2,
        });
    }

    let a: Vec<char> = clean1.chars().collect();
    let b: Vec<char> = clean2.chars().collect();
    if a.len() != b.len() {
        out.push(Difference::Length {
            left: a.len(),
            right: b.len(),
        });
    }

    for i in 0..a.len().max(b.len()) {
        if out.len() >= MAX_DIFFERENCES {
            break;
        }
        let (l, r) = (a.get(i).copied(), b.get(i).copied());
        if l != r {
            out.push(Difference::Position {
                position: i + 1,
                left: l,
                right: r,
            });
        }
    }

    out.truncate(MAX_DIFFERENCES);
    out
}
