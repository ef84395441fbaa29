/// Canonical form of a raw order code: hyphens removed, surrounding
/// whitespace trimmed, letters upper-cased.
///
/// Never fails; an empty (or all-separator) input yields an empty string.
pub fn normalize(raw: &str) -> String {
    raw.replace('-', "").trim().to_uppercase()
}
