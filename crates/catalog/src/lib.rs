//! Order-code field catalogs.
//!
//! Defines the declarative data that drives the positional decoder: one
//! [`FieldCatalog`] per product [`Family`], each an ordered list of
//! [`FieldSpec`]s describing width, accepted values, default value and the
//! description lookup for a single field.  The catalogs are plain `'static`
//! data; nothing in this crate holds mutable state.

use serde::Serialize;

mod ask;
mod dsx;
mod ew;

pub use ask::ASK;
pub use dsx::DSX;
pub use ew::EW;

// ─── Families ───────────────────────────────────────────────────────────────

/// A supported product family, identified by the literal prefix of its codes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Family {
    /// Schlitzdurchlass (slot diffuser), prefix `DSX`.
    Dsx,
    /// Anschlusskasten (plenum box), prefix `ASK`.
    Ask,
    /// Eckwinkel (corner piece), prefix `EW`.
    Ew,
}

impl Family {
    /// All families in dispatch order: longest prefix first.
    pub const ALL: [Family; 3] = [Family::Dsx, Family::Ask, Family::Ew];

    /// Literal prefix every code of this family starts with.
    pub fn prefix(self) -> &'static str {
        match self {
            Family::Dsx => "DSX",
            Family::Ask => "ASK",
            Family::Ew => "EW",
        }
    }

    /// Product label shown next to a decoded code.
    pub fn label(self) -> &'static str {
        match self {
            Family::Dsx => "DSX - Schlitzdurchlass",
            Family::Ask => "ASK - Anschlusskasten",
            Family::Ew => "EW - Eckwinkel",
        }
    }

    /// The field catalog for this family.
    pub fn catalog(self) -> &'static FieldCatalog {
        match self {
            Family::Dsx => &DSX,
            Family::Ask => &ASK,
            Family::Ew => &EW,
        }
    }

    /// Select the family whose prefix starts `code`.
    ///
    /// `code` must already be normalized (upper-case, no separators).
    /// Prefixes are tested longest first so a 3-character tag always wins
    /// over a 2-character one.
    pub fn detect(code: &str) -> Option<Family> {
        let mut families = Self::ALL;
        families.sort_by_key(|f| std::cmp::Reverse(f.prefix().len()));
        families.into_iter().find(|f| code.starts_with(f.prefix()))
    }

    /// Parse a family name case-insensitively (`"dsx"`, `"EW"`, ...).
    pub fn from_name(name: &str) -> Option<Family> {
        Self::ALL
            .into_iter()
            .find(|f| f.prefix().eq_ignore_ascii_case(name.trim()))
    }

    /// Comma-separated list of supported prefixes, in dispatch order.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|f| f.prefix())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// Ordered field layout of one product family.
///
/// The first field is always the family prefix literal.  Taken in order, the
/// nominal widths (with literal branches applied) partition a well-formed
/// code with no gaps or overlaps.
#[derive(Debug, Serialize)]
pub struct FieldCatalog {
    /// Family this catalog belongs to.
    pub family: Family,
    /// Field specifications in code order.
    pub fields: &'static [FieldSpec],
    /// A complete, canonical example code (hyphenated).
    pub example: &'static str,
}

impl FieldCatalog {
    /// Number of fields every decode of this family produces.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog has no fields (never true for the built-in ones).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field spec by its display name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Specification of a single positional field.
#[derive(Debug, Serialize)]
pub struct FieldSpec {
    /// Display name (German field label).
    pub name: &'static str,
    /// How many characters the field occupies.
    pub width: FieldWidth,
    /// Which raw values are considered well-formed.
    pub rule: ValueRule,
    /// Value substituted when the input is exhausted or malformed.
    pub default: &'static str,
    /// Value → description lookup.
    pub describe: Describe,
}

impl FieldSpec {
    /// Human-readable description of `value`.
    pub fn describe(&self, value: &str) -> String {
        self.describe.describe(value)
    }
}

/// Width rule for a field.
#[derive(Debug, Serialize)]
pub struct FieldWidth {
    /// Characters consumed when no literal matches.
    pub nominal: usize,
    /// Literals tested at the cursor before falling back to `nominal`.
    /// A match consumes the literal's own length.
    pub literals: &'static [&'static str],
}

impl FieldWidth {
    /// Plain fixed-width field.
    pub const fn fixed(nominal: usize) -> Self {
        Self {
            nominal,
            literals: &[],
        }
    }

    /// Fixed width with literal overrides (e.g. `ELOX` on a 2-char field).
    pub const fn with_literals(nominal: usize, literals: &'static [&'static str]) -> Self {
        Self { nominal, literals }
    }

    /// Return the literal matching the start of `rest`, longest first.
    pub fn match_literal(&self, rest: &str) -> Option<&'static str> {
        let mut best: Option<&'static str> = None;
        for lit in self.literals {
            if rest.starts_with(lit) && best.is_none_or(|b| lit.len() > b.len()) {
                best = Some(lit);
            }
        }
        best
    }
}

/// Character-class shape a raw value may match.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    /// Anything of the nominal width is accepted.
    Any,
    /// ASCII digits only, exactly the nominal width.
    Digits,
    /// The given prefix followed by ASCII digits up to the nominal width.
    PrefixedDigits(&'static str),
}

/// Acceptance rule for raw field content.
///
/// A value is well-formed iff it is one of `allowed` or matches `shape`.
#[derive(Debug, Serialize)]
pub struct ValueRule {
    /// Finite set of known-good values.
    pub allowed: &'static [&'static str],
    /// Optional shape accepted in addition to `allowed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
}

impl ValueRule {
    /// Accept any content.
    pub const ANY: ValueRule = ValueRule {
        allowed: &[],
        shape: Some(Shape::Any),
    };

    /// Only the listed values.
    pub const fn one_of(allowed: &'static [&'static str]) -> Self {
        Self {
            allowed,
            shape: None,
        }
    }

    /// Values of the given shape.
    pub const fn shaped(shape: Shape) -> Self {
        Self {
            allowed: &[],
            shape: Some(shape),
        }
    }

    /// Listed values, or anything of the given shape.
    pub const fn one_of_or(allowed: &'static [&'static str], shape: Shape) -> Self {
        Self {
            allowed,
            shape: Some(shape),
        }
    }

    /// Whether `value` is well-formed for a field of nominal width `width`.
    pub fn accepts(&self, value: &str, width: usize) -> bool {
        if self.allowed.contains(&value) {
            return true;
        }
        let len = value.chars().count();
        match self.shape {
            None => false,
            Some(Shape::Any) => len == width,
            Some(Shape::Digits) => len == width && value.bytes().all(|b| b.is_ascii_digit()),
            Some(Shape::PrefixedDigits(prefix)) => {
                len == width
                    && value
                        .strip_prefix(prefix)
                        .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            }
        }
    }
}

/// Description lookup: exact table match first, then a fallback.
#[derive(Debug, Serialize)]
pub struct Describe {
    /// Exact value → description pairs.
    pub table: &'static [(&'static str, &'static str)],
    /// Used when no table entry matches.
    pub fallback: Fallback,
}

impl Describe {
    /// Table lookup with the raw value as fallback.
    pub const fn table(table: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            table,
            fallback: Fallback::Raw,
        }
    }

    /// Table lookup with an explicit fallback.
    pub const fn with_fallback(
        table: &'static [(&'static str, &'static str)],
        fallback: Fallback,
    ) -> Self {
        Self { table, fallback }
    }

    /// Describe `value`.
    pub fn describe(&self, value: &str) -> String {
        if let Some((_, text)) = self.table.iter().find(|(k, _)| *k == value) {
            return (*text).to_string();
        }
        self.fallback.render(value)
    }
}

/// Formatting applied to values missing from a description table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Fallback {
    /// The raw value itself.
    Raw,
    /// Template with `{}` replaced by the raw value.
    Template(&'static str),
    /// `RAL <code>`, skipping the first `skip` characters of the value.
    Ral {
        /// Number of leading characters (e.g. an `L` or `B` tag) to drop.
        skip: usize,
    },
    /// Leading integer rendered as `<n> mm`; `0` when not numeric.
    Millimetres,
    /// Leading integer rendered as `<n>°`; `default` when zero or not numeric.
    Degrees {
        /// Angle used when the value carries no usable number.
        default: u32,
    },
}

impl Fallback {
    /// Render `value` through this fallback.
    pub fn render(self, value: &str) -> String {
        match self {
            Fallback::Raw => value.to_string(),
            Fallback::Template(t) => t.replace("{}", value),
            Fallback::Ral { skip } => {
                let code: String = value.chars().skip(skip).collect();
                format!("RAL {code}")
            }
            Fallback::Millimetres => format!("{} mm", leading_int(value).unwrap_or(0)),
            Fallback::Degrees { default } => {
                let n = leading_int(value).filter(|&n| n != 0).unwrap_or(default);
                format!("{n}°")
            }
        }
    }
}

/// Parse the leading run of ASCII digits, ignoring leading zeros.
fn leading_int(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

// ─── Shared field descriptions ──────────────────────────────────────────────
// The families share a handful of identical field layouts.

pub(crate) const AUSFUEHRUNG: &[(&str, &str)] = &[
    ("1", "1-schlitzig"),
    ("2", "2-schlitzig"),
    ("3", "3-schlitzig"),
    ("4", "4-schlitzig"),
];

pub(crate) const EINZEL_BAND: &[(&str, &str)] = &[
    ("N", "Einzelausführung (Standard)"),
    ("B", "Bandausführung"),
];

pub(crate) const DURCHLASS: &[(&str, &str)] = &[("21", "für DSX (Standard)")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_known_prefixes() {
        assert_eq!(Family::detect("DSX2Z"), Some(Family::Dsx));
        assert_eq!(Family::detect("ASK21"), Some(Family::Ask));
        assert_eq!(Family::detect("EW21"), Some(Family::Ew));
        assert_eq!(Family::detect("XYZ123"), None);
        assert_eq!(Family::detect(""), None);
        assert_eq!(Family::detect("E"), None);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Family::from_name("dsx"), Some(Family::Dsx));
        assert_eq!(Family::from_name(" Ew "), Some(Family::Ew));
        assert_eq!(Family::from_name("foo"), None);
    }

    #[test]
    fn supported_list_in_dispatch_order() {
        assert_eq!(Family::supported_list(), "DSX, ASK, EW");
    }

    #[test]
    fn literal_match_takes_longest() {
        let w = FieldWidth::with_literals(2, &["EL", "ELOX"]);
        assert_eq!(w.match_literal("ELOX9005"), Some("ELOX"));
        assert_eq!(w.match_literal("ELO"), Some("EL"));
        assert_eq!(w.match_literal("S0"), None);
    }

    #[test]
    fn value_rule_shapes() {
        assert!(ValueRule::shaped(Shape::Digits).accepts("01000", 5));
        assert!(!ValueRule::shaped(Shape::Digits).accepts("0100", 5));
        assert!(!ValueRule::shaped(Shape::Digits).accepts("01A00", 5));
        let ral = ValueRule::shaped(Shape::PrefixedDigits("L"));
        assert!(ral.accepts("L9005", 5));
        assert!(!ral.accepts("B9005", 5));
        assert!(!ral.accepts("L", 5));
        let khs = ValueRule::one_of_or(&["KHS"], Shape::Digits);
        assert!(khs.accepts("KHS", 3));
        assert!(khs.accepts("250", 3));
        assert!(!khs.accepts("KH", 3));
        assert!(ValueRule::ANY.accepts("SV", 2));
        assert!(!ValueRule::ANY.accepts("S", 2));
        assert!(!ValueRule::one_of(&["Z", "A"]).accepts("Q", 1));
    }

    #[test]
    fn fallbacks_render() {
        assert_eq!(Fallback::Raw.render("XY"), "XY");
        assert_eq!(Fallback::Template("{} mm").render("300"), "300 mm");
        assert_eq!(Fallback::Ral { skip: 0 }.render("3000"), "RAL 3000");
        assert_eq!(Fallback::Ral { skip: 1 }.render("B7016"), "RAL 7016");
        assert_eq!(Fallback::Millimetres.render("01000"), "1000 mm");
        assert_eq!(Fallback::Millimetres.render("ABCDE"), "0 mm");
        assert_eq!(Fallback::Degrees { default: 90 }.render("135"), "135°");
        assert_eq!(Fallback::Degrees { default: 90 }.render("000"), "90°");
    }

    #[test]
    fn describe_prefers_table() {
        let d = Describe::with_fallback(&[("9005", "schwarz")], Fallback::Ral { skip: 0 });
        assert_eq!(d.describe("9005"), "schwarz");
        assert_eq!(d.describe("7016"), "RAL 7016");
    }

    #[test]
    fn catalog_serializes_to_json() {
        let json = serde_json::to_value(Family::Ew.catalog()).expect("serialize catalog");
        assert_eq!(json["family"], "EW");
        assert_eq!(json["fields"][0]["name"], "Typ");
        assert_eq!(json["fields"][3]["width"]["literals"][0], "ELOX");
    }
}
