//! Positional decoder.
//!
//! Walks a normalized code field by field against a [`FieldCatalog`],
//! consuming literal overrides or the nominal width, validating content per
//! the configured [`MalformedPolicy`] and substituting standard values when
//! the input runs out.

/// Decoder policy configuration.
pub mod options;

use orderkey_catalog::{Family, FieldCatalog, FieldSpec};
use orderkey_diagnostics::{Diagnostic, Span, codes};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::normalize::normalize;
use options::{DecodeOptions, IncompletePolicy, MalformedPolicy};

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Separator used by [`DecodeResult::formatted_code`].
pub const SEPARATOR: &str = "-";

/// One field of a decoded code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    /// 1-based position in the catalog.
    pub index: usize,
    /// Field label.
    pub name: &'static str,
    /// Extracted characters, or the field's standard value.
    pub value: String,
    /// Human-readable meaning of `value`.
    pub description: String,
    /// Whether `value` is the standard value rather than input.
    pub defaulted: bool,
    /// Characters of the normalized code this field was read from.
    /// Absent when defaulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeResult {
    /// Detected product family.
    pub family: Family,
    /// Product label (e.g. `"DSX - Schlitzdurchlass"`).
    pub product_label: &'static str,
    /// The normalized input the fields were read from.
    pub normalized: String,
    /// Field values joined by [`SEPARATOR`].
    pub formatted_code: String,
    /// One entry per catalog field, in order.
    pub fields: Vec<DecodedField>,
    /// Whether any field carries its standard value.
    pub any_defaulted: bool,
    /// Recoverable findings: defaulted, malformed and trailing input.
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodeResult {
    /// Look up a decoded field by name.
    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields filled with standard values.
    pub fn defaulted_fields(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.iter().filter(|f| f.defaulted)
    }
}

// ─── Public API ─────────────────────────────────────────────────────────────

/// Decode a raw code, selecting the family catalog by its prefix.
///
/// The input may use any case and may or may not contain hyphens.
pub fn decode(raw: &str, options: &DecodeOptions) -> Result<DecodeResult, DecodeError> {
    let code = normalize(raw);
    if code.is_empty() {
        return Err(DecodeError::MissingInput);
    }
    let Some(family) = Family::detect(&code) else {
        debug!(code = %code, "no family prefix matched");
        return Err(DecodeError::UnknownFamily {
            supported: Family::supported_list(),
        });
    };
    debug!(family = %family, code = %code, "dispatching to family catalog");
    decode_with_catalog(family.catalog(), &code, options)
}

/// Decode an already-normalized code against one catalog.
///
/// Fails with [`DecodeError::WrongFamily`] when `code` does not start with
/// the catalog's prefix.
pub fn decode_with_catalog(
    catalog: &'static FieldCatalog,
    code: &str,
    options: &DecodeOptions,
) -> Result<DecodeResult, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::MissingInput);
    }
    if !code.starts_with(catalog.family.prefix()) {
        return Err(DecodeError::WrongFamily {
            expected: catalog.family,
        });
    }
    Decoder::new(catalog, code, options).run()
}

// ─── Decoder Implementation ────────────────────────────────────────────────

struct Decoder<'a> {
    catalog: &'static FieldCatalog,
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
    options: &'a DecodeOptions,
    fields: Vec<DecodedField>,
    diags: Vec<Diagnostic>,
}

/// Content proposed for a field before validation.
struct Candidate {
    value: String,
    len: usize,
    literal: bool,
}

impl<'a> Decoder<'a> {
    fn new(catalog: &'static FieldCatalog, input: &'a str, options: &'a DecodeOptions) -> Self {
        Self {
            catalog,
            input,
            chars: input.chars().collect(),
            pos: 0,
            options,
            fields: Vec::with_capacity(catalog.len()),
            diags: Vec::new(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.pos)
    }

    fn rest(&self) -> String {
        self.chars[self.pos.min(self.chars.len())..].iter().collect()
    }

    /// Up to `n` characters from the cursor.
    fn peek(&self, n: usize) -> String {
        let end = (self.pos + n).min(self.chars.len());
        self.chars[self.pos..end].iter().collect()
    }

    fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    fn candidate(&self, spec: &FieldSpec) -> Candidate {
        if let Some(lit) = spec.width.match_literal(&self.rest()) {
            trace!(field = spec.name, literal = lit, "literal width override");
            return Candidate {
                value: lit.to_string(),
                len: lit.chars().count(),
                literal: true,
            };
        }
        let len = spec.width.nominal.min(self.remaining());
        Candidate {
            value: self.peek(len),
            len,
            literal: false,
        }
    }

    fn run(mut self) -> Result<DecodeResult, DecodeError> {
        let catalog = self.catalog;
        for (i, spec) in catalog.fields.iter().enumerate() {
            let index = i + 1;

            if self.at_end() {
                if self.options.incomplete == IncompletePolicy::Reject {
                    return Err(self.incomplete(spec));
                }
                self.push_default(index, spec);
                continue;
            }

            let cand = self.candidate(spec);
            if !cand.literal
                && cand.len < spec.width.nominal
                && self.options.incomplete == IncompletePolicy::Reject
            {
                return Err(self.incomplete(spec));
            }

            if cand.literal || spec.rule.accepts(&cand.value, spec.width.nominal) {
                self.push_consumed(index, spec, cand);
                continue;
            }

            let span = Span::new(self.pos, self.pos + cand.len);
            let policy = self.options.malformed;
            self.diags.push(
                Diagnostic::warn(
                    codes::FIELD_MALFORMED,
                    format!("{}: unbekannter Wert '{}'", spec.name, cand.value),
                    Some(span),
                )
                .with_context(ctx!(
                    "field" => spec.name,
                    "value" => cand.value.as_str(),
                    "default" => spec.default,
                )),
            );
            debug!(field = spec.name, value = %cand.value, ?policy, "malformed field");
            match policy {
                MalformedPolicy::Accept => self.push_consumed(index, spec, cand),
                MalformedPolicy::Stall => self.push_default(index, spec),
                MalformedPolicy::Skip => {
                    self.advance(cand.len);
                    self.push_default(index, spec);
                }
            }
        }

        if !self.at_end() {
            let rest = self.rest();
            self.diags.push(
                Diagnostic::warn(
                    codes::TRAILING_INPUT,
                    format!("Überzählige Zeichen am Ende ignoriert: '{rest}'"),
                    Some(Span::new(self.pos, self.chars.len())),
                )
                .with_context(ctx!("rest" => rest.as_str())),
            );
        }

        let formatted_code = self
            .fields
            .iter()
            .map(|f| f.value.as_str())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let any_defaulted = self.fields.iter().any(|f| f.defaulted);

        Ok(DecodeResult {
            family: catalog.family,
            product_label: catalog.family.label(),
            normalized: self.input.to_string(),
            formatted_code,
            fields: self.fields,
            any_defaulted,
            diagnostics: self.diags,
        })
    }

    fn incomplete(&self, spec: &FieldSpec) -> DecodeError {
        DecodeError::IncompleteCode {
            family: self.catalog.family,
            field: spec.name,
        }
    }

    fn push_consumed(&mut self, index: usize, spec: &'static FieldSpec, cand: Candidate) {
        let span = Span::new(self.pos, self.pos + cand.len);
        self.advance(cand.len);
        debug!(index, field = spec.name, value = %cand.value, "decoded field");
        self.fields.push(DecodedField {
            index,
            name: spec.name,
            description: spec.describe(&cand.value),
            value: cand.value,
            defaulted: false,
            span: Some(span),
        });
    }

    fn push_default(&mut self, index: usize, spec: &'static FieldSpec) {
        debug!(index, field = spec.name, value = spec.default, "defaulted field");
        self.diags.push(
            Diagnostic::info(
                codes::FIELD_DEFAULTED,
                format!("{}: Standardwert '{}' verwendet", spec.name, spec.default),
                Some(Span::empty(self.pos)),
            )
            .with_context(ctx!("field" => spec.name, "default" => spec.default)),
        );
        self.fields.push(DecodedField {
            index,
            name: spec.name,
            value: spec.default.to_string(),
            description: spec.describe(spec.default),
            defaulted: true,
            span: None,
        });
    }
}
