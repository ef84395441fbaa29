//! Terminal rendering: decode tables, compare reports and ariadne
//! diagnostics.
//!
//! Pretty output goes to stdout for results and to stderr for diagnostics.
//! JSON rendering lives in `main.rs` next to the commands that build it.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use orderkey_catalog::{FieldCatalog, Shape};
use orderkey_core::{CompareResult, DecodeResult};
use orderkey_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for results and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-readable output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Use the explicit choice, else pretty for terminals and JSON for pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: &Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warn => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

// ── Decode ──────────────────────────────────────────────────────────────

/// Print a decode result as a field table.
pub(crate) fn print_decode(result: &DecodeResult) {
    println!("{}", result.product_label.fg(Color::Cyan));
    println!("{}", result.formatted_code);
    println!();

    let name_w = column_width(result.fields.iter().map(|f| f.name));
    let value_w = column_width(result.fields.iter().map(|f| f.value.as_str()));

    for f in &result.fields {
        let marker = if f.defaulted { "*" } else { " " };
        println!(
            " {:02}  {:<name_w$}  {:<value_w$}{}  {}",
            f.index,
            f.name,
            f.value,
            marker.fg(Color::Yellow),
            f.description
        );
    }

    if result.any_defaulted {
        println!();
        println!(
            "{}",
            "* Standardwert (Code gekürzt oder Feld nicht erkannt)".fg(Color::Yellow)
        );
    }
}

// ── Compare ─────────────────────────────────────────────────────────────

/// Print a compare result.
pub(crate) fn print_compare(result: &CompareResult) {
    if result.identical {
        println!("{}", "Die Codes sind identisch.".fg(Color::Green));
        if let Some(code) = &result.formatted_code {
            println!("{code}");
        }
        return;
    }

    println!("{}", "Die Codes unterscheiden sich.".fg(Color::Red));
    println!(
        "  Code 1: {}",
        result.formatted_code1.as_deref().unwrap_or("(ungültig)")
    );
    println!(
        "  Code 2: {}",
        result.formatted_code2.as_deref().unwrap_or("(ungültig)")
    );
    println!();
    for d in &result.differences {
        println!("  - {d}");
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────

/// Print a field catalog as a layout table.
pub(crate) fn print_catalog(catalog: &FieldCatalog) {
    println!("{}", catalog.family.label().fg(Color::Cyan));
    println!("Beispiel: {}", catalog.example);
    let name_w = column_width(catalog.fields.iter().map(|f| f.name));
    for (i, f) in catalog.fields.iter().enumerate() {
        let width = if f.width.literals.is_empty() {
            f.width.nominal.to_string()
        } else {
            format!("{}|{}", f.width.nominal, f.width.literals.join("|"))
        };
        let mut allowed: Vec<&str> = f.rule.allowed.to_vec();
        if let Some(shape) = f.rule.shape {
            allowed.push(match shape {
                Shape::Any => "*",
                Shape::Digits => "0-9",
                Shape::PrefixedDigits(p) => p,
            });
        }
        println!(
            " {:02}  {:<name_w$}  {:<8}  Standard {:<6}  {}",
            i + 1,
            f.name,
            width,
            f.default,
            allowed.join(", ")
        );
    }
}

fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(|s| s.chars().count()).max().unwrap_or(0)
}

// ── Diagnostics ─────────────────────────────────────────────────────────

/// Render diagnostics against the normalized code to stderr.
///
/// Diagnostics with a non-empty span are underlined in the code; others are
/// printed as standalone messages.
pub(crate) fn render_diagnostics_pretty(source: &str, filename: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);
    let len = source.chars().count();
    let mut cache = (filename, Source::from(source));

    for diag in diagnostics {
        match &diag.span {
            Some(span) if !span.is_empty() => {
                let start = span.start.min(len);
                let end = span.end.min(len).max(start);

                let mut builder =
                    Report::build(report_kind(&diag.severity), (filename, start..end))
                        .with_code(diag.id.as_ref())
                        .with_message(&diag.message)
                        .with_config(config);

                builder = builder.with_label(
                    Label::new((filename, start..end))
                        .with_message(make_label_message(diag))
                        .with_color(severity_color(&diag.severity)),
                );

                if let Some(explanation) = diag.explain() {
                    builder = builder.with_help(explanation);
                }

                builder.finish().eprint(&mut cache).ok();
            }
            _ => {
                let kind_str = match diag.severity {
                    Severity::Error => "error",
                    Severity::Warn => "warning",
                    Severity::Info => "info",
                    _ => "diagnostic",
                };
                eprintln!("{kind_str}[{}]: {}", diag.id, diag.message);
                if let Some(ctx) = &diag.context {
                    let note: String = ctx
                        .iter()
                        .map(|(k, v)| format!("{k}={v}"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    eprintln!("  = note: {note}");
                }
                if let Some(explanation) = diag.explain() {
                    eprintln!("  = help: {explanation}");
                }
            }
        }
    }
}

/// Compact label from diagnostic context, or the message when there is none.
fn make_label_message(diag: &Diagnostic) -> String {
    if let Some(ctx) = &diag.context
        && !ctx.is_empty()
    {
        ctx.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        diag.message.clone()
    }
}

/// Print a coloured summary line for warnings and errors.
///
/// Example: `1 error, 2 warnings`
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    let (mut errors, mut warnings) = (0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Info => {}
            _ => warnings += 1,
        }
    }
    if errors + warnings == 0 {
        return;
    }

    let mut parts = Vec::new();
    if errors > 0 {
        let s = if errors == 1 { "" } else { "s" };
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    eprintln!("{}", parts.join(", "));
}
