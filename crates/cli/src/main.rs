mod render;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use orderkey_catalog::Family;
use orderkey_core::{
    DecodeError, DecodeOptions, DecodeResult, IncompletePolicy, MalformedPolicy, Severity,
    compare, decode, to_pretty_json,
};
use orderkey_diagnostics as diag;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{
    Format, print_catalog, print_compare, print_decode, print_summary, render_diagnostics_pretty,
};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "ORDERKEY_LOG";

/// Sample codes listed by `orderkey examples`.
const EXAMPLES: &[(&str, &str)] = &[
    ("DSX vollständig", "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0"),
    ("DSX kurz", "DSX-2-Z"),
    ("ASK vollständig", "ASK-21-2-N-01000-VM-SV-DK2-GD1-I0-KHS-KVS-S1-SDS-E0"),
    ("EW vollständig", "EW-21-2-S0-ELOX-B9005-090-000-000"),
];

/// Sample pair listed by `orderkey examples` for `compare`.
const COMPARE_EXAMPLE: (&str, &str) = (
    "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0",
    "DSX-2-Z-S0-9005-L9005-B-N-01000-VM-ES-B0",
);

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "orderkey",
    version,
    about = "Decode and compare product order codes (DSX, ASK, EW)"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// What to do with a field whose content is not a known value.
    #[arg(long, global = true, value_enum, default_value_t = MalformedArg::Skip)]
    malformed: MalformedArg,

    /// What to do when a code ends before its last field.
    #[arg(long, global = true, value_enum, default_value_t = IncompleteArg::Fill)]
    incomplete: IncompleteArg,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode an order code into its fields. Use "-" to read from stdin.
    #[command(visible_alias = "d")]
    Decode { code: String },

    /// Compare two order codes position by position.
    #[command(visible_alias = "cmp")]
    Compare { code1: String, code2: String },

    /// Show the field layout of one family, or of all families.
    Catalog { family: Option<String> },

    /// Explain a diagnostic ID (e.g. OK2002).
    Explain { id: String },

    /// List sample codes.
    Examples,
}

/// Handling of malformed field content.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedArg {
    /// Keep the raw characters.
    Accept,
    /// Use the standard value without consuming input.
    Stall,
    /// Use the standard value and skip the field's width.
    Skip,
}

impl From<MalformedArg> for MalformedPolicy {
    fn from(a: MalformedArg) -> Self {
        match a {
            MalformedArg::Accept => MalformedPolicy::Accept,
            MalformedArg::Stall => MalformedPolicy::Stall,
            MalformedArg::Skip => MalformedPolicy::Skip,
        }
    }
}

/// Handling of codes that end early.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum IncompleteArg {
    /// Fill the missing fields with standard values.
    Fill,
    /// Fail with an incomplete-code error.
    Reject,
}

impl From<IncompleteArg> for IncompletePolicy {
    fn from(a: IncompleteArg) -> Self {
        match a {
            IncompleteArg::Fill => IncompletePolicy::FillDefaults,
            IncompleteArg::Reject => IncompletePolicy::Reject,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());
    let options = DecodeOptions::default()
        .with_malformed(cli.malformed.into())
        .with_incomplete(cli.incomplete.into());
    debug!(?options, "resolved decode options");

    let res = match cli.cmd {
        Cmd::Decode { code } => cmd_decode(&code, &options, format),
        Cmd::Compare { code1, code2 } => cmd_compare(&code1, &code2, &options, format),
        Cmd::Catalog { family } => cmd_catalog(family.as_deref(), format),
        Cmd::Explain { id } => cmd_explain(&id, format),
        Cmd::Examples => cmd_examples(format),
    };

    if let Err(err) = res {
        report_failure(&err, format);
        process::exit(1);
    }
}

/// Route log output to stderr, filtered by `ORDERKEY_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_decode(code: &str, options: &DecodeOptions, format: Format) -> Result<()> {
    let input = if code == "-" {
        read_stdin()?
    } else {
        code.to_string()
    };
    let res = decode(&input, options)?;

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&decode_json(&res))?);
        }
        Format::Pretty => {
            print_decode(&res);
            let notable: Vec<_> = res
                .diagnostics
                .iter()
                .filter(|d| !matches!(d.severity, Severity::Info))
                .cloned()
                .collect();
            render_diagnostics_pretty(&res.normalized, "code", &notable);
            print_summary(&notable);
        }
    }
    Ok(())
}

fn cmd_compare(code1: &str, code2: &str, options: &DecodeOptions, format: Format) -> Result<()> {
    let res = compare(code1, code2, options)?;

    match format {
        Format::Json => {
            let mut out = serde_json::json!({ "identical": res.identical });
            if res.identical {
                out["formatted_code"] = res.formatted_code.clone().into();
            } else {
                out["formatted_code1"] = res.formatted_code1.clone().into();
                out["formatted_code2"] = res.formatted_code2.clone().into();
                out["differences"] = res
                    .differences
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .into();
                out["details"] = serde_json::to_value(&res.differences)?;
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => print_compare(&res),
    }
    Ok(())
}

fn cmd_catalog(family: Option<&str>, format: Format) -> Result<()> {
    let families = match family {
        Some(name) => match Family::from_name(name) {
            Some(f) => vec![f],
            None => bail!(DecodeError::UnknownFamily {
                supported: Family::supported_list(),
            }),
        },
        None => Family::ALL.to_vec(),
    };
    let catalogs: Vec<_> = families.iter().map(|f| f.catalog()).collect();

    match format {
        Format::Json => println!("{}", to_pretty_json(&catalogs)),
        Format::Pretty => {
            for (i, catalog) in catalogs.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_catalog(catalog);
            }
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    let text = diag::explain(id);
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": id,
                "explanation": text,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            use ariadne::Fmt;
            match text {
                Some(text) => println!("{}: {}", id.fg(ariadne::Color::Cyan), text),
                None => println!("{id}: (keine Erklärung verfügbar)"),
            }
        }
    }
    Ok(())
}

fn cmd_examples(format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let decode: Vec<_> = EXAMPLES
                .iter()
                .map(|(label, code)| serde_json::json!({ "label": label, "code": code }))
                .collect();
            let out = serde_json::json!({
                "decode": decode,
                "compare": [COMPARE_EXAMPLE.0, COMPARE_EXAMPLE.1],
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            let width = EXAMPLES
                .iter()
                .map(|(label, _)| label.chars().count())
                .max()
                .unwrap_or(0);
            for (label, code) in EXAMPLES {
                println!("{label:<width$}  orderkey decode {code}");
            }
            println!(
                "{:<width$}  orderkey compare {} {}",
                "Vergleich", COMPARE_EXAMPLE.0, COMPARE_EXAMPLE.1
            );
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read code from stdin")?;
    Ok(buf.trim().to_string())
}

/// Success payload of `decode --output json`.
///
/// `components[].index` is zero-padded to two digits; `isStandard` marks
/// fields filled with their standard value.
fn decode_json(res: &DecodeResult) -> serde_json::Value {
    let components: Vec<_> = res
        .fields
        .iter()
        .map(|f| {
            serde_json::json!({
                "index": format!("{:02}", f.index),
                "name": f.name,
                "value": f.value,
                "description": f.description,
                "isStandard": f.defaulted,
            })
        })
        .collect();

    serde_json::json!({
        "formatted_code": res.formatted_code,
        "components": components,
        "hasStandardValues": res.any_defaulted,
        "productType": res.product_label,
        "diagnostics": res.diagnostics,
    })
}

/// Report a command failure on the channel matching `format`.
///
/// JSON mode prints `{"success": false, "error", "message"}` to stdout.
fn report_failure(err: &anyhow::Error, format: Format) {
    let decode_err = err.downcast_ref::<DecodeError>();
    match format {
        Format::Json => {
            let mut out = serde_json::json!({
                "success": false,
                "error": decode_err.map_or("command_failed", DecodeError::kind),
                "message": format!("{err:#}"),
            });
            if let Some(e) = decode_err {
                out["code"] = e.code().into();
            }
            match serde_json::to_string_pretty(&out) {
                Ok(s) => println!("{s}"),
                Err(_) => println!("{out}"),
            }
        }
        Format::Pretty => match decode_err {
            Some(e) => render_diagnostics_pretty("", "code", &[e.to_diagnostic()]),
            None => eprintln!("error: {err:#}"),
        },
    }
}
