//! # Coded value inspection CLI
//!
//! Lists the vocabularies compiled into the crate and checks codes against
//! them.
//!
//! ```text
//! atrius-codes [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list     List registered code types
//!   show     Print every concept of a code type
//!   check    Validate codes against a code type
//!   lookup   Resolve a code within a code system
//!
//! Options:
//!   -f, --format <FORMAT>        Output format (text, json) [env: ATRIUS_CODES_FORMAT] [default: text]
//!   -o, --output <OUTPUT>        Output file path (defaults to stdout) [env: ATRIUS_CODES_OUTPUT]
//!       --log-level <LOG_LEVEL>  Log level when RUST_LOG is unset [env: ATRIUS_CODES_LOG_LEVEL] [default: warn]
//! ```
//!
//! ## Usage Examples
//!
//! ```bash
//! atrius-codes list --system urn:ietf:bcp:47
//! atrius-codes show SearchModifierCode --format json
//! atrius-codes check FhirTypes Patient Observation NotAResourceType
//! atrius-codes lookup --system http://hl7.org/fhir/FHIR-version 5.0.0
//! ```
//!
//! `check` exits non-zero when any code is unknown; `lookup` exits non-zero
//! when the code is not found.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CodeError;
use crate::registry::{self, CodeSystemInfo, Concept};

#[derive(Parser, Debug)]
#[command(name = "atrius-codes")]
#[command(about = "Inspect and validate FHIR R5 coded value types")]
#[command(version)]
pub struct Args {
    /// Output format
    #[arg(long, short = 'f', value_enum, env = "ATRIUS_CODES_FORMAT", default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Output file path (defaults to stdout)
    #[arg(long, short = 'o', env = "ATRIUS_CODES_OUTPUT", global = true)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace) used when RUST_LOG is unset
    #[arg(long, env = "ATRIUS_CODES_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered code types
    List {
        /// Only types drawing from this code system
        #[arg(long, short = 's')]
        system: Option<String>,
    },
    /// Print every concept of a code type
    Show {
        /// Code type name (case-insensitive)
        code_type: String,
    },
    /// Validate codes against a code type
    Check {
        /// Code type name (case-insensitive)
        code_type: String,
        /// Codes to validate
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Resolve a code within a code system
    Lookup {
        /// Code system URI
        #[arg(long, short = 's')]
        system: String,
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings derived from [`Args`] once at startup.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub log_level: String,
}

impl From<&Args> for CliConfig {
    fn from(args: &Args) -> Self {
        CliConfig {
            format: args.format,
            output: args.output.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

/// Rendered command output and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        CommandOutput {
            text,
            success: true,
        }
    }
}

#[derive(Serialize)]
struct CodeTypeSummary {
    name: &'static str,
    system: &'static str,
    concepts: usize,
}

impl From<&CodeSystemInfo> for CodeTypeSummary {
    fn from(info: &CodeSystemInfo) -> Self {
        CodeTypeSummary {
            name: info.type_name,
            system: info.system,
            concepts: info.len(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResult {
    code: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs a command against the registry without touching stdout.
pub fn execute(command: &Command, format: OutputFormat) -> anyhow::Result<CommandOutput> {
    debug!(?command, ?format, "executing command");
    match command {
        Command::List { system } => {
            let types: Vec<&CodeSystemInfo> = match system {
                Some(system) => registry::code_types_for_system(system),
                None => registry::code_types().iter().collect(),
            };
            let text = match format {
                OutputFormat::Json => {
                    let summaries: Vec<CodeTypeSummary> =
                        types.into_iter().map(CodeTypeSummary::from).collect();
                    serde_json::to_string_pretty(&summaries)?
                }
                OutputFormat::Text => {
                    let mut text = String::new();
                    for info in types {
                        writeln!(text, "{:<26} {:>4}  {}", info.type_name, info.len(), info.system)?;
                    }
                    text
                }
            };
            Ok(CommandOutput::ok(text))
        }
        Command::Show { code_type } => {
            let info = registry::find_code_type(code_type)
                .ok_or_else(|| CodeError::UnknownCodeType(code_type.clone()))?;
            let concepts = info.concepts();
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&concepts)?,
                OutputFormat::Text => {
                    let mut text = format!("{} ({})\n", info.type_name, info.system);
                    for concept in &concepts {
                        writeln!(text, "  {:<24} {}", concept.code, concept.display)?;
                    }
                    text
                }
            };
            Ok(CommandOutput::ok(text))
        }
        Command::Check { code_type, codes } => {
            let info = registry::find_code_type(code_type)
                .ok_or_else(|| CodeError::UnknownCodeType(code_type.clone()))?;
            let results: Vec<CheckResult> = codes
                .iter()
                .map(|code| match registry::validate_code(info.type_name, code) {
                    Ok(concept) => CheckResult {
                        code: code.clone(),
                        valid: true,
                        display: Some(concept.display),
                        error: None,
                    },
                    Err(err) => CheckResult {
                        code: code.clone(),
                        valid: false,
                        display: None,
                        error: Some(err.to_string()),
                    },
                })
                .collect();
            let success = results.iter().all(|result| result.valid);
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&results)?,
                OutputFormat::Text => {
                    let mut text = String::new();
                    for result in &results {
                        match (&result.display, &result.error) {
                            (Some(display), _) => writeln!(text, "ok       {} ({display})", result.code)?,
                            (None, Some(error)) => writeln!(text, "invalid  {error}")?,
                            (None, None) => writeln!(text, "invalid  {}", result.code)?,
                        }
                    }
                    text
                }
            };
            Ok(CommandOutput { text, success })
        }
        Command::Lookup { system, code } => match registry::lookup_in_system(system, code) {
            Ok(concept) => Ok(CommandOutput::ok(render_concept(&concept, format)?)),
            Err(err @ CodeError::UnrecognizedCode { .. }) => Ok(CommandOutput {
                text: format!("{err}\n"),
                success: false,
            }),
            Err(err) => Err(err.into()),
        },
    }
}

fn render_concept(concept: &Concept, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(concept)?,
        OutputFormat::Text => {
            let mut text = format!("{}\t{}\n", concept.code, concept.display);
            if let Some(definition) = concept.definition {
                writeln!(text, "{definition}")?;
            }
            text
        }
    })
}

/// Executes the parsed command and writes its output. Returns whether the
/// command succeeded.
pub fn run_cli(args: Args) -> anyhow::Result<bool> {
    let config = CliConfig::from(&args);
    info!(?config, "atrius-codes starting");

    let output = execute(&args.command, config.format)?;
    let mut text = output.text;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match &config.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(output.success)
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = format!("atrius_fhir_codes={log_level},atrius_codes={log_level}");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .init();
}

#[cfg(all(test, feature = "R5"))]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "atrius-codes",
            "show",
            "FhirVersion",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(
            args.command,
            Command::Show {
                code_type: "FhirVersion".to_string()
            }
        );
    }

    #[test]
    fn test_check_requires_a_code() {
        assert!(Args::try_parse_from(["atrius-codes", "check", "Language"]).is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from(["atrius-codes", "--log-level", "debug", "list"]).unwrap();
        let config = CliConfig::from(&args);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.output.is_none());
    }
}
