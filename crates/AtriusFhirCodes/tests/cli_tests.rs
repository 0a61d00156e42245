#![cfg(feature = "R5")]

use atrius_fhir_codes::cli::{Args, Command, OutputFormat, execute, run_cli};
use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;

#[test]
fn test_list_text_includes_every_type() {
    let output = execute(&Command::List { system: None }, OutputFormat::Text).unwrap();
    assert!(output.success);
    assert_eq!(output.text.lines().count(), 12);
    assert!(output.text.contains("SearchModifierCode"));
    assert!(output.text.contains("http://hl7.org/fhir/search-modifier-code"));
}

#[test]
fn test_list_filtered_by_system_as_json() {
    let output = execute(
        &Command::List {
            system: Some("urn:ietf:bcp:47".to_string()),
        },
        OutputFormat::Json,
    )
    .unwrap();
    let parsed: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(
        parsed[1],
        json!({"name": "Language", "system": "urn:ietf:bcp:47", "concepts": 82})
    );
}

#[test]
fn test_show_json_emits_concept_list() {
    let output = execute(
        &Command::Show {
            code_type: "workflowstatus".to_string(),
        },
        OutputFormat::Json,
    )
    .unwrap();
    let concepts: Vec<Value> = serde_json::from_str(&output.text).unwrap();
    assert_eq!(concepts.len(), 10);
    assert_eq!(concepts[0]["code"], "submitted");
    assert_eq!(concepts[2]["display"], "Waiting for Input");
    assert!(concepts[0]["definition"].is_string());
}

#[test]
fn test_show_unknown_type_is_an_error() {
    let err = execute(
        &Command::Show {
            code_type: "Gender".to_string(),
        },
        OutputFormat::Text,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Unknown code type: Gender");
}

#[test]
fn test_check_reports_unknown_codes() {
    let command = Command::Check {
        code_type: "FhirTypes".to_string(),
        codes: vec!["Patient".to_string(), "NotAResourceType".to_string()],
    };

    let output = execute(&command, OutputFormat::Text).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("ok       Patient (Patient)"));
    assert!(output.text.contains("Unknown FhirTypes code 'NotAResourceType'"));

    let output = execute(&command, OutputFormat::Json).unwrap();
    let results: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[1]["valid"], false);
    assert!(results[1].get("display").is_none());
}

#[test]
fn test_check_all_valid_succeeds() {
    let output = execute(
        &Command::Check {
            code_type: "Language".to_string(),
            codes: vec!["en-US".to_string(), "de".to_string()],
        },
        OutputFormat::Text,
    )
    .unwrap();
    assert!(output.success);
}

#[test]
fn test_lookup() {
    let found = execute(
        &Command::Lookup {
            system: "http://hl7.org/fhir/FHIR-version".to_string(),
            code: "4.0.1".to_string(),
        },
        OutputFormat::Text,
    )
    .unwrap();
    assert!(found.success);
    assert!(found.text.starts_with("4.0.1\t4.0.1\n"));

    let missing = execute(
        &Command::Lookup {
            system: "http://hl7.org/fhir/FHIR-version".to_string(),
            code: "4.0.2".to_string(),
        },
        OutputFormat::Text,
    )
    .unwrap();
    assert!(!missing.success);

    assert!(
        execute(
            &Command::Lookup {
                system: "http://snomed.info/sct".to_string(),
                code: "73211009".to_string(),
            },
            OutputFormat::Text,
        )
        .is_err()
    );
}

#[test]
fn test_run_cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("modifiers.json");
    let args = Args::try_parse_from([
        "atrius-codes",
        "--format",
        "json",
        "--output",
        path.to_str().unwrap(),
        "show",
        "SearchModifierCode",
    ])
    .unwrap();

    assert!(run_cli(args).unwrap());
    let written: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.len(), 15);
    assert_eq!(written[0]["code"], "missing");
}

#[test]
fn test_run_cli_check_failure_returns_false() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("check.txt");
    let args = Args::try_parse_from([
        "atrius-codes",
        "check",
        "PermissionCombining",
        "deny-overrides",
        "first-applicable",
        "-o",
        path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(!run_cli(args).unwrap());
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 2);
}
