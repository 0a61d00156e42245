#![cfg(feature = "R5")]

use atrius_fhir_codes::CodeError;
use atrius_fhir_codes::registry::{
    code_types, code_types_for_system, find_code_type, is_code_type, lookup_in_system, system_of,
    validate_code,
};

#[test]
fn test_find_code_type_ignores_case() {
    let info = find_code_type("fhirversion").unwrap();
    assert_eq!(info.type_name, "FhirVersion");
    assert_eq!(info.system, "http://hl7.org/fhir/FHIR-version");
    assert_eq!(info.len(), 23);
    assert!(info.contains("4.0.1"));
    assert!(!info.contains("4.0.2"));

    assert!(is_code_type("SEARCHMODIFIERCODE"));
    assert!(!is_code_type("AdministrativeGender"));
}

#[test]
fn test_system_of() {
    assert_eq!(
        system_of("PermissionCombining"),
        Some("http://hl7.org/fhir/permission-rule-combining")
    );
    assert_eq!(
        system_of("WorkflowStatus"),
        Some("http://hl7.org/fhir/artifactassessment-workflow-status")
    );
    assert_eq!(system_of("Nope"), None);
}

#[test]
fn test_language_types_share_a_system() {
    let names: Vec<_> = code_types_for_system("urn:ietf:bcp:47")
        .into_iter()
        .map(|info| info.type_name)
        .collect();
    assert_eq!(names, ["ItemDescriptionLanguage", "Language", "NameLanguage"]);

    let fhir_types: Vec<_> = code_types_for_system("http://hl7.org/fhir/fhir-types")
        .into_iter()
        .map(|info| info.type_name)
        .collect();
    assert_eq!(fhir_types, ["FhirTypes", "ResourceTypeCode"]);
}

#[test]
fn test_concepts_follow_vocabulary_order() {
    let info = find_code_type("PermissionCombining").unwrap();
    let codes: Vec<_> = info.concepts().into_iter().map(|c| c.code).collect();
    assert_eq!(
        codes,
        [
            "deny-overrides",
            "permit-overrides",
            "ordered-deny-overrides",
            "ordered-permit-overrides",
            "deny-unless-permit",
            "permit-unless-deny",
        ]
    );
    assert!(code_types().iter().all(|info| !info.is_empty()));
}

#[test]
fn test_validate_code() {
    let concept = validate_code("relatedartifacttype", "depends-on").unwrap();
    assert_eq!(concept.display, "Depends On");

    assert_eq!(
        validate_code("RelatedArtifactType", "depends_on"),
        Err(CodeError::UnrecognizedCode {
            type_name: "RelatedArtifactType",
            code: "depends_on".to_string(),
        })
    );
    assert_eq!(
        validate_code("Unknown", "x"),
        Err(CodeError::UnknownCodeType("Unknown".to_string()))
    );
}

#[test]
fn test_lookup_in_system() {
    let concept = lookup_in_system("http://hl7.org/fhir/fhir-types", "Quantity").unwrap();
    assert_eq!(concept.code, "Quantity");

    assert!(matches!(
        lookup_in_system("urn:ietf:bcp:47", "tlh"),
        Err(CodeError::UnrecognizedCode { type_name: "ItemDescriptionLanguage", .. })
    ));
    assert_eq!(
        lookup_in_system("http://loinc.org", "1234-5"),
        Err(CodeError::UnknownSystem("http://loinc.org".to_string()))
    );
}
