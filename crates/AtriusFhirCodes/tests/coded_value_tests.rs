#![cfg(feature = "R5")]

use std::collections::HashSet;
use std::ptr;

use atrius_fhir_codes::r5::code::*;
use atrius_fhir_codes::{CodeError, CodeValue, Coded};

fn assert_vocabulary<V: CodeValue>(expected_len: usize) {
    let all = V::all();
    assert_eq!(all.len(), expected_len, "{} size", V::TYPE_NAME);

    let mut seen = HashSet::new();
    for &value in all {
        let code = value.as_code();
        assert!(seen.insert(code), "duplicate code {code} in {}", V::TYPE_NAME);
        assert_eq!(V::from_code(code).unwrap(), value);
        assert!(!value.display().is_empty());

        let canonical = Coded::<V>::of_code(code).unwrap();
        assert!(ptr::eq(canonical, Coded::of(value)));
        assert!(ptr::eq(canonical, Coded::<V>::of_code(code).unwrap()));
        assert!(canonical.is_canonical());
        assert_eq!(canonical.as_code(), Some(code));
        assert_eq!(canonical.value_as_enum(), Some(value));
    }
    assert_eq!(Coded::<V>::of_optional_code(None).unwrap(), None);
}

#[test]
fn test_every_literal_round_trips() {
    assert_vocabulary::<additional_binding_purpose::Value>(10);
    assert_vocabulary::<assertion_response_types::Value>(44);
    assert_vocabulary::<fhir_types::Value>(231);
    assert_vocabulary::<fhir_version::Value>(23);
    assert_vocabulary::<item_description_language::Value>(82);
    assert_vocabulary::<language::Value>(82);
    assert_vocabulary::<name_language::Value>(82);
    assert_vocabulary::<permission_combining::Value>(6);
    assert_vocabulary::<related_artifact_type::Value>(36);
    assert_vocabulary::<resource_type_code::Value>(158);
    assert_vocabulary::<search_modifier_code::Value>(15);
    assert_vocabulary::<workflow_status::Value>(10);
}

#[test]
fn test_fhir_types_patient() {
    let patient = FhirTypes::of_code("Patient").unwrap();
    assert_eq!(patient, &fhir_types::PATIENT);
    assert!(ptr::eq(patient, &fhir_types::PATIENT));
    assert_eq!(patient.value_as_enum(), Some(fhir_types::Value::Patient));
    assert_eq!(FhirTypes::system(), "http://hl7.org/fhir/fhir-types");
}

#[test]
fn test_unknown_code_is_rejected() {
    let err = FhirTypes::of_code("NotAResourceType").unwrap_err();
    assert_eq!(
        err,
        CodeError::UnrecognizedCode {
            type_name: "FhirTypes",
            code: "NotAResourceType".to_string(),
        }
    );
    assert!(SearchModifierCode::of_code("").is_err());
    assert!(SearchModifierCode::of_optional_code(Some("fuzzy")).is_err());
}

#[test]
fn test_codes_are_case_sensitive() {
    assert!(FhirTypes::of_code("patient").is_err());
    assert!(Language::of_code("EN-US").is_err());
    assert!(AssertionResponseTypes::of_code("NotFound").is_err());
    assert!(AssertionResponseTypes::of_code("notFound").is_ok());
}

#[test]
fn test_language_en_us() {
    let en_us = Language::of_code("en-US").unwrap();
    assert_eq!(en_us, &language::EN_US);
    assert_eq!(language::EN_US.value_as_enum().unwrap().as_code(), "en-US");
    assert_eq!(en_us.display(), Some("English (United States)"));
    assert_eq!(Language::system(), "urn:ietf:bcp:47");
}

#[test]
fn test_language_bindings_are_distinct_types() {
    let name_lang = NameLanguage::of_code("en-US").unwrap();
    let desc_lang = ItemDescriptionLanguage::of_code("en-US").unwrap();
    assert_eq!(name_lang.as_code(), desc_lang.as_code());
    assert_eq!(NameLanguage::type_name(), "NameLanguage");
    assert_eq!(ItemDescriptionLanguage::system(), NameLanguage::system());
}

#[test]
fn test_fhir_version_literals() {
    let r5 = FhirVersion::of_code("5.0.0").unwrap();
    assert!(ptr::eq(r5, &fhir_version::VERSION_5_0_0));
    assert_eq!(fhir_version::Value::Version4_0_1.as_code(), "4.0.1");
    assert_eq!(
        "5.0.0-ballot".parse::<fhir_version::Value>().unwrap(),
        fhir_version::Value::Version5_0_0Ballot
    );
    assert!(FhirVersion::of_code("6.0.0").is_err());
}

#[test]
fn test_resource_type_code_is_resource_subset() {
    assert!(ResourceTypeCode::of_code("Observation").is_ok());
    // Data types are fhir-types members but not resource types
    assert!(FhirTypes::of_code("HumanName").is_ok());
    assert!(ResourceTypeCode::of_code("HumanName").is_err());
    assert!(ResourceTypeCode::of_code("Element").is_err());

    for value in resource_type_code::Value::ALL {
        let fhir_type = fhir_types::Value::from_code(value.as_code()).unwrap();
        assert_eq!(fhir_type.display(), value.display());
    }
}

#[test]
fn test_value_conversions() {
    let value = search_modifier_code::Value::try_from("not-in").unwrap();
    assert_eq!(value, search_modifier_code::Value::NotIn);
    assert_eq!(value.to_string(), "not-in");
    assert_eq!(value.display(), "Not In");
    assert!(value.definition().is_some());
    assert_eq!(
        search_modifier_code::Value::from_optional_code(None).unwrap(),
        None
    );
    assert_eq!(search_modifier_code::NOT_IN.to_string(), "not-in");
}

#[test]
fn test_display_and_definition_text() {
    assert_eq!(workflow_status::Value::ResolvedNoChange.display(), "Resolved - No Change");
    assert_eq!(
        additional_binding_purpose::Value::Extensible.display(),
        "Conformance Binding"
    );
    assert_eq!(
        permission_combining::Value::DenyUnlessPermit.as_code(),
        "deny-unless-permit"
    );
    // Definitions are stored unescaped
    let definition = fhir_types::Value::Boolean.definition().unwrap();
    assert!(definition.contains("\"true\""));
}

#[test]
fn test_canonical_instances_shared_across_threads() {
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let instance = RelatedArtifactType::of_code("citation").unwrap();
                    assert_eq!(instance.hash_code(), related_artifact_type::CITATION.hash_code());
                    instance as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}
