#![cfg(feature = "R5")]

use std::collections::HashSet;

use atrius_fhir_codes::r5::code::{
    FhirVersion, Language, SearchModifierCode, WorkflowStatus, fhir_version, language,
    search_modifier_code, workflow_status,
};
use atrius_fhir_codes::{Code, CodeError, Coding, Element, Extension, ExtensionValue};
use serde_json::json;

const NOTE_URL: &str = "http://example.org/fhir/StructureDefinition/note";

#[test]
fn test_builder_with_id_and_extension() {
    let modifier = SearchModifierCode::builder()
        .id("m1")
        .extension(Extension::string(NOTE_URL, "legacy"))
        .value(search_modifier_code::Value::Missing)
        .build()
        .unwrap();

    assert_eq!(modifier.id(), Some("m1"));
    assert_eq!(modifier.extension().len(), 1);
    assert_eq!(modifier.as_code(), Some("missing"));
    assert!(!modifier.is_canonical());
    assert_ne!(&modifier, &search_modifier_code::MISSING);
}

#[test]
fn test_equal_builds_share_hash_code() {
    let build = || {
        WorkflowStatus::builder()
            .id("wf")
            .extension(Extension::boolean(NOTE_URL, true))
            .code("triaged")
            .unwrap()
            .build()
            .unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    // cached value is stable
    assert_eq!(a.hash_code(), a.hash_code());

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_builder_code_rejects_unknown_literal() {
    let err = WorkflowStatus::builder().code("closed").unwrap_err();
    assert!(matches!(
        err,
        CodeError::UnrecognizedCode { type_name: "WorkflowStatus", .. }
    ));
}

#[test]
fn test_optional_code_none_keeps_previous_value() {
    let status = WorkflowStatus::builder()
        .value(workflow_status::Value::Deferred)
        .optional_code(None)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(&status, &workflow_status::DEFERRED);
}

#[test]
fn test_build_requires_value_or_extension() {
    let err = Language::builder().id("only-id").build().unwrap_err();
    assert_eq!(err, CodeError::EmptyElement { type_name: "Language" });

    let extension_only = Language::builder()
        .extension(Extension::code(
            "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
            "unknown",
        ))
        .build()
        .unwrap();
    assert_eq!(extension_only.as_code(), None);
    assert_eq!(extension_only.to_string(), "");
}

#[test]
fn test_build_rejects_extension_without_url() {
    let result = FhirVersion::builder()
        .value(fhir_version::Value::Version5_0_0)
        .extension(Extension::new(NOTE_URL).with_extension(Extension::new("").with_id("inner")))
        .build();
    assert!(matches!(result, Err(CodeError::InvalidExtension(msg)) if msg.contains("'inner'")));
}

#[test]
fn test_validation_can_be_disabled() {
    let empty = Language::builder().validating(false).build().unwrap();
    assert!(!empty.has_value());
    assert!(empty.extension().is_empty());
}

#[test]
fn test_to_builder_copies_state() {
    let original = Language::builder()
        .id("lang")
        .value(language::Value::De)
        .build()
        .unwrap();
    let copy = original.to_builder().build().unwrap();
    assert_eq!(original, copy);

    let changed = original
        .to_builder()
        .value(language::Value::Fr)
        .extensions(Vec::new())
        .build()
        .unwrap();
    assert_eq!(changed.id(), Some("lang"));
    assert_eq!(changed.as_code(), Some("fr"));

    let from_canonical = language::EN_US.to_builder().build().unwrap();
    assert_eq!(&from_canonical, &language::EN_US);
}

#[test]
fn test_extensions_replaces_list() {
    let status = WorkflowStatus::builder()
        .extension(Extension::string(NOTE_URL, "first"))
        .extensions([Extension::string(NOTE_URL, "second")])
        .value(workflow_status::Value::Applied)
        .build()
        .unwrap();
    assert_eq!(status.extension().len(), 1);
    assert_eq!(
        status.extension()[0].value,
        Some(ExtensionValue::String("second".to_string()))
    );
}

#[test]
fn test_canonical_serializes_as_bare_code() {
    assert_eq!(
        serde_json::to_value(&language::EN_US).unwrap(),
        json!("en-US")
    );
    assert_eq!(
        serde_json::to_value(fhir_version::Value::Version4_0_1).unwrap(),
        json!("4.0.1")
    );
}

#[test]
fn test_extended_instance_serializes_as_element_object() {
    let modifier = SearchModifierCode::builder()
        .id("m1")
        .extension(Extension::string(NOTE_URL, "legacy"))
        .value(search_modifier_code::Value::Exact)
        .build()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&modifier).unwrap(),
        json!({
            "id": "m1",
            "extension": [{"url": NOTE_URL, "valueString": "legacy"}],
            "value": "exact"
        })
    );
}

#[test]
fn test_deserialize_bare_and_object_forms() {
    let bare: FhirVersion = serde_json::from_value(json!("5.0.0")).unwrap();
    assert_eq!(&bare, &fhir_version::VERSION_5_0_0);

    let object: SearchModifierCode = serde_json::from_value(json!({
        "id": "m2",
        "extension": [{"url": NOTE_URL, "valueBoolean": false}],
        "value": "text"
    }))
    .unwrap();
    assert_eq!(object.id(), Some("m2"));
    assert_eq!(object.value_as_enum(), Some(search_modifier_code::Value::Text));
}

#[test]
fn test_deserialize_rejects_unmodelled_extension_value() {
    let result = serde_json::from_value::<SearchModifierCode>(json!({
        "extension": [{"url": "http://example.org/amount", "valueDecimal": 1.5}],
        "value": "exact"
    }));
    assert!(result.is_err());
}

#[test]
fn test_deserialize_unknown_code_fails() {
    let err = serde_json::from_value::<FhirVersion>(json!("9.9.9")).unwrap_err();
    assert!(err.to_string().contains("Unknown FhirVersion code '9.9.9'"));

    let err = serde_json::from_value::<search_modifier_code::Value>(json!("fuzzy")).unwrap_err();
    assert!(err.to_string().contains("fuzzy"));
}

#[test]
fn test_optional_field_in_struct() {
    #[derive(serde::Deserialize)]
    struct SearchParam {
        modifier: Option<SearchModifierCode>,
    }

    let param: SearchParam = serde_json::from_value(json!({"modifier": null})).unwrap();
    assert!(param.modifier.is_none());

    let param: SearchParam = serde_json::from_value(json!({"modifier": "below"})).unwrap();
    assert_eq!(param.modifier.as_ref(), Some(&search_modifier_code::BELOW));
}

#[test]
fn test_code_element_conversions() {
    let code: Code = Code::from(&language::EN_US);
    assert_eq!(code, Element::from_value("en-US".to_string()));

    let parsed = Language::try_from(Code {
        id: Some("l1".to_string()),
        extension: None,
        value: Some("de".to_string()),
    })
    .unwrap();
    assert_eq!(parsed.id(), Some("l1"));
    assert_eq!(parsed.value_as_enum(), Some(language::Value::De));

    let back: Code = parsed.into();
    assert_eq!(back.id.as_deref(), Some("l1"));
    assert_eq!(back.value.as_deref(), Some("de"));

    assert!(Language::try_from(Element::from_value("xx-YY".to_string())).is_err());
}

#[test]
fn test_to_coding() {
    let coding = fhir_version::VERSION_4_0_1.to_coding();
    assert_eq!(
        coding,
        Coding {
            system: Some("http://hl7.org/fhir/FHIR-version".to_string()),
            version: None,
            code: Some("4.0.1".to_string()),
            display: Some("4.0.1".to_string()),
        }
    );
    assert!(coding.matches("http://hl7.org/fhir/FHIR-version", "4.0.1"));
    assert_eq!(
        serde_json::to_value(search_modifier_code::Value::NotIn.to_coding()).unwrap(),
        json!({
            "system": "http://hl7.org/fhir/search-modifier-code",
            "code": "not-in",
            "display": "Not In"
        })
    );
}
