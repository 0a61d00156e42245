//! One module per coded value type.
//!
//! Modules expose their `Value` enum and canonical statics; the coded value
//! types themselves are re-exported here by name.

mod common_languages;

pub mod additional_binding_purpose;
pub mod assertion_response_types;
pub mod fhir_types;
pub mod fhir_version;
pub mod item_description_language;
pub mod language;
pub mod name_language;
pub mod permission_combining;
pub mod related_artifact_type;
pub mod resource_type_code;
pub mod search_modifier_code;
pub mod workflow_status;

pub use additional_binding_purpose::AdditionalBindingPurpose;
pub use assertion_response_types::AssertionResponseTypes;
pub use fhir_types::FhirTypes;
pub use fhir_version::FhirVersion;
pub use item_description_language::ItemDescriptionLanguage;
pub use language::Language;
pub use name_language::NameLanguage;
pub use permission_combining::PermissionCombining;
pub use related_artifact_type::RelatedArtifactType;
pub use resource_type_code::ResourceTypeCode;
pub use search_modifier_code::SearchModifierCode;
pub use workflow_status::WorkflowStatus;
