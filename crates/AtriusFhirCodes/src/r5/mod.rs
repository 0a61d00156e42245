//! FHIR R5 (5.0.0) vocabularies.

pub mod code;
