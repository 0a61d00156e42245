//! Lookup of coded value types by name and by code system.
//!
//! Every vocabulary compiled into the crate is listed in a static table, so a
//! type can be resolved from data (a profile's binding, a CLI argument) rather
//! than from a Rust type parameter.

use serde::Serialize;
use tracing::debug;

use crate::coded::CodeValue;
use crate::error::{CodeError, CodeResult};

/// One entry of a vocabulary, detached from its Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub code: &'static str,
    pub display: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<&'static str>,
}

impl Concept {
    pub fn of<V: CodeValue>(value: V) -> Self {
        Concept {
            code: value.as_code(),
            display: value.display(),
            definition: value.definition(),
        }
    }
}

/// Type-erased description of a registered coded value type.
#[derive(Clone, Copy)]
pub struct CodeSystemInfo {
    pub type_name: &'static str,
    pub system: &'static str,
    concepts: fn() -> Vec<Concept>,
    lookup: fn(&str) -> Option<Concept>,
    len: fn() -> usize,
}

fn concepts_of<V: CodeValue>() -> Vec<Concept> {
    V::all().iter().copied().map(Concept::of).collect()
}

fn lookup_in<V: CodeValue>(code: &str) -> Option<Concept> {
    V::from_code(code).ok().map(Concept::of)
}

fn len_of<V: CodeValue>() -> usize {
    V::all().len()
}

impl CodeSystemInfo {
    pub const fn of<V: CodeValue>() -> Self {
        CodeSystemInfo {
            type_name: V::TYPE_NAME,
            system: V::SYSTEM,
            concepts: concepts_of::<V>,
            lookup: lookup_in::<V>,
            len: len_of::<V>,
        }
    }

    /// Every concept, in vocabulary order.
    pub fn concepts(&self) -> Vec<Concept> {
        (self.concepts)()
    }

    pub fn lookup(&self, code: &str) -> Option<Concept> {
        (self.lookup)(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    pub fn len(&self) -> usize {
        (self.len)()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CodeSystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeSystemInfo")
            .field("type_name", &self.type_name)
            .field("system", &self.system)
            .field("len", &self.len())
            .finish()
    }
}

// Sorted by type name.
static CODE_TYPES: &[CodeSystemInfo] = &[
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::additional_binding_purpose::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::assertion_response_types::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::fhir_types::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::fhir_version::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::item_description_language::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::language::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::name_language::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::permission_combining::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::related_artifact_type::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::resource_type_code::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::search_modifier_code::Value>(),
    #[cfg(feature = "R5")]
    CodeSystemInfo::of::<crate::r5::code::workflow_status::Value>(),
];

/// Every registered coded value type, ordered by name.
pub fn code_types() -> &'static [CodeSystemInfo] {
    CODE_TYPES
}

/// Finds a coded value type by name, ignoring ASCII case.
pub fn find_code_type(name: &str) -> Option<&'static CodeSystemInfo> {
    let found = CODE_TYPES
        .iter()
        .find(|info| info.type_name.eq_ignore_ascii_case(name));
    if found.is_none() {
        debug!(name, "no coded value type registered under this name");
    }
    found
}

pub fn is_code_type(name: &str) -> bool {
    find_code_type(name).is_some()
}

/// The code system URI implied by a coded value type.
pub fn system_of(name: &str) -> Option<&'static str> {
    find_code_type(name).map(|info| info.system)
}

/// Every coded value type whose codes come from `system`.
pub fn code_types_for_system(system: &str) -> Vec<&'static CodeSystemInfo> {
    CODE_TYPES.iter().filter(|info| info.system == system).collect()
}

/// Checks `code` against the vocabulary of the named type.
pub fn validate_code(type_name: &str, code: &str) -> CodeResult<Concept> {
    let info = find_code_type(type_name)
        .ok_or_else(|| CodeError::UnknownCodeType(type_name.to_string()))?;
    info.lookup(code).ok_or_else(|| {
        debug!(type_name = info.type_name, code, "code not in vocabulary");
        CodeError::unrecognized(info.type_name, code)
    })
}

/// Resolves `code` in the first registered type drawing from `system` that
/// knows it.
pub fn lookup_in_system(system: &str, code: &str) -> CodeResult<Concept> {
    let candidates = code_types_for_system(system);
    let Some(first) = candidates.first() else {
        debug!(system, "no coded value type bound to system");
        return Err(CodeError::UnknownSystem(system.to_string()));
    };
    candidates
        .iter()
        .find_map(|info| info.lookup(code))
        .ok_or_else(|| CodeError::unrecognized(first.type_name, code))
}

#[cfg(all(test, feature = "R5"))]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sorted_by_name() {
        let names: Vec<_> = code_types().iter().map(|info| info.type_name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_concept_of_carries_definition() {
        let info = find_code_type("SearchModifierCode").unwrap();
        let missing = info.lookup("missing").unwrap();
        assert_eq!(missing.display, "Missing");
        assert!(missing.definition.is_some());
        assert!(info.lookup("Missing").is_none());
    }
}

#[cfg(all(test, not(feature = "R5")))]
mod empty_registry_tests {
    use super::*;

    #[test]
    fn test_registry_empty_without_versions() {
        assert!(code_types().is_empty());
        assert!(!is_code_type("Language"));
        assert_eq!(
            lookup_in_system("urn:ietf:bcp:47", "en-US"),
            Err(CodeError::UnknownSystem("urn:ietf:bcp:47".to_string()))
        );
    }
}
