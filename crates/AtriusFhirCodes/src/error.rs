use thiserror::Error;

/// Errors raised while constructing or resolving coded values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A code string is not a member of the named vocabulary.
    ///
    /// Matching is exact and case-sensitive, so `"Patient"` is a `FhirTypes`
    /// code while `"patient"` is not.
    #[error("Unknown {type_name} code '{code}'")]
    UnrecognizedCode {
        type_name: &'static str,
        code: String,
    },

    /// The builder was asked to produce an element with neither a value nor
    /// any extension.
    #[error("{type_name} element must have a value or at least one extension")]
    EmptyElement { type_name: &'static str },

    /// An extension failed validation (for example a blank `url`).
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    /// The registry holds no coded value type with the given name.
    #[error("Unknown code type: {0}")]
    UnknownCodeType(String),

    /// No registered coded value type draws its codes from the given system.
    #[error("No code type is bound to system '{0}'")]
    UnknownSystem(String),
}

impl CodeError {
    pub(crate) fn unrecognized(type_name: &'static str, code: &str) -> Self {
        CodeError::UnrecognizedCode {
            type_name,
            code: code.to_string(),
        }
    }
}

/// Result type for coded value operations.
pub type CodeResult<T> = Result<T, CodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodeError::unrecognized("SearchModifierCode", "fuzzy");
        assert_eq!(err.to_string(), "Unknown SearchModifierCode code 'fuzzy'");

        let err = CodeError::EmptyElement {
            type_name: "Language",
        };
        assert_eq!(
            err.to_string(),
            "Language element must have a value or at least one extension"
        );
    }
}
