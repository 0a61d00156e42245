//! # FHIR coded value types
//!
//! Closed FHIR vocabularies (search modifiers, FHIR versions, resource types,
//! BCP 47 languages, ...) as typed, immutable values.
//!
//! Every vocabulary is a module under [`r5::code`] with:
//!
//! - a `Value` enum, one variant per code;
//! - a coded value type, e.g. [`r5::code::SearchModifierCode`], which is a
//!   [`Coded<Value>`] carrying an optional element id and extensions;
//! - one canonical `static` per code (`search_modifier_code::MISSING`).
//!
//! ```rust
//! use atrius_fhir_codes::r5::code::{language, Language};
//!
//! let en_us = Language::of_code("en-US").unwrap();
//! assert!(std::ptr::eq(en_us, &language::EN_US));
//! assert_eq!(en_us.display(), Some("English (United States)"));
//! assert!(Language::of_code("en-us").is_err());
//! assert_eq!(Language::of_optional_code(None).unwrap(), None);
//! ```
//!
//! The [`registry`] resolves types at runtime by name or code system URI.

pub mod coded;
pub mod coding;
mod element;
pub mod error;
pub mod extension;
#[cfg(feature = "R5")]
mod macros;
pub mod registry;
#[cfg(feature = "R5")]
pub mod r5;
pub mod cli;

pub use coded::{Builder, CodeValue, Coded};
pub use coding::Coding;
pub use element::{Code, Element};
pub use error::{CodeError, CodeResult};
pub use extension::{Extension, ExtensionValue};
