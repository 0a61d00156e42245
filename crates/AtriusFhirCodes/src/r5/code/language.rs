//! Language of a resource's content (`Resource.language`).

use super::common_languages::with_common_languages;
use crate::macros::code_system;

with_common_languages!(code_system! {
    /// IETF language tag for a human language.
    Language => "urn:ietf:bcp:47";
});
