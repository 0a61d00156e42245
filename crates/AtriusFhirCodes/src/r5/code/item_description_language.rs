use super::common_languages::with_common_languages;
use crate::macros::code_system;

with_common_languages!(code_system! {
    /// The language of an item description.
    ItemDescriptionLanguage => "urn:ietf:bcp:47";
});
