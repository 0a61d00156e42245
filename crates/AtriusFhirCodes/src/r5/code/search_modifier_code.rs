//! Search parameter modifiers (`:missing`, `:exact`, `:not-in`, ...).

use crate::macros::code_system;

code_system! {
    /// A supported modifier for a search parameter.
    SearchModifierCode => "http://hl7.org/fhir/search-modifier-code";

    Missing, MISSING = "missing" => "Missing",
        "The search parameter returns resources that have a value or not.";
    Exact, EXACT = "exact" => "Exact",
        "The search parameter returns resources that have a value that exactly matches the supplied parameter (the whole string, including casing and accents).";
    Contains, CONTAINS = "contains" => "Contains",
        "The search parameter returns resources that include the supplied parameter value anywhere within the field being searched.";
    Not, NOT = "not" => "Not",
        "The search parameter returns resources that do not contain a match.";
    Text, TEXT = "text" => "Text",
        "The search parameter is processed as a string that searches text associated with the code/value - either CodeableConcept.text, Coding.display, Identifier.type.text, or Reference.display.";
    In, IN = "in" => "In",
        "The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is in the specified value set.";
    NotIn, NOT_IN = "not-in" => "Not In",
        "The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is not in the specified value set.";
    Below, BELOW = "below" => "Below",
        "The search parameter tests whether the value in a resource is subsumed by the specified value (is-a, or hierarchical relationships).";
    Above, ABOVE = "above" => "Above",
        "The search parameter tests whether the value in a resource subsumes the specified value (is-a, or hierarchical relationships).";
    Type, TYPE = "type" => "Type",
        "The search parameter only applies to the Resource Type specified as a modifier (e.g. the modifier is not actually :type, but :Patient etc.).";
    Identifier, IDENTIFIER = "identifier" => "Identifier",
        "The search parameter applies to the identifier on the resource, not the reference.";
    OfType, OF_TYPE = "of-type" => "Of Type",
        "The search parameter has the format system|code|value, where the system and code refer to an Identifier.type.coding.system and .code, and match if any of the type codes match. All 3 parts must be present.";
    CodeText, CODE_TEXT = "code-text" => "Code Text",
        "Tests whether the textual display value in a resource (e.g., CodeableConcept.text, Coding.display, or Reference.display) matches the supplied parameter value.";
    TextAdvanced, TEXT_ADVANCED = "text-advanced" => "Text Advanced",
        "Tests whether the value in a resource matches the supplied parameter value using advanced text handling that searches text associated with the code/value - e.g., CodeableConcept.text, Coding.display, or Identifier.type.text.";
    Iterate, ITERATE = "iterate" => "Iterate",
        "The search parameter indicates an inclusion directive (_include, _revinclude) that is applied to an included resource instead of the matching resource.";
}
