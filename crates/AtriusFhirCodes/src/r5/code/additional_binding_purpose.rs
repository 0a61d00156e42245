//! Purposes of an `ElementDefinition.binding.additional` entry.

use crate::macros::code_system;

code_system! {
    /// The use of an additional binding on an element definition.
    AdditionalBindingPurpose => "http://hl7.org/fhir/CodeSystem/additional-binding-purpose";

    Maximum, MAXIMUM = "maximum" => "Maximum Binding",
        "A required binding, for use when the binding strength is 'extensible' or 'preferred'.";
    Minimum, MINIMUM = "minimum" => "Minimum Binding",
        "The minimum allowable value set - any conformant system SHALL support all these codes.";
    Required, REQUIRED = "required" => "Required Binding",
        "This value set is used as a required binding (in addition to the base binding (not a replacement), usually in a particular usage context).";
    Extensible, EXTENSIBLE = "extensible" => "Conformance Binding",
        "This value set is used as an extensible binding (in addition to the base binding (not a replacement), usually in a particular usage context).";
    Candidate, CANDIDATE = "candidate" => "Candidate Binding",
        "This value set is a candidate to substitute for the overall conformance value set in some situations; usually these are defined in the documentation.";
    Current, CURRENT = "current" => "Current Binding",
        "New records are required to use this value set, but legacy records may use other codes. The definition of 'new record' is difficult, since systems often create new records based on pre-existing data. Usually 'current' bindings are mandated by an external authority that makes clear rules around this.";
    Preferred, PREFERRED = "preferred" => "Preferred Binding",
        "This is the value set that is preferred in a given context (documentation should explain why).";
    Ui, UI = "ui" => "UI Suggested Binding",
        "This value set is provided for user look up of codes, but is not intended for recording (typically because the value set excludes codes that are not intended for use in records).";
    Starter, STARTER = "starter" => "Starter Binding",
        "This value set is a good set of codes to start with when designing your system.";
    Component, COMPONENT = "component" => "Component Binding",
        "This value set is a component of the base value set. Usually this is called out so that documentation can be written about a portion of the value set.";
}
