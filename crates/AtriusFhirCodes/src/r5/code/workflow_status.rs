//! Workflow states of an `ArtifactAssessment` (comment, classification or
//! rating) as it moves from submission to publication.

use crate::macros::code_system;

code_system! {
    /// The current state of an artifact assessment.
    WorkflowStatus => "http://hl7.org/fhir/artifactassessment-workflow-status";

    Submitted, SUBMITTED = "submitted" => "Submitted",
        "The comment has been submitted, but the responsible party has not yet been determined, or the responsible party has not yet determined the next steps to be taken.";
    Triaged, TRIAGED = "triaged" => "Triaged",
        "The comment has been triaged, meaning the responsible party has been determined and next steps have been identified to address the comment.";
    WaitingForInput, WAITING_FOR_INPUT = "waiting-for-input" => "Waiting for Input",
        "The comment is waiting for input from a specific party before next steps can be taken.";
    ResolvedNoChange, RESOLVED_NO_CHANGE = "resolved-no-change" => "Resolved - No Change",
        "The comment has been resolved and no changes resulted from the resolution.";
    ResolvedChangeRequired, RESOLVED_CHANGE_REQUIRED = "resolved-change-required" => "Resolved - Change Required",
        "The comment has been resolved and changes are required to address the comment.";
    Deferred, DEFERRED = "deferred" => "Deferred",
        "The comment is acceptable, but resolution of the comment and application of any associated changes have been deferred.";
    Duplicate, DUPLICATE = "duplicate" => "Duplicate",
        "The comment is a duplicate of another comment already received.";
    Applied, APPLIED = "applied" => "Change Applied",
        "The comment is resolved and any necessary changes have been applied.";
    Published, PUBLISHED = "published" => "Change Published",
        "The necessary changes to the artifact have been published in a new version of the artifact.";
    EnteredInError, ENTERED_IN_ERROR = "entered-in-error" => "Entered in Error",
        "The assessment was entered in error.";
}
