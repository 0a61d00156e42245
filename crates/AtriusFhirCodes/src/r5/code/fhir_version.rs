//! Published and ballot releases of the FHIR specification.
//!
//! Unlike most vocabularies the literals here are version strings (`"4.0.1"`,
//! `"5.0.0-ballot"`), so the variant names spell out the dotted version.

use crate::macros::code_system;

code_system! {
    /// All published FHIR Versions.
    FhirVersion => "http://hl7.org/fhir/FHIR-version";

    Version4_0_1, VERSION_4_0_1 = "4.0.1" => "4.0.1",
        "FHIR Release 4 (Normative + STU) with 1 technical errata.";
    Version4_1, VERSION_4_1 = "4.1" => "4.1",
        "R4B Ballot #1 version.";
    Version4_1_0, VERSION_4_1_0 = "4.1.0" => "4.1.0",
        "R4B Ballot #1 + Connectathon 27 (Virtual).";
    Version4_2, VERSION_4_2 = "4.2" => "4.2",
        "R5 Preview #1 version.";
    Version4_2_0, VERSION_4_2_0 = "4.2.0" => "4.2.0",
        "R5 Preview #1 + Connectathon 23 (Sydney).";
    Version4_3, VERSION_4_3 = "4.3" => "4.3",
        "R4B version.";
    Version4_3_0, VERSION_4_3_0 = "4.3.0" => "4.3.0",
        "FHIR Release 4B (Normative + STU).";
    Version4_3_0Cibuild, VERSION_4_3_0_CIBUILD = "4.3.0-cibuild" => "4.3.0-cibuild",
        "FHIR Release 4B CI-Builld.";
    Version4_3_0Snapshot1, VERSION_4_3_0_SNAPSHOT1 = "4.3.0-snapshot1" => "4.3.0-snapshot1",
        "FHIR Release 4B Snapshot #1.";
    Version4_4, VERSION_4_4 = "4.4" => "4.4",
        "R5 Preview #2 version.";
    Version4_4_0, VERSION_4_4_0 = "4.4.0" => "4.4.0",
        "R5 Preview #2 + Connectathon 24 (Virtual).";
    Version4_5, VERSION_4_5 = "4.5" => "4.5",
        "R5 Preview #3 version.";
    Version4_5_0, VERSION_4_5_0 = "4.5.0" => "4.5.0",
        "R5 Preview #3 + Connectathon 25 (Virtual).";
    Version4_6, VERSION_4_6 = "4.6" => "4.6",
        "R5 Draft Ballot version.";
    Version4_6_0, VERSION_4_6_0 = "4.6.0" => "4.6.0",
        "R5 Draft Ballot + Connectathon 27 (Virtual).";
    Version5_0, VERSION_5_0 = "5.0" => "5.0",
        "R5 Versions.";
    Version5_0_0, VERSION_5_0_0 = "5.0.0" => "5.0.0",
        "R5 Final Version.";
    Version5_0_0Cibuild, VERSION_5_0_0_CIBUILD = "5.0.0-cibuild" => "5.0.0-cibuild",
        "R5 Rolling ci-build.";
    Version5_0_0Snapshot1, VERSION_5_0_0_SNAPSHOT1 = "5.0.0-snapshot1" => "5.0.0-snapshot1",
        "R5 Preview #2.";
    Version5_0_0Snapshot2, VERSION_5_0_0_SNAPSHOT2 = "5.0.0-snapshot2" => "5.0.0-snapshot2",
        "R5 Interim tooling stage.";
    Version5_0_0Ballot, VERSION_5_0_0_BALLOT = "5.0.0-ballot" => "5.0.0-ballot",
        "R5 Ballot.";
    Version5_0_0Snapshot3, VERSION_5_0_0_SNAPSHOT3 = "5.0.0-snapshot3" => "5.0.0-snapshot3",
        "R5 January 2023 Staging Release + Connectathon 32.";
    Version5_0_0DraftFinal, VERSION_5_0_0_DRAFT_FINAL = "5.0.0-draft-final" => "5.0.0-draft-final",
        "R5 Final QA.";
}
