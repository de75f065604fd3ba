//! Model-level type registry and the per-field schema surface.
//!
//! Concrete types publish their field catalog through [`FieldDef`] tables so
//! that out-of-scope collaborators (serializers, schema engines, terminology
//! checkers) can read required-sets, choice-type unions, reference-target
//! sets, multiplicity bounds, and binding strengths without reflection.

use serde::Serialize;

use crate::types::FhirType;

/// All R4 resource type names, sorted for binary search.
pub const RESOURCE_TYPES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "CatalogEntry",
    "ChargeItem",
    "ChargeItemDefinition",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceDefinition",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUseStatement",
    "DiagnosticReport",
    "DocumentManifest",
    "DocumentReference",
    "DomainResource",
    "EffectEvidenceSynthesis",
    "Encounter",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "InsurancePlan",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "Measure",
    "MeasureReport",
    "Media",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProduct",
    "MedicinalProductAuthorization",
    "MedicinalProductContraindication",
    "MedicinalProductIndication",
    "MedicinalProductIngredient",
    "MedicinalProductInteraction",
    "MedicinalProductManufactured",
    "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical",
    "MedicinalProductUndesirableEffect",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionOrder",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RelatedPerson",
    "RequestGroup",
    "ResearchDefinition",
    "ResearchElementDefinition",
    "ResearchStudy",
    "ResearchSubject",
    "Resource",
    "RiskAssessment",
    "RiskEvidenceSynthesis",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "Substance",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SubstanceSpecification",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestReport",
    "TestScript",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

/// Check if a name is a known resource type.
pub fn is_resource_type(name: &str) -> bool {
    RESOURCE_TYPES.binary_search(&name).is_ok()
}

/// Check if a type name is a primitive datatype.
pub fn is_primitive_type(name: &str) -> bool {
    matches!(
        name,
        "base64Binary"
            | "boolean"
            | "canonical"
            | "code"
            | "date"
            | "dateTime"
            | "decimal"
            | "id"
            | "instant"
            | "integer"
            | "markdown"
            | "oid"
            | "positiveInt"
            | "string"
            | "time"
            | "unsignedInt"
            | "uri"
            | "url"
            | "uuid"
    )
}

/// How strictly a coded field's value must come from its bound value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingStrength {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "extensible")]
    Extensible,
    #[serde(rename = "preferred")]
    Preferred,
    #[serde(rename = "example")]
    Example,
}

/// Value set binding metadata for a coded field.
///
/// The core publishes the binding; it never resolves or validates codes
/// against external terminologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub strength: BindingStrength,
    pub value_set: &'static str,
}

/// Declared schema metadata for one field of a concrete type.
///
/// `max` of `None` means unbounded (`*`). `types` lists the allowed concrete
/// types; more than one entry marks a true choice field. `target_types` is
/// populated only when one of the allowed types is Reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: &'static str,
    pub min: u32,
    pub max: Option<u32>,
    pub types: &'static [FhirType],
    pub target_types: &'static [&'static str],
    pub binding: Option<Binding>,
}

impl FieldDef {
    pub const fn new(name: &'static str, min: u32, max: Option<u32>, types: &'static [FhirType]) -> Self {
        Self {
            name,
            min,
            max,
            types,
            target_types: &[],
            binding: None,
        }
    }

    pub const fn targets(mut self, target_types: &'static [&'static str]) -> Self {
        self.target_types = target_types;
        self
    }

    pub const fn bound(mut self, strength: BindingStrength, value_set: &'static str) -> Self {
        self.binding = Some(Binding {
            strength,
            value_set,
        });
        self
    }

    pub fn is_required(&self) -> bool {
        self.min > 0
    }

    pub fn is_repeating(&self) -> bool {
        self.max.is_none_or(|max| max > 1)
    }

    pub fn is_choice(&self) -> bool {
        self.types.len() > 1
    }

    /// Maximum cardinality rendered the way the specification writes it.
    pub fn max_cardinality_string(&self) -> String {
        match self.max {
            Some(max) => max.to_string(),
            None => "*".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_lookup() {
        assert!(is_resource_type("Patient"));
        assert!(is_resource_type("ActivityDefinition"));
        assert!(!is_resource_type("NotAType"));
        assert!(!is_resource_type("patient"));
    }

    #[test]
    fn resource_types_are_sorted() {
        let mut sorted = RESOURCE_TYPES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESOURCE_TYPES);
    }

    #[test]
    fn primitive_type_lookup() {
        assert!(is_primitive_type("string"));
        assert!(is_primitive_type("dateTime"));
        assert!(!is_primitive_type("Coding"));
    }

    #[test]
    fn field_def_cardinality() {
        let def = FieldDef::new("name", 0, None, &[FhirType::String]);
        assert!(!def.is_required());
        assert!(def.is_repeating());
        assert_eq!(def.max_cardinality_string(), "*");
    }
}
