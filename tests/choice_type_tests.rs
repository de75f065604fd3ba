use fhir_model_core::error::ModelError;
use fhir_model_core::types::{
    ActivityDefinition, Code, CodeableConcept, Coding, DataValue, Extension, FhirType, Period,
    Quantity, Reference, SUBJECT_TYPES,
};

#[test]
fn test_data_value_reports_concrete_type() {
    assert_eq!(DataValue::from(true).fhir_type(), FhirType::Boolean);
    assert_eq!(DataValue::from("text").fhir_type(), FhirType::String);
    assert_eq!(DataValue::from(7).fhir_type(), FhirType::Integer);
    assert_eq!(
        DataValue::from(Reference::of("Group/g1")).fhir_type(),
        FhirType::Reference
    );
    assert_eq!(
        DataValue::from(Code::of("final")).fhir_type(),
        FhirType::Code
    );
}

#[test]
fn test_choice_field_accepts_declared_types() {
    let concept = CodeableConcept::builder().text("adults").build().unwrap();
    let ad = ActivityDefinition::builder()
        .status("active")
        .subject(concept)
        .build()
        .expect("CodeableConcept subject should pass");
    assert_eq!(ad.subject().unwrap().fhir_type(), FhirType::CodeableConcept);

    let ad = ActivityDefinition::builder()
        .status("active")
        .subject(Reference::of("Group/adults"))
        .build()
        .expect("Reference subject should pass");
    assert_eq!(ad.subject().unwrap().fhir_type(), FhirType::Reference);
}

#[test]
fn test_choice_field_rejects_undeclared_type() {
    let quantity = Quantity::builder()
        .value(rust_decimal::Decimal::from(10))
        .unit("a")
        .build()
        .unwrap();
    let err = ActivityDefinition::builder()
        .status("active")
        .subject(quantity)
        .build()
        .unwrap_err();
    match err {
        ModelError::InvalidChoiceType { field, actual, allowed } => {
            assert_eq!(field, "subject[x]");
            assert_eq!(actual, "Quantity");
            assert_eq!(allowed, vec!["CodeableConcept", "Reference"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The declared set for the field is published as metadata.
    assert_eq!(SUBJECT_TYPES, &[FhirType::CodeableConcept, FhirType::Reference]);
}

#[test]
fn test_extension_value_admits_whole_union() {
    // Extension.value[x] has no narrowing; any concrete type passes.
    for value in [
        DataValue::from(true),
        DataValue::from("free text"),
        DataValue::from(Coding::builder().code(Code::of("a")).build().unwrap()),
        DataValue::from(Period::builder().id("p").build().unwrap()),
    ] {
        let built = Extension::builder()
            .url("http://example.org/anything")
            .value(value)
            .build();
        assert!(built.is_ok());
    }
}

#[test]
fn test_official_type_spellings() {
    assert_eq!(FhirType::Base64Binary.as_str(), "base64Binary");
    assert_eq!(FhirType::DateTime.as_str(), "dateTime");
    assert_eq!(FhirType::PositiveInt.as_str(), "positiveInt");
    assert_eq!(FhirType::CodeableConcept.as_str(), "CodeableConcept");
    assert!(FhirType::Code.is_primitive());
    assert!(!FhirType::Coding.is_primitive());
}
