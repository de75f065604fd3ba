use fhir_model_core::error::ModelError;
use fhir_model_core::types::{Group, Reference, Uri};

fn group_with(managing_entity: Reference) -> Result<Group, ModelError> {
    Group::builder()
        .r#type("person")
        .actual(true)
        .managing_entity(managing_entity)
        .build()
}

#[test]
fn test_literal_reference_target_checked() {
    assert!(group_with(Reference::of("Organization/acme")).is_ok());
    assert!(group_with(Reference::of("Practitioner/p1")).is_ok());

    let err = group_with(Reference::of("Patient/p1")).unwrap_err();
    match err {
        ModelError::InvalidReferenceTarget { field, found, allowed } => {
            assert_eq!(field, "managingEntity");
            assert_eq!(found, "Patient");
            assert!(allowed.contains(&"Organization".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_versioned_reference_target_checked() {
    assert!(group_with(Reference::of("Organization/acme/_history/2")).is_ok());
    assert!(group_with(Reference::of("Patient/p1/_history/2")).is_err());
}

#[test]
fn test_unknown_resource_type_in_reference() {
    let err = group_with(Reference::of("Widget/w1")).unwrap_err();
    match err {
        ModelError::InvalidValue { field, reason } => {
            assert_eq!(field, "managingEntity");
            assert!(reason.contains("Widget"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_literal_references_skip_target_check() {
    // Fragment references point inside the containing resource.
    assert!(group_with(Reference::of("#contained-org")).is_ok());

    // Absolute urls are not resolvable structurally.
    assert!(group_with(Reference::of("https://example.org/fhir/Patient/p1")).is_ok());
    assert!(group_with(Reference::of("urn:uuid:9d6dcc32-51a7-4911-8d02-d1cf7a3ab6b5")).is_ok());

    // Display-only references carry no target information at all.
    let display_only = Reference::builder().display("a well known org").build().unwrap();
    assert!(group_with(display_only).is_ok());
}

#[test]
fn test_conditional_reference_target_checked() {
    assert!(group_with(Reference::of("Organization/?identifier=hl7")).is_err());
    assert!(group_with(Reference::of("Organization?identifier=hl7")).is_ok());
    assert!(group_with(Reference::of("Patient?identifier=x")).is_err());
}

#[test]
fn test_type_discriminator_checked_and_cross_checked() {
    // Declared type alone is checked against the target set.
    let declared_only = Reference::builder()
        .r#type(Uri::of("Patient"))
        .display("someone")
        .build()
        .unwrap();
    assert!(group_with(declared_only).is_err());

    // Literal and declared types must agree.
    let mismatched = Reference::builder()
        .reference("Organization/acme")
        .r#type(Uri::of("Practitioner"))
        .build()
        .unwrap();
    let err = group_with(mismatched).unwrap_err();
    match err {
        ModelError::InvalidValue { field, reason } => {
            assert_eq!(field, "managingEntity");
            assert!(reason.contains("Organization"));
            assert!(reason.contains("Practitioner"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let matched = Reference::builder()
        .reference("Organization/acme")
        .r#type(Uri::of("Organization"))
        .build()
        .unwrap();
    assert!(group_with(matched).is_ok());
}
