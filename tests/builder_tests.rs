use fhir_model_core::error::ModelError;
use fhir_model_core::types::{
    ActivityDefinition, Code, CodeableConcept, Coding, Element, Extension, Group, Meta, Narrative,
    Period, Quantity, Reference, Uri,
};
use fhir_model_core::validation::Validate;

#[test]
fn test_missing_required_field() {
    let err = Group::builder().actual(true).build().unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            field: "type".to_string()
        }
    );

    let err = Narrative::builder().status(Code::of("generated")).build().unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            field: "div".to_string()
        }
    );
}

#[test]
fn test_activity_definition_requires_status() {
    let err = ActivityDefinition::builder().build().unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            field: "status".to_string()
        }
    );

    // Every other field really is optional.
    assert!(ActivityDefinition::builder().status("draft").build().is_ok());
}

#[test]
fn test_null_list_entry_rejected_at_build() {
    let good = Extension::builder()
        .url("http://example.org/one")
        .value(1)
        .build()
        .unwrap();

    let err = CodeableConcept::builder()
        .text("note")
        .extension(good)
        .extension(None)
        .build()
        .unwrap_err();
    match err {
        ModelError::InvalidListElement { field, index, .. } => {
            assert_eq!(field, "extension");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_build_unchecked_drops_null_entries() {
    let good = Extension::builder()
        .url("http://example.org/one")
        .value(1)
        .build()
        .unwrap();

    let concept = CodeableConcept::builder()
        .text("note")
        .extension(None)
        .extension(good)
        .extension(None)
        .build_unchecked();
    assert_eq!(concept.extension().len(), 1);
}

#[test]
fn test_build_unchecked_still_requires_required_fields() {
    // Deferred validation skips structural checks, not field presence:
    // the struct cannot exist without its required members.
    assert!(Group::builder().actual(true).build_unchecked().is_err());
    assert!(Extension::builder().value(true).build_unchecked().is_err());
}

#[test]
fn test_unchecked_then_validate_finds_nested_problems() {
    let coding = Coding::builder()
        .system("urn:ietf:bcp:47")
        .code(Code::of(" bad-code"))
        .build_unchecked();
    assert!(coding.validate().is_err());

    let concept = CodeableConcept::builder().coding(coding).build_unchecked();
    // The invalid leaf is found through recursion.
    assert!(concept.validate().is_err());
}

#[test]
fn test_builder_is_reusable() {
    let builder = Quantity::builder()
        .value(rust_decimal::Decimal::new(185, 1))
        .unit("kg")
        .system("http://unitsofmeasure.org")
        .code("kg");
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_complex_element_rejected() {
    let err = Period::builder().build().unwrap_err();
    assert_eq!(err, ModelError::EmptyElement { type_name: "Period" });

    assert!(Period::builder().id("p1").build().is_ok());
}

#[test]
fn test_resource_round_trip() {
    let narrative = Narrative::builder()
        .status("generated")
        .div("<div>A group</div>")
        .build()
        .unwrap();
    let meta = Meta::builder()
        .version_id("1")
        .profile(Uri::of("http://example.org/StructureDefinition/my-group"))
        .build()
        .unwrap();
    let group = Group::builder()
        .id("grp-1")
        .meta(meta)
        .text(narrative)
        .r#type("person")
        .actual(false)
        .name("Study cohort")
        .quantity(42u32)
        .managing_entity(Reference::of("Organization/acme"))
        .build()
        .expect("group should build");

    let rebuilt = group.to_builder().build().expect("rebuild should pass");
    assert_eq!(group, rebuilt);
    assert!(rebuilt.validate().is_ok());
}
