use fhir_model_core::types::{
    ActivityDefinition, AnyResource, DomainResource, Group, Narrative, Resource,
};
use fhir_model_core::validation::Validate;
use fhir_model_core::visitor::CollectingVisitor;

#[test]
fn test_resource_capability_surface() {
    let narrative = Narrative::builder()
        .status("generated")
        .div("<div>d</div>")
        .build()
        .unwrap();
    let ad = ActivityDefinition::builder()
        .status("draft")
        .text(narrative)
        .build()
        .unwrap();

    assert_eq!(Resource::resource_type(&ad), "ActivityDefinition");
    assert!(Resource::meta(&ad).is_none());
    assert!(DomainResource::text(&ad).is_some());
    assert!(DomainResource::contained(&ad).is_empty());
    assert!(DomainResource::modifier_extension(&ad).is_empty());
}

#[test]
fn test_contained_resources_are_validated_and_visited() {
    let cohort = Group::builder().r#type("person").actual(true).build().unwrap();
    let ad = ActivityDefinition::builder()
        .status("active")
        .contained(AnyResource::from(cohort))
        .build()
        .expect("contained group should pass");
    assert_eq!(ad.contained().len(), 1);
    assert_eq!(ad.contained()[0].resource_type(), "Group");

    let mut visitor = CollectingVisitor::new();
    fhir_model_core::visitor::accept_root(&ad, &mut visitor);
    let contained = visitor
        .nodes()
        .iter()
        .find(|n| n.name == "contained")
        .expect("contained node visited");
    assert_eq!(contained.index, Some(0));
    assert_eq!(contained.type_name, "Group");

    // A structurally broken contained resource fails the enclosing build.
    let bad = Group::builder()
        .r#type(fhir_model_core::types::Code::of(" bad"))
        .actual(true)
        .build_unchecked()
        .unwrap();
    assert!(
        ActivityDefinition::builder()
            .status("active")
            .contained(AnyResource::from(bad))
            .build()
            .is_err()
    );
}

#[test]
fn test_any_resource_dispatch() {
    let group = Group::builder().r#type("device").actual(false).build().unwrap();
    let any: AnyResource = group.into();

    assert_eq!(any.resource_type(), "Group");
    assert!(any.validate().is_ok());

    let mut visitor = CollectingVisitor::new();
    any.accept("resource", None, &mut visitor);
    assert_eq!(visitor.type_names()[0], "Group");

    match &any {
        AnyResource::Group(group) => assert!(group.active().is_none()),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn test_any_resource_equality() {
    let a: AnyResource = Group::builder().r#type("person").actual(true).build().unwrap().into();
    let b: AnyResource = Group::builder().r#type("person").actual(true).build().unwrap().into();
    let c: AnyResource = ActivityDefinition::builder().status("active").build().unwrap().into();

    assert_eq!(a, b);
    assert_ne!(a, c);
}
