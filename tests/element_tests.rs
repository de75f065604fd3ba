use fhir_model_core::registry::BindingStrength;
use fhir_model_core::types::{
    ActivityDefinition, ActivityDefinitionParticipant, BackboneElement, Code, Element, Extension,
    Group, Narrative, Quantity, Str,
};
use pretty_assertions::assert_eq;

#[test]
fn test_element_capability_surface() {
    let ext = Extension::builder()
        .url("http://example.org/flag")
        .value(true)
        .build()
        .unwrap();
    let s = Str::builder().id("s1").extension(ext.clone()).value("text").build().unwrap();

    assert_eq!(s.id(), Some("s1"));
    assert_eq!(s.extension(), &[ext]);
}

#[test]
fn test_extensions_nest() {
    let inner = Extension::builder()
        .url("http://example.org/inner")
        .value(1)
        .build()
        .unwrap();
    let outer = Extension::builder()
        .url("http://example.org/outer")
        .extension(inner)
        .build()
        .expect("extension with only sub-extensions is valid");

    assert_eq!(outer.url(), "http://example.org/outer");
    assert!(outer.value().is_none());
    assert_eq!(outer.extension().len(), 1);
    assert_eq!(outer.extension()[0].url(), "http://example.org/inner");
}

#[test]
fn test_backbone_element_carries_modifier_extensions() {
    let modifier = Extension::builder()
        .url("http://example.org/not-done")
        .value(true)
        .build()
        .unwrap();
    let participant = ActivityDefinitionParticipant::builder()
        .r#type("patient")
        .modifier_extension(modifier)
        .build()
        .unwrap();

    assert_eq!(participant.modifier_extension().len(), 1);
    assert!(participant.extension().is_empty());
}

#[test]
fn test_field_definitions_expose_schema_metadata() {
    let status = ActivityDefinition::field_definitions()
        .iter()
        .find(|def| def.name == "status")
        .expect("status field");
    assert!(status.is_required());
    assert!(!status.is_repeating());
    let binding = status.binding.expect("status is bound");
    assert_eq!(binding.strength, BindingStrength::Required);
    assert!(binding.value_set.contains("publication-status"));

    let subject = ActivityDefinition::field_definitions()
        .iter()
        .find(|def| def.name == "subject[x]")
        .expect("subject field");
    assert!(subject.is_choice());
    assert_eq!(subject.target_types, &["Group"]);

    let library = ActivityDefinition::field_definitions()
        .iter()
        .find(|def| def.name == "library")
        .expect("library field");
    assert!(library.is_repeating());
    assert_eq!(library.max_cardinality_string(), "*");

    let comparator = Quantity::field_definitions()
        .iter()
        .find(|def| def.name == "comparator")
        .expect("comparator field");
    assert_eq!(
        comparator.binding.unwrap().strength,
        BindingStrength::Required
    );
}

#[test]
fn test_serialization_uses_wire_names() {
    let narrative = Narrative::builder()
        .status("generated")
        .div("<div>g</div>")
        .build()
        .unwrap();
    let group = Group::builder()
        .id("g1")
        .text(narrative)
        .r#type("person")
        .actual(true)
        .build()
        .unwrap();

    let json = serde_json::to_value(&group).unwrap();
    // Reserved-word and multi-word fields serialize under their wire names.
    assert!(json.get("type").is_some());
    assert!(json.get("type_").is_none());
    assert!(json.get("actual").is_some());

    let code = Code::builder().id("c1").value("person").build().unwrap();
    let json = serde_json::to_value(&code).unwrap();
    assert_eq!(json.get("value").and_then(|v| v.as_str()), Some("person"));
}
