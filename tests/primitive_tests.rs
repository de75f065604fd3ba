use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fhir_model_core::error::ModelError;
use fhir_model_core::types::{
    Base64Binary, Boolean, Code, Element, Extension, Id, PositiveInt, Str, Uri,
};
use fhir_model_core::validation::Validate;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_of_wraps_bare_payload() {
    let s = Str::of("hello");
    assert_eq!(s.value().map(String::as_str), Some("hello"));
    assert!(s.has_value());
    assert!(s.id().is_none());
    assert!(s.extension().is_empty());
}

#[test]
fn test_builder_validates_lexical_rules() {
    assert!(Str::builder().value("hello world").build().is_ok());
    assert!(Str::builder().value("   ").build().is_err());
    assert!(Str::builder().value("bell\u{0007}").build().is_err());

    assert!(Code::builder().value("active").build().is_ok());
    assert!(Code::builder().value(" active").build().is_err());
    assert!(Code::builder().value("two  spaces").build().is_err());

    assert!(Id::builder().value("patient-123.v2").build().is_ok());
    assert!(Id::builder().value("no/slash").build().is_err());
    assert!(Id::builder().value("x".repeat(65)).build().is_err());

    assert!(Base64Binary::builder().value("QUJD").build().is_ok());
    assert!(Base64Binary::builder().value("QQ=").build().is_err());

    assert!(Uri::builder().value("http://hl7.org/fhir").build().is_ok());
    assert!(Uri::builder().value("has space").build().is_err());

    assert!(PositiveInt::builder().value(1u32).build().is_ok());
    assert!(PositiveInt::builder().value(0u32).build().is_err());
}

#[test]
fn test_unchecked_construction_defers_to_validate() {
    // `of` never validates; the bad payload surfaces on validate().
    let code = Code::of(" leading");
    assert!(code.validate().is_err());

    let unchecked = Code::builder().value(" leading").build_unchecked();
    assert!(unchecked.validate().is_err());
}

#[test]
fn test_empty_primitive_is_rejected() {
    let err = Str::builder().build().unwrap_err();
    assert_eq!(err, ModelError::EmptyElement { type_name: "string" });

    // An id alone satisfies ele-1 even with no payload.
    assert!(Str::builder().id("s1").build().is_ok());

    // An extension alone does too.
    let ext = Extension::builder()
        .url("http://example.org/ext")
        .value(true)
        .build()
        .expect("extension should build");
    assert!(Str::builder().extension(ext).build().is_ok());
}

#[test]
fn test_to_builder_round_trip() {
    let ext = Extension::builder()
        .url("http://example.org/ext")
        .value("annotation")
        .build()
        .expect("extension should build");
    let original = Str::builder()
        .id("s1")
        .extension(ext)
        .value("payload")
        .build()
        .expect("string should build");

    let rebuilt = original.to_builder().build().expect("rebuild should pass");
    assert_eq!(original, rebuilt);

    let changed = original.to_builder().value("other").build().unwrap();
    assert_ne!(original, changed);
}

#[test]
fn test_value_equality_and_hashing() {
    let a = Boolean::of(true);
    let b = Boolean::builder().value(true).build().unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = Boolean::of(false);
    assert_ne!(a, c);

    // Equality is structural; an id difference is a value difference.
    let with_id = Boolean::builder().id("b1").value(true).build().unwrap();
    assert_ne!(a, with_id);
}

#[test]
fn test_revalidation_is_idempotent() {
    let code = Code::builder().value("final").build().unwrap();
    assert!(code.validate().is_ok());
    assert!(code.validate().is_ok());
}
