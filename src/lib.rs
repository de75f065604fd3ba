//! fhir-model-core - shared framework for immutable FHIR model types.
//!
//! This crate provides:
//! - Primitive leaf wrappers carrying id, extensions, and an optional payload
//! - Complex datatypes and a representative resource tier, all built through
//!   deferred-validation builders
//! - Choice fields over a closed [`types::DataValue`] union with per-field
//!   allowed-type sets
//! - Reference target-type checking against per-field target sets
//! - A four-phase, prunable visitor traversal over the object graph
//!
//! # Quick Start
//!
//! ```
//! use fhir_model_core::types::{Code, Group, Reference};
//!
//! let group = Group::builder()
//!     .r#type(Code::of("person"))
//!     .actual(true)
//!     .managing_entity(Reference::of("Organization/hl7"))
//!     .build()
//!     .unwrap();
//! assert_eq!(group.r#type().value().map(String::as_str), Some("person"));
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - The model type system (primitives, datatypes, resources)
//! - [`validation`] - Structural checks composing the `build()` pipeline
//! - [`visitor`] - Tree traversal protocol and stock visitors
//! - [`registry`] - Resource-type and field metadata
//! - [`error`] - The error type every fallible operation returns

pub mod error;
pub mod registry;
pub mod types;
pub mod validation;
pub mod visitor;

pub use error::{ModelError, Result};
pub use types::{AnyResource, DataValue, Element, FhirType};
pub use validation::Validate;
pub use visitor::{CollectingVisitor, Visitable, Visitor};
