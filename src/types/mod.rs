//! The model type system: capability traits, primitive leaves, complex
//! datatypes, and the resource tier.

mod activity_definition;
mod choice;
mod datatype;
mod element;
mod extension;
mod group;
mod primitive;
mod reference;
mod resource;

pub use activity_definition::{
    ActivityDefinition, ActivityDefinitionBuilder, ActivityDefinitionParticipant,
    ActivityDefinitionParticipantBuilder, SUBJECT_TARGETS, SUBJECT_TYPES,
};
pub use choice::{DataValue, FhirType};
pub use datatype::{
    Attachment, AttachmentBuilder, CodeableConcept, CodeableConceptBuilder, Coding, CodingBuilder,
    Meta, MetaBuilder, Narrative, NarrativeBuilder, Period, PeriodBuilder, Quantity,
    QuantityBuilder,
};
pub use element::{BackboneElement, Element};
pub use extension::{Extension, ExtensionBuilder};
pub use group::{Group, GroupBuilder, MANAGING_ENTITY_TARGETS};
pub use primitive::{
    Base64Binary, Base64BinaryBuilder, Boolean, BooleanBuilder, Code, CodeBuilder, Date,
    DateBuilder, DateTime, DateTimeBuilder, Decimal, DecimalBuilder, Id, IdBuilder, Integer,
    IntegerBuilder, Markdown, MarkdownBuilder, PositiveInt, PositiveIntBuilder, Str, StrBuilder,
    Uri, UriBuilder,
};
pub use reference::{Reference, ReferenceBuilder};
pub use resource::{AnyResource, DomainResource, Resource};
