//! Resource-level capability traits and the open resource union.

use serde::Serialize;

use crate::error::Result;
use crate::types::{ActivityDefinition, Element, Extension, Group, Meta, Narrative};
use crate::validation::Validate;
use crate::visitor::{Visitable, Visitor};

/// The capability every resource shares: a stable type name and optional
/// metadata.
pub trait Resource: Element {
    /// The resource type name as registered, e.g. `"Group"`.
    fn resource_type(&self) -> &'static str;

    fn meta(&self) -> Option<&Meta>;
}

/// A resource that carries a human-readable narrative, inline contained
/// resources, and modifier extensions.
pub trait DomainResource: Resource {
    fn text(&self) -> Option<&Narrative>;

    fn contained(&self) -> &[AnyResource];

    fn modifier_extension(&self) -> &[Extension];
}

/// Union over the concrete resource types this core ships. Fields that hold
/// "any resource" (contained resources, bundle entries) store this enum;
/// consumers match instead of downcasting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AnyResource {
    ActivityDefinition(Box<ActivityDefinition>),
    Group(Box<Group>),
}

impl AnyResource {
    pub fn resource_type(&self) -> &'static str {
        match self {
            AnyResource::ActivityDefinition(r) => r.resource_type(),
            AnyResource::Group(r) => r.resource_type(),
        }
    }

    pub fn as_visitable(&self) -> &dyn Visitable {
        match self {
            AnyResource::ActivityDefinition(r) => r.as_ref(),
            AnyResource::Group(r) => r.as_ref(),
        }
    }

    pub fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            AnyResource::ActivityDefinition(r) => r.accept(name, index, visitor),
            AnyResource::Group(r) => r.accept(name, index, visitor),
        }
    }
}

impl Validate for AnyResource {
    fn validate(&self) -> Result<()> {
        match self {
            AnyResource::ActivityDefinition(r) => r.validate(),
            AnyResource::Group(r) => r.validate(),
        }
    }
}

impl From<ActivityDefinition> for AnyResource {
    fn from(resource: ActivityDefinition) -> Self {
        AnyResource::ActivityDefinition(Box::new(resource))
    }
}

impl From<Group> for AnyResource {
    fn from(resource: Group) -> Self {
        AnyResource::Group(Box::new(resource))
    }
}
