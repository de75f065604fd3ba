//! Group resource: a defined collection of entities.

use serde::Serialize;

use crate::error::Result;
use crate::registry::{BindingStrength, FieldDef};
use crate::types::{
    AnyResource, Boolean, Code, DomainResource, Element, Extension, FhirType, Meta, Narrative,
    PositiveInt, Reference, Resource, Str,
};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_child, accept_list, visit_node};

/// Resource types a group's managing entity may point at.
pub const MANAGING_ENTITY_TARGETS: &[&str] = &[
    "Organization",
    "RelatedPerson",
    "Practitioner",
    "PractitionerRole",
];

/// A bounded collection of people, animals, devices, or other entities that
/// is expected to act or be acted on collectively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: Option<String>,
    meta: Option<Meta>,
    text: Option<Narrative>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    active: Option<Boolean>,
    #[serde(rename = "type")]
    type_: Code,
    actual: Boolean,
    name: Option<Str>,
    quantity: Option<PositiveInt>,
    managing_entity: Option<Reference>,
}

impl Group {
    pub fn builder() -> GroupBuilder {
        GroupBuilder::default()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn text(&self) -> Option<&Narrative> {
        self.text.as_ref()
    }

    pub fn contained(&self) -> &[AnyResource] {
        &self.contained
    }

    pub fn active(&self) -> Option<&Boolean> {
        self.active.as_ref()
    }

    pub fn r#type(&self) -> &Code {
        &self.type_
    }

    pub fn actual(&self) -> &Boolean {
        &self.actual
    }

    pub fn name(&self) -> Option<&Str> {
        self.name.as_ref()
    }

    pub fn quantity(&self) -> Option<&PositiveInt> {
        self.quantity.as_ref()
    }

    pub fn managing_entity(&self) -> Option<&Reference> {
        self.managing_entity.as_ref()
    }

    pub fn to_builder(&self) -> GroupBuilder {
        GroupBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: self.contained.iter().cloned().map(Some).collect(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            modifier_extension: self.modifier_extension.iter().cloned().map(Some).collect(),
            active: self.active.clone(),
            type_: Some(self.type_.clone()),
            actual: Some(self.actual.clone()),
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            managing_entity: self.managing_entity.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("modifierExtension", 0, None, &[FhirType::Extension]),
            FieldDef::new("active", 0, Some(1), &[FhirType::Boolean]),
            FieldDef::new("type", 1, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/group-type|4.0.1",
            ),
            FieldDef::new("actual", 1, Some(1), &[FhirType::Boolean]),
            FieldDef::new("name", 0, Some(1), &[FhirType::String]),
            FieldDef::new("quantity", 0, Some(1), &[FhirType::PositiveInt]),
            FieldDef::new("managingEntity", 0, Some(1), &[FhirType::Reference])
                .targets(MANAGING_ENTITY_TARGETS),
        ];
        DEFS
    }
}

impl Element for Group {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Resource for Group {
    fn resource_type(&self) -> &'static str {
        "Group"
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl DomainResource for Group {
    fn text(&self) -> Option<&Narrative> {
        self.text.as_ref()
    }

    fn contained(&self) -> &[AnyResource] {
        &self.contained
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl Validate for Group {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_id("id", id)?;
        }
        validation::validate_opt(self.meta.as_ref())?;
        validation::validate_opt(self.text.as_ref())?;
        validation::validate_all(&self.contained)?;
        validation::validate_all(&self.extension)?;
        validation::validate_all(&self.modifier_extension)?;
        validation::validate_opt(self.active.as_ref())?;
        self.type_.validate()?;
        self.actual.validate()?;
        validation::validate_opt(self.name.as_ref())?;
        validation::validate_opt(self.quantity.as_ref())?;
        if let Some(managing_entity) = &self.managing_entity {
            managing_entity.validate()?;
            validation::check_reference_type(
                "managingEntity",
                managing_entity,
                MANAGING_ENTITY_TARGETS,
            )?;
        }
        Ok(())
    }
}

impl Visitable for Group {
    fn type_name(&self) -> &'static str {
        "Group"
    }

    fn has_children(&self) -> bool {
        true
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_child(self.meta.as_ref(), "meta", v);
            accept_child(self.text.as_ref(), "text", v);
            for (index, resource) in self.contained.iter().enumerate() {
                resource.accept("contained", Some(index), v);
            }
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            accept_child(self.active.as_ref(), "active", v);
            self.type_.accept("type", None, v);
            self.actual.accept("actual", None, v);
            accept_child(self.name.as_ref(), "name", v);
            accept_child(self.quantity.as_ref(), "quantity", v);
            accept_child(self.managing_entity.as_ref(), "managingEntity", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    text: Option<Narrative>,
    contained: Vec<Option<AnyResource>>,
    extension: Vec<Option<Extension>>,
    modifier_extension: Vec<Option<Extension>>,
    active: Option<Boolean>,
    type_: Option<Code>,
    actual: Option<Boolean>,
    name: Option<Str>,
    quantity: Option<PositiveInt>,
    managing_entity: Option<Reference>,
}

impl GroupBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn text(mut self, text: Narrative) -> Self {
        self.text = Some(text);
        self
    }

    pub fn contained(mut self, contained: impl Into<Option<AnyResource>>) -> Self {
        self.contained.push(contained.into());
        self
    }

    pub fn set_contained(mut self, contained: Vec<AnyResource>) -> Self {
        self.contained = contained.into_iter().map(Some).collect();
        self
    }

    pub fn extension(mut self, extension: impl Into<Option<Extension>>) -> Self {
        self.extension.push(extension.into());
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.extension = extension.into_iter().map(Some).collect();
        self
    }

    pub fn modifier_extension(mut self, extension: impl Into<Option<Extension>>) -> Self {
        self.modifier_extension.push(extension.into());
        self
    }

    pub fn set_modifier_extension(mut self, extension: Vec<Extension>) -> Self {
        self.modifier_extension = extension.into_iter().map(Some).collect();
        self
    }

    pub fn active(mut self, active: impl Into<Boolean>) -> Self {
        self.active = Some(active.into());
        self
    }

    /// Required: person | animal | practitioner | device | medication |
    /// substance.
    pub fn r#type(mut self, type_: impl Into<Code>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Required: descriptive or actual group.
    pub fn actual(mut self, actual: impl Into<Boolean>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    pub fn name(mut self, name: impl Into<Str>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: impl Into<PositiveInt>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn managing_entity(mut self, managing_entity: Reference) -> Self {
        self.managing_entity = Some(managing_entity);
        self
    }

    pub fn build(&self) -> Result<Group> {
        let built = Group {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: validation::check_list("contained", &self.contained)?,
            extension: validation::check_list("extension", &self.extension)?,
            modifier_extension: validation::check_list(
                "modifierExtension",
                &self.modifier_extension,
            )?,
            active: self.active.clone(),
            type_: validation::require("type", self.type_.as_ref())?,
            actual: validation::require("actual", self.actual.as_ref())?,
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            managing_entity: self.managing_entity.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Result<Group> {
        Ok(Group {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: validation::drop_null_entries(&self.contained),
            extension: validation::drop_null_entries(&self.extension),
            modifier_extension: validation::drop_null_entries(&self.modifier_extension),
            active: self.active.clone(),
            type_: validation::require("type", self.type_.as_ref())?,
            actual: validation::require("actual", self.actual.as_ref())?,
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            managing_entity: self.managing_entity.clone(),
        })
    }
}
