//! ActivityDefinition resource: the definition of an activity to be
//! performed, independent of any particular patient or context.

use serde::Serialize;

use crate::error::Result;
use crate::registry::{BindingStrength, FieldDef};
use crate::types::{
    AnyResource, BackboneElement, Code, CodeableConcept, DataValue, DateTime, DomainResource,
    Element, Extension, FhirType, Markdown, Meta, Narrative, Resource, Str, Uri,
};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_child, accept_list, visit_node};

/// Concrete types the `subject[x]` choice admits.
pub const SUBJECT_TYPES: &[FhirType] = &[FhirType::CodeableConcept, FhirType::Reference];

/// Resource types the Reference arm of `subject[x]` may point at.
pub const SUBJECT_TARGETS: &[&str] = &["Group"];

/// A shareable definition of an activity, with canonical url, publication
/// status, and optional participant requirements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinition {
    id: Option<String>,
    meta: Option<Meta>,
    text: Option<Narrative>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    url: Option<Uri>,
    name: Option<Str>,
    title: Option<Str>,
    status: Code,
    subject: Option<DataValue>,
    date: Option<DateTime>,
    description: Option<Markdown>,
    library: Vec<Uri>,
    participant: Vec<ActivityDefinitionParticipant>,
}

impl ActivityDefinition {
    pub fn builder() -> ActivityDefinitionBuilder {
        ActivityDefinitionBuilder::default()
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

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn name(&self) -> Option<&Str> {
        self.name.as_ref()
    }

    pub fn title(&self) -> Option<&Str> {
        self.title.as_ref()
    }

    pub fn status(&self) -> &Code {
        &self.status
    }

    pub fn subject(&self) -> Option<&DataValue> {
        self.subject.as_ref()
    }

    pub fn date(&self) -> Option<&DateTime> {
        self.date.as_ref()
    }

    pub fn description(&self) -> Option<&Markdown> {
        self.description.as_ref()
    }

    pub fn library(&self) -> &[Uri] {
        &self.library
    }

    pub fn participant(&self) -> &[ActivityDefinitionParticipant] {
        &self.participant
    }

    pub fn to_builder(&self) -> ActivityDefinitionBuilder {
        ActivityDefinitionBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: self.contained.iter().cloned().map(Some).collect(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            modifier_extension: self.modifier_extension.iter().cloned().map(Some).collect(),
            url: self.url.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            status: Some(self.status.clone()),
            subject: self.subject.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
            library: self.library.iter().cloned().map(Some).collect(),
            participant: self.participant.iter().cloned().map(Some).collect(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("modifierExtension", 0, None, &[FhirType::Extension]),
            FieldDef::new("url", 0, Some(1), &[FhirType::Uri]),
            FieldDef::new("name", 0, Some(1), &[FhirType::String]),
            FieldDef::new("title", 0, Some(1), &[FhirType::String]),
            FieldDef::new("status", 1, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/publication-status|4.0.1",
            ),
            FieldDef::new("subject[x]", 0, Some(1), SUBJECT_TYPES).targets(SUBJECT_TARGETS),
            FieldDef::new("date", 0, Some(1), &[FhirType::DateTime]),
            FieldDef::new("description", 0, Some(1), &[FhirType::Markdown]),
            FieldDef::new("library", 0, None, &[FhirType::Uri]),
            FieldDef::new("participant", 0, None, &[FhirType::BackboneElement]),
        ];
        DEFS
    }
}

impl Element for ActivityDefinition {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Resource for ActivityDefinition {
    fn resource_type(&self) -> &'static str {
        "ActivityDefinition"
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl DomainResource for ActivityDefinition {
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

impl Validate for ActivityDefinition {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_id("id", id)?;
        }
        validation::validate_opt(self.meta.as_ref())?;
        validation::validate_opt(self.text.as_ref())?;
        validation::validate_all(&self.contained)?;
        validation::validate_all(&self.extension)?;
        validation::validate_all(&self.modifier_extension)?;
        validation::validate_opt(self.url.as_ref())?;
        validation::validate_opt(self.name.as_ref())?;
        validation::validate_opt(self.title.as_ref())?;
        self.status.validate()?;
        if let Some(subject) = &self.subject {
            validation::check_choice_type("subject[x]", subject, SUBJECT_TYPES)?;
            validation::check_reference_choice("subject[x]", subject, SUBJECT_TARGETS)?;
            subject.validate()?;
        }
        validation::validate_opt(self.date.as_ref())?;
        validation::validate_opt(self.description.as_ref())?;
        validation::validate_all(&self.library)?;
        validation::validate_all(&self.participant)?;
        Ok(())
    }
}

impl Visitable for ActivityDefinition {
    fn type_name(&self) -> &'static str {
        "ActivityDefinition"
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
            accept_child(self.url.as_ref(), "url", v);
            accept_child(self.name.as_ref(), "name", v);
            accept_child(self.title.as_ref(), "title", v);
            self.status.accept("status", None, v);
            if let Some(subject) = &self.subject {
                subject.accept("subject", None, v);
            }
            accept_child(self.date.as_ref(), "date", v);
            accept_child(self.description.as_ref(), "description", v);
            accept_list(&self.library, "library", v);
            accept_list(&self.participant, "participant", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityDefinitionBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    text: Option<Narrative>,
    contained: Vec<Option<AnyResource>>,
    extension: Vec<Option<Extension>>,
    modifier_extension: Vec<Option<Extension>>,
    url: Option<Uri>,
    name: Option<Str>,
    title: Option<Str>,
    status: Option<Code>,
    subject: Option<DataValue>,
    date: Option<DateTime>,
    description: Option<Markdown>,
    library: Vec<Option<Uri>>,
    participant: Vec<Option<ActivityDefinitionParticipant>>,
}

impl ActivityDefinitionBuilder {
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

    pub fn url(mut self, url: impl Into<Uri>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn name(mut self, name: impl Into<Str>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<Str>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Required: draft | active | retired | unknown.
    pub fn status(mut self, status: impl Into<Code>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Choice field; admits CodeableConcept or Reference(Group). Any other
    /// concrete type is rejected at `build()`.
    pub fn subject(mut self, subject: impl Into<DataValue>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn date(mut self, date: impl Into<DateTime>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn description(mut self, description: impl Into<Markdown>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn library(mut self, library: impl Into<Option<Uri>>) -> Self {
        self.library.push(library.into());
        self
    }

    pub fn set_library(mut self, library: Vec<Uri>) -> Self {
        self.library = library.into_iter().map(Some).collect();
        self
    }

    pub fn participant(
        mut self,
        participant: impl Into<Option<ActivityDefinitionParticipant>>,
    ) -> Self {
        self.participant.push(participant.into());
        self
    }

    pub fn set_participant(mut self, participant: Vec<ActivityDefinitionParticipant>) -> Self {
        self.participant = participant.into_iter().map(Some).collect();
        self
    }

    pub fn build(&self) -> Result<ActivityDefinition> {
        let built = ActivityDefinition {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: validation::check_list("contained", &self.contained)?,
            extension: validation::check_list("extension", &self.extension)?,
            modifier_extension: validation::check_list(
                "modifierExtension",
                &self.modifier_extension,
            )?,
            url: self.url.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            status: validation::require("status", self.status.as_ref())?,
            subject: self.subject.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
            library: validation::check_list("library", &self.library)?,
            participant: validation::check_list("participant", &self.participant)?,
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Result<ActivityDefinition> {
        Ok(ActivityDefinition {
            id: self.id.clone(),
            meta: self.meta.clone(),
            text: self.text.clone(),
            contained: validation::drop_null_entries(&self.contained),
            extension: validation::drop_null_entries(&self.extension),
            modifier_extension: validation::drop_null_entries(&self.modifier_extension),
            url: self.url.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            status: validation::require("status", self.status.as_ref())?,
            subject: self.subject.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
            library: validation::drop_null_entries(&self.library),
            participant: validation::drop_null_entries(&self.participant),
        })
    }
}

/// Who should participate in the defined activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinitionParticipant {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    #[serde(rename = "type")]
    type_: Code,
    role: Option<CodeableConcept>,
}

impl ActivityDefinitionParticipant {
    pub fn builder() -> ActivityDefinitionParticipantBuilder {
        ActivityDefinitionParticipantBuilder::default()
    }

    pub fn r#type(&self) -> &Code {
        &self.type_
    }

    pub fn role(&self) -> Option<&CodeableConcept> {
        self.role.as_ref()
    }

    pub fn to_builder(&self) -> ActivityDefinitionParticipantBuilder {
        ActivityDefinitionParticipantBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            modifier_extension: self.modifier_extension.iter().cloned().map(Some).collect(),
            type_: Some(self.type_.clone()),
            role: self.role.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("modifierExtension", 0, None, &[FhirType::Extension]),
            FieldDef::new("type", 1, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/action-participant-type|4.0.1",
            ),
            FieldDef::new("role", 0, Some(1), &[FhirType::CodeableConcept]),
        ];
        DEFS
    }
}

impl Element for ActivityDefinitionParticipant {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl BackboneElement for ActivityDefinitionParticipant {
    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }
}

impl Validate for ActivityDefinitionParticipant {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_all(&self.modifier_extension)?;
        self.type_.validate()?;
        validation::validate_opt(self.role.as_ref())?;
        Ok(())
    }
}

impl Visitable for ActivityDefinitionParticipant {
    fn type_name(&self) -> &'static str {
        "ActivityDefinition.Participant"
    }

    fn has_children(&self) -> bool {
        true
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.modifier_extension, "modifierExtension", v);
            self.type_.accept("type", None, v);
            accept_child(self.role.as_ref(), "role", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityDefinitionParticipantBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    modifier_extension: Vec<Option<Extension>>,
    type_: Option<Code>,
    role: Option<CodeableConcept>,
}

impl ActivityDefinitionParticipantBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    /// Required: patient | practitioner | related-person | device.
    pub fn r#type(mut self, type_: impl Into<Code>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn role(mut self, role: CodeableConcept) -> Self {
        self.role = Some(role);
        self
    }

    pub fn build(&self) -> Result<ActivityDefinitionParticipant> {
        let built = ActivityDefinitionParticipant {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            modifier_extension: validation::check_list(
                "modifierExtension",
                &self.modifier_extension,
            )?,
            type_: validation::require("type", self.type_.as_ref())?,
            role: self.role.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Result<ActivityDefinitionParticipant> {
        Ok(ActivityDefinitionParticipant {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            modifier_extension: validation::drop_null_entries(&self.modifier_extension),
            type_: validation::require("type", self.type_.as_ref())?,
            role: self.role.clone(),
        })
    }
}
