//! General-purpose complex datatypes.
//!
//! These are generated-tier representatives: each one is a mechanical
//! application of the element/builder/visitor framework, trimmed to the
//! fields this core's contracts exercise.

use serde::Serialize;

use crate::error::Result;
use crate::registry::{BindingStrength, FieldDef};
use crate::types::{Code, DateTime, Decimal, Element, Extension, FhirType, Id, Str, Uri};
use crate::types::{Base64Binary, Boolean};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_child, accept_list, visit_node};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    id: Option<String>,
    extension: Vec<Extension>,
    system: Option<Uri>,
    version: Option<Str>,
    code: Option<Code>,
    display: Option<Str>,
    user_selected: Option<Boolean>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&Str> {
        self.version.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&Str> {
        self.display.as_ref()
    }

    pub fn user_selected(&self) -> Option<&Boolean> {
        self.user_selected.as_ref()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("system", 0, Some(1), &[FhirType::Uri]),
            FieldDef::new("version", 0, Some(1), &[FhirType::String]),
            FieldDef::new("code", 0, Some(1), &[FhirType::Code]),
            FieldDef::new("display", 0, Some(1), &[FhirType::String]),
            FieldDef::new("userSelected", 0, Some(1), &[FhirType::Boolean]),
        ];
        DEFS
    }
}

impl Element for Coding {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Coding {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.system.as_ref())?;
        validation::validate_opt(self.version.as_ref())?;
        validation::validate_opt(self.code.as_ref())?;
        validation::validate_opt(self.display.as_ref())?;
        validation::validate_opt(self.user_selected.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Coding {
    fn type_name(&self) -> &'static str {
        "Coding"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.system.as_ref(), "system", v);
            accept_child(self.version.as_ref(), "version", v);
            accept_child(self.code.as_ref(), "code", v);
            accept_child(self.display.as_ref(), "display", v);
            accept_child(self.user_selected.as_ref(), "userSelected", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    system: Option<Uri>,
    version: Option<Str>,
    code: Option<Code>,
    display: Option<Str>,
    user_selected: Option<Boolean>,
}

impl CodingBuilder {
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

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn version(mut self, version: impl Into<Str>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn display(mut self, display: impl Into<Str>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn user_selected(mut self, user_selected: impl Into<Boolean>) -> Self {
        self.user_selected = Some(user_selected.into());
        self
    }

    pub fn build(&self) -> Result<Coding> {
        let built = Coding {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Coding {
        Coding {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }
}

/// A concept, possibly coded in one or more terminology systems, with an
/// optional plain-text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    id: Option<String>,
    extension: Vec<Extension>,
    coding: Vec<Coding>,
    text: Option<Str>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&Str> {
        self.text.as_ref()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            coding: self.coding.iter().cloned().map(Some).collect(),
            text: self.text.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("coding", 0, None, &[FhirType::Coding]),
            FieldDef::new("text", 0, Some(1), &[FhirType::String]),
        ];
        DEFS
    }
}

impl Element for CodeableConcept {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for CodeableConcept {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_all(&self.coding)?;
        validation::validate_opt(self.text.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for CodeableConcept {
    fn type_name(&self) -> &'static str {
        "CodeableConcept"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty() || !self.coding.is_empty() || self.text.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_list(&self.coding, "coding", v);
            accept_child(self.text.as_ref(), "text", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    coding: Vec<Option<Coding>>,
    text: Option<Str>,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, coding: impl Into<Option<Coding>>) -> Self {
        self.coding.push(coding.into());
        self
    }

    pub fn set_coding(mut self, coding: Vec<Coding>) -> Self {
        self.coding = coding.into_iter().map(Some).collect();
        self
    }

    pub fn text(mut self, text: impl Into<Str>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn build(&self) -> Result<CodeableConcept> {
        let built = CodeableConcept {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            coding: validation::check_list("coding", &self.coding)?,
            text: self.text.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> CodeableConcept {
        CodeableConcept {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            coding: validation::drop_null_entries(&self.coding),
            text: self.text.clone(),
        }
    }
}

/// A measured amount, with an optional comparator and coded unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    comparator: Option<Code>,
    unit: Option<Str>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn value(&self) -> Option<&Decimal> {
        self.value.as_ref()
    }

    pub fn comparator(&self) -> Option<&Code> {
        self.comparator.as_ref()
    }

    pub fn unit(&self) -> Option<&Str> {
        self.unit.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("value", 0, Some(1), &[FhirType::Decimal]),
            FieldDef::new("comparator", 0, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/quantity-comparator|4.0.1",
            ),
            FieldDef::new("unit", 0, Some(1), &[FhirType::String]),
            FieldDef::new("system", 0, Some(1), &[FhirType::Uri]),
            FieldDef::new("code", 0, Some(1), &[FhirType::Code]),
        ];
        DEFS
    }
}

impl Element for Quantity {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Quantity {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.value.as_ref())?;
        validation::validate_opt(self.comparator.as_ref())?;
        validation::validate_opt(self.unit.as_ref())?;
        validation::validate_opt(self.system.as_ref())?;
        validation::validate_opt(self.code.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Quantity {
    fn type_name(&self) -> &'static str {
        "Quantity"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.value.is_some()
            || self.comparator.is_some()
            || self.unit.is_some()
            || self.system.is_some()
            || self.code.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.value.as_ref(), "value", v);
            accept_child(self.comparator.as_ref(), "comparator", v);
            accept_child(self.unit.as_ref(), "unit", v);
            accept_child(self.system.as_ref(), "system", v);
            accept_child(self.code.as_ref(), "code", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    value: Option<Decimal>,
    comparator: Option<Code>,
    unit: Option<Str>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl QuantityBuilder {
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

    pub fn value(mut self, value: impl Into<Decimal>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn comparator(mut self, comparator: impl Into<Code>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<Str>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn build(&self) -> Result<Quantity> {
        let built = Quantity {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Quantity {
        Quantity {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }
}

/// A time range bounded by two date-times; either bound may be open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    id: Option<String>,
    extension: Vec<Extension>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("start", 0, Some(1), &[FhirType::DateTime]),
            FieldDef::new("end", 0, Some(1), &[FhirType::DateTime]),
        ];
        DEFS
    }
}

impl Element for Period {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Period {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.start.as_ref())?;
        validation::validate_opt(self.end.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Period {
    fn type_name(&self) -> &'static str {
        "Period"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.start.is_some() || self.end.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.start.as_ref(), "start", v);
            accept_child(self.end.as_ref(), "end", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
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

    pub fn start(mut self, start: impl Into<DateTime>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<DateTime>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn build(&self) -> Result<Period> {
        let built = Period {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            start: self.start.clone(),
            end: self.end.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Period {
        Period {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// Content defined elsewhere or carried inline as base64 data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    id: Option<String>,
    extension: Vec<Extension>,
    content_type: Option<Code>,
    data: Option<Base64Binary>,
    url: Option<Uri>,
    title: Option<Str>,
}

impl Attachment {
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    pub fn content_type(&self) -> Option<&Code> {
        self.content_type.as_ref()
    }

    pub fn data(&self) -> Option<&Base64Binary> {
        self.data.as_ref()
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn title(&self) -> Option<&Str> {
        self.title.as_ref()
    }

    pub fn to_builder(&self) -> AttachmentBuilder {
        AttachmentBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            content_type: self.content_type.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("contentType", 0, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/mimetypes|4.0.1",
            ),
            FieldDef::new("data", 0, Some(1), &[FhirType::Base64Binary]),
            FieldDef::new("url", 0, Some(1), &[FhirType::Uri]),
            FieldDef::new("title", 0, Some(1), &[FhirType::String]),
        ];
        DEFS
    }
}

impl Element for Attachment {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Attachment {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.content_type.as_ref())?;
        validation::validate_opt(self.data.as_ref())?;
        validation::validate_opt(self.url.as_ref())?;
        validation::validate_opt(self.title.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Attachment {
    fn type_name(&self) -> &'static str {
        "Attachment"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.content_type.is_some()
            || self.data.is_some()
            || self.url.is_some()
            || self.title.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.content_type.as_ref(), "contentType", v);
            accept_child(self.data.as_ref(), "data", v);
            accept_child(self.url.as_ref(), "url", v);
            accept_child(self.title.as_ref(), "title", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    content_type: Option<Code>,
    data: Option<Base64Binary>,
    url: Option<Uri>,
    title: Option<Str>,
}

impl AttachmentBuilder {
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

    pub fn content_type(mut self, content_type: impl Into<Code>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn data(mut self, data: impl Into<Base64Binary>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn url(mut self, url: impl Into<Uri>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(mut self, title: impl Into<Str>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(&self) -> Result<Attachment> {
        let built = Attachment {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            content_type: self.content_type.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Attachment {
        Attachment {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            content_type: self.content_type.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }
}

/// Metadata about a resource: version, last modification, declared profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    id: Option<String>,
    extension: Vec<Extension>,
    version_id: Option<Id>,
    last_updated: Option<DateTime>,
    profile: Vec<Uri>,
}

impl Meta {
    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn version_id(&self) -> Option<&Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&DateTime> {
        self.last_updated.as_ref()
    }

    pub fn profile(&self) -> &[Uri] {
        &self.profile
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            profile: self.profile.iter().cloned().map(Some).collect(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("versionId", 0, Some(1), &[FhirType::Id]),
            FieldDef::new("lastUpdated", 0, Some(1), &[FhirType::DateTime]),
            FieldDef::new("profile", 0, None, &[FhirType::Uri]),
        ];
        DEFS
    }
}

impl Element for Meta {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Meta {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.version_id.as_ref())?;
        validation::validate_opt(self.last_updated.as_ref())?;
        validation::validate_all(&self.profile)?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Meta {
    fn type_name(&self) -> &'static str {
        "Meta"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.version_id.is_some()
            || self.last_updated.is_some()
            || !self.profile.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.version_id.as_ref(), "versionId", v);
            accept_child(self.last_updated.as_ref(), "lastUpdated", v);
            accept_list(&self.profile, "profile", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetaBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    version_id: Option<Id>,
    last_updated: Option<DateTime>,
    profile: Vec<Option<Uri>>,
}

impl MetaBuilder {
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

    pub fn version_id(mut self, version_id: impl Into<Id>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    pub fn last_updated(mut self, last_updated: impl Into<DateTime>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }

    pub fn profile(mut self, profile: impl Into<Option<Uri>>) -> Self {
        self.profile.push(profile.into());
        self
    }

    pub fn set_profile(mut self, profile: Vec<Uri>) -> Self {
        self.profile = profile.into_iter().map(Some).collect();
        self
    }

    pub fn build(&self) -> Result<Meta> {
        let built = Meta {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            profile: validation::check_list("profile", &self.profile)?,
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Meta {
        Meta {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            profile: validation::drop_null_entries(&self.profile),
        }
    }
}

/// Human-readable summary of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    id: Option<String>,
    extension: Vec<Extension>,
    status: Code,
    div: Str,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn status(&self) -> &Code {
        &self.status
    }

    pub fn div(&self) -> &Str {
        &self.div
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            status: Some(self.status.clone()),
            div: Some(self.div.clone()),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("status", 1, Some(1), &[FhirType::Code]).bound(
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/narrative-status|4.0.1",
            ),
            FieldDef::new("div", 1, Some(1), &[FhirType::String]),
        ];
        DEFS
    }
}

impl Element for Narrative {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Narrative {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        self.status.validate()?;
        self.div.validate()?;
        Ok(())
    }
}

impl Visitable for Narrative {
    fn type_name(&self) -> &'static str {
        "Narrative"
    }

    fn has_children(&self) -> bool {
        true
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            self.status.accept("status", None, v);
            self.div.accept("div", None, v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    status: Option<Code>,
    div: Option<Str>,
}

impl NarrativeBuilder {
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

    /// Required: generated | extensions | additional | empty.
    pub fn status(mut self, status: impl Into<Code>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Required: the xhtml content.
    pub fn div(mut self, div: impl Into<Str>) -> Self {
        self.div = Some(div.into());
        self
    }

    pub fn build(&self) -> Result<Narrative> {
        let built = Narrative {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            status: validation::require("status", self.status.as_ref())?,
            div: validation::require("div", self.div.as_ref())?,
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Result<Narrative> {
        Ok(Narrative {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            status: validation::require("status", self.status.as_ref())?,
            div: validation::require("div", self.div.as_ref())?,
        })
    }
}
