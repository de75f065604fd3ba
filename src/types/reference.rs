//! Links from one resource to another.

use serde::Serialize;

use crate::error::Result;
use crate::registry::FieldDef;
use crate::types::{Element, Extension, FhirType, Str, Uri};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_child, accept_list, visit_node};

/// A reference to another resource, literal (`Type/id`, absolute url,
/// `#fragment`) or described only by `display`. Target-type checking against
/// a field's declared target set happens in the enclosing type's `build()`;
/// resolution never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    id: Option<String>,
    extension: Vec<Extension>,
    reference: Option<Str>,
    #[serde(rename = "type")]
    type_: Option<Uri>,
    display: Option<Str>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    /// Convenience constructor for the common literal form.
    pub fn of(reference: impl Into<Str>) -> Self {
        Reference {
            id: None,
            extension: Vec::new(),
            reference: Some(reference.into()),
            type_: None,
            display: None,
        }
    }

    pub fn reference(&self) -> Option<&Str> {
        self.reference.as_ref()
    }

    pub fn r#type(&self) -> Option<&Uri> {
        self.type_.as_ref()
    }

    pub fn display(&self) -> Option<&Str> {
        self.display.as_ref()
    }

    /// The literal reference payload, when present and populated.
    pub fn reference_value(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.value()).map(String::as_str)
    }

    /// The declared target type discriminator, when present and populated.
    pub fn type_value(&self) -> Option<&str> {
        self.type_.as_ref().and_then(|t| t.value()).map(String::as_str)
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            display: self.display.clone(),
        }
    }

    pub fn field_definitions() -> &'static [FieldDef] {
        const DEFS: &[FieldDef] = &[
            FieldDef::new("extension", 0, None, &[FhirType::Extension]),
            FieldDef::new("reference", 0, Some(1), &[FhirType::String]),
            FieldDef::new("type", 0, Some(1), &[FhirType::Uri]),
            FieldDef::new("display", 0, Some(1), &[FhirType::String]),
        ];
        DEFS
    }
}

impl Element for Reference {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Reference {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.reference.as_ref())?;
        validation::validate_opt(self.type_.as_ref())?;
        validation::validate_opt(self.display.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Reference {
    fn type_name(&self) -> &'static str {
        "Reference"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
            || self.reference.is_some()
            || self.type_.is_some()
            || self.display.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            accept_child(self.reference.as_ref(), "reference", v);
            accept_child(self.type_.as_ref(), "type", v);
            accept_child(self.display.as_ref(), "display", v);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Reference::of(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    reference: Option<Str>,
    type_: Option<Uri>,
    display: Option<Str>,
}

impl ReferenceBuilder {
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

    pub fn reference(mut self, reference: impl Into<Str>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn r#type(mut self, type_: impl Into<Uri>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn display(mut self, display: impl Into<Str>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn build(&self) -> Result<Reference> {
        let built = Reference {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            display: self.display.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Reference {
        Reference {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            display: self.display.clone(),
        }
    }
}
