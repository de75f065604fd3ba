//! The generic key/value side-channel carried by every element.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::types::{DataValue, Element};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_list, visit_node};

/// Open-ended additional data keyed by a uri. The value slot is the full
/// choice union; no narrowing applies at this level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    id: Option<String>,
    extension: Vec<Extension>,
    url: String,
    value: Option<DataValue>,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> Option<&DataValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

impl Element for Extension {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }
}

impl Validate for Extension {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validation::check_string("id", id)?;
        }
        validation::check_uri("url", &self.url)?;
        if self.url.is_empty() {
            return Err(ModelError::invalid_value("url", "url must not be empty"));
        }
        validation::validate_all(&self.extension)?;
        validation::validate_opt(self.value.as_ref())?;
        validation::require_value_or_children(self)?;
        Ok(())
    }
}

impl Visitable for Extension {
    fn type_name(&self) -> &'static str {
        "Extension"
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty() || self.value.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        visit_node(self, name, index, visitor, |v| {
            accept_list(&self.extension, "extension", v);
            if let Some(value) = &self.value {
                value.accept("value", None, v);
            }
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    id: Option<String>,
    extension: Vec<Option<Extension>>,
    url: Option<String>,
    value: Option<DataValue>,
}

impl ExtensionBuilder {
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

    /// Required: identifies the meaning of the extension.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Accepts any member of the choice union, or a bare scalar which is
    /// auto-wrapped into the corresponding leaf type.
    pub fn value(mut self, value: impl Into<DataValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(&self) -> Result<Extension> {
        let built = Extension {
            id: self.id.clone(),
            extension: validation::check_list("extension", &self.extension)?,
            url: validation::require("url", self.url.as_ref())?,
            value: self.value.clone(),
        };
        built.validate()?;
        Ok(built)
    }

    pub fn build_unchecked(&self) -> Result<Extension> {
        Ok(Extension {
            id: self.id.clone(),
            extension: validation::drop_null_entries(&self.extension),
            url: validation::require("url", self.url.as_ref())?,
            value: self.value.clone(),
        })
    }
}
