//! Primitive leaf values.
//!
//! Each wrapper carries an optional id, an ordered extension list, and an
//! optional typed payload, exactly like the generated primitive tier it
//! stands in for. The `primitive_type!` macro stamps the shared shape; the
//! per-type lexical rule is the only thing that varies.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::types::{Element, Extension};
use crate::validation::{self, Validate};
use crate::visitor::{Visitable, Visitor, accept_list, visit_node};

fn no_check<T>(_field: &str, _value: &T) -> Result<()> {
    Ok(())
}

macro_rules! primitive_type {
    (
        $(#[$meta:meta])*
        $name:ident, $builder:ident, $type_name:literal, $value_ty:ty, $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            id: Option<String>,
            extension: Vec<Extension>,
            value: Option<$value_ty>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Wrap a bare payload with no id and no extensions. The lexical
            /// rule for the payload is enforced by the first validating
            /// `build()` that encloses the value.
            pub fn of(value: impl Into<$value_ty>) -> Self {
                Self {
                    id: None,
                    extension: Vec::new(),
                    value: Some(value.into()),
                }
            }

            pub fn value(&self) -> Option<&$value_ty> {
                self.value.as_ref()
            }

            pub fn has_value(&self) -> bool {
                self.value.is_some()
            }

            /// Seed a fresh builder with a copy of every field.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    id: self.id.clone(),
                    extension: self.extension.iter().cloned().map(Some).collect(),
                    value: self.value.clone(),
                }
            }
        }

        impl Element for $name {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn extension(&self) -> &[Extension] {
                &self.extension
            }
        }

        impl Validate for $name {
            fn validate(&self) -> Result<()> {
                if let Some(id) = &self.id {
                    validation::check_string("id", id)?;
                }
                if let Some(value) = &self.value {
                    ($check)($type_name, value)?;
                }
                validation::validate_all(&self.extension)?;
                if self.id.is_none() && !self.has_children() {
                    return Err(ModelError::EmptyElement {
                        type_name: $type_name,
                    });
                }
                Ok(())
            }
        }

        impl Visitable for $name {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn has_children(&self) -> bool {
                self.value.is_some() || !self.extension.is_empty()
            }

            fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
                visit_node(self, name, index, visitor, |v| {
                    accept_list(&self.extension, "extension", v);
                });
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            id: Option<String>,
            extension: Vec<Option<Extension>>,
            value: Option<$value_ty>,
        }

        impl $builder {
            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            /// Append one extension; a deferred-null entry is rejected at
            /// `build()`.
            pub fn extension(mut self, extension: impl Into<Option<Extension>>) -> Self {
                self.extension.push(extension.into());
                self
            }

            /// Replace the whole extension list.
            pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
                self.extension = extension.into_iter().map(Some).collect();
                self
            }

            pub fn value(mut self, value: impl Into<$value_ty>) -> Self {
                self.value = Some(value.into());
                self
            }

            /// Assemble and validate. Repeat calls re-derive the same value
            /// from the current builder state.
            pub fn build(&self) -> Result<$name> {
                let built = $name {
                    id: self.id.clone(),
                    extension: validation::check_list("extension", &self.extension)?,
                    value: self.value.clone(),
                };
                built.validate()?;
                Ok(built)
            }

            /// Assemble without validation; deferred-null extension entries
            /// are dropped.
            pub fn build_unchecked(&self) -> $name {
                $name {
                    id: self.id.clone(),
                    extension: validation::drop_null_entries(&self.extension),
                    value: self.value.clone(),
                }
            }
        }
    };
}

primitive_type!(
    /// A stream of bytes, base64 encoded.
    Base64Binary,
    Base64BinaryBuilder,
    "base64Binary",
    String,
    validation::check_base64
);

primitive_type!(
    /// Value of "true" or "false".
    Boolean,
    BooleanBuilder,
    "boolean",
    bool,
    no_check
);

primitive_type!(
    /// A string taken from a controlled set of terms.
    Code,
    CodeBuilder,
    "code",
    String,
    validation::check_code
);

primitive_type!(
    /// A date, without a time of day.
    Date,
    DateBuilder,
    "date",
    chrono::NaiveDate,
    no_check
);

primitive_type!(
    /// A date-time with timezone offset.
    DateTime,
    DateTimeBuilder,
    "dateTime",
    chrono::DateTime<chrono::FixedOffset>,
    no_check
);

primitive_type!(
    /// A rational number with implicit precision.
    Decimal,
    DecimalBuilder,
    "decimal",
    rust_decimal::Decimal,
    no_check
);

primitive_type!(
    /// Letters, numerals, "-" and ".", up to 64 characters.
    Id,
    IdBuilder,
    "id",
    String,
    validation::check_id
);

primitive_type!(
    /// A signed 32-bit integer.
    Integer,
    IntegerBuilder,
    "integer",
    i32,
    no_check
);

primitive_type!(
    /// A string intended to be rendered as markdown.
    Markdown,
    MarkdownBuilder,
    "markdown",
    String,
    validation::check_string
);

primitive_type!(
    /// An integer greater than or equal to one.
    PositiveInt,
    PositiveIntBuilder,
    "positiveInt",
    u32,
    validation::check_positive_int
);

primitive_type!(
    /// A sequence of Unicode characters. Named `Str` to stay clear of
    /// `std::string::String`.
    Str,
    StrBuilder,
    "string",
    String,
    validation::check_string
);

primitive_type!(
    /// A uniform resource identifier; may be absolute or relative.
    Uri,
    UriBuilder,
    "uri",
    String,
    validation::check_uri
);

macro_rules! from_payload {
    ($name:ident: $($payload:ty),+) => {
        $(
            impl From<$payload> for $name {
                fn from(value: $payload) -> Self {
                    $name::of(value)
                }
            }
        )+
    };
}

from_payload!(Base64Binary: &str, String);
from_payload!(Boolean: bool);
from_payload!(Code: &str, String);
from_payload!(Date: chrono::NaiveDate);
from_payload!(DateTime: chrono::DateTime<chrono::FixedOffset>);
from_payload!(Decimal: rust_decimal::Decimal);
from_payload!(Id: &str, String);
from_payload!(Integer: i32);
from_payload!(Markdown: &str, String);
from_payload!(PositiveInt: u32);
from_payload!(Str: &str, String);
from_payload!(Uri: &str, String);
