//! Choice-typed field support.
//!
//! A choice field declares an allowed subset of [`FhirType`] and stores at
//! most one [`DataValue`]. Membership in the declared subset is checked at
//! `build()`; exhaustive matching over the union replaces runtime type
//! inspection everywhere else.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::types::{
    Attachment, Base64Binary, Boolean, Code, CodeableConcept, Coding, Date, DateTime, Decimal, Id,
    Integer, Markdown, Period, PositiveInt, Quantity, Reference, Str, Uri,
};
use crate::validation::Validate;
use crate::visitor::{Visitable, Visitor};

/// Names of the datatypes the core's choice union covers, spelled the way
/// the governing specification spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FhirType {
    Base64Binary,
    Boolean,
    Code,
    Date,
    DateTime,
    Decimal,
    Id,
    Integer,
    Markdown,
    PositiveInt,
    String,
    Uri,
    Attachment,
    BackboneElement,
    CodeableConcept,
    Coding,
    Extension,
    Period,
    Quantity,
    Reference,
}

impl FhirType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirType::Base64Binary => "base64Binary",
            FhirType::Boolean => "boolean",
            FhirType::Code => "code",
            FhirType::Date => "date",
            FhirType::DateTime => "dateTime",
            FhirType::Decimal => "decimal",
            FhirType::Id => "id",
            FhirType::Integer => "integer",
            FhirType::Markdown => "markdown",
            FhirType::PositiveInt => "positiveInt",
            FhirType::String => "string",
            FhirType::Uri => "uri",
            FhirType::Attachment => "Attachment",
            FhirType::BackboneElement => "BackboneElement",
            FhirType::CodeableConcept => "CodeableConcept",
            FhirType::Coding => "Coding",
            FhirType::Extension => "Extension",
            FhirType::Period => "Period",
            FhirType::Quantity => "Quantity",
            FhirType::Reference => "Reference",
        }
    }

    pub fn is_primitive(&self) -> bool {
        crate::registry::is_primitive_type(self.as_str())
    }
}

impl fmt::Display for FhirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full datatype union a choice slot can hold. A concrete field narrows
/// this with its declared allowed set, enforced by
/// [`crate::validation::check_choice_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum DataValue {
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Code(Code),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Id(Id),
    Integer(Integer),
    Markdown(Markdown),
    PositiveInt(PositiveInt),
    String(Str),
    Uri(Uri),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Period(Period),
    Quantity(Quantity),
    Reference(Reference),
}

impl DataValue {
    pub fn fhir_type(&self) -> FhirType {
        match self {
            DataValue::Base64Binary(_) => FhirType::Base64Binary,
            DataValue::Boolean(_) => FhirType::Boolean,
            DataValue::Code(_) => FhirType::Code,
            DataValue::Date(_) => FhirType::Date,
            DataValue::DateTime(_) => FhirType::DateTime,
            DataValue::Decimal(_) => FhirType::Decimal,
            DataValue::Id(_) => FhirType::Id,
            DataValue::Integer(_) => FhirType::Integer,
            DataValue::Markdown(_) => FhirType::Markdown,
            DataValue::PositiveInt(_) => FhirType::PositiveInt,
            DataValue::String(_) => FhirType::String,
            DataValue::Uri(_) => FhirType::Uri,
            DataValue::Attachment(_) => FhirType::Attachment,
            DataValue::CodeableConcept(_) => FhirType::CodeableConcept,
            DataValue::Coding(_) => FhirType::Coding,
            DataValue::Period(_) => FhirType::Period,
            DataValue::Quantity(_) => FhirType::Quantity,
            DataValue::Reference(_) => FhirType::Reference,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            DataValue::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Dispatch the visitor to the concrete value under the choice field's
    /// base name.
    pub(crate) fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            DataValue::Base64Binary(v) => v.accept(name, index, visitor),
            DataValue::Boolean(v) => v.accept(name, index, visitor),
            DataValue::Code(v) => v.accept(name, index, visitor),
            DataValue::Date(v) => v.accept(name, index, visitor),
            DataValue::DateTime(v) => v.accept(name, index, visitor),
            DataValue::Decimal(v) => v.accept(name, index, visitor),
            DataValue::Id(v) => v.accept(name, index, visitor),
            DataValue::Integer(v) => v.accept(name, index, visitor),
            DataValue::Markdown(v) => v.accept(name, index, visitor),
            DataValue::PositiveInt(v) => v.accept(name, index, visitor),
            DataValue::String(v) => v.accept(name, index, visitor),
            DataValue::Uri(v) => v.accept(name, index, visitor),
            DataValue::Attachment(v) => v.accept(name, index, visitor),
            DataValue::CodeableConcept(v) => v.accept(name, index, visitor),
            DataValue::Coding(v) => v.accept(name, index, visitor),
            DataValue::Period(v) => v.accept(name, index, visitor),
            DataValue::Quantity(v) => v.accept(name, index, visitor),
            DataValue::Reference(v) => v.accept(name, index, visitor),
        }
    }
}

impl Validate for DataValue {
    fn validate(&self) -> Result<()> {
        match self {
            DataValue::Base64Binary(v) => v.validate(),
            DataValue::Boolean(v) => v.validate(),
            DataValue::Code(v) => v.validate(),
            DataValue::Date(v) => v.validate(),
            DataValue::DateTime(v) => v.validate(),
            DataValue::Decimal(v) => v.validate(),
            DataValue::Id(v) => v.validate(),
            DataValue::Integer(v) => v.validate(),
            DataValue::Markdown(v) => v.validate(),
            DataValue::PositiveInt(v) => v.validate(),
            DataValue::String(v) => v.validate(),
            DataValue::Uri(v) => v.validate(),
            DataValue::Attachment(v) => v.validate(),
            DataValue::CodeableConcept(v) => v.validate(),
            DataValue::Coding(v) => v.validate(),
            DataValue::Period(v) => v.validate(),
            DataValue::Quantity(v) => v.validate(),
            DataValue::Reference(v) => v.validate(),
        }
    }
}

macro_rules! from_value {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for DataValue {
                fn from(value: $ty) -> Self {
                    DataValue::$variant(value)
                }
            }
        )+
    };
}

from_value!(
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Code(Code),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Id(Id),
    Integer(Integer),
    Markdown(Markdown),
    PositiveInt(PositiveInt),
    String(Str),
    Uri(Uri),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    Period(Period),
    Quantity(Quantity),
    Reference(Reference),
);

// Bare-scalar auto-wrap for convenience setters.
impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(Str::of(value))
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(Boolean::of(value))
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Integer(Integer::of(value))
    }
}
