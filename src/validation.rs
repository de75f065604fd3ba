//! Structural validation support.
//!
//! Free functions composing the per-type `build()` pipeline: required-field
//! checks, list entry checks, choice-type membership, reference target-type
//! checks, lexical checks for primitive values, and the empty-element rule
//! (ele-1). Every check either passes silently or fails the whole build;
//! there are no retries and no warning-only structural checks.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::{ModelError, Result};
use crate::registry;
use crate::types::{DataValue, Element, FhirType, Reference};
use crate::visitor::Visitable;

const MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Literal local reference of the form `Type/id`, with an optional
/// `/_history/vid` suffix.
static LOCAL_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)/[A-Za-z0-9\-\.]{1,64}(?:/_history/[A-Za-z0-9\-\.]{1,64})?$")
        .expect("local reference pattern")
});

/// Revalidation of an already-built node.
///
/// Checks the node's own constraints and recurses into its children, so
/// validating a valid instance a second time is a no-op that returns `Ok`.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_all<T: Validate>(items: &[T]) -> Result<()> {
    for item in items {
        item.validate()?;
    }
    Ok(())
}

pub fn validate_opt<T: Validate>(item: Option<&T>) -> Result<()> {
    if let Some(item) = item {
        item.validate()?;
    }
    Ok(())
}

/// Extract a required field from builder state.
pub fn require<T: Clone>(field: &str, value: Option<&T>) -> Result<T> {
    value
        .cloned()
        .ok_or_else(|| ModelError::missing_required(field))
}

/// Finalize a repeating field, rejecting deferred-null entries.
///
/// An empty list always passes; the absent state of a list field is the
/// empty sequence, never a null container.
pub fn check_list<T: Clone>(field: &str, entries: &[Option<T>]) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Some(value) => out.push(value.clone()),
            None => {
                return Err(ModelError::InvalidListElement {
                    field: field.to_string(),
                    index,
                    reason: "repeating elements do not permit null entries".to_string(),
                });
            }
        }
    }
    Ok(out)
}

/// `check_list` plus a minimum cardinality of one.
pub fn check_non_empty_list<T: Clone>(field: &str, entries: &[Option<T>]) -> Result<Vec<T>> {
    if entries.is_empty() {
        return Err(ModelError::missing_required(field));
    }
    check_list(field, entries)
}

/// Finalize a repeating field without validation, discarding null entries.
pub fn drop_null_entries<T: Clone>(entries: &[Option<T>]) -> Vec<T> {
    entries.iter().flatten().cloned().collect()
}

/// Profile-constrained types use this for elements their profile removes.
pub fn prohibited<T>(field: &str, value: Option<&T>) -> Result<()> {
    if value.is_some() {
        return Err(ModelError::ProhibitedField {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn prohibited_list<T>(field: &str, values: &[T]) -> Result<()> {
    if !values.is_empty() {
        return Err(ModelError::ProhibitedField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Check that a choice field holds one of its declared allowed types.
pub fn check_choice_type(field: &str, value: &DataValue, allowed: &[FhirType]) -> Result<()> {
    let actual = value.fhir_type();
    if !allowed.contains(&actual) {
        return Err(ModelError::InvalidChoiceType {
            field: field.to_string(),
            actual: actual.to_string(),
            allowed: allowed.iter().map(|t| t.to_string()).collect(),
        });
    }
    Ok(())
}

/// Best-effort structural check of a reference's target resource type.
///
/// The type is determined from the literal `Type/id` form, the conditional
/// `Type?query` form, or the explicit `Reference.type` discriminator.
/// Fragment references, absolute URLs, and logical references with no
/// determinable type are skipped; resolution is out of scope.
pub fn check_reference_type(field: &str, reference: &Reference, allowed: &[&str]) -> Result<()> {
    let mut literal_type: Option<&str> = None;

    if let Some(value) = reference.reference_value() {
        if value.starts_with('#') || url::Url::parse(value).is_ok() {
            trace!(field, value, "reference target check skipped for non-literal reference");
        } else if let Some(index) = value.find('?') {
            // conditional reference
            literal_type = Some(&value[..index]);
        } else if let Some(captures) = LOCAL_REFERENCE.captures(value) {
            literal_type = Some(captures.get(1).expect("type group").as_str());
        }
    }

    if let Some(found) = literal_type {
        check_target_type(field, found, allowed)?;
    }

    if let Some(declared) = reference.type_value() {
        check_target_type(field, declared, allowed)?;
        if let Some(found) = literal_type {
            if found != declared {
                return Err(ModelError::invalid_value(
                    field,
                    format!(
                        "resource type found in reference value: '{found}' does not match Reference.type: '{declared}'"
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Apply the reference target check to every entry of a reference list.
pub fn check_reference_list(field: &str, references: &[Reference], allowed: &[&str]) -> Result<()> {
    for reference in references {
        check_reference_type(field, reference, allowed)?;
    }
    Ok(())
}

/// Apply the reference target check to a choice value's Reference variant.
///
/// The target-type set constrains only the Reference arm of a choice field;
/// any other concrete type passes through untouched.
pub fn check_reference_choice(field: &str, value: &DataValue, allowed: &[&str]) -> Result<()> {
    if let DataValue::Reference(reference) = value {
        check_reference_type(field, reference, allowed)?;
    }
    Ok(())
}

fn check_target_type(field: &str, found: &str, allowed: &[&str]) -> Result<()> {
    if !registry::is_resource_type(found) {
        return Err(ModelError::invalid_value(
            field,
            format!("'{found}' is not a valid resource type name"),
        ));
    }
    if !allowed.contains(&found) {
        return Err(ModelError::InvalidReferenceTarget {
            field: field.to_string(),
            found: found.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        });
    }
    Ok(())
}

/// The ele-1 rule: a structural node with no id and no populated fields is
/// degenerate and never valid.
pub fn require_value_or_children<T: Element + Visitable>(node: &T) -> Result<()> {
    if node.id().is_none() && !node.has_children() {
        return Err(ModelError::EmptyElement {
            type_name: node.type_name(),
        });
    }
    Ok(())
}

/// A sequence of Unicode characters, pattern `[ \r\n\t\S]+`.
pub fn check_string(field: &str, s: &str) -> Result<()> {
    // The limit is in characters; only count when the byte length can exceed it.
    if s.len() > MAX_STRING_LENGTH {
        let length = s.chars().count();
        if length > MAX_STRING_LENGTH {
            return Err(ModelError::invalid_value(
                field,
                format!(
                    "string value length: {length} is greater than maximum allowed length: {MAX_STRING_LENGTH}"
                ),
            ));
        }
    }
    let mut count = 0usize;
    for ch in s.chars() {
        if !ch.is_whitespace() {
            check_control_char(field, ch)?;
            count += 1;
        } else if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
            return Err(ModelError::invalid_value(
                field,
                "string value is not valid with respect to pattern: [ \\r\\n\\t\\S]+",
            ));
        }
    }
    if count == 0 {
        return Err(ModelError::invalid_value(
            field,
            "string value must contain at least one non-whitespace character",
        ));
    }
    Ok(())
}

/// A code: no leading/trailing whitespace, no whitespace other than single
/// interior spaces. Pattern `[^\s]+(\s[^\s]+)*`.
pub fn check_code(field: &str, s: &str) -> Result<()> {
    if s.is_empty() || s.starts_with(char::is_whitespace) {
        return Err(ModelError::invalid_value(
            field,
            format!("code value: '{s}' must begin with a non-whitespace character"),
        ));
    }
    if s.ends_with(char::is_whitespace) {
        return Err(ModelError::invalid_value(
            field,
            format!("code value: '{s}' must end with a non-whitespace character"),
        ));
    }
    let mut previous_is_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(ModelError::invalid_value(
                    field,
                    format!("code value: '{s}' must not contain whitespace other than a single space"),
                ));
            }
            if previous_is_space {
                return Err(ModelError::invalid_value(
                    field,
                    format!("code value: '{s}' must not contain consecutive spaces"),
                ));
            }
            previous_is_space = true;
        } else {
            check_control_char(field, ch)?;
            previous_is_space = false;
        }
    }
    Ok(())
}

/// An id: 1..=64 characters from `[A-Za-z0-9.-]`.
pub fn check_id(field: &str, s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(ModelError::invalid_value(field, "id value must not be empty"));
    }
    if s.len() > 64 {
        return Err(ModelError::invalid_value(
            field,
            format!(
                "id value length: {} is greater than maximum allowed length: 64",
                s.len()
            ),
        ));
    }
    for ch in s.chars() {
        if !ch.is_ascii_alphanumeric() && ch != '-' && ch != '.' {
            return Err(ModelError::invalid_value(
                field,
                format!("id value: '{s}' contains invalid character '{ch}'"),
            ));
        }
    }
    Ok(())
}

/// A uri: no whitespace, pattern `\S*`.
pub fn check_uri(field: &str, s: &str) -> Result<()> {
    if s.chars().any(char::is_whitespace) {
        return Err(ModelError::invalid_value(
            field,
            format!("uri value: '{s}' must not contain whitespace"),
        ));
    }
    Ok(())
}

/// Base64 text: valid alphabet, padding only as a suffix of at most two
/// characters, length a multiple of four.
pub fn check_base64(field: &str, s: &str) -> Result<()> {
    if s.len() % 4 != 0 {
        return Err(ModelError::invalid_value(
            field,
            "base64 value length must be a multiple of four",
        ));
    }
    let mut padding = 0usize;
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => {
                if padding > 0 {
                    return Err(ModelError::invalid_value(
                        field,
                        "base64 padding may only appear at the end of the value",
                    ));
                }
            }
            '=' => {
                padding += 1;
                if padding > 2 {
                    return Err(ModelError::invalid_value(
                        field,
                        "base64 value has more than two padding characters",
                    ));
                }
            }
            _ => {
                return Err(ModelError::invalid_value(
                    field,
                    format!("invalid base64 character '{ch}'"),
                ));
            }
        }
    }
    Ok(())
}

/// A positiveInt: any integer >= 1.
pub fn check_positive_int(field: &str, value: &u32) -> Result<()> {
    if *value < 1 {
        return Err(ModelError::invalid_value(
            field,
            "positiveInt value must be greater than or equal to one",
        ));
    }
    Ok(())
}

/// Strings must not contain code points below U+0020 other than tab, CR, LF.
fn check_control_char(field: &str, ch: char) -> Result<()> {
    if (ch as u32) < 32 && !matches!(ch, '\t' | '\r' | '\n') {
        return Err(ModelError::invalid_value(
            field,
            "value contains unsupported control characters: decimal range=[0000-0008,0011,0012,0014-0031]",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_rules() {
        assert!(check_string("string", "hello world").is_ok());
        assert!(check_string("string", "line\nbreak\ttab").is_ok());
        assert!(check_string("string", "   ").is_err());
        assert!(check_string("string", "bell\u{0007}").is_err());
        assert!(check_string("string", "nbsp\u{00a0}here").is_err());
    }

    #[test]
    fn string_length_limit_is_in_characters() {
        // Two bytes per char; over the byte limit but within the char limit.
        let multibyte = "é".repeat(MAX_STRING_LENGTH - 1);
        assert!(multibyte.len() > MAX_STRING_LENGTH);
        assert!(check_string("string", &multibyte).is_ok());

        let too_long = "a".repeat(MAX_STRING_LENGTH + 1);
        assert!(check_string("string", &too_long).is_err());
    }

    #[test]
    fn code_rules() {
        assert!(check_code("code", "active").is_ok());
        assert!(check_code("code", "two words").is_ok());
        assert!(check_code("code", " leading").is_err());
        assert!(check_code("code", "trailing ").is_err());
        assert!(check_code("code", "two  spaces").is_err());
        assert!(check_code("code", "tab\there").is_err());
        assert!(check_code("code", "").is_err());
    }

    #[test]
    fn id_rules() {
        assert!(check_id("id", "patient-123.v2").is_ok());
        assert!(check_id("id", "").is_err());
        assert!(check_id("id", &"x".repeat(65)).is_err());
        assert!(check_id("id", "no/slash").is_err());
    }

    #[test]
    fn base64_rules() {
        assert!(check_base64("base64Binary", "QUJD").is_ok());
        assert!(check_base64("base64Binary", "QQ==").is_ok());
        assert!(check_base64("base64Binary", "QQ=").is_err());
        assert!(check_base64("base64Binary", "Q=QQ").is_err());
        assert!(check_base64("base64Binary", "Q!JD").is_err());
    }
}
