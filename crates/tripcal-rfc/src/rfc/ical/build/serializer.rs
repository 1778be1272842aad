//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to compliant text format. Output is
//! deterministic: properties follow a canonical order per component kind and
//! child components keep their insertion order.

use super::escape::{escape_text, validate_text};
use super::fold::fold_line;
use crate::error::RfcResult;
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Property, Value, format_utc};

/// Serializes an iCalendar document to a string.
///
/// ## Errors
/// Returns an error if any TEXT value cannot be encoded. Nothing is returned
/// in that case, not even the components serialized before the failure.
pub fn serialize(ical: &ICalendar) -> RfcResult<String> {
    serialize_component(&ical.root)
}

/// Serializes a component and its children to a string.
///
/// ## Errors
/// Returns an error if any TEXT value cannot be encoded.
pub fn serialize_component(component: &Component) -> RfcResult<String> {
    let mut result = String::new();

    result.push_str(&fold_line(&format!("BEGIN:{}", component.name())));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop)?);
    }

    for child in &component.children {
        result.push_str(&serialize_component(child)?);
    }

    result.push_str(&fold_line(&format!("END:{}", component.name())));

    Ok(result)
}

/// Serializes a property to a folded content line.
///
/// ## Errors
/// Returns an error if the property is TEXT and contains characters that
/// cannot be encoded.
pub fn serialize_property(prop: &Property) -> RfcResult<String> {
    let value = match &prop.value {
        Value::Text(s) => {
            if let Err(e) = validate_text(&prop.name, s) {
                tracing::debug!(property = %prop.name, error = %e, "Rejecting TEXT value");
                return Err(e);
            }
            escape_text(s)
        }
        Value::DateTime(dt) => format_utc(dt),
    };

    Ok(fold_line(&format!("{}:{value}", prop.name)))
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &["VERSION", "PRODID", "CALSCALE", "METHOD"],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "SUMMARY",
            "DESCRIPTION",
            "LOCATION",
        ],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());

    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }

    // Anything else, X-properties included, follows in insertion order.
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );

    ordered
}
