//! iCalendar component types (RFC 5545 §3.4, §3.6.1).

use chrono::{DateTime, Utc};
use tripcal_core::constants::ICALENDAR_VERSION;

use super::Property;
use super::names;

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An iCalendar component.
///
/// Properties and children keep insertion order; the serializer never
/// reorders children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Properties in order of insertion.
    pub properties: Vec<Property>,
    /// Nested sub-components in order of insertion.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_property(names::DESCRIPTION)?.as_text()
    }

    #[must_use]
    pub fn dtstart(&self) -> Option<&DateTime<Utc>> {
        self.get_property(names::DTSTART)?.as_datetime()
    }

    #[must_use]
    pub fn dtend(&self) -> Option<&DateTime<Utc>> {
        self.get_property(names::DTEND)?.as_datetime()
    }

    #[must_use]
    pub fn dtstamp(&self) -> Option<&DateTime<Utc>> {
        self.get_property(names::DTSTAMP)?.as_datetime()
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind == ComponentKind::Event)
            .collect()
    }
}

/// Top-level iCalendar object.
///
/// A convenience wrapper around a VCALENDAR component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a new empty iCalendar with the required VERSION and PRODID.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text(names::VERSION, ICALENDAR_VERSION));
        root.add_property(Property::text(names::PRODID, prodid));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID)?.as_text()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION)?.as_text()
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: Component) {
        self.root.add_child(event);
    }

    /// Returns all VEVENT components in insertion order.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.events()
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new(tripcal_core::constants::DEFAULT_PRODUCT_ID)
    }
}
