//! iCalendar component types (RFC 5545 §3.4-3.6).

use calmap_core::constants::ICAL_VERSION;

use super::{Property, names};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// VTIMEZONE component.
    Timezone,
    /// Any other component, including X-components.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Alarm => "VALARM",
            Self::Timezone => "VTIMEZONE",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VALARM" => Self::Alarm,
            "VTIMEZONE" => Self::Timezone,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An iCalendar component with its properties and sub-components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Original component name (preserved for unknown components).
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a component from its name as written in `BEGIN:`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        let name = name.to_ascii_uppercase();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

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

    /// Returns all properties with the given name.
    pub fn get_properties<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the unescaped UID if present.
    #[must_use]
    pub fn uid(&self) -> Option<String> {
        self.get_property(names::UID).map(Property::as_text)
    }

    /// Returns children of a specific kind.
    pub fn children_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}

/// Top-level iCalendar object wrapping the VCALENDAR component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Creates an empty calendar with VERSION and PRODID set.
    #[must_use]
    pub fn new(prod_id: &str) -> Self {
        let mut root = Component::new(ComponentKind::Calendar);
        root.add_property(Property::new(names::VERSION, ICAL_VERSION));
        root.add_property(Property::text(names::PRODID, prod_id));
        Self { root }
    }

    #[must_use]
    pub fn prod_id(&self) -> Option<String> {
        self.root.get_property(names::PRODID).map(Property::as_text)
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root
            .get_property(names::VERSION)
            .map(|p| p.value.as_str())
    }

    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }

    /// Returns the VEVENT and VTODO children in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Component> {
        self.root
            .children
            .iter()
            .filter(|c| matches!(c.kind, ComponentKind::Event | ComponentKind::Todo))
    }
}
