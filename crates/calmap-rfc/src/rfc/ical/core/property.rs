//! iCalendar properties (RFC 5545 §3.1, §3.8).

use super::Parameter;
use crate::rfc::ical::build::escape_text;
use crate::rfc::ical::parse::unescape_text;

/// A property as one unfolded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value (after unfolding, before unescaping).
    pub value: String,
}

impl Property {
    /// Creates a property with a raw value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property with a TEXT value, escaping it.
    #[must_use]
    pub fn text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, escape_text(text))
    }

    /// Adds a parameter, returning the property.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value("VALUE")
    }

    /// Returns the value read as TEXT (unescaped).
    #[must_use]
    pub fn as_text(&self) -> String {
        unescape_text(&self.value)
    }
}

/// Property names used by the mapping layer.
pub mod names {
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";
    pub const NAME: &str = "NAME";

    pub const UID: &str = "UID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const SUMMARY: &str = "SUMMARY";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const DUE: &str = "DUE";
    pub const DURATION: &str = "DURATION";
    pub const ESTIMATED_DURATION: &str = "ESTIMATED-DURATION";
    pub const PERCENT_COMPLETE: &str = "PERCENT-COMPLETE";
    pub const STATUS: &str = "STATUS";
    pub const RRULE: &str = "RRULE";
    /// De facto all-day marker, used where a DATE start would drop the zone.
    pub const ALL_DAY: &str = "X-MICROSOFT-CDO-ALLDAYEVENT";

    pub const ACTION: &str = "ACTION";
    pub const TRIGGER: &str = "TRIGGER";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_value_is_escaped() {
        let prop = Property::text("SUMMARY", "Lunch; with Bob, Alice");
        assert_eq!(prop.value, r"Lunch\; with Bob\, Alice");
        assert_eq!(prop.as_text(), "Lunch; with Bob, Alice");
    }

    #[test]
    fn params_are_case_insensitive() {
        let prop = Property::new("dtstart", "20200115T130000")
            .with_param(Parameter::tzid("America/New_York"));
        assert_eq!(prop.name, "DTSTART");
        assert_eq!(prop.get_param_value("tzid"), Some("America/New_York"));
        assert_eq!(prop.tzid(), Some("America/New_York"));
        assert_eq!(prop.value_type(), None);
    }
}
