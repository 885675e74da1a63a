//! iCalendar document serializer (RFC 5545 §3.1).
//!
//! Properties and components are written in the order they are stored.
//! Every content line is folded and terminated by CRLF.

use super::{escape_param_value, fold_line};
use crate::rfc::ical::core::{Component, ICalendar, Property};

/// Serializes a calendar to iCalendar text.
#[must_use]
#[tracing::instrument(skip_all, fields(children = ical.root.children.len()))]
pub fn serialize(ical: &ICalendar) -> String {
    let mut out = String::new();
    serialize_component(&ical.root, &mut out);
    tracing::debug!(len = out.len(), "Serialized iCalendar document");
    out
}

/// Appends a component, its properties and its sub-components to `out`.
pub fn serialize_component(component: &Component, out: &mut String) {
    push_line(out, &format!("BEGIN:{}", component.name));
    for property in &component.properties {
        push_line(out, &serialize_property(property));
    }
    for child in &component.children {
        serialize_component(child, out);
    }
    push_line(out, &format!("END:{}", component.name));
}

/// Renders a property as one unfolded content line without CRLF.
#[must_use]
pub fn serialize_property(property: &Property) -> String {
    let mut line = property.name.clone();
    for param in &property.params {
        let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        line.push_str(&values.join(","));
    }
    line.push(':');
    line.push_str(&property.value);
    line
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::Parameter;
    use crate::rfc::ical::parse::parse;

    #[test]
    fn serialize_property_with_params() {
        let prop = Property::new("DTSTART", "20200115T130000")
            .with_param(Parameter::tzid("America/New_York"));
        assert_eq!(
            serialize_property(&prop),
            "DTSTART;TZID=America/New_York:20200115T130000"
        );
    }

    #[test]
    fn serialize_quotes_param_values() {
        let prop = Property::new("ATTENDEE", "mailto:jane@example.com")
            .with_param(Parameter::new("CN", "Doe, Jane"));
        assert_eq!(
            serialize_property(&prop),
            "ATTENDEE;CN=\"Doe, Jane\":mailto:jane@example.com"
        );
    }

    #[test]
    fn serialize_document() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        let mut event = Component::event();
        event.add_property(Property::text("UID", "e1"));
        ical.add_component(event);

        assert_eq!(
            serialize(&ical),
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//Test//EN\r\n\
             BEGIN:VEVENT\r\nUID:e1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn parse_serialize_round_trip() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        let mut event = Component::event();
        event.add_property(Property::text("SUMMARY", &"long, text; ".repeat(20)));
        event.add_property(
            Property::new("X-P", "v").with_param(Parameter::new("X-Q", "a \"b\" c:d")),
        );
        ical.add_component(event);

        let text = serialize(&ical);
        assert_eq!(parse(&text).unwrap(), ical);
    }
}
