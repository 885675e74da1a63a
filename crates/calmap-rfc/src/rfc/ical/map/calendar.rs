//! Whole-calendar conversion between VCALENDAR and JSCalendar objects.

use calmap_core::config::IcalConfig;
use calmap_core::constants::DEFAULT_PROD_ID;
use calmap_core::util::uid::uid_or_generate;
use chrono::{DateTime, Utc};

use super::datetime::format_utc;
use super::event::{event_to_vevent, vevent_to_event};
use super::task::{task_to_vtodo, vtodo_to_task};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::serialize;
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Property, names};
use crate::rfc::ical::parse::parse;
use crate::rfc::jscal::core::{CalendarObject, Group};

/// Options for writing iCalendar output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcalOptions {
    /// `PRODID` of the generated calendar.
    pub prod_id: String,
    /// `DTSTAMP` written on every component.
    pub stamp: DateTime<Utc>,
}

impl IcalOptions {
    #[must_use]
    pub fn new(prod_id: impl Into<String>, stamp: DateTime<Utc>) -> Self {
        Self {
            prod_id: prod_id.into(),
            stamp,
        }
    }
}

impl Default for IcalOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PROD_ID, Utc::now())
    }
}

impl From<&IcalConfig> for IcalOptions {
    fn from(config: &IcalConfig) -> Self {
        Self::new(config.prod_id.clone(), Utc::now())
    }
}

/// Writes `UID`, `DTSTAMP` and `SUMMARY`.
pub(super) fn add_identity(
    component: &mut Component,
    uid: &str,
    title: Option<&str>,
    options: &IcalOptions,
) {
    component.add_property(Property::text(names::UID, uid));
    component.add_property(Property::new(
        names::DTSTAMP,
        format_utc(&options.stamp.naive_utc()),
    ));
    if let Some(title) = title {
        component.add_property(Property::text(names::SUMMARY, title));
    }
}

/// Returns the component's `UID`.
///
/// ## Errors
/// Returns `RfcError::MappingError` if it is missing or empty.
pub(super) fn required_uid(component: &Component) -> RfcResult<String> {
    component
        .uid()
        .filter(|uid| !uid.is_empty())
        .ok_or_else(|| RfcError::MappingError(format!("{} has no UID", component.name)))
}

/// Converts a JSCalendar object into an iCalendar object.
///
/// A group becomes the calendar itself, with its `uid` and `title` in the
/// calendar's `UID` and `NAME` (RFC 7986). Nested groups are flattened.
///
/// ## Errors
/// Returns an error if any entry cannot be expressed in iCalendar.
#[tracing::instrument(skip_all, fields(uid = object.uid()))]
pub fn to_ical(object: &CalendarObject, options: &IcalOptions) -> RfcResult<ICalendar> {
    let mut calendar = ICalendar::new(&options.prod_id);

    let entries = match object {
        CalendarObject::Group(group) => {
            calendar.root.add_property(Property::text(names::UID, &group.uid));
            if let Some(title) = &group.title {
                calendar.root.add_property(Property::text(names::NAME, title));
            }
            group.leaves()
        }
        leaf => vec![leaf],
    };

    for entry in entries {
        let component = match entry {
            CalendarObject::Event(event) => event_to_vevent(event, options)?,
            CalendarObject::Task(task) => task_to_vtodo(task, options)?,
            CalendarObject::Group(_) => continue,
        };
        calendar.add_component(component);
    }

    tracing::debug!(
        components = calendar.root.children.len(),
        "Mapped object to iCalendar"
    );
    Ok(calendar)
}

/// Converts a JSCalendar object into iCalendar text.
///
/// ## Errors
/// Returns an error if any entry cannot be expressed in iCalendar.
pub fn to_ical_string(object: &CalendarObject, options: &IcalOptions) -> RfcResult<String> {
    Ok(serialize(&to_ical(object, options)?))
}

/// Converts an iCalendar object into a JSCalendar object.
///
/// A calendar with a `UID` or with other than exactly one VEVENT or VTODO
/// becomes a group. Otherwise its single entry is returned on its own.
///
/// ## Errors
/// Returns an error if a component cannot be mapped.
#[tracing::instrument(skip_all)]
pub fn from_ical(calendar: &ICalendar) -> RfcResult<CalendarObject> {
    let mut entries: Vec<CalendarObject> = Vec::new();
    for child in &calendar.root.children {
        match child.kind {
            ComponentKind::Event => entries.push(vevent_to_event(child)?.into()),
            ComponentKind::Todo => entries.push(vtodo_to_task(child)?.into()),
            ComponentKind::Timezone => {
                tracing::trace!("Skipping VTIMEZONE; zones resolve by TZID");
            }
            ComponentKind::Calendar | ComponentKind::Alarm | ComponentKind::Unknown => {
                tracing::warn!(component = %child.name, "Skipping unsupported component");
            }
        }
    }

    let uid = calendar.root.uid().filter(|uid| !uid.trim().is_empty());
    if uid.is_none()
        && entries.len() == 1
        && let Some(entry) = entries.pop()
    {
        return Ok(entry);
    }

    let mut group = Group::new(uid_or_generate(uid.as_deref()));
    group.title = calendar.root.get_property(names::NAME).map(Property::as_text);
    group.entries = entries;
    Ok(CalendarObject::Group(group))
}

/// Parses iCalendar text and converts it into a JSCalendar object.
///
/// ## Errors
/// Returns an error for malformed text or components that cannot be mapped.
pub fn from_ical_str(input: &str) -> RfcResult<CalendarObject> {
    from_ical(&parse(input)?)
}
