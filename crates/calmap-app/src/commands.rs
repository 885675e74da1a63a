//! Subcommand implementations.
//!
//! Each command takes the input text and returns the text to print, so the
//! binary only deals with files and standard streams.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use calmap_core::config::Settings;
use calmap_rfc::rfc::ical::{IcalOptions, from_ical_str, to_ical_string};
use calmap_rfc::rfc::jscal::core::{
    Alert, Anchored, CalendarObject, Trigger, format_local_datetime, format_utc_datetime,
};
use calmap_rfc::rfc::jscal::{WriteOptions, from_json, to_json};
use serde_json::{Map, Value, json};

use crate::cli::Command;

/// Reads `path`, or standard input for `-`.
///
/// ## Errors
/// Returns an error if the input cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Converts JSCalendar JSON to iCalendar text.
///
/// ## Errors
/// Returns an error if the input is invalid or cannot be expressed in
/// iCalendar.
pub fn to_ical(input: &str, options: &IcalOptions) -> Result<String> {
    let object = from_json(input).context("Invalid JSCalendar input")?;
    tracing::debug!(uid = object.uid(), "Converting to iCalendar");
    Ok(to_ical_string(&object, options)?)
}

/// Converts iCalendar text to JSCalendar JSON.
///
/// ## Errors
/// Returns an error if the input is invalid.
pub fn to_jscal(input: &str, options: &WriteOptions) -> Result<String> {
    let object = from_ical_str(input).context("Invalid iCalendar input")?;
    tracing::debug!(uid = object.uid(), "Converting to JSCalendar");
    Ok(to_json(&object, options)?)
}

/// Reports the derived times of every event and task in JSCalendar JSON.
///
/// Values that cannot be derived are `null`.
///
/// ## Errors
/// Returns an error if the input is invalid or the arithmetic overflows.
pub fn estimate(input: &str, pretty: bool) -> Result<String> {
    let object = from_json(input).context("Invalid JSCalendar input")?;
    let leaves = match &object {
        CalendarObject::Group(group) => group.leaves(),
        leaf => vec![leaf],
    };

    let mut report = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        let entry = match leaf {
            CalendarObject::Event(event) => json!({
                "uid": event.uid,
                "start": event.start.as_ref().map(format_local_datetime),
                "end": event.estimated_end()?.as_ref().map(format_local_datetime),
                "alerts": alert_times(&event.alerts, event)?,
            }),
            CalendarObject::Task(task) => json!({
                "uid": task.uid,
                "start": task.estimated_start()?.as_ref().map(format_local_datetime),
                "end": task.estimated_end()?.as_ref().map(format_local_datetime),
                "alerts": alert_times(&task.alerts, task)?,
            }),
            CalendarObject::Group(_) => continue,
        };
        report.push(entry);
    }

    let report = Value::Array(report);
    Ok(if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    })
}

fn alert_times(alerts: &[Alert], owner: &impl Anchored) -> Result<Map<String, Value>> {
    let mut times = Map::new();
    for alert in alerts {
        let when = match &alert.trigger {
            Trigger::Offset(offset) => offset
                .trigger_time(owner)?
                .as_ref()
                .map(format_local_datetime),
            Trigger::Absolute(when) => Some(format_utc_datetime(when)),
        };
        times.insert(alert.id.clone(), when.map_or(Value::Null, Value::String));
    }
    Ok(times)
}

/// Runs a parsed command line against loaded settings.
///
/// ## Errors
/// Returns an error if reading, converting or writing fails.
pub fn run(command: &Command, settings: &Settings, output: &WriteOptions) -> Result<String> {
    let input = read_input(command.input())?;
    match command {
        Command::ToIcal { .. } => to_ical(&input, &IcalOptions::from(&settings.ical)),
        Command::ToJscal { .. } => to_jscal(&input, output),
        Command::Estimate { .. } => estimate(&input, output.pretty),
    }
}
