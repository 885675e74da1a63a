//! iCalendar document parser (RFC 5545).
//!
//! Builds the component tree from content lines, matching BEGIN/END pairs.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar};

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);
    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    }
    tracing::trace!(count = lines.len(), "Split lines");

    // Open components, innermost last.
    let mut stack: Vec<(usize, Component)> = Vec::new();
    let mut root = None;

    for (line_num, line) in lines {
        if root.is_some() {
            return Err(ParseError::new(ParseErrorKind::TrailingContent, line_num, 1));
        }

        let property = parse_content_line(&line, line_num)?;
        match property.name.as_str() {
            "BEGIN" => {
                let component = Component::named(&property.value);
                if stack.is_empty() && component.kind != ComponentKind::Calendar {
                    return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                        .with_context(format!("expected VCALENDAR, got {}", component.name)));
                }
                stack.push((line_num, component));
            }
            "END" => {
                let end_name = property.value.to_ascii_uppercase();
                let Some((_, component)) = stack.pop() else {
                    return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                        .with_context(format!("END:{end_name} without BEGIN")));
                };
                if component.name != end_name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{end_name}",
                                component.name
                            )),
                    );
                }
                match stack.last_mut() {
                    Some((_, parent)) => parent.add_child(component),
                    None => root = Some(component),
                }
            }
            _ => {
                let Some((_, current)) = stack.last_mut() else {
                    return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                        .with_context(format!("{} outside of a component", property.name)));
                };
                current.add_property(property);
            }
        }
    }

    if let Some((begin_line, component)) = stack.pop() {
        return Err(ParseError::new(ParseErrorKind::MissingEnd, begin_line, 1)
            .with_context(format!("missing END:{}", component.name)));
    }

    let root = root.ok_or_else(|| ParseError::new(ParseErrorKind::MissingBegin, 1, 1))?;
    tracing::debug!(
        children = root.children.len(),
        "iCalendar document parsed successfully"
    );
    Ok(ICalendar { root })
}
