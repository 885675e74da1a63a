//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Parameter, Property};

/// Splits input into unfolded content lines, each paired with the 1-based
/// number of the physical line it starts on.
///
/// Accepts CRLF and bare LF. A line starting with SPACE or HTAB continues the
/// previous one; the line break and that single whitespace character are
/// removed. Blank lines are skipped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let Some(continuation) = line.strip_prefix([' ', '\t']) else {
            lines.push((i + 1, line.to_string()));
            continue;
        };
        if let Some((_, prev)) = lines.last_mut() {
            prev.push_str(continuation);
        } else {
            lines.push((i + 1, continuation.to_string()));
        }
    }

    lines
}

/// Parses a single unfolded content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Property> {
    let mut chars = line.char_indices().peekable();

    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidPropertyName,
                line_num,
                i + 1,
            ));
        }
        chars.next();
    }

    let name_end = name_end
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingColon, line_num, line.len()))?;
    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let mut property = Property::new(&line[..name_end], "");

    // Parameters until the ':' that starts the value.
    let colon_pos = match chars.next() {
        Some((i, ':')) => i,
        _ => loop {
            let (param, delimiter) = parse_parameter(&mut chars, line, line_num)?;
            property.params.push(param);
            if let Some(pos) = delimiter {
                break pos;
            }
        },
    };
    property.value = line[colon_pos + 1..].to_string();

    Ok(property)
}

/// Parses one parameter after its leading `;`.
///
/// Returns the parameter and, if the parameter list ended, the position of
/// the `:` that starts the value.
fn parse_parameter(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<(Parameter, Option<usize>)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    let mut name_end = None;
    for (i, c) in chars.by_ref() {
        if c == '=' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                i + 1,
            ));
        }
    }

    let name_end = match name_end {
        Some(end) if end > start => end,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                start + 1,
            )
            .with_context("expected NAME=VALUE"));
        }
    };
    let name = &line[start..name_end];

    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(chars, line, line_num)?);

        match chars.next() {
            Some((_, ',')) => {}
            Some((_, ';')) => return Ok((Parameter::with_values(name, values), None)),
            Some((i, ':')) => return Ok((Parameter::with_values(name, values), Some(i))),
            Some((i, c)) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len(),
                ));
            }
        }
    }
}

/// Parses a parameter value, quoted or not.
///
/// Quoted values may use RFC 6868 caret encoding (`^^`, `^n`, `^'`).
fn parse_param_value(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            line.len(),
        ));
    };

    if first != '"' {
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if matches!(c, ',' | ';' | ':') {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next();
    let mut value = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            '^' => match chars.peek().map(|&(_, next)| next) {
                Some('^') => {
                    value.push('^');
                    chars.next();
                }
                Some('n') => {
                    value.push('\n');
                    chars.next();
                }
                Some('\'') => {
                    value.push('"');
                    chars.next();
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnclosedQuote,
        line_num,
        start + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_unfolds_continuations() {
        let input = "DESCRIPTION:This is a long description\r\n that continues here\r\nSUMMARY:x\r\n";
        let lines = split_lines(input);
        assert_eq!(
            lines,
            vec![
                (
                    1,
                    "DESCRIPTION:This is a long descriptionthat continues here".to_string()
                ),
                (3, "SUMMARY:x".to_string()),
            ]
        );
    }

    #[test]
    fn split_accepts_bare_lf_and_tabs() {
        let lines = split_lines("DESCRIPTION:First\n\tSecond\n Third\n\nUID:1\n");
        assert_eq!(lines[0].1, "DESCRIPTION:FirstSecondThird");
        assert_eq!(lines[1], (5, "UID:1".to_string()));
    }

    #[test]
    fn split_rejoins_multibyte_characters() {
        let lines = split_lines("SUMMARY:Caf\r\n é\r\n");
        assert_eq!(lines[0].1, "SUMMARY:Café");
    }

    #[test]
    fn parse_simple_line() {
        let prop = parse_content_line("SUMMARY:Team Meeting", 1).unwrap();
        assert_eq!(prop.name, "SUMMARY");
        assert!(prop.params.is_empty());
        assert_eq!(prop.value, "Team Meeting");
    }

    #[test]
    fn parse_lowercase_name() {
        let prop = parse_content_line("rrule:FREQ=DAILY", 1).unwrap();
        assert_eq!(prop.name, "RRULE");
    }

    #[test]
    fn parse_line_with_params() {
        let prop = parse_content_line("DTSTART;TZID=America/New_York:20260123T120000", 1).unwrap();
        assert_eq!(prop.name, "DTSTART");
        assert_eq!(prop.params.len(), 1);
        assert_eq!(prop.params[0].name, "TZID");
        assert_eq!(prop.tzid(), Some("America/New_York"));
        assert_eq!(prop.value, "20260123T120000");
    }

    #[test]
    fn parse_empty_value_after_params() {
        let prop = parse_content_line("X-EMPTY;X-P=1:", 1).unwrap();
        assert_eq!(prop.value, "");
        assert_eq!(prop.get_param_value("X-P"), Some("1"));
    }

    #[test]
    fn parse_value_containing_colons() {
        let prop = parse_content_line("TRIGGER;VALUE=DATE-TIME:20200115T120000Z", 1).unwrap();
        assert_eq!(prop.value_type(), Some("DATE-TIME"));
        assert_eq!(prop.value, "20200115T120000Z");

        let prop = parse_content_line("URL:https://example.com:8080/x", 1).unwrap();
        assert_eq!(prop.value, "https://example.com:8080/x");
    }

    #[test]
    fn parse_quoted_param() {
        let prop =
            parse_content_line("ATTENDEE;CN=\"Doe, Jane\":mailto:jane@example.com", 1).unwrap();
        assert_eq!(prop.get_param_value("CN"), Some("Doe, Jane"));
        assert_eq!(prop.value, "mailto:jane@example.com");
    }

    #[test]
    fn parse_multiple_param_values() {
        let prop = parse_content_line(
            "ATTENDEE;ROLE=REQ-PARTICIPANT,OPT-PARTICIPANT:mailto:test@example.com",
            1,
        )
        .unwrap();
        assert_eq!(
            prop.params[0].values,
            ["REQ-PARTICIPANT", "OPT-PARTICIPANT"]
        );
    }

    #[test]
    fn parse_caret_encoding() {
        let prop = parse_content_line("X-A;CN=\"Test^nName ^'q^' ^^\":v", 1).unwrap();
        assert_eq!(prop.get_param_value("CN"), Some("Test\nName \"q\" ^"));
    }

    #[test]
    fn unclosed_quote() {
        let err = parse_content_line("ATTENDEE;CN=\"Unclosed:mailto:test@example.com", 3)
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedQuote);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn missing_colon() {
        let err = parse_content_line("INVALID", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingColon);
    }

    #[test]
    fn missing_name() {
        let err = parse_content_line(":value", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPropertyName);
    }

    #[test]
    fn invalid_name_character() {
        let err = parse_content_line("SUM MARY:x", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn parameter_without_value() {
        let err = parse_content_line("DTSTART;TZID:20200101T000000", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
    }
}
