//! Value escaping (RFC 5545 §3.3.11, RFC 6868).

/// Escapes a TEXT value: backslash, `;`, `,` and newlines.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Encodes a parameter value.
///
/// `^`, newlines and `"` use RFC 6868 caret encoding. Values containing `;`,
/// `:` or `,` are quoted.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '^' => encoded.push_str("^^"),
            '\n' => encoded.push_str("^n"),
            '"' => encoded.push_str("^'"),
            _ => encoded.push(c),
        }
    }

    if encoded.contains([';', ':', ',']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::parse::unescape_text;

    #[test]
    fn escape_specials() {
        assert_eq!(escape_text("a,b;c\\d\ne"), r"a\,b\;c\\d\ne");
    }

    #[test]
    fn escape_round_trips_through_unescape() {
        let text = "Meeting: room 4, floor 2; bring \\laptop\\\nThanks";
        assert_eq!(unescape_text(&escape_text(text)), text);
    }

    #[test]
    fn param_value_plain() {
        assert_eq!(escape_param_value("America/New_York"), "America/New_York");
    }

    #[test]
    fn param_value_quoted() {
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("mailto:x@y"), "\"mailto:x@y\"");
    }

    #[test]
    fn param_value_caret_encoding() {
        assert_eq!(escape_param_value("say \"hi\"^\n"), "say ^'hi^'^^^n");
    }
}
