//! Content line folding (RFC 5545 §3.1).

/// Maximum octets per physical line, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line so that no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Breaks fall on UTF-8 character boundaries. The result has no
/// trailing CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current = 0;
    let mut limit = MAX_LINE_OCTETS;

    for c in line.chars() {
        if current + c.len_utf8() > limit {
            out.push_str("\r\n ");
            current = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        current += c.len_utf8();
    }

    out
}
