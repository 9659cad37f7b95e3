/// Line scanner for the nested information format.
///
/// ```text
/// Draught            <- heading      (depth 0)
/// {
/// Depth              <- sub-heading  (depth 1)
/// {
/// 12 ft              <- body line    (depth 2)
/// }
/// }
/// ```
///
/// Both the parser and the partial rewriter classify lines through `scan`,
/// so they always agree on where a sub-heading or a body lives.
///
/// A trailing `\r` is ignored when classifying, so files written with
/// `\r\n` and `\n` line endings scan the same. The `\r` itself stays in the
/// caller's lines.

use crate::error::{Error, Result};

/// Opens a section or an entry body
pub const OPEN: &str = "{";
/// Closes the innermost open block
pub const CLOSE: &str = "}";

/// Deepest level that may hold data (body lines)
const BODY_DEPTH: usize = 2;

/// Classification of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `{`
    Open,
    /// `}`
    Close,
    /// Section heading (depth 0)
    Heading,
    /// Entry sub-heading (depth 1)
    SubHeading,
    /// Entry body line (depth 2)
    Body,
    /// Empty line outside a body, ignored
    Blank,
}

/// A classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine {
    /// Index into the scanned lines
    pub index: usize,
    /// What the line is
    pub kind: LineKind,
    /// Nesting depth in effect before the line
    pub depth: usize,
}

/// Line text without a trailing `\r`
pub fn content(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Whether a data line would be read back as structure
pub fn is_structural(text: &str) -> bool {
    let text = content(text);
    text == OPEN || text == CLOSE
}

/// Normalize a multi-line body to `\n` separators
pub fn normalize_body(body: &str) -> String {
    body.replace("\r\n", "\n")
}

/// Split a body into the lines it is stored as.
///
/// An empty body is stored as no lines. Fails if a line would be read back
/// as `{` or `}`: the format has no escaping for those.
pub fn body_lines(body: &str) -> Result<Vec<String>> {
    let body = normalize_body(body);
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let lines: Vec<String> = body.split('\n').map(|l| l.to_string()).collect();
    if let Some(bad) = lines.iter().find(|l| is_structural(l)) {
        return Err(Error::ParseError(format!(
            "body line '{}' cannot be stored: it reads back as a block delimiter",
            bad
        )));
    }
    Ok(lines)
}

/// Classify every line, tracking nesting depth.
///
/// Rejects malformed input with `ParseError` (1-based line numbers):
/// a `}` with nothing open, a `{` beyond body depth, a `{` not preceded by a
/// heading or sub-heading, or blocks left open at the end.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Result<Vec<ScannedLine>> {
    let mut scanned = Vec::with_capacity(lines.len());
    let mut depth = 0usize;
    // Kind of the last data line that may still receive a block
    let mut openable: Option<LineKind> = None;

    for (index, raw) in lines.iter().enumerate() {
        let text = content(raw.as_ref());
        let number = index + 1;

        let kind = match text {
            OPEN => {
                let expected = match depth {
                    0 => LineKind::Heading,
                    1 => LineKind::SubHeading,
                    _ => {
                        return Err(Error::ParseError(format!(
                            "line {}: '{{' nested deeper than body level",
                            number
                        )));
                    }
                };
                if openable != Some(expected) {
                    return Err(Error::ParseError(format!(
                        "line {}: '{{' without a preceding {}",
                        number,
                        if depth == 0 { "heading" } else { "sub-heading" }
                    )));
                }
                openable = None;
                LineKind::Open
            }
            CLOSE => {
                if depth == 0 {
                    return Err(Error::ParseError(format!(
                        "line {}: '}}' with no open block",
                        number
                    )));
                }
                openable = None;
                LineKind::Close
            }
            _ => match depth {
                0 | 1 if text.is_empty() => LineKind::Blank,
                0 => {
                    openable = Some(LineKind::Heading);
                    LineKind::Heading
                }
                1 => {
                    openable = Some(LineKind::SubHeading);
                    LineKind::SubHeading
                }
                _ => LineKind::Body,
            },
        };

        scanned.push(ScannedLine { index, kind, depth });

        match kind {
            LineKind::Open => depth += 1,
            LineKind::Close => depth -= 1,
            _ => {}
        }
        debug_assert!(depth <= BODY_DEPTH);
    }

    if depth != 0 {
        return Err(Error::ParseError(format!(
            "end of input with {} unclosed block(s)",
            depth
        )));
    }

    Ok(scanned)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
