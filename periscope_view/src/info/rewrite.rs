/// Minimal-diff rewrite of a persisted information document.
///
/// `serialize_partial` takes the lines of a file as stored and returns them
/// with exactly one change applied: a sub-heading line renamed, or one entry
/// body replaced (or inserted). Every other line comes back byte for byte,
/// including its `\r` if the file uses `\r\n` line endings.

use crate::error::{Error, Result};
use crate::info::parser::check_name;
use crate::info::scan::{self, body_lines, content, normalize_body, LineKind, ScannedLine, OPEN, CLOSE};

/// A single change to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Rename the entry `from` of `section` to `to`
    RenameSubHeading {
        section: String,
        from: String,
        to: String,
    },
    /// Replace the body of `sub_heading` in `section`, creating the entry
    /// if it does not exist yet
    SetBody {
        section: String,
        sub_heading: String,
        body: String,
    },
}

impl Edit {
    pub fn rename(section: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Edit::RenameSubHeading {
            section: section.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn set_body(
        section: impl Into<String>,
        sub_heading: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Edit::SetBody {
            section: section.into(),
            sub_heading: sub_heading.into(),
            body: body.into(),
        }
    }

    /// Heading of the section the edit targets
    pub fn section(&self) -> &str {
        match self {
            Edit::RenameSubHeading { section, .. } | Edit::SetBody { section, .. } => section,
        }
    }

    /// Sub-heading the entry carries once the edit is applied
    pub fn resulting_sub_heading(&self) -> &str {
        match self {
            Edit::RenameSubHeading { to, .. } => to,
            Edit::SetBody { sub_heading, .. } => sub_heading,
        }
    }
}

/// Rewrite `original` with a single edit applied.
///
/// Fails with `NotFound` if the section or sub-heading to edit is missing
/// (or a rename target is taken), and with `ParseError` if `original` is
/// malformed or the new text would read back as structure.
pub fn serialize_partial<S: AsRef<str>>(original: &[S], edit: &Edit) -> Result<Vec<String>> {
    let scanned = scan::scan(original)?;
    let lines: Vec<&str> = original.iter().map(|l| l.as_ref()).collect();

    match edit {
        Edit::RenameSubHeading { section, from, to } => {
            rename(&lines, &scanned, section, from, to)
        }
        Edit::SetBody { section, sub_heading, body } => {
            set_body(&lines, &scanned, section, sub_heading, body)
        }
    }
}

// ===== LOCATING =====

/// Position of a `{ ... }` block in the scanned lines
#[derive(Debug, Clone, Copy)]
struct Block {
    open: usize,
    close: usize,
}

/// A heading or sub-heading with its block, if it has one
#[derive(Debug, Clone, Copy)]
struct Located {
    line: usize,
    block: Option<Block>,
}

fn locate_section(lines: &[&str], scanned: &[ScannedLine], heading: &str) -> Result<Located> {
    let line = scanned
        .iter()
        .position(|s| s.kind == LineKind::Heading && content(lines[s.index]) == heading)
        .ok_or_else(|| Error::NotFound(format!("section '{}'", heading)))?;
    Ok(Located { line, block: block_after(scanned, line, scanned.len()) })
}

fn locate_entry(
    lines: &[&str],
    scanned: &[ScannedLine],
    section: Block,
    sub_heading: &str,
) -> Option<Located> {
    let line = (section.open + 1..section.close).find(|&i| {
        scanned[i].kind == LineKind::SubHeading && content(lines[scanned[i].index]) == sub_heading
    })?;
    Some(Located { line, block: block_after(scanned, line, section.close) })
}

/// Block opened right after `owner` (blank lines allowed in between)
fn block_after(scanned: &[ScannedLine], owner: usize, limit: usize) -> Option<Block> {
    let open = (owner + 1..limit).find(|&i| scanned[i].kind != LineKind::Blank)?;
    if scanned[open].kind != LineKind::Open {
        return None;
    }
    let depth = scanned[open].depth;
    let close = (open + 1..limit)
        .find(|&i| scanned[i].kind == LineKind::Close && scanned[i].depth == depth + 1)?;
    Some(Block { open, close })
}

// ===== EDITS =====

fn rename(
    lines: &[&str],
    scanned: &[ScannedLine],
    section: &str,
    from: &str,
    to: &str,
) -> Result<Vec<String>> {
    let not_found = || Error::NotFound(format!("sub-heading '{}' in section '{}'", from, section));

    let located = locate_section(lines, scanned, section)?;
    let block = located.block.ok_or_else(not_found)?;
    let entry = locate_entry(lines, scanned, block, from).ok_or_else(not_found)?;

    if from == to {
        return Ok(to_owned(lines));
    }
    check_name(to)?;
    if locate_entry(lines, scanned, block, to).is_some() {
        return Err(Error::NotFound(format!(
            "cannot rename '{}' to '{}' in section '{}': name already taken",
            from, to, section
        )));
    }

    let index = scanned[entry.line].index;
    let mut output = to_owned(lines);
    output[index] = format!("{}{}", to, ending(lines[index]));
    Ok(output)
}

fn set_body(
    lines: &[&str],
    scanned: &[ScannedLine],
    section: &str,
    sub_heading: &str,
    body: &str,
) -> Result<Vec<String>> {
    let new_body = body_lines(body)?;
    let located = locate_section(lines, scanned, section)?;

    let Some(section_block) = located.block else {
        // Heading without a block: give it one holding the new entry
        check_name(sub_heading)?;
        let heading = scanned[located.line].index;
        let mut replacement = vec![content(lines[heading]).to_string(), OPEN.to_string()];
        replacement.extend(entry_lines(sub_heading, new_body));
        replacement.push(CLOSE.to_string());
        return Ok(splice(lines, heading, heading, replacement));
    };

    let Some(entry) = locate_entry(lines, scanned, section_block, sub_heading) else {
        // New entry goes last, right before the section's closing brace
        check_name(sub_heading)?;
        let close = scanned[section_block.close].index;
        let mut replacement = entry_lines(sub_heading, new_body);
        replacement.push(CLOSE.to_string());
        return Ok(splice(lines, close, close, replacement));
    };

    match entry.block {
        Some(block) => {
            let open = scanned[block.open].index;
            let close = scanned[block.close].index;
            let current: Vec<&str> = lines[open + 1..close].iter().map(|l| content(l)).collect();
            if current.join("\n") == normalize_body(body) {
                return Ok(to_owned(lines));
            }
            let mut replacement = vec![OPEN.to_string()];
            replacement.extend(new_body);
            replacement.push(CLOSE.to_string());
            Ok(splice(lines, open, close, replacement))
        }
        None => {
            if new_body.is_empty() {
                return Ok(to_owned(lines));
            }
            let sub = scanned[entry.line].index;
            let mut replacement = vec![content(lines[sub]).to_string(), OPEN.to_string()];
            replacement.extend(new_body);
            replacement.push(CLOSE.to_string());
            Ok(splice(lines, sub, sub, replacement))
        }
    }
}

// ===== LINE HELPERS =====

fn entry_lines(sub_heading: &str, body: Vec<String>) -> Vec<String> {
    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.push(sub_heading.to_string());
    lines.push(OPEN.to_string());
    lines.extend(body);
    lines.push(CLOSE.to_string());
    lines
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

/// The `\r` a line carries, if any
fn ending(line: &str) -> &'static str {
    if line.ends_with('\r') {
        "\r"
    } else {
        ""
    }
}

/// Replace `lines[first..=last]` with `replacement` (unterminated texts).
///
/// The last replacement line takes the ending of the last replaced line, so
/// a file that ends without a newline still does. The others take the
/// ending of the first replaced line, or of the line before it when the
/// first replaced line is the final one.
fn splice(lines: &[&str], first: usize, last: usize, replacement: Vec<String>) -> Vec<String> {
    let inner = if first + 1 < lines.len() || first == 0 {
        ending(lines[first])
    } else {
        ending(lines[first - 1])
    };
    let tail = ending(lines[last]);
    let count = replacement.len();

    let mut output = Vec::with_capacity(lines.len() + count);
    output.extend(lines[..first].iter().map(|l| l.to_string()));
    for (i, text) in replacement.into_iter().enumerate() {
        let suffix = if i + 1 == count { tail } else { inner };
        output.push(format!("{}{}", text, suffix));
    }
    output.extend(lines[last + 1..].iter().map(|l| l.to_string()));
    output
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
