/// Parse and serialize the nested information format.
///
/// Parsing runs on top of [`scan`](crate::info::scan::scan), so the depth
/// rules and error positions are shared with the partial rewriter.

use crate::error::{Error, Result};
use crate::info::document::{Document, Entry, Section};
use crate::info::scan::{self, body_lines, content, LineKind, CLOSE, OPEN};

/// Number of sub-headings each section had in the shipped default template,
/// indexed by section position. Entries beyond that count are custom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseCounts {
    counts: Vec<usize>,
}

impl BaseCounts {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// Counts taken from a template document
    pub fn from_template(template: &Document) -> Self {
        Self {
            counts: template.sections().iter().map(|s| s.entries().len()).collect(),
        }
    }

    /// Base count of section `index`, 0 past the template's sections
    pub fn get(&self, index: usize) -> usize {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Number of sections the template had
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Parse a document, keeping every entry
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Document> {
    parse_lines(lines, None)
}

/// Parse a document keeping, for section `i`, only its first
/// `base.get(i)` entries
pub fn parse_filtered<S: AsRef<str>>(lines: &[S], base: &BaseCounts) -> Result<Document> {
    parse_lines(lines, Some(base))
}

/// Entry being collected
struct PendingEntry {
    sub_heading: String,
    line: usize,
    body: Option<String>,
}

/// Section being collected
struct PendingSection {
    section: Section,
    line: usize,
    position: usize,
}

fn parse_lines<S: AsRef<str>>(lines: &[S], base: Option<&BaseCounts>) -> Result<Document> {
    let scanned = scan::scan(lines)?;
    let mut document = Document::new();
    let mut section: Option<PendingSection> = None;
    let mut entry: Option<PendingEntry> = None;

    for line in &scanned {
        let text = content(lines[line.index].as_ref());
        match line.kind {
            LineKind::Heading => {
                finish_section(&mut document, section.take())?;
                section = Some(PendingSection {
                    section: Section::new(text),
                    line: line.index + 1,
                    position: 0,
                });
            }
            LineKind::SubHeading => {
                if let Some(pending) = section.as_mut() {
                    finish_entry(pending, entry.take(), base, document.len())?;
                }
                entry = Some(PendingEntry {
                    sub_heading: text.to_string(),
                    line: line.index + 1,
                    body: None,
                });
            }
            LineKind::Body => {
                if let Some(pending) = entry.as_mut() {
                    match pending.body.as_mut() {
                        Some(body) => {
                            body.push('\n');
                            body.push_str(text);
                        }
                        None => pending.body = Some(text.to_string()),
                    }
                }
            }
            LineKind::Close => {
                if let Some(pending) = section.as_mut() {
                    finish_entry(pending, entry.take(), base, document.len())?;
                }
                if line.depth == 1 {
                    finish_section(&mut document, section.take())?;
                }
            }
            LineKind::Open | LineKind::Blank => {}
        }
    }

    finish_section(&mut document, section.take())?;
    Ok(document)
}

fn finish_entry(
    section: &mut PendingSection,
    entry: Option<PendingEntry>,
    base: Option<&BaseCounts>,
    section_index: usize,
) -> Result<()> {
    let Some(entry) = entry else {
        return Ok(());
    };
    let position = section.position;
    section.position += 1;

    if let Some(base) = base {
        if position >= base.get(section_index) {
            return Ok(());
        }
    }

    let body = entry.body.unwrap_or_default();
    if !section.section.push_entry(Entry::new(entry.sub_heading.clone(), &body)) {
        return Err(Error::ParseError(format!(
            "line {}: duplicate sub-heading '{}' in section '{}'",
            entry.line,
            entry.sub_heading,
            section.section.heading()
        )));
    }
    Ok(())
}

fn finish_section(document: &mut Document, section: Option<PendingSection>) -> Result<()> {
    let Some(pending) = section else {
        return Ok(());
    };
    let heading = pending.section.heading().to_string();
    if !document.push_section(pending.section) {
        return Err(Error::ParseError(format!(
            "line {}: duplicate heading '{}'",
            pending.line, heading
        )));
    }
    Ok(())
}

/// Reject names that would not read back as the same heading
pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('\n') || name.ends_with('\r') || name == OPEN || name == CLOSE
    {
        return Err(Error::ParseError(format!(
            "'{}' cannot be stored as a heading",
            name.escape_debug()
        )));
    }
    Ok(())
}

/// Full serialization of a document, one string per line
pub fn serialize(document: &Document) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for section in document.sections() {
        check_name(section.heading())?;
        lines.push(section.heading().to_string());
        lines.push(OPEN.to_string());
        for entry in section.entries() {
            check_name(entry.sub_heading())?;
            lines.push(entry.sub_heading().to_string());
            lines.push(OPEN.to_string());
            lines.extend(body_lines(entry.body())?);
            lines.push(CLOSE.to_string());
        }
        lines.push(CLOSE.to_string());
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
