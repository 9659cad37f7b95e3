/// In-memory model of a vessel information document.
///
/// A document is an ordered list of sections, each an ordered list of
/// entries. Headings are unique within a document and sub-headings are
/// unique within a section; the mutators below keep it that way.

use crate::error::{Error, Result};
use crate::info::rewrite::Edit;
use crate::info::scan::normalize_body;

/// Named field of a section with a (possibly multi-line) body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    sub_heading: String,
    body: String,
}

impl Entry {
    /// Create an entry; `\r\n` in the body is normalized to `\n`
    pub fn new(sub_heading: impl Into<String>, body: &str) -> Self {
        Self {
            sub_heading: sub_heading.into(),
            body: normalize_body(body),
        }
    }

    pub fn sub_heading(&self) -> &str {
        &self.sub_heading
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Top-level named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    heading: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry with the given sub-heading
    pub fn entry(&self, sub_heading: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.sub_heading == sub_heading)
    }

    /// Body of the entry with the given sub-heading
    pub fn body(&self, sub_heading: &str) -> Option<&str> {
        self.entry(sub_heading).map(Entry::body)
    }

    pub fn contains(&self, sub_heading: &str) -> bool {
        self.entry(sub_heading).is_some()
    }

    /// Append an entry. Returns `false` (and leaves the section untouched)
    /// if the sub-heading is already present.
    pub fn push_entry(&mut self, entry: Entry) -> bool {
        if self.contains(&entry.sub_heading) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Entries beyond the first `base_count`, i.e. the ones added by the user
    pub fn custom_entries(&self, base_count: usize) -> &[Entry] {
        let start = base_count.min(self.entries.len());
        &self.entries[start..]
    }

    fn entry_mut(&mut self, sub_heading: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.sub_heading == sub_heading)
    }
}

/// Ordered sections of one vessel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section with the given heading
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Position of the section with the given heading
    pub fn section_index(&self, heading: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.heading == heading)
    }

    /// Append a section. Returns `false` if the heading is already present.
    pub fn push_section(&mut self, section: Section) -> bool {
        if self.section(&section.heading).is_some() {
            return false;
        }
        self.sections.push(section);
        true
    }

    /// Body stored under `section` / `sub_heading`
    pub fn body(&self, section: &str, sub_heading: &str) -> Option<&str> {
        self.section(section)?.body(sub_heading)
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Rename a sub-heading in place, keeping its position and body.
    ///
    /// Fails with `NotFound` if the section or `old` is absent, or if `new`
    /// already names another entry. The document is unchanged on error.
    pub fn rename_sub_heading(&mut self, section: &str, old: &str, new: &str) -> Result<()> {
        let target = self.section_mut(section)?;
        if !target.contains(old) {
            return Err(Error::NotFound(format!(
                "sub-heading '{}' in section '{}'",
                old, section
            )));
        }
        if old == new {
            return Ok(());
        }
        if target.contains(new) {
            return Err(Error::NotFound(format!(
                "cannot rename '{}' to '{}' in section '{}': name already taken",
                old, new, section
            )));
        }
        if let Some(entry) = target.entry_mut(old) {
            entry.sub_heading = new.to_string();
        }
        Ok(())
    }

    /// Replace the body of an entry, appending a new entry if the
    /// sub-heading is absent. Fails with `NotFound` if the section is absent.
    pub fn set_body(&mut self, section: &str, sub_heading: &str, body: &str) -> Result<()> {
        let target = self.section_mut(section)?;
        match target.entry_mut(sub_heading) {
            Some(entry) => entry.body = normalize_body(body),
            None => target.entries.push(Entry::new(sub_heading, body)),
        }
        Ok(())
    }

    /// Apply an edit to the in-memory model
    pub fn apply(&mut self, edit: &Edit) -> Result<()> {
        match edit {
            Edit::RenameSubHeading { section, from, to } => {
                self.rename_sub_heading(section, from, to)
            }
            Edit::SetBody { section, sub_heading, body } => {
                self.set_body(section, sub_heading, body)
            }
        }
    }

    fn section_mut(&mut self, heading: &str) -> Result<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| s.heading == heading)
            .ok_or_else(|| Error::NotFound(format!("section '{}'", heading)))
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
