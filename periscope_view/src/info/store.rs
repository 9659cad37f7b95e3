/// InfoStore - file-backed persistence of vessel information documents.
///
/// One file per vessel, `<root>/<name>.<ext>`. A vessel seen for the first
/// time (or whose file no longer parses) is seeded from its template and
/// persisted right away. Edits go through the partial rewriter so a file
/// keeps every line the edit does not touch.
///
/// Files are split on `\n` only. A `\r` stays at the end of its line and a
/// trailing newline shows up as a final empty line, so joining the lines
/// back with `\n` reproduces the file exactly.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use rustc_hash::FxHashMap;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::info::document::Document;
use crate::info::parser::{parse, parse_filtered, BaseCounts};
use crate::info::rewrite::{serialize_partial, Edit};
use crate::{engine_debug, engine_err, engine_info, engine_warn};

const SOURCE: &str = "periscope::InfoStore";

/// Split stored text into lines, keeping `\r` and the trailing newline
pub fn split_text(text: &str) -> Vec<String> {
    text.split('\n').map(|l| l.to_string()).collect()
}

/// Inverse of [`split_text`]
pub fn join_text<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text
}

// ===== TEMPLATES =====

/// Provider of the default documents new vessels are seeded from
pub trait TemplateSource: Send + Sync {
    /// Template for a specific vessel, if one ships with the application
    fn template_for(&self, name: &str) -> Option<Vec<String>>;

    /// Template used when a vessel has none of its own
    fn empty_template(&self) -> Vec<String>;
}

/// Templates held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates {
    empty: Vec<String>,
    templates: FxHashMap<String, Vec<String>>,
}

impl StaticTemplates {
    /// Templates with the given empty-template text and no vessel templates
    pub fn new(empty: &str) -> Self {
        Self {
            empty: split_text(empty),
            templates: FxHashMap::default(),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_template(mut self, name: impl Into<String>, text: &str) -> Self {
        self.insert(name, text);
        self
    }

    /// Add or replace the template of a vessel
    pub fn insert(&mut self, name: impl Into<String>, text: &str) {
        self.templates.insert(name.into(), split_text(text));
    }
}

impl TemplateSource for StaticTemplates {
    fn template_for(&self, name: &str) -> Option<Vec<String>> {
        self.templates.get(name).cloned()
    }

    fn empty_template(&self) -> Vec<String> {
        self.empty.clone()
    }
}

/// Templates read from a directory: `<dir>/<name>.txt`, and `<dir>/empty.txt`
/// for vessels without their own
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// Name of the empty template file
    pub const EMPTY: &'static str = "empty";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &str) -> Option<Vec<String>> {
        let path = self.dir.join(format!("{}.txt", name));
        match fs::read_to_string(&path) {
            Ok(text) => Some(split_text(&text)),
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    engine_warn!(SOURCE, "Cannot read template {}: {}", path.display(), err);
                }
                None
            }
        }
    }
}

impl TemplateSource for DirectoryTemplates {
    fn template_for(&self, name: &str) -> Option<Vec<String>> {
        if name == Self::EMPTY {
            return None;
        }
        self.read(name)
    }

    fn empty_template(&self) -> Vec<String> {
        self.read(Self::EMPTY).unwrap_or_default()
    }
}

// ===== STORE =====

/// Result of [`InfoStore::load`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedInfo {
    /// The full document
    pub document: Document,
    /// Whether the file was (re)created from a template by this load
    pub seeded: bool,
}

/// File-backed store of vessel information documents
pub struct InfoStore {
    config: StoreConfig,
    templates: Box<dyn TemplateSource>,
    base: BaseCounts,
}

impl InfoStore {
    /// Create a store. Base counts come from the empty template.
    pub fn new(config: StoreConfig, templates: impl TemplateSource + 'static) -> Self {
        let base = match parse(&templates.empty_template()) {
            Ok(template) => BaseCounts::from_template(&template),
            Err(err) => {
                engine_warn!(SOURCE, "Empty template does not parse ({}), no base entries", err);
                BaseCounts::default()
            }
        };
        engine_debug!(SOURCE, "Store at {} with {} base section(s)", config.root.display(), base.len());
        Self {
            config,
            templates: Box::new(templates),
            base,
        }
    }

    /// Override the base counts derived from the empty template
    pub fn with_base_counts(mut self, base: BaseCounts) -> Self {
        self.base = base;
        self
    }

    pub fn base_counts(&self) -> &BaseCounts {
        &self.base
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of a vessel's document
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(Error::NotFound(format!("no document can exist for vessel name '{}'", name)));
        }
        Ok(self.config.root.join(format!("{}.{}", name, self.config.extension)))
    }

    /// Whether a vessel already has a document on disk
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Template lines a vessel is seeded from.
    ///
    /// The vessel's own template if it parses, else the empty template if it
    /// parses, else nothing.
    pub fn template_lines(&self, name: &str) -> Vec<String> {
        if let Some(lines) = self.templates.template_for(name) {
            match parse(&lines) {
                Ok(_) => return lines,
                Err(err) => {
                    engine_warn!(SOURCE, "Template for '{}' is malformed ({}), using the empty template", name, err);
                }
            }
        }
        let empty = self.templates.empty_template();
        match parse(&empty) {
            Ok(_) => empty,
            Err(err) => {
                engine_warn!(SOURCE, "Empty template is malformed ({}), seeding an empty document", err);
                Vec::new()
            }
        }
    }

    /// Load a vessel's full document, seeding it from its template if the
    /// file is absent or does not parse
    pub fn load(&self, name: &str) -> Result<LoadedInfo> {
        let path = self.path_for(name)?;
        match self.read_lines(&path)? {
            Some(lines) => match parse(&lines) {
                Ok(document) => Ok(LoadedInfo { document, seeded: false }),
                Err(err) => {
                    engine_warn!(SOURCE, "Document of '{}' is unreadable ({}), reseeding from template", name, err);
                    let document = self.reseed(name)?;
                    Ok(LoadedInfo { document, seeded: true })
                }
            },
            None => {
                engine_info!(SOURCE, "No document for '{}' yet, seeding from template", name);
                let document = self.reseed(name)?;
                Ok(LoadedInfo { document, seeded: true })
            }
        }
    }

    /// Filtered document for catalog rows (base entries only). Never writes;
    /// falls back to the template when there is no usable file.
    pub fn peek(&self, name: &str) -> Result<Document> {
        let path = self.path_for(name)?;
        if let Some(lines) = self.read_lines(&path)? {
            match parse_filtered(&lines, &self.base) {
                Ok(document) => return Ok(document),
                Err(err) => {
                    engine_debug!(SOURCE, "Peek of '{}' falls back to template: {}", name, err);
                }
            }
        }
        parse_filtered(&self.template_lines(name), &self.base)
    }

    /// Apply an edit to a vessel's file and return the resulting document.
    ///
    /// Only the edited lines change on disk. Fails with `NotFound` if the
    /// vessel has no document or the edit target is missing.
    pub fn apply(&self, name: &str, edit: &Edit) -> Result<Document> {
        let path = self.path_for(name)?;
        let Some(lines) = self.read_lines(&path)? else {
            return Err(engine_err!(SOURCE, NotFound, "no document for '{}'", name));
        };
        let rewritten = serialize_partial(&lines, edit)?;
        if rewritten != lines {
            fs::write(&path, join_text(&rewritten))
                .map_err(|e| engine_err!(SOURCE, Io, "cannot write {}: {}", path.display(), e))?;
            engine_debug!(SOURCE, "Rewrote '{}' section '{}'", name, edit.section());
        }
        parse(&rewritten)
    }

    /// Overwrite a vessel's document with its template
    pub fn reseed(&self, name: &str) -> Result<Document> {
        let path = self.path_for(name)?;
        let lines = self.template_lines(name);
        let document = parse(&lines)?;
        fs::create_dir_all(&self.config.root).map_err(|e| {
            engine_err!(SOURCE, Io, "cannot create {}: {}", self.config.root.display(), e)
        })?;
        fs::write(&path, join_text(&lines))
            .map_err(|e| engine_err!(SOURCE, Io, "cannot write {}: {}", path.display(), e))?;
        Ok(document)
    }

    fn read_lines(&self, path: &Path) -> Result<Option<Vec<String>>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(split_text(&text))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(engine_err!(SOURCE, Io, "cannot read {}: {}", path.display(), err)),
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
