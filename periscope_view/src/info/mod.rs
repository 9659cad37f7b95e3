//! Info module - the per-vessel information documents.
//!
//! A document is a list of sections (`heading`), each a list of entries
//! (`sub-heading` plus a multi-line body), stored as nested `{ }` blocks.
//! Parsing and the minimal-diff rewriter share one line scanner; `InfoStore`
//! persists one file per vessel.

mod scan;
mod document;
mod parser;
mod rewrite;
mod store;

pub use scan::{scan, LineKind, ScannedLine, OPEN, CLOSE};
pub use document::{Document, Section, Entry};
pub use parser::{parse, parse_filtered, serialize, BaseCounts};
pub use rewrite::{serialize_partial, Edit};
pub use store::{
    InfoStore, LoadedInfo, TemplateSource, StaticTemplates, DirectoryTemplates,
    split_text, join_text,
};
