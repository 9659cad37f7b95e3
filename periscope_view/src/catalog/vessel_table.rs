/// VesselTable - the catalog of vessels shown next to the periscope.
///
/// Column 0 holds the vessel name; every other column is named after a
/// sub-heading and shows that entry's body. Rows live in a SlotMap so a
/// row key stays valid while the table is re-sorted.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::info::Document;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key of a row in a VesselTable
    pub struct VesselRowKey;
}

// ===== ROW =====

/// One vessel's row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselRow {
    name: String,
    cells: Vec<String>,
}

impl VesselRow {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell texts, one per column (cell 0 is the name)
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// Direction of the current sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

// ===== TABLE =====

/// Ordered, sortable table of vessels
#[derive(Debug, Clone)]
pub struct VesselTable {
    columns: Vec<String>,
    rows: SlotMap<VesselRowKey, VesselRow>,
    /// Display order
    order: Vec<VesselRowKey>,
    by_name: FxHashMap<String, VesselRowKey>,
    sort: Option<(usize, SortOrder)>,
    selected: Option<VesselRowKey>,
}

impl VesselTable {
    /// Create an empty table. The first column is the vessel name, the
    /// others name the sub-headings they show.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: SlotMap::with_key(),
            order: Vec::new(),
            by_name: FxHashMap::default(),
            sort: None,
            selected: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the data column showing `sub_heading`
    pub fn column_index(&self, sub_heading: &str) -> Option<usize> {
        self.columns.iter().skip(1).position(|c| c == sub_heading).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add a vessel, or refill its cells if it is already listed.
    ///
    /// Each data column takes the body of the sub-heading it is named
    /// after; when several sections hold that sub-heading the last one wins.
    pub fn add_row(&mut self, name: &str, document: &Document) -> VesselRowKey {
        let cells = self.cells_from(name, document);
        if let Some(&key) = self.by_name.get(name) {
            if let Some(row) = self.rows.get_mut(key) {
                row.cells = cells;
            }
            return key;
        }
        let key = self.rows.insert(VesselRow {
            name: name.to_string(),
            cells,
        });
        self.order.push(key);
        self.by_name.insert(name.to_string(), key);
        key
    }

    /// Set the cell of the column named `sub_heading` in a vessel's row.
    /// Returns false if the vessel or the column is unknown.
    pub fn update_cell(&mut self, vessel: &str, sub_heading: &str, text: &str) -> bool {
        let Some(column) = self.column_index(sub_heading) else {
            return false;
        };
        let Some(row) = self.by_name.get(vessel).and_then(|&k| self.rows.get_mut(k)) else {
            return false;
        };
        row.cells[column] = text.to_string();
        true
    }

    /// Sort rows by a column, case-insensitively and stably.
    ///
    /// Sorting the same column twice in a row flips to descending (and back).
    /// Returns false if the column does not exist.
    pub fn sort_by_column(&mut self, column: usize) -> bool {
        if column >= self.columns.len() {
            return false;
        }
        let order = match self.sort {
            Some((last, SortOrder::Ascending)) if last == column => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };

        let rows = &self.rows;
        let key_of = |k: &VesselRowKey| {
            rows.get(*k)
                .and_then(|r| r.cell(column))
                .unwrap_or_default()
                .to_lowercase()
        };
        match order {
            SortOrder::Ascending => self.order.sort_by_cached_key(key_of),
            SortOrder::Descending => {
                let mut keyed: Vec<(String, VesselRowKey)> =
                    self.order.iter().map(|k| (key_of(k), *k)).collect();
                keyed.sort_by(|a, b| b.0.cmp(&a.0));
                self.order = keyed.into_iter().map(|(_, k)| k).collect();
            }
        }
        self.sort = Some((column, order));
        true
    }

    /// Column and direction of the last sort
    pub fn sort_state(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    /// Select a row. Returns false for a stale key.
    pub fn select(&mut self, key: VesselRowKey) -> bool {
        if self.rows.contains_key(key) {
            self.selected = Some(key);
            true
        } else {
            false
        }
    }

    /// Select a row by vessel name
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.by_name.get(name) {
            Some(&key) => self.select(key),
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&VesselRow> {
        self.selected.and_then(|k| self.rows.get(k))
    }

    pub fn selected_key(&self) -> Option<VesselRowKey> {
        self.selected
    }

    pub fn key_of(&self, name: &str) -> Option<VesselRowKey> {
        self.by_name.get(name).copied()
    }

    pub fn row(&self, key: VesselRowKey) -> Option<&VesselRow> {
        self.rows.get(key)
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = (VesselRowKey, &VesselRow)> + '_ {
        self.order
            .iter()
            .filter_map(move |&k| self.rows.get(k).map(|r| (k, r)))
    }

    fn cells_from(&self, name: &str, document: &Document) -> Vec<String> {
        let mut cells = vec![String::new(); self.columns.len().max(1)];
        cells[0] = name.to_string();
        for (column, sub_heading) in self.columns.iter().enumerate().skip(1) {
            if let Some(body) = document
                .sections()
                .iter()
                .rev()
                .find_map(|s| s.body(sub_heading))
            {
                cells[column] = body.to_string();
            }
        }
        cells
    }
}

#[cfg(test)]
#[path = "vessel_table_tests.rs"]
mod tests;
