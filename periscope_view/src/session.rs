/// Viewer - one periscope session over a set of vessels.
///
/// Ties the pieces together: selecting a vessel fits the periscope view to
/// its bounds and loads (or seeds) its information document; edits go to
/// the in-memory document first, then to disk through the partial rewrite,
/// and the vessel's catalog row is refreshed from the result.

use crate::config::{DisplayArea, ViewConfig};
use crate::catalog::VesselTable;
use crate::error::Result;
use crate::info::{parse_filtered, Document, Edit, Entry, InfoStore};
use crate::view::{DisplayState, ModelBounds, PeriscopeView};
use crate::{engine_err, engine_info, engine_warn};

const SOURCE: &str = "periscope::Viewer";

/// A vessel as the viewer sees it: a name and the bounds of its model
#[derive(Debug, Clone, PartialEq)]
pub struct VesselModel {
    /// Vessel name, also the name of its information document
    pub name: String,
    /// Bounds of all parts of the model, in feet
    pub bounds: ModelBounds,
    /// Height of the waterline in model space
    pub waterline: f32,
}

impl VesselModel {
    /// Vessel whose waterline is at the model origin
    pub fn new(name: impl Into<String>, bounds: ModelBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
            waterline: 0.0,
        }
    }
}

/// Provider of the vessels a viewer offers
pub trait VesselSource {
    fn load_vessels(&self) -> Result<Vec<VesselModel>>;
}

impl VesselSource for Vec<VesselModel> {
    fn load_vessels(&self) -> Result<Vec<VesselModel>> {
        Ok(self.clone())
    }
}

/// A periscope session
pub struct Viewer {
    view: PeriscopeView,
    table: VesselTable,
    display_state: DisplayState,
    store: InfoStore,
    vessels: Vec<VesselModel>,
    current: Option<usize>,
    document: Option<Document>,
}

impl Viewer {
    /// Create a session and show the first vessel.
    ///
    /// # Arguments
    ///
    /// * `config` - Periscope view configuration
    /// * `display` - Area models are fitted into
    /// * `source` - Provider of the vessel models
    /// * `store` - Information document store
    /// * `columns` - Catalog columns: the name column, then sub-headings
    pub fn new(
        config: ViewConfig,
        display: DisplayArea,
        source: &dyn VesselSource,
        store: InfoStore,
        columns: Vec<String>,
    ) -> Result<Self> {
        let vessels = source.load_vessels()?;
        let mut table = VesselTable::new(columns);
        for vessel in &vessels {
            let row = catalog_row(&store, &vessel.name);
            table.add_row(&vessel.name, &row);
        }

        let mut viewer = Self {
            view: PeriscopeView::new(config, display),
            table,
            display_state: DisplayState::new(),
            store,
            vessels,
            current: None,
            document: None,
        };

        match viewer.vessels.first().map(|v| v.name.clone()) {
            Some(first) => viewer.select_vessel(&first)?,
            None => engine_warn!(SOURCE, "No vessels to show"),
        }
        Ok(viewer)
    }

    /// Show a vessel: fit the view to it and load its document
    pub fn select_vessel(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.vessels.iter().position(|v| v.name == name) else {
            return Err(engine_err!(SOURCE, NotFound, "vessel '{}'", name));
        };
        let loaded = self.store.load(name)?;
        if loaded.seeded {
            engine_info!(SOURCE, "Seeded information for '{}'", name);
        }

        let vessel = &self.vessels[index];
        if let Err(err) = self.view.fit_model(&vessel.bounds, vessel.waterline) {
            engine_warn!(SOURCE, "Cannot fit '{}' ({}), keeping the previous scale", name, err);
        }
        self.document = Some(loaded.document);
        self.current = Some(index);
        self.table.select_name(name);
        self.display_state.expand_all();
        Ok(())
    }

    /// Replace (or add) the body of an entry of the current vessel
    pub fn edit_body(&mut self, section: &str, sub_heading: &str, body: &str) -> Result<()> {
        self.apply_edit(Edit::set_body(section, sub_heading, body))
    }

    /// Rename an entry of the current vessel
    pub fn rename_sub_heading(&mut self, section: &str, from: &str, to: &str) -> Result<()> {
        self.apply_edit(Edit::rename(section, from, to))
    }

    /// Apply an edit to the current vessel, in memory and on disk.
    ///
    /// If the file cannot be rewritten the document is reloaded from disk,
    /// so the in-memory copy never drifts from what is stored.
    pub fn apply_edit(&mut self, edit: Edit) -> Result<()> {
        let Some(name) = self.current_vessel().map(|v| v.name.clone()) else {
            return Err(engine_err!(SOURCE, NotFound, "no vessel selected"));
        };
        let Some(document) = self.document.as_mut() else {
            return Err(engine_err!(SOURCE, NotFound, "no document loaded for '{}'", name));
        };
        document.apply(&edit)?;

        match self.store.apply(&name, &edit) {
            Ok(persisted) => {
                self.document = Some(persisted);
                let row = catalog_row(&self.store, &name);
                self.table.add_row(&name, &row);
                Ok(())
            }
            Err(err) => {
                engine_warn!(SOURCE, "Edit of '{}' not stored ({}), reloading", name, err);
                self.document = Some(self.store.load(&name)?.document);
                Err(err)
            }
        }
    }

    /// User-added entries of a section of the current document
    pub fn custom_entries(&self, section: &str) -> &[Entry] {
        let Some(document) = self.document.as_ref() else {
            return &[];
        };
        match (document.section_index(section), document.section(section)) {
            (Some(index), Some(section)) => {
                section.custom_entries(self.store.base_counts().get(index))
            }
            _ => &[],
        }
    }

    pub fn current_vessel(&self) -> Option<&VesselModel> {
        self.current.and_then(|i| self.vessels.get(i))
    }

    /// Document of the current vessel
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn vessels(&self) -> &[VesselModel] {
        &self.vessels
    }

    pub fn view(&self) -> &PeriscopeView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PeriscopeView {
        &mut self.view
    }

    pub fn table(&self) -> &VesselTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut VesselTable {
        &mut self.table
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.display_state
    }

    pub fn display_state_mut(&mut self) -> &mut DisplayState {
        &mut self.display_state
    }

    pub fn store(&self) -> &InfoStore {
        &self.store
    }
}

/// Catalog row source for a vessel. A vessel whose document cannot be read
/// gets its template's row, or an empty one.
fn catalog_row(store: &InfoStore, name: &str) -> Document {
    match store.peek(name) {
        Ok(row) => row,
        Err(err) => {
            engine_warn!(SOURCE, "No catalog row for '{}' ({}), using its template", name, err);
            parse_filtered(&store.template_lines(name), store.base_counts()).unwrap_or_default()
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
