use super::*;
use std::fs;
use glam::Vec3;
use tempfile::TempDir;
use crate::config::StoreConfig;
use crate::error::Error;
use crate::info::StaticTemplates;

const EMPTY: &str = "General\n{\nClass\n{\n}\n}\nDraught\n{\nDepth\n{\n}\n}";
const HOOD: &str = "General\n{\nClass\n{\nBattlecruiser\n}\n}\nDraught\n{\nDepth\n{\n32 ft\n}\n}";

fn vessels() -> Vec<VesselModel> {
    vec![
        VesselModel::new("Hood", ModelBounds::new(Vec3::new(-430.0, -32.0, -52.0), Vec3::new(430.0, 120.0, 52.0))),
        VesselModel::new("Flower", ModelBounds::new(Vec3::new(-102.0, -11.0, -17.0), Vec3::new(102.0, 40.0, 17.0))),
    ]
}

fn viewer_with(vessels: Vec<VesselModel>) -> (TempDir, Result<Viewer>) {
    let dir = TempDir::new().unwrap();
    let templates = StaticTemplates::new(EMPTY).with_template("Hood", HOOD);
    let store = InfoStore::new(StoreConfig::new(dir.path()), templates);
    let viewer = Viewer::new(
        ViewConfig::default(),
        DisplayArea::default(),
        &vessels,
        store,
        vec!["Name".to_string(), "Class".to_string(), "Depth".to_string()],
    );
    (dir, viewer)
}

fn viewer() -> (TempDir, Viewer) {
    let (dir, viewer) = viewer_with(vessels());
    (dir, viewer.unwrap())
}

fn row_cells(viewer: &Viewer, name: &str) -> Vec<String> {
    let key = viewer.table().key_of(name).unwrap();
    viewer.table().row(key).unwrap().cells().to_vec()
}

// ============================================================================
// Startup and selection
// ============================================================================

#[test]
fn test_new_selects_first_vessel() {
    let (dir, viewer) = viewer();
    assert_eq!(viewer.current_vessel().map(|v| v.name.as_str()), Some("Hood"));
    assert_eq!(viewer.document().unwrap().body("General", "Class"), Some("Battlecruiser"));
    assert_eq!(viewer.table().selected().map(|r| r.name()), Some("Hood"));
    assert!(dir.path().join("Hood.txt").exists());
    // Rows come from templates without seeding
    assert!(!dir.path().join("Flower.txt").exists());
    assert_eq!(row_cells(&viewer, "Flower"), vec!["Flower", "", ""]);
}

#[test]
fn test_select_vessel_fits_view_and_expands() {
    let (dir, mut viewer) = viewer();
    let hood_scale = viewer.view().model_scale();
    viewer.display_state_mut().toggle_section("Draught");

    viewer.select_vessel("Flower").unwrap();
    assert!(viewer.view().model_scale() > hood_scale);
    assert!(!viewer.display_state().is_collapsed("Draught"));
    assert!(dir.path().join("Flower.txt").exists());
    assert_eq!(viewer.table().selected().map(|r| r.name()), Some("Flower"));
}

#[test]
fn test_unusable_vessel_name_gets_template_row() {
    let mut list = vessels();
    list.push(VesselModel::new("HMS A/B", ModelBounds::new(Vec3::splat(-10.0), Vec3::splat(10.0))));
    let (_dir, viewer) = viewer_with(list);
    let mut viewer = viewer.unwrap();

    assert_eq!(viewer.current_vessel().map(|v| v.name.as_str()), Some("Hood"));
    assert_eq!(viewer.table().len(), 3);
    assert_eq!(row_cells(&viewer, "HMS A/B"), vec!["HMS A/B", "", ""]);
    assert_eq!(row_cells(&viewer, "Hood"), vec!["Hood", "Battlecruiser", "32 ft"]);
    let hood_scale = viewer.view().model_scale();
    assert!(matches!(viewer.select_vessel("HMS A/B"), Err(Error::NotFound(_))));
    assert_eq!(viewer.view().model_scale(), hood_scale);
    assert_eq!(viewer.current_vessel().map(|v| v.name.as_str()), Some("Hood"));
    viewer.select_vessel("Flower").unwrap();
}

#[test]
fn test_flat_first_vessel_keeps_unit_scale() {
    let mut list = vec![VesselModel::new("Buoy", ModelBounds::empty_at(Vec3::ZERO))];
    list.extend(vessels());
    let (dir, viewer) = viewer_with(list);
    let mut viewer = viewer.unwrap();

    assert_eq!(viewer.current_vessel().map(|v| v.name.as_str()), Some("Buoy"));
    assert_eq!(viewer.view().model_scale(), 1.0);
    assert!(viewer.document().is_some());
    assert!(dir.path().join("Buoy.txt").exists());

    viewer.select_vessel("Hood").unwrap();
    let hood_scale = viewer.view().model_scale();
    assert_ne!(hood_scale, 1.0);
    viewer.select_vessel("Buoy").unwrap();
    assert_eq!(viewer.view().model_scale(), hood_scale);
}

#[test]
fn test_select_unknown_vessel() {
    let (_dir, mut viewer) = viewer();
    assert!(matches!(viewer.select_vessel("Bismarck"), Err(Error::NotFound(_))));
    assert_eq!(viewer.current_vessel().map(|v| v.name.as_str()), Some("Hood"));
}

// ============================================================================
// Edits
// ============================================================================

#[test]
fn test_edit_body_syncs_disk_and_row() {
    let (dir, mut viewer) = viewer();
    viewer.edit_body("Draught", "Depth", "31 ft").unwrap();

    assert_eq!(viewer.document().unwrap().body("Draught", "Depth"), Some("31 ft"));
    assert_eq!(row_cells(&viewer, "Hood")[2], "31 ft");
    let stored = fs::read_to_string(dir.path().join("Hood.txt")).unwrap();
    assert_eq!(stored, HOOD.replace("32 ft", "31 ft"));
}

#[test]
fn test_custom_entries() {
    let (_dir, mut viewer) = viewer();
    assert!(viewer.custom_entries("Draught").is_empty());
    viewer.edit_body("Draught", "Notes", "Sunk 1941").unwrap();

    let custom = viewer.custom_entries("Draught");
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].sub_heading(), "Notes");
    // Custom entries stay out of the catalog
    assert_eq!(row_cells(&viewer, "Hood"), vec!["Hood", "Battlecruiser", "32 ft"]);
    assert!(viewer.custom_entries("Armament").is_empty());
}

#[test]
fn test_rename_custom_entry() {
    let (_dir, mut viewer) = viewer();
    viewer.edit_body("Draught", "Notes", "Sunk 1941").unwrap();
    viewer.rename_sub_heading("Draught", "Notes", "History").unwrap();
    assert_eq!(viewer.document().unwrap().body("Draught", "History"), Some("Sunk 1941"));
    assert_eq!(viewer.custom_entries("Draught")[0].sub_heading(), "History");
}

#[test]
fn test_failed_edit_leaves_document_intact() {
    let (_dir, mut viewer) = viewer();
    let before = viewer.document().cloned();
    assert!(matches!(
        viewer.rename_sub_heading("Draught", "Beam", "Width"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        viewer.edit_body("Sensors", "Radar", "Type 284"),
        Err(Error::NotFound(_))
    ));
    assert_eq!(viewer.document().cloned(), before);
}

#[test]
fn test_rewrite_failure_reloads_from_disk() {
    let (dir, mut viewer) = viewer();
    // Another writer removed the section behind our back
    fs::write(dir.path().join("Hood.txt"), "General\n{\nClass\n{\nBattlecruiser\n}\n}").unwrap();

    assert!(matches!(
        viewer.edit_body("Draught", "Depth", "31 ft"),
        Err(Error::NotFound(_))
    ));
    let document = viewer.document().unwrap();
    assert!(document.section("Draught").is_none());
    assert_eq!(document.body("General", "Class"), Some("Battlecruiser"));
}

#[test]
fn test_structural_body_rejected_and_reloaded() {
    let (dir, mut viewer) = viewer();
    assert!(matches!(
        viewer.edit_body("Draught", "Depth", "}"),
        Err(Error::ParseError(_))
    ));
    assert_eq!(viewer.document().unwrap().body("Draught", "Depth"), Some("32 ft"));
    assert_eq!(fs::read_to_string(dir.path().join("Hood.txt")).unwrap(), HOOD);
}
