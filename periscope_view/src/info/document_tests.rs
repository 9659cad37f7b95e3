use super::*;

fn sample() -> Document {
    let mut draught = Section::new("Draught");
    draught.push_entry(Entry::new("Depth", "12 ft"));
    draught.push_entry(Entry::new("Hull", "Steel\nRiveted"));
    let mut armament = Section::new("Armament");
    armament.push_entry(Entry::new("Main", "4 x 4 in"));

    let mut doc = Document::new();
    doc.push_section(draught);
    doc.push_section(armament);
    doc
}

// ============================================================================
// Construction and lookup
// ============================================================================

#[test]
fn test_lookup() {
    let doc = sample();
    assert_eq!(doc.len(), 2);
    assert!(!doc.is_empty());
    assert_eq!(doc.section_index("Armament"), Some(1));
    assert_eq!(doc.body("Draught", "Depth"), Some("12 ft"));
    assert_eq!(doc.body("Draught", "Hull"), Some("Steel\nRiveted"));
    assert_eq!(doc.body("Draught", "Beam"), None);
    assert_eq!(doc.body("Propulsion", "Depth"), None);
}

#[test]
fn test_duplicates_rejected() {
    let mut doc = sample();
    assert!(!doc.push_section(Section::new("Draught")));
    assert_eq!(doc.len(), 2);

    let mut section = Section::new("X");
    assert!(section.push_entry(Entry::new("a", "1")));
    assert!(!section.push_entry(Entry::new("a", "2")));
    assert_eq!(section.body("a"), Some("1"));
}

#[test]
fn test_entry_normalizes_crlf() {
    let entry = Entry::new("Hull", "Steel\r\nRiveted");
    assert_eq!(entry.body(), "Steel\nRiveted");
}

#[test]
fn test_custom_entries() {
    let doc = sample();
    let draught = doc.section("Draught").unwrap();
    assert_eq!(draught.custom_entries(1).len(), 1);
    assert_eq!(draught.custom_entries(1)[0].sub_heading(), "Hull");
    assert!(draught.custom_entries(2).is_empty());
    assert!(draught.custom_entries(10).is_empty());
    assert_eq!(draught.custom_entries(0).len(), 2);
}

// ============================================================================
// Rename
// ============================================================================

#[test]
fn test_rename_keeps_position_and_body() {
    let mut doc = sample();
    doc.rename_sub_heading("Draught", "Depth", "Keel depth").unwrap();
    let draught = doc.section("Draught").unwrap();
    assert_eq!(draught.entries()[0].sub_heading(), "Keel depth");
    assert_eq!(draught.entries()[0].body(), "12 ft");
    assert_eq!(draught.entries()[1].sub_heading(), "Hull");
}

#[test]
fn test_rename_missing_leaves_document_intact() {
    let mut doc = sample();
    let before = doc.clone();
    assert!(matches!(
        doc.rename_sub_heading("Draught", "Beam", "Width"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        doc.rename_sub_heading("Sensors", "Depth", "Width"),
        Err(Error::NotFound(_))
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_rename_to_taken_name_fails() {
    let mut doc = sample();
    let before = doc.clone();
    assert!(matches!(
        doc.rename_sub_heading("Draught", "Depth", "Hull"),
        Err(Error::NotFound(_))
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_rename_there_and_back_restores_document() {
    let mut doc = sample();
    let before = doc.clone();
    doc.rename_sub_heading("Draught", "Hull", "Plating").unwrap();
    assert_ne!(doc, before);
    doc.rename_sub_heading("Draught", "Plating", "Hull").unwrap();
    assert_eq!(doc, before);
}

#[test]
fn test_rename_to_same_name_is_noop() {
    let mut doc = sample();
    let before = doc.clone();
    doc.rename_sub_heading("Draught", "Depth", "Depth").unwrap();
    assert_eq!(doc, before);
}

// ============================================================================
// Set body
// ============================================================================

#[test]
fn test_set_body_replaces_in_place() {
    let mut doc = sample();
    doc.set_body("Draught", "Depth", "15 ft").unwrap();
    assert_eq!(doc.body("Draught", "Depth"), Some("15 ft"));
    assert_eq!(doc.section("Draught").unwrap().entries()[0].sub_heading(), "Depth");
}

#[test]
fn test_set_body_appends_custom_entry() {
    let mut doc = sample();
    doc.set_body("Armament", "Torpedoes", "2 x 21 in").unwrap();
    let armament = doc.section("Armament").unwrap();
    assert_eq!(armament.entries().len(), 2);
    assert_eq!(armament.custom_entries(1)[0].body(), "2 x 21 in");
}

#[test]
fn test_set_body_missing_section() {
    let mut doc = sample();
    assert!(matches!(
        doc.set_body("Sensors", "Radar", "Type 271"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_apply_edit() {
    let mut doc = sample();
    doc.apply(&Edit::set_body("Draught", "Depth", "15 ft")).unwrap();
    doc.apply(&Edit::rename("Draught", "Hull", "Plating")).unwrap();
    assert_eq!(doc.body("Draught", "Depth"), Some("15 ft"));
    assert_eq!(doc.body("Draught", "Plating"), Some("Steel\nRiveted"));
}
