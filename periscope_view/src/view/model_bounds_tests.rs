use glam::Vec3;
use super::*;

fn hull() -> ModelBounds {
    // 120 long (x), 14 beam (z), from 6 below to 30 above the waterline
    ModelBounds::new(Vec3::new(-60.0, -6.0, -7.0), Vec3::new(60.0, 30.0, 7.0))
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_orders_corners() {
    let b = ModelBounds::new(Vec3::new(1.0, 5.0, -2.0), Vec3::new(-1.0, 0.0, 2.0));
    assert_eq!(b.min, Vec3::new(-1.0, 0.0, -2.0));
    assert_eq!(b.max, Vec3::new(1.0, 5.0, 2.0));
}

#[test]
fn test_from_points() {
    let b = ModelBounds::from_points([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, -1.0, 2.0),
        Vec3::new(-2.0, 4.0, 1.0),
    ])
    .unwrap();
    assert_eq!(b.min, Vec3::new(-2.0, -1.0, 0.0));
    assert_eq!(b.max, Vec3::new(3.0, 4.0, 2.0));
}

#[test]
fn test_from_no_points() {
    assert!(ModelBounds::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_encapsulate_parts_from_origin() {
    let mut b = ModelBounds::empty_at(Vec3::ZERO);
    b.encapsulate(&ModelBounds::new(Vec3::new(-10.0, -2.0, -3.0), Vec3::new(10.0, 8.0, 3.0)));
    b.encapsulate(&ModelBounds::new(Vec3::new(2.0, 8.0, -1.0), Vec3::new(4.0, 15.0, 1.0)));
    assert_eq!(b.min, Vec3::new(-10.0, -2.0, -3.0));
    assert_eq!(b.max, Vec3::new(10.0, 15.0, 3.0));
}

// ============================================================================
// Measurements
// ============================================================================

#[test]
fn test_center_and_size() {
    let b = hull();
    assert_eq!(b.center(), Vec3::new(0.0, 12.0, 0.0));
    assert_eq!(b.size(), Vec3::new(120.0, 36.0, 14.0));
}

#[test]
fn test_footprint_uses_longest_horizontal_axis() {
    assert_eq!(hull().footprint(), 120.0);
    let turned = ModelBounds::new(Vec3::new(-7.0, 0.0, -60.0), Vec3::new(7.0, 1.0, 60.0));
    assert_eq!(turned.footprint(), 120.0);
}

#[test]
fn test_height_above_waterline() {
    assert_eq!(hull().height_above(0.0), 30.0);
    assert_eq!(hull().height_above(5.0), 25.0);
}

// ============================================================================
// fit_scale
// ============================================================================

#[test]
fn test_fit_scale() {
    let display = DisplayArea { width: 1500.0, height: 800.0, scale: 0.5 };
    let scale = hull().fit_scale(&display, 300.0).unwrap();
    assert_eq!(scale, 1200.0 / 120.0 * 0.5);
}

#[test]
fn test_fit_scale_rejects_flat_model() {
    let flat = ModelBounds::empty_at(Vec3::ONE);
    let result = flat.fit_scale(&DisplayArea::default(), 300.0);
    assert!(matches!(result, Err(Error::DomainError(_))));
}

#[test]
fn test_fit_scale_rejects_display_smaller_than_margin() {
    let display = DisplayArea { width: 200.0, height: 200.0, scale: 1.0 };
    assert!(matches!(hull().fit_scale(&display, 300.0), Err(Error::DomainError(_))));
}

#[test]
fn test_fit_scale_rejects_zero_display_scale() {
    let display = DisplayArea { width: 1500.0, height: 800.0, scale: 0.0 };
    assert!(matches!(hull().fit_scale(&display, 300.0), Err(Error::DomainError(_))));
}
