use super::*;

fn classic_acos_yards(h: f64) -> f64 {
    let r = EARTH_RADIUS_M;
    let ratio = (r / (r + h)).clamp(-1.0, 1.0);
    2.0 * PI * r * ratio.acos().to_degrees() / 360.0 * METERS_TO_YARDS
}

// ============================================================================
// distance_to_horizon
// ============================================================================

#[test]
fn test_distance_at_zero_height_is_zero() {
    assert_eq!(distance_to_horizon(0.0), 0.0);
}

#[test]
fn test_distance_from_one_meter() {
    // ~3.57 km from a 1 m eye height
    let yards = distance_to_horizon(1.0);
    assert!(yards > 3900.0 && yards < 3910.0, "got {}", yards);
}

#[test]
fn test_distance_matches_acos_form() {
    for h in [2.0, 10.0, 100.0, 1000.0, 10_000.0] {
        let stable = distance_to_horizon(h);
        let classic = classic_acos_yards(h);
        assert!((stable - classic).abs() / classic < 1e-6, "h={} {} vs {}", h, stable, classic);
    }
}

#[test]
fn test_distance_non_negative_and_strictly_increasing() {
    let mut previous = distance_to_horizon(0.0);
    let mut h = 0.001;
    while h < 5000.0 {
        let d = distance_to_horizon(h);
        assert!(d >= 0.0);
        assert!(d > previous, "not increasing at h={}", h);
        previous = d;
        h *= 1.5;
    }
}

#[test]
fn test_distance_linear_in_conversion_constant() {
    let base = Horizon::default();
    let doubled = Horizon::new(EARTH_RADIUS_M, METERS_TO_YARDS * 2.0);
    for h in [0.5, 3.0, 40.0] {
        let ratio = doubled.distance_yards(h) / base.distance_yards(h);
        assert!((ratio - 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_negative_height_clamps_to_zero() {
    assert_eq!(distance_to_horizon(-5.0), 0.0);
    assert_eq!(distance_to_horizon(f64::NAN), 0.0);
}

#[test]
fn test_checked_distance_rejects_negative() {
    let horizon = Horizon::default();
    assert!(matches!(horizon.checked_distance_yards(-0.1), Err(Error::DomainError(_))));
    assert!(matches!(horizon.checked_distance_yards(f64::INFINITY), Err(Error::DomainError(_))));
    assert_eq!(horizon.checked_distance_yards(1.0), Ok(distance_to_horizon(1.0)));
}

// ============================================================================
// sub-horizon scale
// ============================================================================

#[test]
fn test_sub_horizon_scale_calibrates_to_max() {
    for travel in [0.3, 1.7, 12.0] {
        let scale = compute_sub_horizon_scale(travel);
        let calibrated = distance_to_horizon(travel) * scale;
        assert!((calibrated - MAX_SUB_HORIZON_YARDS).abs() < 1e-6);
    }
}

#[test]
fn test_sub_horizon_scale_ignores_sign() {
    assert_eq!(compute_sub_horizon_scale(-2.0), compute_sub_horizon_scale(2.0));
}

#[test]
fn test_sub_horizon_scale_without_travel_is_zero() {
    assert_eq!(compute_sub_horizon_scale(0.0), 0.0);
}

// ============================================================================
// display_distance
// ============================================================================

#[test]
fn test_display_distance_zero_offset_equals_horizon() {
    let at_horizon = distance_to_horizon(1.0);
    let scale = compute_sub_horizon_scale(1.0);
    assert_eq!(display_distance(1.0, 0.0, 50.0, scale, 0.01), at_horizon);
}

#[test]
fn test_display_distance_beyond_horizon_adds_curvature() {
    let at_horizon = distance_to_horizon(1.0);
    let d = display_distance(1.0, 20.0, 50.0, 1.0, 0.1);
    let expected = at_horizon + distance_to_horizon(2.0);
    assert!((d - expected).abs() < 1e-9);
    assert!(d > at_horizon);
}

#[test]
fn test_display_distance_clamps_to_max_height() {
    let clamped = display_distance(1.0, 500.0, 50.0, 1.0, 0.1);
    let at_max = display_distance(1.0, 50.0, 50.0, 1.0, 0.1);
    assert_eq!(clamped, at_max);
}

#[test]
fn test_display_distance_in_front_reaches_calibrated_minimum() {
    // Slider min of -40 units, 0.05 m per unit → 2 m of travel
    let scale = compute_sub_horizon_scale(40.0 * 0.05);
    let d = display_distance(1.0, -40.0, 50.0, scale, 0.05);
    let expected = distance_to_horizon(1.0) - MAX_SUB_HORIZON_YARDS;
    assert!((d - expected).abs() < 1e-6, "{} vs {}", d, expected);
}

#[test]
fn test_display_distance_in_front_decreases_with_offset() {
    let scale = compute_sub_horizon_scale(2.0);
    let near = display_distance(1.0, -30.0, 50.0, scale, 0.05);
    let far = display_distance(1.0, -10.0, 50.0, scale, 0.05);
    assert!(near < far);
}

#[test]
fn test_display_distance_never_negative() {
    let d = display_distance(1.0, -100.0, 50.0, 1_000.0, 1.0);
    assert_eq!(d, 0.0);
}

// ============================================================================
// round_yards
// ============================================================================

#[test]
fn test_round_yards() {
    assert_eq!(round_yards(3903.6), 3904);
    assert_eq!(round_yards(3903.4), 3903);
    assert_eq!(round_yards(2.5), 3);
    assert_eq!(round_yards(0.0), 0);
    assert_eq!(round_yards(-12.0), 0);
}
