//! Integration tests for the orbit analysis report.

mod common;

use approx::assert_relative_eq;
use bevy::math::DVec3;

use satsim::analysis::{OrbitClass, analyze, analyze_state};
use satsim::types::{EARTH_RADIUS, PrimaryBody};

#[test]
fn test_default_scenario_report() {
    let earth = PrimaryBody::default();
    let state = common::circular_orbit(700e3);
    let report = analyze_state(&state, &earth);

    let r = EARTH_RADIUS + 700e3;

    assert_eq!(report.class, OrbitClass::Elliptical);
    assert_relative_eq!(report.altitude_km(), 700.0, max_relative = 1e-9);
    assert_relative_eq!(report.circular_speed, 7508.0, epsilon = 0.5);
    assert_relative_eq!(report.circular_ratio(), 1.0, epsilon = 1e-9);

    // Circular orbit energy is exactly -GM/2r
    let expected_energy = -earth.gm() / (2.0 * r);
    assert_relative_eq!(report.specific_energy, expected_energy, max_relative = 0.01);

    // ~98.8 minute period at 700 km
    let minutes = report.period_minutes().expect("bound orbit has a period");
    assert_relative_eq!(minutes, 98.8, epsilon = 0.5);
    assert_relative_eq!(
        report.semi_major_axis.expect("bound orbit has an axis"),
        r,
        max_relative = 1e-9
    );
}

#[test]
fn test_escape_report_has_no_period() {
    let earth = PrimaryBody::default();
    let r = EARTH_RADIUS + 700e3;
    let v = earth.escape_speed(r) * 1.1;
    let report = analyze(DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, v, 0.0), &earth);

    assert_eq!(report.class, OrbitClass::Hyperbolic);
    assert!(report.period.is_none());
    assert!(report.semi_major_axis.is_none());
    assert!(report.escape_ratio() > 1.0);
}

#[test]
fn test_report_tracks_propagated_state() {
    // After a quarter of an orbit the altitude and energy readouts should
    // still describe a circular 700 km orbit.
    let earth = PrimaryBody::default();
    let initial = common::circular_orbit(700e3);
    let report0 = analyze_state(&initial, &earth);

    let quarter_period = (report0.period.unwrap() / 4.0) as u64;
    let (state, collision) = common::propagate(initial, &earth, quarter_period);
    assert!(collision.is_none());

    let report = analyze_state(&state, &earth);
    assert_eq!(report.class, OrbitClass::Elliptical);
    // First-order integration wobbles the radius by a few km
    assert_relative_eq!(report.altitude_km(), 700.0, max_relative = 0.02);
    assert_relative_eq!(
        report.specific_energy,
        report0.specific_energy,
        max_relative = 0.01
    );
}
