//! Integration tests for the malformed-input recovery contract.
//!
//! An edit that fails to parse must leave the last valid candidate in
//! effect; only valid candidates ever reach the committed state.

mod common;

use approx::assert_relative_eq;

use satsim::input::{InputError, LaunchSettings, parse_field};
use satsim::satellite::Satellite;
use satsim::types::{EARTH_RADIUS, PrimaryBody};

#[test]
fn test_malformed_altitude_keeps_candidate() {
    let earth = PrimaryBody::default();
    let mut settings = LaunchSettings::for_primary(&earth);
    let before = settings.candidate;

    settings.altitude_text = "abc".to_string();
    let result = settings.apply_altitude_edit(&earth);

    assert!(matches!(result, Err(InputError::Malformed(_))));
    assert_eq!(settings.candidate, before);
    // The garbage stays in the field for the user to fix
    assert_eq!(settings.altitude_text, "abc");
}

#[test]
fn test_malformed_velocity_component_keeps_whole_vector() {
    let earth = PrimaryBody::default();
    let mut settings = LaunchSettings::for_primary(&earth);
    let before = settings.candidate;

    settings.vx_text = "12..5".to_string();
    assert!(settings.apply_velocity_edit().is_err());
    assert_eq!(settings.candidate.vel, before.vel);
}

#[test]
fn test_committed_state_untouched_by_edits() {
    // Launch copies the candidate; later edits (valid or not) only touch
    // the candidate until the next launch.
    let earth = PrimaryBody::default();
    let mut settings = LaunchSettings::for_primary(&earth);
    let satellite = Satellite {
        state: settings.candidate,
    };
    let committed = satellite.state;

    settings.altitude_text = "400".to_string();
    settings.apply_altitude_edit(&earth).unwrap();
    settings.vx_text = "nonsense".to_string();
    let _ = settings.apply_velocity_edit();

    assert_eq!(satellite.state, committed);
    assert_relative_eq!(
        settings.candidate.radius(),
        EARTH_RADIUS + 400e3,
        max_relative = 1e-9
    );
}

#[test]
fn test_parse_field_contract() {
    assert_eq!(parse_field(" 700 "), Ok(700.0));
    assert!(parse_field("").is_err());
    assert!(parse_field("7,5").is_err());
    assert!(parse_field("NaN").is_err());
    assert!(parse_field("-inf").is_err());
}
