//! Satsim - Interactive Satellite Orbit Simulator
//!
//! A library crate providing the orbital mechanics core, orbit
//! analysis, and interaction components for testing and integration
//! purposes.

pub mod analysis;
pub mod camera;
pub mod input;
pub mod physics;
pub mod render;
pub mod satellite;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
