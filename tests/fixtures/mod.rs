//! Test fixtures for routeline.
//!
//! Provides:
//! - Real Las Vegas locations (from OpenStreetMap)
//! - Builders for directions payloads with encoded geometry

#![allow(dead_code)]

pub mod directions;
pub mod las_vegas_locations;

pub use directions::*;
pub use las_vegas_locations::*;
