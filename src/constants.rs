//! # Constants and type definitions for the orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the crate: the reference epoch of the planetary table, the
//! AU ↔ km conversion, and the `f64` aliases shared by the planet records and the position
//! queries.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Number of days in an Earth year, as used by the mean-motion table
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Degrees in one full revolution around the Sun
pub const DEGREES_PER_TURN: f64 = 360.0;

/// Distance from the Sun to the heliopause in astronomical units.
/// Carried for reference only; nothing in the crate computes with it.
pub const HELIOPAUSE_AU: f64 = 120.0;

/// Calendar date (UTC midnight) of the reference epoch to which every mean
/// longitude of the planetary table is referred
pub const EPOCH_DATE: &str = "1/1/2000";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Duration in days
pub type Days = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
