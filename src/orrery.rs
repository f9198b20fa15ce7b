//! # Orrery: the planetary table and its position queries
//!
//! This module defines the [`Orrery`] struct, the central façade over the
//! fixed six-planet mean-motion table. It wires together:
//!
//! 1. **The catalog** — six [`Planet`](crate::planet::Planet) records
//!    (mercury through saturn), built once at construction and never mutated
//!    afterwards. Catalog order is part of the contract: iteration yields the
//!    bodies in insertion order.
//! 2. **The position query** — [`position_at`](crate::orrery::Orrery::position_at),
//!    linear propagation of the mean longitude from the reference epoch
//!    ([`EPOCH_DATE`](crate::constants::EPOCH_DATE)) to an arbitrary calendar
//!    date.
//!
//! Element values are taken from Singal & Singal (2009), *Determining
//! planetary positions in the sky for ~50 years to an accuracy of 1 degree
//! with a calculator*.
//!
//! ## Typical usage
//!
//! ```rust
//! use orrery::orrery::Orrery;
//!
//! let orrery = Orrery::new();
//!
//! // Heliocentric ecliptic longitude of Mars on 2004-08-27
//! let longitude = orrery.position_at("mars", "08/27/2004").unwrap();
//! assert!((-360.0..360.0).contains(&longitude));
//! ```

use crate::constants::{Degree, EPOCH_DATE};
use crate::orrery_errors::OrreryError;
use crate::planet::Planet;
use crate::time::days_between;

/// Number of bodies in the catalog
const PLANET_COUNT: usize = 6;

#[derive(Debug, Clone)]
pub struct Orrery {
    planets: [(&'static str, Planet); PLANET_COUNT],
}

impl Orrery {
    /// Construct the catalog.
    ///
    /// The table is immutable after construction; lookups borrow from it and
    /// no planet is ever added or rewritten at runtime.
    pub fn new() -> Self {
        let planet = |mean_longitude, orbital_period, angular_speed, eccentricity| Planet {
            mean_longitude,
            orbital_period,
            angular_speed,
            eccentricity,
        };

        Orrery {
            planets: [
                ("mercury", planet(250.2, 87.969, 4.09235, 0.2056)),
                ("venus", planet(181.2, 224.701, 1.60213, 0.0068)),
                ("earth", planet(100.0, 365.256, 0.98561, 0.0167)),
                ("mars", planet(355.2, 686.98, 0.52403, 0.0934)),
                ("jupiter", planet(34.3, 4332.59, 0.08309, 0.0485)),
                ("saturn", planet(50.1, 10759.2, 0.03346, 0.0555)),
            ],
        }
    }

    /// Look up a planet by its lowercase catalog name (case-sensitive).
    ///
    /// Arguments
    /// -----------------
    /// * `name`: one of the six catalog keys (`"mercury"` … `"saturn"`).
    ///
    /// Return
    /// ----------
    /// * A borrowed [`Planet`], or [`OrreryError::UnknownPlanet`] carrying the
    ///   requested name.
    pub fn planet(&self, name: &str) -> Result<&Planet, OrreryError> {
        self.planets
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, planet)| planet)
            .ok_or_else(|| OrreryError::UnknownPlanet(name.to_string()))
    }

    /// Heliocentric ecliptic longitude of `name` on `date`, in degrees.
    ///
    /// Linear extrapolation of the mean longitude: elapsed days since the
    /// reference epoch, scaled by the planet's angular speed, added to the
    /// mean longitude at epoch and reduced modulo 360. Eccentricity is not
    /// applied.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: one of the six catalog keys.
    /// * `date`: calendar date in the format MM/DD/YYYY, interpreted at UTC
    ///   midnight.
    ///
    /// Return
    /// ----------
    /// * The longitude in degrees. Dates on or after the epoch yield a value
    ///   in [0, 360); dates before the epoch can yield a negative value in
    ///   (-360, 0) (see [`Planet::mean_longitude_at`]).
    pub fn position_at(&self, name: &str, date: &str) -> Result<Degree, OrreryError> {
        let planet = self.planet(name)?;
        let elapsed = days_between(EPOCH_DATE, date)?;

        Ok(planet.mean_longitude_at(elapsed))
    }

    /// Iterate over `(name, planet)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Planet)> {
        self.planets.iter().map(|(name, planet)| (*name, planet))
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod orrery_test {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let orrery = Orrery::new();
        let names: Vec<&str> = orrery.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["mercury", "venus", "earth", "mars", "jupiter", "saturn"]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let orrery = Orrery::new();
        assert!(orrery.planet("mercury").is_ok());
        assert!(matches!(
            orrery.planet("Mercury"),
            Err(OrreryError::UnknownPlanet(_))
        ));
    }

    #[test]
    fn test_unknown_planet_carries_the_requested_name() {
        let orrery = Orrery::new();
        assert!(matches!(
            orrery.planet("pluto"),
            Err(OrreryError::UnknownPlanet(name)) if name == "pluto"
        ));
    }
}
