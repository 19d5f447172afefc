//! Skytrack: deterministic Keplerian ephemeris calculations
//!
//! This crate computes the apparent position of a solar-system body (a
//! planet, dwarf planet, or the Sun) in the sky at an arbitrary Julian
//! date, as seen from an observer's longitude and latitude on Earth.
//!
//! The pipeline evaluates the body's time-varying orbital elements, solves
//! Kepler's equation for the eccentric anomaly, and carries the resulting
//! position through heliocentric-ecliptic, geocentric-ecliptic (with
//! light-time aberration), precessed/nutated equatorial, Greenwich-fixed,
//! and finally observer-relative horizontal coordinates.
//!
//! # Example
//!
//! ```rust
//! use skytrack::constants::J2000;
//!
//! // Where was Mars at the J2000 epoch, seen from Greenwich?
//! let location = skytrack::find("Mars", J2000, 0.0, 51.48).unwrap();
//! println!(
//!     "RA {:.3}°  Dec {:.3}°  Az {:.3}°  El {:.3}°",
//!     location.right_ascension, location.declination,
//!     location.azimuth, location.elevation,
//! );
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod elementslib;
pub mod keplerlib;
pub mod nutationlib;
pub mod planetlib;
pub mod polynomial;
pub mod positions;
pub mod precessionlib;
pub mod time;
pub mod toposlib;

// Re-export commonly used types
pub use coordinates::Cartesian3;
pub use elementslib::{Body, Catalog, OrbitalElements};
pub use planetlib::{find, Ephemeris};
pub use polynomial::Polynomial;
pub use positions::BodyLocation;

/// Main error type for the skytrack library
#[derive(Debug, Error)]
pub enum SkytrackError {
    /// The requested body name is not in the catalog
    #[error("Body not found: {0}")]
    BodyNotFound(String),

    /// A catalog body that is not the origin carries no orbital elements
    #[error("No orbital elements for body: {0}")]
    MissingElements(String),

    /// The Kepler solver exhausted its iteration budget
    #[error(
        "Kepler solver did not converge after {iterations} iterations \
         (e = {eccentricity}, M = {mean_anomaly_rad} rad)"
    )]
    Convergence {
        /// Iterations performed before giving up
        iterations: usize,
        /// Eccentricity of the offending orbit
        eccentricity: f64,
        /// Mean anomaly in radians
        mean_anomaly_rad: f64,
    },
}

/// Result type for skytrack operations
pub type Result<T> = std::result::Result<T, SkytrackError>;
