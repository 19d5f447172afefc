//! Geocentric reduction and the user-facing location record
//!
//! Heliocentric state vectors for a body and for the Earth combine into a
//! geocentric ecliptic position here, optionally retarded by light travel
//! time. The module also defines [`BodyLocation`], the record the full
//! pipeline ultimately hands back to callers.

use serde::Serialize;
use std::fmt;

use crate::constants::C_AUDAY;
use crate::coordinates::Cartesian3;
use crate::keplerlib::HeliocentricState;
use crate::time::julian_date_as_string;

/// Difference two heliocentric states into a geocentric ecliptic position.
///
/// With aberration enabled, the relative position is retarded along the
/// relative velocity by the light travel time `tau = r / c`, so the
/// result points where the body *appears* to be rather than where it is.
pub fn geocentric_ecliptic(
    body: &HeliocentricState,
    earth: &HeliocentricState,
    aberration: bool,
) -> Cartesian3 {
    let rel_pos = body.position - earth.position;
    let rel_vel = body.velocity - earth.velocity;

    let tau = if aberration { rel_pos.norm() / C_AUDAY } else { 0.0 };
    Cartesian3::from_vector3(rel_pos - rel_vel * tau)
}

/// Everything the pipeline knows about a body's position at one instant.
///
/// Angles are degrees: right ascension in [0°, 360°), declination in
/// [-90°, 90°], longitude east of Greenwich, azimuth clockwise from
/// north, elevation above the horizon. The distance is the
/// observer-to-body distance in AU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyLocation {
    /// Name of the body as it appears in the catalog
    pub body: String,
    /// Julian date of the observation
    pub julian_date: f64,
    /// Geocentric equatorial right ascension, degrees
    pub right_ascension: f64,
    /// Geocentric equatorial declination, degrees
    pub declination: f64,
    /// Longitude of the sub-body point, degrees east of Greenwich
    pub longitude: f64,
    /// Compass bearing from the observer, degrees
    pub azimuth: f64,
    /// Altitude above the observer's horizon, degrees
    pub elevation: f64,
    /// Observer-to-body distance, AU
    pub distance: f64,
}

impl fmt::Display for BodyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} RA:{:.3} Dec:{:.3} Az:{:.3} El:{:.3} Dist:{}AU",
            self.body,
            julian_date_as_string(self.julian_date),
            self.right_ascension,
            self.declination,
            self.azimuth,
            self.elevation,
            self.distance,
        )
    }
}
