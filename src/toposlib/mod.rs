//! Topocentric reduction: azimuth, elevation, and observer distance
//!
//! The final leg of the pipeline. A Greenwich-fixed position tells us
//! where on Earth the body is overhead; combining it with the observer's
//! own longitude and latitude on the spherical Earth yields the compass
//! bearing and altitude of the body, plus the true observer-to-body
//! distance corrected for the observer sitting one Earth radius off the
//! geocenter.

use crate::constants::{DEG2RAD, EARTH_RADIUS_AU, RAD2DEG};
use crate::coordinates::Cartesian3;

/// Geometry threshold below which the azimuth is undefined (body at the
/// observer's zenith or nadir, or observer at a pole).
const AZIMUTH_DEGENERACY: f64 = 1e-12;

/// A body's position in the observer's local horizontal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    /// Compass bearing in degrees, [0°, 360°), measured from north through east
    pub azimuth_deg: f64,
    /// Altitude above the horizon in degrees, [-90°, 90°]
    pub elevation_deg: f64,
    /// Observer-to-body distance in AU
    pub distance_au: f64,
}

/// Reduce a Greenwich-fixed equatorial position to the observer's horizon.
///
/// `p` carries the body's declination and its longitude east of Greenwich
/// in the azimuthal angle; the observer sits at `lon_deg` east and
/// `lat_deg` north on a sphere of one Earth radius. The spherical law of
/// cosines gives the angle between zenith and body, from which elevation
/// and azimuth follow; the distance accounts for the observer's offset
/// from the geocenter.
///
/// When the geometry degenerates (body at the zenith, or observer at a
/// pole) every compass bearing is equally valid and the azimuth is
/// reported as 0.
pub fn azimuth_elevation(p: &Cartesian3, lon_deg: f64, lat_deg: f64) -> HorizontalCoordinates {
    let dec = p.dec_deg() * DEG2RAD;
    let (sdec, cdec) = dec.sin_cos();
    let (sz, cz) = (lat_deg * DEG2RAD).sin_cos();

    // Hour angle of the body relative to the observer's meridian,
    // normalized into (-180°, 180°] so the east/west mirror below works
    let mut pa = (lon_deg - p.ra_deg()) * DEG2RAD;
    while pa > std::f64::consts::PI {
        pa -= 2.0 * std::f64::consts::PI;
    }
    while pa <= -std::f64::consts::PI {
        pa += 2.0 * std::f64::consts::PI;
    }

    // Cosine of the zenith-to-body great-circle angle
    let csg = (cz * cdec * pa.cos() + sz * sdec).clamp(-1.0, 1.0);
    let sg = csg.acos().sin();

    // The observer is one Earth radius off the geocenter
    let geo_r = p.radius();
    let r = EARTH_RADIUS_AU / geo_r;
    let distance_au = geo_r * (1.0 + r * r - 2.0 * r * csg).sqrt();

    let elevation_deg =
        90.0 - ((geo_r * csg - EARTH_RADIUS_AU) / distance_au).clamp(-1.0, 1.0).acos() * RAD2DEG;

    let denom = cz * sg;
    let azimuth_deg = if denom.abs() < AZIMUTH_DEGENERACY {
        0.0
    } else {
        let az = ((sdec - sz * csg) / denom).clamp(-1.0, 1.0).acos() * RAD2DEG;
        // Bodies west of the meridian mirror to the western half-circle
        let az = if pa > 0.0 { 360.0 - az } else { az };
        az.rem_euclid(360.0)
    };

    HorizontalCoordinates {
        azimuth_deg,
        elevation_deg,
        distance_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A body directly overhead at the given observer position.
    fn overhead(lon_deg: f64, lat_deg: f64, radius: f64) -> Cartesian3 {
        Cartesian3::new(radius, 0.0, 0.0)
            .with_dec_deg(lat_deg)
            .with_ra_deg(lon_deg)
    }

    #[test]
    fn test_zenith_body_at_max_elevation() {
        let p = overhead(10.0, 45.0, 1.0);
        let h = azimuth_elevation(&p, 10.0, 45.0);
        assert_relative_eq!(h.elevation_deg, 90.0, epsilon = 1e-6);
        // Azimuth is undefined at the zenith; reported as 0
        assert_relative_eq!(h.azimuth_deg, 0.0);
        // Overhead distance is geocentric distance minus one Earth radius
        assert_relative_eq!(h.distance_au, 1.0 - EARTH_RADIUS_AU, epsilon = 1e-12);
    }

    #[test]
    fn test_antipodal_body_below_horizon() {
        let p = overhead(-170.0, -45.0, 1.0);
        let h = azimuth_elevation(&p, 10.0, 45.0);
        assert_relative_eq!(h.elevation_deg, -90.0, epsilon = 1e-6);
        assert_relative_eq!(h.distance_au, 1.0 + EARTH_RADIUS_AU, epsilon = 1e-12);
    }

    #[test]
    fn test_body_over_north_pole_bears_north() {
        // From the equator, a body over the north pole sits due north
        // on the horizon
        let p = overhead(0.0, 90.0, 1.0);
        let h = azimuth_elevation(&p, 20.0, 0.0);
        assert_relative_eq!(h.azimuth_deg, 0.0, epsilon = 1e-6);
        assert!(h.elevation_deg.abs() < 0.01, "elevation {}", h.elevation_deg);
    }

    #[test]
    fn test_east_west_symmetry() {
        // Mirroring the body across the observer's meridian mirrors the
        // azimuth about north and leaves the elevation unchanged
        let east = overhead(30.0, 20.0, 1.5);
        let west = overhead(-10.0, 20.0, 1.5);
        let he = azimuth_elevation(&east, 10.0, 50.0);
        let hw = azimuth_elevation(&west, 10.0, 50.0);
        assert_relative_eq!(he.elevation_deg, hw.elevation_deg, epsilon = 1e-9);
        assert_relative_eq!(he.azimuth_deg, 360.0 - hw.azimuth_deg, epsilon = 1e-9);
        // East of the meridian means an easterly bearing
        assert!(he.azimuth_deg < 180.0 && hw.azimuth_deg > 180.0);
    }

    #[test]
    fn test_azimuth_and_elevation_ranges() {
        let positions = [
            overhead(123.0, -67.0, 0.7),
            overhead(-45.0, 12.0, 5.2),
            overhead(179.0, 89.0, 30.0),
            overhead(0.0, 0.0, 0.3),
        ];
        for p in positions {
            let h = azimuth_elevation(&p, -43.2, 61.0);
            assert!(
                (0.0..360.0).contains(&h.azimuth_deg),
                "azimuth {}",
                h.azimuth_deg
            );
            assert!(
                (-90.0..=90.0).contains(&h.elevation_deg),
                "elevation {}",
                h.elevation_deg
            );
            assert!(h.distance_au > 0.0);
        }
    }

    #[test]
    fn test_polar_observer_azimuth_sentinel() {
        // At the pole every direction is south; azimuth degenerates to 0
        let p = overhead(50.0, 10.0, 1.0);
        let h = azimuth_elevation(&p, 0.0, 90.0);
        assert_relative_eq!(h.azimuth_deg, 0.0);
        // Elevation from the pole is just the declination (to within the
        // Earth-radius parallax)
        assert!((h.elevation_deg - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_distance_dominated_by_geocentric_radius() {
        // At planetary distances the Earth-radius correction is tiny
        let p = overhead(80.0, -30.0, 4.2);
        let h = azimuth_elevation(&p, 10.0, 45.0);
        assert!((h.distance_au - 4.2).abs() < 1e-3);
    }
}
