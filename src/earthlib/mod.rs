//! Earth orientation: obliquity, equatorial conversion, Greenwich meridian
//!
//! Three awkward facts about the Earth live here. Its equator is inclined
//! ~23.44° to the ecliptic (and the angle is shrinking by 0.013° per
//! century), so ecliptic coordinates must be rotated about the line to the
//! first point of Aries to become equatorial. Its rotation continuously
//! sweeps the Greenwich meridian across the star sphere, so equatorial
//! right ascension must be rebased against the meridian's RA to obtain an
//! Earth-fixed longitude.

use crate::constants::{DAYS_PER_CENTURY, DEG2RAD, J2000, RAD2DEG};
use crate::coordinates::Cartesian3;

/// Julian-day base of the Greenwich meridian polynomial (1899-12-31 noon)
const MERIDIAN_EPOCH_JD: f64 = 2_415_020.0;

/// Obliquity of the Earth's equator to the ecliptic, in degrees.
///
/// `23.4393° - 0.0130°·T` with T in Julian centuries since J2000, plus the
/// nutation nodding term `de` from [`nutate`](crate::nutationlib::nutate).
pub fn obliquity_deg(jd: f64, de: f64) -> f64 {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    23.4393 - 0.0130 * t + de
}

/// Rotate geocentric ecliptic coordinates into equatorial coordinates.
///
/// Standard spherical rotation about the Aries axis by the obliquity:
/// declination comes out of an `asin`, right ascension out of an `atan2`,
/// so the caller is responsible for normalizing RA into [0°, 360°).
pub fn ecliptic_to_equatorial(p: Cartesian3, jd: f64, de: f64) -> Cartesian3 {
    let ra = p.ra_deg() * DEG2RAD;
    let dec = p.dec_deg() * DEG2RAD;
    let (sra, cra) = ra.sin_cos();
    let (sdec, cdec) = dec.sin_cos();
    let (so, co) = (obliquity_deg(jd, de) * DEG2RAD).sin_cos();

    let dec_eq = (cdec * sra * so + sdec * co).asin();
    let ra_eq = (cdec * sra * co - sdec * so).atan2(cdec * cra);

    p.with_dec_deg(dec_eq * RAD2DEG).with_ra_deg(ra_eq * RAD2DEG)
}

/// Right ascension of the Greenwich meridian at a Julian date, in degrees.
///
/// The polynomial gives the meridian RA at 0h UT on the chosen day with
/// `Tc = (floor(jd) - 2415020 + 0.5) / 36525` centuries; the time-of-day
/// portion of the date then adds 0.25068447°/minute of Earth rotation.
/// The result is normalized to one revolution.
pub fn meridian_ra_deg(jd: f64) -> f64 {
    let tc = (jd.floor() - MERIDIAN_EPOCH_JD + 0.5) / DAYS_PER_CENTURY;
    let mut ra = 99.6909833 + 36_000.7689 * tc + 0.00038708 * tc * tc;
    ra += 0.25068447 * 60.0 * 24.0 * (jd - jd.floor() + 0.5);
    ra % 360.0
}

/// Rebase an equatorial position's RA against the Greenwich meridian.
///
/// The result's azimuthal angle is the astronomical longitude of the point
/// on Earth for which the body is directly overhead, in degrees east of
/// Greenwich.
pub fn to_greenwich(p: Cartesian3, jd: f64) -> Cartesian3 {
    p.with_ra_deg(p.ra_deg() - meridian_ra_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_obliquity_at_j2000() {
        assert_relative_eq!(obliquity_deg(J2000, 0.0), 23.4393);
        // Nutation term feeds straight through
        assert_relative_eq!(obliquity_deg(J2000, 0.002), 23.4413);
    }

    #[test]
    fn test_equatorial_identity_on_aries_axis() {
        // A position on the Aries axis is invariant under the rotation
        let p = Cartesian3::new(1.0, 0.0, 0.0);
        let eq = ecliptic_to_equatorial(p, J2000, 0.0);
        assert_relative_eq!(eq.ra_deg(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(eq.dec_deg(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_equatorial_tilts_ecliptic_pole() {
        // The north ecliptic pole sits at Dec = 90° - obliquity
        let p = Cartesian3::new(0.0, 0.0, 1.0);
        let eq = ecliptic_to_equatorial(p, J2000, 0.0);
        assert_relative_eq!(eq.dec_deg(), 90.0 - 23.4393, epsilon = 1e-8);
    }

    #[test]
    fn test_equatorial_preserves_radius() {
        let p = Cartesian3::new(0.3, 0.8, -0.2);
        let eq = ecliptic_to_equatorial(p, J2000 + 777.0, 0.001);
        assert_relative_eq!(eq.radius(), p.radius(), epsilon = 1e-12);
    }

    #[test]
    fn test_ecliptic_longitude_90_maps_to_solstice() {
        // Ecliptic longitude 90° is the June solstice point:
        // RA 90°, Dec = +obliquity
        let p = Cartesian3::new(0.0, 1.0, 0.0);
        let eq = ecliptic_to_equatorial(p, J2000, 0.0);
        assert_relative_eq!(eq.ra_deg(), 90.0, epsilon = 1e-8);
        assert_relative_eq!(eq.dec_deg(), 23.4393, epsilon = 1e-8);
    }

    #[test]
    fn test_meridian_ra_range() {
        for jd in [J2000, J2000 + 0.3, J2000 + 123.456, 2_459_396.5] {
            let ra = meridian_ra_deg(jd);
            assert!((0.0..360.0).contains(&ra), "meridian RA {} at {}", ra, jd);
        }
    }

    #[test]
    fn test_meridian_advances_360_per_sidereal_day() {
        // One solar day advances the meridian RA by ~360.9856 degrees,
        // i.e. ~0.9856 degrees net after the full revolution
        let ra0 = meridian_ra_deg(J2000);
        let ra1 = meridian_ra_deg(J2000 + 1.0);
        let net = (ra1 - ra0).rem_euclid(360.0);
        assert!((net - 0.9856).abs() < 0.01, "net advance {}", net);
    }

    #[test]
    fn test_meridian_ra_at_j2000() {
        // GMST at 2000-01-01 12:00 UT is ~18.697 hours = ~280.46 degrees;
        // the floor-based day split costs about a degree of accuracy
        let ra = meridian_ra_deg(J2000);
        assert!((ra - 280.46).abs() < 2.0, "meridian RA {}", ra);
    }

    #[test]
    fn test_to_greenwich_shifts_ra_only() {
        let p = Cartesian3::new(0.3, 0.8, -0.2);
        let g = to_greenwich(p, J2000);
        assert_relative_eq!(g.dec_deg(), p.dec_deg(), epsilon = 1e-12);
        assert_relative_eq!(g.radius(), p.radius(), epsilon = 1e-12);
        let expected = (p.ra_deg() - meridian_ra_deg(J2000)).rem_euclid(360.0);
        assert_relative_eq!(g.ra_deg().rem_euclid(360.0), expected, epsilon = 1e-10);
    }
}
