//! Precession correction
//!
//! The Earth's polar axis draws out a cone about the ecliptic pole once
//! every ~25,800 years (about 50.2 arcseconds per year), so coordinates
//! referred to the equinox of date drift away from the J2000 frame. This
//! module applies the secular correction to a geocentric ecliptic position
//! before it is rotated into equatorial coordinates.

use crate::constants::{DAYS_PER_CENTURY, DEG2RAD, J2000};
use crate::coordinates::Cartesian3;

/// Apply precession to a geocentric position for the given Julian date.
///
/// With T in Julian centuries since J2000 the correction angles are
/// `a = 1.397·T`, `b = 0.0131·T`, `c = 5.1236 + 0.2416·T` degrees; the
/// declination shifts by `b·sin(RA + c)` and the right ascension by
/// `a - b·cos(RA + c)·tan(Dec)`, the tangent taken at the already-shifted
/// declination.
pub fn precess(p: Cartesian3, jd: f64) -> Cartesian3 {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let a = 1.397 * t;
    let b = 0.0131 * t;
    let c = 5.1236 + 0.2416 * t;

    let ra_c = (p.ra_deg() + c) * DEG2RAD;
    let p = p.with_dec_deg(p.dec_deg() + b * ra_c.sin());
    p.with_ra_deg(p.ra_deg() + a - b * ra_c.cos() * (p.dec_deg() * DEG2RAD).tan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_precession_identity_at_j2000() {
        let p = Cartesian3::new(0.4, 0.7, 0.2);
        let precessed = precess(p, J2000);
        assert_relative_eq!(precessed.ra_deg(), p.ra_deg(), epsilon = 1e-12);
        assert_relative_eq!(precessed.dec_deg(), p.dec_deg(), epsilon = 1e-12);
    }

    #[test]
    fn test_precession_preserves_radius() {
        let p = Cartesian3::new(0.4, 0.7, 0.2);
        let precessed = precess(p, J2000 + 10.0 * DAYS_PER_CENTURY / 10.0);
        assert_relative_eq!(precessed.radius(), p.radius(), epsilon = 1e-12);
    }

    #[test]
    fn test_precession_rate_one_century() {
        // Over a century the RA of an equatorial position drifts by
        // roughly the `a` term, 1.397 degrees.
        let p = Cartesian3::new(1.0, 0.0, 0.0);
        let precessed = precess(p, J2000 + DAYS_PER_CENTURY);
        let drift = precessed.ra_deg() - p.ra_deg();
        assert!((drift - 1.397).abs() < 0.05, "RA drift {}", drift);
    }
}
