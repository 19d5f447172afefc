//! Nutation correction
//!
//! The Moon and Sun torque the Earth's equatorial bulge, making the pole
//! nod about its precessional path. Two periodic terms driven by the lunar
//! node and solar angles capture the bulk of the effect: the rotary
//! component goes straight into right ascension, while the nodding
//! component feeds the obliquity used by the equatorial conversion.

use crate::constants::{DEG2RAD, J2000};
use crate::coordinates::Cartesian3;

/// Apply the rotary nutation term to a position and return the nodding term.
///
/// With d = days since J2000 the node angles are `a1 = 125° - 0.05295·d`
/// and `a2 = 200.9° + 1.97129·d`. The returned declination component
/// `de = 0.0026·cos(a1) + 0.0002·cos(a2)` is *not* added to the
/// declination here; it belongs in the obliquity of
/// [`ecliptic_to_equatorial`](crate::earthlib::ecliptic_to_equatorial).
pub fn nutate(p: Cartesian3, jd: f64) -> (Cartesian3, f64) {
    let d = jd - J2000;
    let a1 = (125.0 - 0.05295 * d) * DEG2RAD;
    let a2 = (200.9 + 1.97129 * d) * DEG2RAD;

    let dp = -0.0048 * a1.sin() - 0.0004 * a2.sin();
    let de = 0.0026 * a1.cos() + 0.0002 * a2.cos();

    (p.with_ra_deg(p.ra_deg() + dp), de)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nutation_magnitudes() {
        // Both components stay within their coefficient sums
        for offset in [0.0, 100.0, 1000.0, 10_000.0] {
            let p = Cartesian3::new(0.5, 0.5, 0.1);
            let (nutated, de) = nutate(p, J2000 + offset);
            let dp = nutated.ra_deg() - p.ra_deg();
            assert!(dp.abs() <= 0.0052 + 1e-12, "dp {} at {}", dp, offset);
            assert!(de.abs() <= 0.0028 + 1e-12, "de {} at {}", de, offset);
        }
    }

    #[test]
    fn test_nutation_leaves_declination() {
        let p = Cartesian3::new(0.5, 0.5, 0.1);
        let (nutated, _) = nutate(p, J2000 + 5000.0);
        assert_relative_eq!(nutated.dec_deg(), p.dec_deg(), epsilon = 1e-12);
        assert_relative_eq!(nutated.radius(), p.radius(), epsilon = 1e-14);
    }

    #[test]
    fn test_nutation_at_j2000() {
        // d = 0: a1 = 125°, a2 = 200.9°
        let p = Cartesian3::new(1.0, 0.0, 0.0);
        let (nutated, de) = nutate(p, J2000);
        let expected_dp =
            -0.0048 * (125.0 * DEG2RAD).sin() - 0.0004 * (200.9 * DEG2RAD).sin();
        let expected_de = 0.0026 * (125.0 * DEG2RAD).cos() + 0.0002 * (200.9 * DEG2RAD).cos();
        assert_relative_eq!(nutated.ra_deg(), expected_dp, epsilon = 1e-10);
        assert_relative_eq!(de, expected_de, epsilon = 1e-14);
    }
}
