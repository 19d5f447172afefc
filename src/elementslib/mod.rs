//! Orbital element catalog for solar-system bodies
//!
//! Each body is described by six time-varying Keplerian elements, stored as
//! [`Polynomial`]s of days since the body's element epoch (constant term plus
//! linear rate), alongside descriptive mass and orbital period.
//!
//! The planetary polynomials are the standard J2000 mean elements with
//! per-century rates; the dwarf planets beyond Pluto carry fresher osculating
//! elements dated 2021-07-01 (JD 2459396.5).
//!
//! The catalog is read-only after construction. The process-wide
//! [`struct@STANDARD`] instance is built lazily exactly once and is safe under
//! concurrent first access; callers who prefer explicit ownership can build
//! their own with [`Catalog::standard`] and hand it to an
//! [`Ephemeris`](crate::planetlib::Ephemeris).

use lazy_static::lazy_static;
use serde::Serialize;

use crate::constants::{ASEC_PER_DEGREE, DAYS_PER_CENTURY, DAY_S, J2000};
use crate::polynomial::Polynomial;

/// Element epoch of the trans-Neptunian dwarf planets (2021-07-01)
const DWARF_EPOCH_JD: f64 = 2_459_396.5;

/// Time-varying Keplerian orbital elements for one body.
///
/// Angles are in degrees, the semi-major axis in AU; rates are per day.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis of the orbital ellipse (AU)
    pub semi_major_axis: Polynomial,
    /// Eccentricity of the orbit, in [0, 1)
    pub eccentricity: Polynomial,
    /// Inclination of the orbit to the ecliptic (degrees)
    pub inclination: Polynomial,
    /// Mean longitude of the body (degrees)
    pub mean_longitude: Polynomial,
    /// Longitude of the orbit's closest point to the Sun (degrees)
    pub longitude_of_perihelion: Polynomial,
    /// Longitude at which the orbit crosses the ecliptic northward (degrees)
    pub longitude_of_ascending_node: Polynomial,
}

/// The six elements evaluated at one instant.
#[derive(Debug, Clone, Copy)]
pub struct ElementSet {
    /// Semi-major axis (AU)
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination (degrees)
    pub i: f64,
    /// Mean longitude (degrees)
    pub l: f64,
    /// Longitude of perihelion (degrees)
    pub w: f64,
    /// Longitude of ascending node (degrees)
    pub node: f64,
}

impl OrbitalElements {
    /// Evaluate all six elements at `days` since the body's element epoch.
    pub fn at(&self, days: f64) -> ElementSet {
        ElementSet {
            a: self.semi_major_axis.at(days),
            e: self.eccentricity.at(days),
            i: self.inclination.at(days),
            l: self.mean_longitude.at(days),
            w: self.longitude_of_perihelion.at(days),
            node: self.longitude_of_ascending_node.at(days),
        }
    }
}

/// A solar-system body descriptor: identity, bulk properties, and elements.
///
/// The Sun is a degenerate body with no orbital elements; it carries the
/// `is_origin` capability flag instead, decided once at catalog construction
/// rather than by name comparison in the position pipeline. Earth carries
/// `emb_correction`: its mean elements describe the Earth-Moon barycentre,
/// which must be translated back to the Earth itself.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    /// Name of the body
    pub name: String,
    /// Mass in kilograms (descriptive only)
    pub mass_kg: f64,
    /// Orbital period in seconds (descriptive only)
    pub period_s: f64,
    /// Julian date of the element epoch
    pub epoch_jd: f64,
    /// This body defines the heliocentric origin (the Sun)
    pub is_origin: bool,
    /// Elements describe the Earth-Moon barycentre, not the body itself
    pub emb_correction: bool,
    /// Orbital elements; `None` only for the origin body
    #[serde(skip)]
    pub elements: Option<OrbitalElements>,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.3e} kg)", self.name, self.mass_kg)
    }
}

/// An ordered, read-only collection of body descriptors.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<Body>,
}

impl Catalog {
    /// Build a catalog from an explicit list of bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        Catalog { bodies }
    }

    /// Look a body up by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// All bodies, in catalog order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of bodies in the catalog.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The standard catalog: the Sun, the eight planets, and the dwarf
    /// planets Pluto, Ceres, Makemake, Haumea, and Eris.
    pub fn standard() -> Self {
        // Planetary rates are tabulated per Julian century (angles often in
        // arcseconds per century); convert everything to per-day here so the
        // polynomials take plain day offsets.
        const CY: f64 = DAYS_PER_CENTURY;
        const ASEC_CY: f64 = ASEC_PER_DEGREE * DAYS_PER_CENTURY;

        let mut bodies = Vec::new();

        bodies.push(Body {
            name: "Sun".to_string(),
            mass_kg: 1.98847e30,
            period_s: 0.0,
            epoch_jd: J2000,
            is_origin: true,
            emb_correction: false,
            elements: None,
        });

        bodies.push(Body {
            name: "Mercury".to_string(),
            mass_kg: 3.301e23,
            period_s: 7.6005216e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(0.38709893, 0.00000066 / CY),
                eccentricity: Polynomial::linear(0.20563069, 0.00002527 / CY),
                inclination: Polynomial::linear(7.00487, -23.51 / ASEC_CY),
                mean_longitude: Polynomial::linear(252.25084, 538_101_628.29 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(77.45645, 573.57 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(48.33167, -446.30 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Venus".to_string(),
            mass_kg: 4.869e24,
            period_s: 19.4141664e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(0.72333199, 0.00000092 / CY),
                eccentricity: Polynomial::linear(0.00677323, -0.00004938 / CY),
                inclination: Polynomial::linear(3.39471, -2.86 / ASEC_CY),
                mean_longitude: Polynomial::linear(181.97973, 210_664_136.06 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(131.53298, -108.80 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(76.68069, -996.89 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Earth".to_string(),
            mass_kg: 5.978e24,
            period_s: 31.5581184e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: true,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(1.00000011, -0.00000005 / CY),
                eccentricity: Polynomial::linear(0.01671022, -0.00003804 / CY),
                inclination: Polynomial::linear(0.00005, -46.94 / ASEC_CY),
                mean_longitude: Polynomial::linear(100.46435, 129_597_740.63 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(102.94719, 1198.28 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(-11.26064, -18_228.25 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Mars".to_string(),
            mass_kg: 6.420e23,
            period_s: 59.355072e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(1.52366231, -0.00007221 / CY),
                eccentricity: Polynomial::linear(0.09341233, 0.00011902 / CY),
                inclination: Polynomial::linear(1.85061, -25.47 / ASEC_CY),
                mean_longitude: Polynomial::linear(355.45332, 68_905_103.78 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(336.04084, 1560.78 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(49.57854, -1020.19 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Jupiter".to_string(),
            mass_kg: 1.899e27,
            period_s: 374.335776e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(5.20336301, 0.00060737 / CY),
                eccentricity: Polynomial::linear(0.04839266, -0.00012880 / CY),
                inclination: Polynomial::linear(1.30530, -4.15 / ASEC_CY),
                mean_longitude: Polynomial::linear(34.40438, 10_925_078.35 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(14.75385, 839.93 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(100.55615, 1217.17 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Saturn".to_string(),
            mass_kg: 5.685e26,
            period_s: 929.59488e6,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(9.53707032, -0.00301530 / CY),
                eccentricity: Polynomial::linear(0.05415060, -0.00036762 / CY),
                inclination: Polynomial::linear(2.48446, 6.11 / ASEC_CY),
                mean_longitude: Polynomial::linear(49.94432, 4_401_052.95 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(92.43194, -1948.89 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(113.71504, -1591.05 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Uranus".to_string(),
            mass_kg: 8.686e25,
            period_s: 2.651184e9,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(19.19126393, 0.00152025 / CY),
                eccentricity: Polynomial::linear(0.04716771, -0.00019150 / CY),
                inclination: Polynomial::linear(0.76986, -2.09 / ASEC_CY),
                mean_longitude: Polynomial::linear(313.23218, 1_542_547.79 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(170.96424, 1312.56 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(74.22988, -1681.40 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Neptune".to_string(),
            mass_kg: 1.025e26,
            period_s: 5.20043328e9,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(30.06896348, -0.00125196 / CY),
                eccentricity: Polynomial::linear(0.00858587, 0.0000251 / CY),
                inclination: Polynomial::linear(1.76917, -3.64 / ASEC_CY),
                mean_longitude: Polynomial::linear(304.88003, 786_449.21 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(44.97135, -844.43 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(131.72169, -151.25 / ASEC_CY),
            }),
        });

        // Dwarf planets

        bodies.push(Body {
            name: "Pluto".to_string(),
            mass_kg: 5.0e23,
            period_s: 7.81619328e9,
            epoch_jd: J2000,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::linear(39.48168677, -0.00076912 / CY),
                eccentricity: Polynomial::linear(0.24880766, 0.00006465 / CY),
                inclination: Polynomial::linear(17.14175, 11.07 / ASEC_CY),
                mean_longitude: Polynomial::linear(238.92881, 522_747.90 / ASEC_CY),
                longitude_of_perihelion: Polynomial::linear(224.06676, -132.25 / ASEC_CY),
                longitude_of_ascending_node: Polynomial::linear(110.30347, -37.33 / ASEC_CY),
            }),
        });

        bodies.push(Body {
            name: "Ceres".to_string(),
            mass_kg: 9.3835e20,
            period_s: 1680.0 * DAY_S,
            epoch_jd: DWARF_EPOCH_JD,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::constant(2.765655253487926),
                eccentricity: Polynomial::constant(0.07839201989374402),
                inclination: Polynomial::constant(10.58819557618916),
                mean_longitude: Polynomial::linear(247.5499723080229, 0.2142925185981219),
                longitude_of_perihelion: Polynomial::constant(73.73826765873966),
                longitude_of_ascending_node: Polynomial::constant(80.26763801181816),
            }),
        });

        bodies.push(Body {
            name: "Makemake".to_string(),
            mass_kg: 3.1e21,
            period_s: 111_429.107_792_93 * DAY_S,
            epoch_jd: DWARF_EPOCH_JD,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::constant(45.31759121068865),
                eccentricity: Polynomial::constant(0.1642751172211797),
                inclination: Polynomial::constant(28.99404015412712),
                mean_longitude: Polynomial::linear(166.6195793661593, 0.003230753679451443),
                longitude_of_perihelion: Polynomial::constant(294.9740979213105),
                longitude_of_ascending_node: Polynomial::constant(79.53649291791409),
            }),
        });

        bodies.push(Body {
            name: "Haumea".to_string(),
            mass_kg: 4.006e21,
            period_s: 103_186.294_791_520_1 * DAY_S,
            epoch_jd: DWARF_EPOCH_JD,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::constant(43.05422018169887),
                eccentricity: Polynomial::constant(0.1977572977729642),
                inclination: Polynomial::constant(28.21337546344851),
                mean_longitude: Polynomial::linear(218.5798852779577, 0.003488835418767116),
                longitude_of_perihelion: Polynomial::constant(239.3358522215767),
                longitude_of_ascending_node: Polynomial::constant(122.156974377769),
            }),
        });

        bodies.push(Body {
            name: "Eris".to_string(),
            mass_kg: 1.6466e22,
            period_s: 204_832.374_093_467_1 * DAY_S,
            epoch_jd: DWARF_EPOCH_JD,
            is_origin: false,
            emb_correction: false,
            elements: Some(OrbitalElements {
                semi_major_axis: Polynomial::constant(68.00384172219358),
                eccentricity: Polynomial::constant(0.4334678185404781),
                inclination: Polynomial::constant(43.90881494037654),
                mean_longitude: Polynomial::linear(206.8928917815872, 0.001757534674844556),
                longitude_of_perihelion: Polynomial::constant(151.446430148214),
                longitude_of_ascending_node: Polynomial::constant(36.00746756407726),
            }),
        });

        Catalog::new(bodies)
    }
}

lazy_static! {
    /// The process-wide standard catalog, constructed on first use.
    pub static ref STANDARD: Catalog = Catalog::standard();
}
