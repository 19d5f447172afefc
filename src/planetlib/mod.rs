//! The full ephemeris pipeline
//!
//! [`Ephemeris`] owns a body catalog and strings the coordinate stages
//! together: heliocentric states for the body and the Earth, geocentric
//! ecliptic with aberration, precession and nutation, equatorial,
//! Greenwich-fixed, and finally the observer's horizontal frame. The
//! free [`find`] function is the one-call entry point over the shared
//! standard catalog.

use log::debug;

use crate::coordinates::Cartesian3;
use crate::earthlib::{ecliptic_to_equatorial, to_greenwich};
use crate::elementslib::{Body, Catalog, STANDARD};
use crate::keplerlib::heliocentric_state;
use crate::nutationlib::nutate;
use crate::positions::{geocentric_ecliptic, BodyLocation};
use crate::precessionlib::precess;
use crate::toposlib::azimuth_elevation;
use crate::{Result, SkytrackError};

/// An ephemeris engine over a specific body catalog.
///
/// Holds the catalog by value, so callers who need a custom element set
/// construct their own; everyone else goes through [`find`], which uses
/// the built-in [`STANDARD`] catalog.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    catalog: Catalog,
}

impl Ephemeris {
    /// Build an ephemeris over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Ephemeris { catalog }
    }

    /// Build an ephemeris over a copy of the standard catalog.
    pub fn standard() -> Self {
        Ephemeris {
            catalog: STANDARD.clone(),
        }
    }

    /// The catalog this ephemeris computes against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look a body up by case-insensitive name, or fail with
    /// [`SkytrackError::BodyNotFound`].
    fn resolve(&self, body_name: &str) -> Result<&Body> {
        self.catalog
            .find(body_name)
            .ok_or_else(|| SkytrackError::BodyNotFound(body_name.to_string()))
    }

    /// Geocentric apparent equatorial position of a named body.
    ///
    /// Runs the pipeline as far as equatorial RA/Dec: geocentric ecliptic
    /// with light-time aberration, precession, nutation, and the
    /// obliquity rotation. The result's RA is normalized into [0°, 360°).
    pub fn radec(&self, body_name: &str, jd: f64) -> Result<Cartesian3> {
        self.body_radec(self.resolve(body_name)?, jd)
    }

    fn body_radec(&self, body: &Body, jd: f64) -> Result<Cartesian3> {
        let earth = self.resolve("Earth")?;

        let body_state = heliocentric_state(body, jd)?;
        let earth_state = heliocentric_state(earth, jd)?;

        let geo = geocentric_ecliptic(&body_state, &earth_state, true);
        debug!("{} geocentric ecliptic: {}", body.name, geo);

        let geo = precess(geo, jd);
        let (geo, de) = nutate(geo, jd);
        let eq = ecliptic_to_equatorial(geo, jd, de);
        debug!("{} equatorial: {}", body.name, eq);

        Ok(eq.with_ra_deg(eq.ra_deg().rem_euclid(360.0)))
    }

    /// Locate a named body in the sky for a ground observer.
    ///
    /// `observer_lon_deg` is degrees east of Greenwich,
    /// `observer_lat_deg` degrees north of the equator. Returns the full
    /// [`BodyLocation`] record: equatorial RA/Dec, sub-body longitude,
    /// and the observer's azimuth, elevation, and distance.
    pub fn find(
        &self,
        body_name: &str,
        jd: f64,
        observer_lon_deg: f64,
        observer_lat_deg: f64,
    ) -> Result<BodyLocation> {
        let body = self.resolve(body_name)?;
        let radec = self.body_radec(body, jd)?;

        let greenwich = to_greenwich(radec, jd);
        let horizontal = azimuth_elevation(&greenwich, observer_lon_deg, observer_lat_deg);
        debug!(
            "{} az={:.3} el={:.3} dist={:.6}",
            body.name, horizontal.azimuth_deg, horizontal.elevation_deg, horizontal.distance_au
        );

        Ok(BodyLocation {
            body: body.name.clone(),
            julian_date: jd,
            right_ascension: radec.ra_deg(),
            declination: radec.dec_deg(),
            longitude: greenwich.ra_deg(),
            azimuth: horizontal.azimuth_deg,
            elevation: horizontal.elevation_deg,
            distance: horizontal.distance_au,
        })
    }
}

/// Locate a body using the standard catalog.
///
/// The one-call entry point; see [`Ephemeris::find`] for the parameter
/// conventions.
pub fn find(
    body_name: &str,
    jd: f64,
    observer_lon_deg: f64,
    observer_lat_deg: f64,
) -> Result<BodyLocation> {
    let ephemeris = Ephemeris::new(STANDARD.clone());
    ephemeris.find(body_name, jd, observer_lon_deg, observer_lat_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;

    #[test]
    fn test_unknown_body_is_an_error() {
        let err = find("Vulcan", J2000, 0.0, 51.5).unwrap_err();
        assert!(matches!(err, SkytrackError::BodyNotFound(name) if name == "Vulcan"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let upper = find("MARS", J2000, 0.0, 51.5).unwrap();
        let lower = find("mars", J2000, 0.0, 51.5).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.body, "Mars");
    }

    #[test]
    fn test_radec_in_range() {
        let ephemeris = Ephemeris::standard();
        for name in ["Sun", "Mercury", "Venus", "Mars", "Jupiter", "Pluto"] {
            let p = ephemeris.radec(name, J2000 + 1234.5).unwrap();
            assert!(
                (0.0..360.0).contains(&p.ra_deg()),
                "{} RA {}",
                name,
                p.ra_deg()
            );
            assert!(
                (-90.0..=90.0).contains(&p.dec_deg()),
                "{} Dec {}",
                name,
                p.dec_deg()
            );
        }
    }

    #[test]
    fn test_custom_catalog() {
        // An ephemeris over a subset catalog only finds the bodies it holds
        let full = Catalog::standard();
        let subset = Catalog::new(
            full.bodies()
                .iter()
                .filter(|b| ["Sun", "Earth", "Mars"].contains(&b.name.as_str()))
                .cloned()
                .collect(),
        );
        let ephemeris = Ephemeris::new(subset);
        assert!(ephemeris.find("Mars", J2000, 0.0, 0.0).is_ok());
        assert!(matches!(
            ephemeris.find("Jupiter", J2000, 0.0, 0.0),
            Err(SkytrackError::BodyNotFound(_))
        ));
    }
}
