//! Two-body Keplerian orbit evaluation
//!
//! Turns a body's orbital elements at an instant into a heliocentric
//! ecliptic state vector. The chain is:
//!
//! ```text
//! elements -> eccentric anomaly -> orbital-plane x,y,u,v -> ecliptic XYZ
//! ```
//!
//! The eccentric anomaly is the angle at the *centre* of the elliptical
//! orbit between the body and the perihelion direction, not the angle at
//! the Sun. It has no closed form in time, so Kepler's equation
//! `E - e·sin(E) = M` is solved with a Newton-Raphson iteration.

use log::{debug, trace};
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::constants::{DAYS_PER_CENTURY, DEG2RAD, GAUSS_K, J2000, RAD2DEG};
use crate::elementslib::Body;
use crate::{Result, SkytrackError};

/// Convergence threshold for the Newton-Raphson update, in radians
const KEPLER_TOLERANCE: f64 = 1.0e-14;

/// Hard cap on solver iterations; exceeding it is a reported failure,
/// never a silently poorly-converged answer
const KEPLER_MAX_ITERATIONS: usize = 100;

/// Amplitude of the Earth-Moon barycentre offset in AU
const EMB_AMPLITUDE_AU: f64 = 0.0000312;

/// Solve Kepler's equation for the eccentric anomaly, in degrees.
///
/// # Arguments
/// * `mean_longitude_deg` - Mean longitude L of the body (degrees)
/// * `perihelion_longitude_deg` - Longitude of perihelion w (degrees)
/// * `eccentricity` - Orbital eccentricity e, in [0, 1)
///
/// The mean anomaly `M = (L - w) mod 360°` seeds the iteration at
/// `E0 = M + e·sin(M)`, and each step applies
/// `E <- E - (E - e·sin(E) - M) / (1 - e·cos(E))` until the update falls
/// below 1e-14 radians. Convergence is guaranteed for e < 1, but the loop
/// is still capped at 100 iterations and failure to converge surfaces as
/// [`SkytrackError::Convergence`] so pathological inputs cannot hang the
/// caller.
pub fn eccentric_anomaly(
    mean_longitude_deg: f64,
    perihelion_longitude_deg: f64,
    eccentricity: f64,
) -> Result<f64> {
    let m = ((mean_longitude_deg - perihelion_longitude_deg) * DEG2RAD) % (2.0 * PI);

    let mut ea = m + eccentricity * m.sin();
    for iteration in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ea - eccentricity * ea.sin() - m) / (1.0 - eccentricity * ea.cos());
        ea -= delta;
        if delta.abs() <= KEPLER_TOLERANCE {
            trace!("Kepler solver converged after {} iterations", iteration + 1);
            return Ok(ea * RAD2DEG);
        }
    }

    debug!(
        "Kepler solver exhausted {} iterations (e={}, M={})",
        KEPLER_MAX_ITERATIONS, eccentricity, m
    );
    Err(SkytrackError::Convergence {
        iterations: KEPLER_MAX_ITERATIONS,
        eccentricity,
        mean_anomaly_rad: m,
    })
}

/// Position and velocity within the plane of the orbit.
///
/// The X axis points from the Sun toward perihelion, the Y axis 90° further
/// around the orbit as viewed from above the north pole.
#[derive(Debug, Clone, Copy)]
pub struct PlaneState {
    /// X coordinate in the orbital plane (AU)
    pub x: f64,
    /// Y coordinate in the orbital plane (AU)
    pub y: f64,
    /// Velocity component along the plane X axis (AU/day)
    pub u: f64,
    /// Velocity component along the plane Y axis (AU/day)
    pub v: f64,
    /// Radial distance from the Sun (AU)
    pub r: f64,
}

/// Locate a body within the plane of its own orbit.
///
/// Position follows `x = a(cos E - e)`, `y = a·sqrt(1-e²)·sin E`, which
/// already translates the origin from the ellipse centre to the Sun.
/// Velocity components are scaled by the Gaussian gravitational constant
/// and are what the aberration correction later consumes.
pub fn orbital_plane_state(
    semi_major_axis: f64,
    eccentricity: f64,
    eccentric_anomaly_deg: f64,
) -> PlaneState {
    let ea = eccentric_anomaly_deg * DEG2RAD;
    let (sin_ea, cos_ea) = ea.sin_cos();
    let one_minus_e2 = 1.0 - eccentricity * eccentricity;

    let x = semi_major_axis * (cos_ea - eccentricity);
    let y = semi_major_axis * one_minus_e2.sqrt() * sin_ea;
    let r = (x * x + y * y).sqrt();

    let u = -GAUSS_K * semi_major_axis.sqrt() * sin_ea / r;
    let v = GAUSS_K * (semi_major_axis * one_minus_e2).sqrt() * cos_ea / r;

    PlaneState { x, y, u, v, r }
}

/// Rotate an in-plane vector into heliocentric ecliptic coordinates.
///
/// Three rotations compose: by `(w - W)` within the orbital plane, by the
/// inclination `i` about the ascending-node line, and by `W` about the
/// ecliptic pole. The same rotation serves position and velocity alike:
/// substitute (u, v) for (x, y).
///
/// # Arguments
/// * `x`, `y` - In-plane components (position AU or velocity AU/day)
/// * `node_deg` - Longitude of ascending node W (degrees)
/// * `perihelion_deg` - Longitude of perihelion w (degrees)
/// * `inclination_deg` - Inclination to the ecliptic i (degrees)
pub fn rotate_to_ecliptic(
    x: f64,
    y: f64,
    node_deg: f64,
    perihelion_deg: f64,
    inclination_deg: f64,
) -> Vector3<f64> {
    let (sw, cw) = ((perihelion_deg - node_deg) * DEG2RAD).sin_cos();
    let (s_node, c_node) = (node_deg * DEG2RAD).sin_cos();
    let (si, ci) = (inclination_deg * DEG2RAD).sin_cos();

    let xw = x * cw - y * sw;
    let yw = x * sw + y * cw;

    Vector3::new(
        xw * c_node - yw * s_node * ci,
        xw * s_node + yw * c_node * ci,
        yw * si,
    )
}

/// Offset of the Earth-Moon barycentre from the Earth itself, in AU.
///
/// The Earth's mean elements actually track the barycentre; subtracting
/// this vector recovers the position of the Earth for the ground observer.
/// The phase is `H = 218° + 481268°·T` with T in Julian centuries since
/// J2000.
pub fn emb_offset(jd: f64) -> Vector3<f64> {
    let h = (218.0 + 481_268.0 * (jd - J2000) / DAYS_PER_CENTURY) * DEG2RAD;
    Vector3::new(EMB_AMPLITUDE_AU * h.cos(), EMB_AMPLITUDE_AU * h.sin(), 0.0)
}

/// A body's heliocentric ecliptic position (AU) and velocity (AU/day).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricState {
    /// Position in AU
    pub position: Vector3<f64>,
    /// Velocity in AU/day
    pub velocity: Vector3<f64>,
}

impl HeliocentricState {
    /// The state of the coordinate origin: at rest at (0, 0, 0).
    pub fn origin() -> Self {
        HeliocentricState {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }
}

/// Compute a body's heliocentric ecliptic state at a Julian date.
///
/// The origin body (the Sun) is the zero state by definition. For every
/// other body the orbital elements are evaluated at `jd - epoch`, the
/// eccentric anomaly solved, and the in-plane state rotated into ecliptic
/// coordinates; bodies flagged with `emb_correction` (Earth) additionally
/// have the barycentre offset removed from their position.
pub fn heliocentric_state(body: &Body, jd: f64) -> Result<HeliocentricState> {
    if body.is_origin {
        return Ok(HeliocentricState::origin());
    }

    let elements = body
        .elements
        .as_ref()
        .ok_or_else(|| SkytrackError::MissingElements(body.name.clone()))?;

    let el = elements.at(jd - body.epoch_jd);
    let ea = eccentric_anomaly(el.l, el.w, el.e)?;
    let plane = orbital_plane_state(el.a, el.e, ea);

    let mut position = rotate_to_ecliptic(plane.x, plane.y, el.node, el.w, el.i);
    if body.emb_correction {
        position -= emb_offset(jd);
    }
    let velocity = rotate_to_ecliptic(plane.u, plane.v, el.node, el.w, el.i);

    trace!(
        "{} heliocentric at JD {}: r={:.6} AU",
        body.name,
        jd,
        position.norm()
    );
    Ok(HeliocentricState { position, velocity })
}
