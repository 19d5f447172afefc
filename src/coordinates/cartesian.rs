//! # Cartesian Coordinate System Module
//!
//! A 3D Cartesian point with a dual spherical view. Every pipeline stage
//! passes positions through this type: the ecliptic and equatorial stages
//! read and write the spherical angles, the vector stages operate on the
//! Cartesian components directly.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: toward the first point of Aries (RA = 0°, Dec = 0°)
//! - **Y-axis**: toward RA = 90°, Dec = 0°
//! - **Z-axis**: toward the north ecliptic/celestial pole (Dec = +90°)
//!
//! ## Spherical dual view
//!
//! The azimuthal angle ([`ra_deg`](Cartesian3::ra_deg)) and polar angle
//! ([`dec_deg`](Cartesian3::dec_deg)) are derived from the Cartesian
//! components on every read, so the two views can never fall out of sync.
//! The `with_*` transforms return new values rather than mutating in place:
//!
//! - [`with_ra_deg`](Cartesian3::with_ra_deg) rotates (x, y) about the Z
//!   axis, preserving the x-y projection magnitude and `z` exactly, so the
//!   radius and declination are unchanged.
//! - [`with_dec_deg`](Cartesian3::with_dec_deg) rescales all three
//!   components, preserving the total radius exactly, so the radius and
//!   right ascension are unchanged.

use nalgebra::Vector3;

use crate::constants::{DEG2RAD, RAD2DEG};

/// Three-dimensional Cartesian coordinate with spherical angle accessors.
///
/// Units are contextual: AU for positions, AU/day for velocities. The
/// spherical accessors always report angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian3 {
    /// X-component (toward the first point of Aries)
    pub x: f64,
    /// Y-component (toward RA = 90°)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The zero vector (coordinate origin).
    pub fn zero() -> Self {
        Cartesian3::default()
    }

    /// Magnitude of the vector: `sqrt(x² + y² + z²)`.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Magnitude of the projection onto the x-y plane.
    fn xy_magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle anticlockwise about the Z axis from the positive X axis,
    /// in degrees. Analogous to right ascension.
    ///
    /// The range is unconstrained; callers normalize to [0°, 360°) where
    /// they need to.
    pub fn ra_deg(&self) -> f64 {
        self.y.atan2(self.x) * RAD2DEG
    }

    /// Angle upward from the x-y plane (negative below it), in degrees.
    /// Analogous to declination.
    pub fn dec_deg(&self) -> f64 {
        self.z.atan2(self.xy_magnitude()) * RAD2DEG
    }

    /// Returns the vector rotated so its azimuthal angle equals `ra_deg`.
    ///
    /// The x-y projection magnitude and the z component are preserved, so
    /// the radius and declination are untouched.
    pub fn with_ra_deg(&self, ra_deg: f64) -> Self {
        let xym = self.xy_magnitude();
        let angle = ra_deg * DEG2RAD;
        Cartesian3 {
            x: xym * angle.cos(),
            y: xym * angle.sin(),
            z: self.z,
        }
    }

    /// Returns the vector tilted so its polar angle equals `dec_deg`.
    ///
    /// The total radius is preserved exactly: `z` is set from the new
    /// angle and the (x, y) pair is rescaled to match, rather than being
    /// recomputed from scratch, so the right ascension is untouched.
    ///
    /// A vector lying exactly on the Z axis has no defined right
    /// ascension; it is tilted into the x-z plane.
    pub fn with_dec_deg(&self, dec_deg: f64) -> Self {
        let r = self.radius();
        let angle = dec_deg * DEG2RAD;
        let xym = self.xy_magnitude();
        if xym == 0.0 {
            return Cartesian3 {
                x: r * angle.cos(),
                y: 0.0,
                z: r * angle.sin(),
            };
        }
        let xy_scale = r * angle.cos() / xym;
        Cartesian3 {
            x: self.x * xy_scale,
            y: self.y * xy_scale,
            z: r * angle.sin(),
        }
    }

    /// Converts to a nalgebra Vector3 for linear algebra operations.
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a coordinate from a nalgebra Vector3.
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{}) R={} RA={} Dec={}",
            self.x,
            self.y,
            self.z,
            self.radius(),
            self.ra_deg(),
            self.dec_deg()
        )
    }
}
