//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in meters (per IAU 2012 Resolution B2)
pub const AU_M: f64 = 149_597_870_700.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// J2000.0 epoch as Julian date (2000-01-01T12:00:00 UTC)
pub const J2000: f64 = 2_451_545.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Angles
/// Arcseconds per degree
pub const ASEC_PER_DEGREE: f64 = 3_600.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Physics
/// Gaussian gravitational constant, scales orbital-plane velocities (rad/day)
pub const GAUSS_K: f64 = 0.0172021;
/// Speed of light in AU/day, used for light-time aberration
pub const C_AUDAY: f64 = 173.1446;

// Earth constants
/// Earth's mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// Earth's mean radius in AU
pub const EARTH_RADIUS_AU: f64 = EARTH_RADIUS_M / AU_M;
