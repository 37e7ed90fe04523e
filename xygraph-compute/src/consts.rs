//! The constants exposed to expressions. Names are case-sensitive.

/// The circle constant.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;
