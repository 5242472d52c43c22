//! Sphere test function

use crate::error::Result;
use crate::points::{Points, Scores, broadcast};

/// Sphere function - N-dimensional, unimodal, convex
/// f(x) = sum(x_i^2)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Points) -> Result<Scores> {
    broadcast("sphere", x, |row| row.iter().map(|&xi| xi.powi(2)).sum::<f64>())
}
