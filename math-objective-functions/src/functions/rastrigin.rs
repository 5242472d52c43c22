//! Rastrigin test function

use crate::error::Result;
use crate::points::{Points, Scores, broadcast};
use std::f64::consts::PI;

/// Rastrigin function - N-dimensional, highly multimodal
/// f(x) = 10*n + sum(x_i^2 - 10*cos(2*pi*x_i))
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
///
/// n is the length of one vector, for a single vector and for a batch alike.
pub fn rastrigin(x: &Points) -> Result<Scores> {
    let n = x.dim() as f64;
    broadcast("rastrigin", x, |row| {
        10.0 * n
            + row
                .iter()
                .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
                .sum::<f64>()
    })
}
