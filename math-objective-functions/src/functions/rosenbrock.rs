//! Rosenbrock test function

use crate::error::Result;
use crate::points::{Points, Scores, broadcast};

/// Constants of the Rosenbrock valley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosenbrockParams {
    /// Location of the minimum along every axis
    pub a: f64,
    /// Steepness of the valley walls
    pub b: f64,
}

impl Default for RosenbrockParams {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

/// Rosenbrock function (banana function) with the default constants a = 1, b = 100
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Points) -> Result<Scores> {
    rosenbrock_with(x, &RosenbrockParams::default())
}

/// Rosenbrock function - N-dimensional
/// f(x) = sum_{i=1}^{n-1} [b*(x_{i+1} - x_i^2)^2 + (a - x_i)^2]
/// Global minimum: f(x) = 0 at x = (a, a, ..., a)
///
/// A vector of dimension 1 has no consecutive pair and scores 0.
pub fn rosenbrock_with(x: &Points, params: &RosenbrockParams) -> Result<Scores> {
    let RosenbrockParams { a, b } = *params;
    broadcast("rosenbrock", x, |row| {
        row.iter()
            .zip(row.iter().skip(1))
            .map(|(&xi, &xi_plus_1)| b * (xi_plus_1 - xi.powi(2)).powi(2) + (a - xi).powi(2))
            .sum::<f64>()
    })
}
