//! Ackley test function

use crate::error::Result;
use crate::points::{Points, Scores, broadcast};

/// Constants of the Ackley function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckleyParams {
    /// Depth of the outer exponential well
    pub a: f64,
    /// Decay rate of the outer well
    pub b: f64,
    /// Frequency of the cosine ripples
    pub c: f64,
}

impl Default for AckleyParams {
    fn default() -> Self {
        Self {
            a: 20.0,
            b: 0.2,
            c: 2.0 * std::f64::consts::PI,
        }
    }
}

/// Ackley function with the default constants a = 20, b = 0.2, c = 2*pi
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Points) -> Result<Scores> {
    ackley_with(x, &AckleyParams::default())
}

/// Ackley function - N-dimensional multimodal
/// f(x) = -a*exp(-b*sqrt(sum(x_i^2)/n)) - exp(sum(cos(c*x_i))/n) + a + e
pub fn ackley_with(x: &Points, params: &AckleyParams) -> Result<Scores> {
    let AckleyParams { a, b, c } = *params;
    let n = x.dim() as f64;
    broadcast("ackley", x, |row| {
        let sum_sq: f64 = row.iter().map(|&xi| xi.powi(2)).sum();
        let sum_cos: f64 = row.iter().map(|&xi| (c * xi).cos()).sum();

        -a * (-b * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + a + std::f64::consts::E
    })
}
