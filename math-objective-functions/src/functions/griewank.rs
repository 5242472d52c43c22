//! Griewank test function

use crate::error::Result;
use crate::points::{Points, Scores, broadcast};

/// Griewank function - multimodal, challenging for large dimensions
/// f(x) = 1 + sum(x_i^2)/4000 - prod(cos(x_i/sqrt(i))), i = 1..n
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Points) -> Result<Scores> {
    broadcast("griewank", x, |row| {
        let sum_squares: f64 = row.iter().map(|&xi| xi.powi(2)).sum();
        let product_cos: f64 = row
            .iter()
            .enumerate()
            .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
            .product();
        1.0 + sum_squares / 4000.0 - product_cos
    })
}
