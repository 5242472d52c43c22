//! Search domains and known global minima of the objective functions.

use crate::error::{ObjectiveError, Result};
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Metadata for an objective function: search domain, global minimum and
/// other properties
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds (min, max) shared by every dimension
    pub domain: (f64, f64),
    /// Coordinate of the global minimum, repeated along every axis
    pub minimizer: f64,
    /// Function value at the global minimum
    pub minimum: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

impl FunctionMetadata {
    /// Bounds for each of `dim` dimensions.
    pub fn bounds(&self, dim: usize) -> Vec<(f64, f64)> {
        vec![self.domain; dim]
    }

    /// Location and value of the global minimum in `dim` dimensions.
    pub fn global_minimum(&self, dim: usize) -> (Array1<f64>, f64) {
        (Array1::from_elem(dim, self.minimizer), self.minimum)
    }
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Get metadata for all available objective functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let entries = [
        FunctionMetadata {
            name: "ackley".to_string(),
            domain: (-32.768, 32.768),
            minimizer: 0.0,
            minimum: 0.0,
            description: "Multimodal Ackley function with a nearly flat outer region".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "griewank".to_string(),
            domain: (-600.0, 600.0),
            minimizer: 0.0,
            minimum: 0.0,
            description: "Griewank function, many regularly spaced local minima".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "rastrigin".to_string(),
            domain: (-5.12, 5.12),
            minimizer: 0.0,
            minimum: 0.0,
            description: "Rastrigin function, cosine modulated sphere".to_string(),
            multimodal: true,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            domain: (-2.048, 2.048),
            minimizer: 1.0,
            minimum: 0.0,
            description: "Rosenbrock banana valley (a = 1, b = 100)".to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
        FunctionMetadata {
            name: "sphere".to_string(),
            domain: (-5.12, 5.12),
            minimizer: 0.0,
            minimum: 0.0,
            description: "Convex sum of squares".to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
    ];

    let metadata: HashMap<String, FunctionMetadata> = entries
        .into_iter()
        .map(|meta| (meta.name.clone(), meta))
        .collect();
    log::debug!("Loaded metadata for {} objective functions", metadata.len());
    metadata
}

/// Bounds for `dim` dimensions of the named function
pub fn get_function_bounds(function_name: &str, dim: usize) -> Result<Vec<(f64, f64)>> {
    get_function_metadata()
        .get(function_name)
        .map(|meta| meta.bounds(dim))
        .ok_or_else(|| ObjectiveError::NotFound {
            name: function_name.to_string(),
        })
}
