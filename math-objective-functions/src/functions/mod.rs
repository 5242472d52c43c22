//! Objective function implementations, one module per function.

pub mod ackley;
pub mod griewank;
pub mod rastrigin;
pub mod rosenbrock;
pub mod sphere;

pub use ackley::{AckleyParams, ackley, ackley_with};
pub use griewank::griewank;
pub use rastrigin::rastrigin;
pub use rosenbrock::{RosenbrockParams, rosenbrock, rosenbrock_with};
pub use sphere::sphere;
