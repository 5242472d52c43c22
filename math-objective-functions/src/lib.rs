#![doc = include_str!("../README.md")]

pub mod error;
pub mod functions;
pub mod metadata;
pub mod points;
pub mod registry;

pub use error::{ObjectiveError, Result};
pub use functions::*;
pub use metadata::{FunctionMetadata, create_bounds, get_function_bounds, get_function_metadata};
pub use points::{Points, Scores};
pub use registry::{FunctionRegistry, ObjectiveFn, registry};
