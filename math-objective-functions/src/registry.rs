//! Function registry mapping canonical names to objective functions
use crate::error::{ObjectiveError, Result};
use crate::functions::*;
use crate::points::{Points, Scores};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Objective function type definition, evaluated with default constants
pub type ObjectiveFn = fn(&Points) -> Result<Scores>;

/// Function registry mapping names to actual function pointers.
pub struct FunctionRegistry {
    functions: HashMap<&'static str, ObjectiveFn>,
}

impl FunctionRegistry {
    /// Creates a new registry with all objective functions.
    pub fn new() -> Self {
        let mut functions = HashMap::new();

        // Unimodal functions
        functions.insert("sphere", sphere as ObjectiveFn);
        functions.insert("rosenbrock", rosenbrock as ObjectiveFn);

        // Multimodal functions
        functions.insert("rastrigin", rastrigin as ObjectiveFn);
        functions.insert("ackley", ackley as ObjectiveFn);
        functions.insert("griewank", griewank as ObjectiveFn);

        log::debug!("Registered {} objective functions", functions.len());
        Self { functions }
    }

    /// Gets an objective function by name.
    ///
    /// Unknown names fail with [`ObjectiveError::NotFound`]; there is no
    /// fallback function.
    pub fn get(&self, name: &str) -> Result<ObjectiveFn> {
        self.functions.get(name).copied().ok_or_else(|| {
            log::debug!("No objective function registered as '{}'", name);
            ObjectiveError::NotFound {
                name: name.to_string(),
            }
        })
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Looks up `name` and evaluates it at `x`.
    pub fn evaluate(&self, name: &str, x: &Points) -> Result<Scores> {
        let function = self.get(name)?;
        function(x)
    }

    /// Lists all available function names, sorted alphabetically.
    pub fn list_functions(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns an iterator over all (name, function) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ObjectiveFn)> + '_ {
        self.functions.iter().map(|(&name, &function)| (name, function))
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static FUNCTION_REGISTRY: LazyLock<FunctionRegistry> = LazyLock::new(FunctionRegistry::new);

/// Shared read-only registry, built on first use.
pub fn registry() -> &'static FunctionRegistry {
    &FUNCTION_REGISTRY
}
