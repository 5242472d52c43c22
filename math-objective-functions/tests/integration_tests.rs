//! Integration tests for the objective function library
//!
//! These exercise the public API the way an optimizer would: picking a
//! function by name and evaluating single points or whole populations.

use approx::assert_relative_eq;
use math_audio_objective_functions::{
    AckleyParams, FunctionRegistry, ObjectiveError, Points, RosenbrockParams, Scores, ackley,
    ackley_with, griewank, rastrigin, registry, rosenbrock, rosenbrock_with, sphere,
};
use ndarray::{Array1, Array2, array};

const NAMES: [&str; 5] = ["ackley", "griewank", "rastrigin", "rosenbrock", "sphere"];

/// Small deterministic population covering negative, zero and large values
fn population() -> Array2<f64> {
    array![
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [-3.5, 2.25, 0.125],
        [512.0, -600.0, 31.0],
        [-0.75, 0.5, -1.5],
    ]
}

fn single(x: &[f64]) -> Points {
    Points::from(x.to_vec())
}

fn scalar(scores: Scores) -> f64 {
    scores.as_single().expect("single input should give a scalar")
}

#[test]
fn test_global_minima_at_origin() {
    assert_eq!(scalar(sphere(&single(&[0.0, 0.0, 0.0])).unwrap()), 0.0);
    assert_eq!(scalar(rastrigin(&single(&[0.0, 0.0])).unwrap()), 0.0);
    assert_relative_eq!(
        scalar(ackley(&single(&[0.0, 0.0])).unwrap()),
        0.0,
        epsilon = 1e-10
    );
    assert_eq!(scalar(griewank(&single(&[0.0, 0.0])).unwrap()), 0.0);
    assert_eq!(scalar(rosenbrock(&single(&[1.0, 1.0])).unwrap()), 0.0);
}

#[test]
fn test_concrete_values() {
    assert_eq!(scalar(sphere(&single(&[3.0, 4.0])).unwrap()), 25.0);

    let params = RosenbrockParams { a: 1.0, b: 100.0 };
    assert_eq!(params, RosenbrockParams::default());
    assert_eq!(
        scalar(rosenbrock_with(&single(&[0.0, 0.0]), &params).unwrap()),
        1.0
    );

    let defaults = AckleyParams::default();
    assert_eq!(defaults.a, 20.0);
    assert_eq!(defaults.b, 0.2);
    assert_eq!(defaults.c, 2.0 * std::f64::consts::PI);
    let x = single(&[0.5, -0.25]);
    assert_eq!(
        ackley_with(&x, &defaults).unwrap(),
        ackley(&x).unwrap()
    );
}

#[test]
fn test_batch_matches_single_evaluation() {
    let batch = population();
    let points = Points::Batch(batch.clone());

    for name in NAMES {
        let function = registry().get(name).unwrap();
        let scores = function(&points).unwrap();
        assert!(scores.is_batch());
        assert_eq!(scores.len(), batch.nrows());

        for (j, row) in batch.rows().into_iter().enumerate() {
            let alone = function(&Points::Single(row.to_owned())).unwrap();
            assert_eq!(
                scores.get(j).unwrap().to_bits(),
                scalar(alone).to_bits(),
                "{} differs between batch row {} and single evaluation",
                name,
                j
            );
        }
    }
}

#[test]
fn test_batch_of_one_keeps_batch_shape() {
    let x = Points::Batch(array![[3.0, 4.0]]);
    assert_eq!(sphere(&x).unwrap(), Scores::Batch(array![25.0]));
}

#[test]
fn test_registry_completeness() {
    let registry = FunctionRegistry::new();
    assert_eq!(registry.list_functions(), NAMES.to_vec());

    let x = single(&[0.4, -1.1, 2.0, 0.05]);
    let direct = [
        ackley(&x).unwrap(),
        griewank(&x).unwrap(),
        rastrigin(&x).unwrap(),
        rosenbrock(&x).unwrap(),
        sphere(&x).unwrap(),
    ];
    for (name, expected) in NAMES.iter().zip(direct) {
        assert!(registry.contains(name));
        assert_eq!(registry.evaluate(name, &x).unwrap(), expected, "{}", name);
    }
}

#[test]
fn test_registry_unknown_name_is_not_found() {
    for name in ["rosenbrok", "SPHERE", "schwefel", ""] {
        match registry().get(name) {
            Err(ObjectiveError::NotFound { name: missing }) => assert_eq!(missing, name),
            Err(other) => panic!("unexpected error for '{}': {}", name, other),
            Ok(_) => panic!("'{}' should not resolve to a function", name),
        }
    }
}

#[test]
fn test_deterministic() {
    let points = Points::Batch(population());
    for (name, function) in registry().iter() {
        let first = function(&points).unwrap().into_array();
        let second = function(&points).unwrap().into_array();
        let same = first
            .iter()
            .zip(second.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits());
        assert!(same, "{} is not deterministic", name);
    }
}

#[test]
fn test_invalid_input() {
    let err = Points::parse(&["1.0", "abc", "3.0"]).unwrap_err();
    assert!(err.is_invalid_input());

    let err = Points::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(err.is_invalid_input());

    let empty = Points::Single(Array1::zeros(0));
    assert!(rosenbrock(&empty).unwrap_err().is_invalid_input());
}

#[test]
fn test_parsed_input_evaluates() {
    let x = Points::parse_rows(&[vec!["3", "4"], vec!["1", "1"]]).unwrap();
    assert_eq!(sphere(&x).unwrap(), Scores::Batch(array![25.0, 2.0]));
    assert_eq!(rosenbrock(&x).unwrap().get(1), Some(0.0));
}
