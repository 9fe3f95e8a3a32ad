//! High-level API for training and prediction
//!
//! A builder-style front door over the trainer and model types.
//!
//! # Quick Start
//!
//! ```rust
//! use svm_bridge::{Node, Problem, SVM, TrainingVector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut problem = Problem::new();
//! problem.add_training_vector(TrainingVector::new(1.0, vec![Node::new(1, 2.0)]))?;
//! problem.add_training_vector(TrainingVector::new(-1.0, vec![Node::new(1, -2.0)]))?;
//!
//! let model = SVM::new().with_c(1.0).train(&problem)?;
//! assert_eq!(model.predict(&[Node::new(1, 1.5)])?, 1.0);
//! # Ok(())
//! # }
//! ```

use crate::core::{KernelType, Result, SVMError, SVMParameters};
use crate::data::load_problem;
use crate::model::Model;
use crate::problem::Problem;
use crate::solver::{CentroidSolver, Solver};
use crate::trainer::Trainer;
use std::path::Path;

/// High-level SVM interface with builder pattern
pub struct SVM<S: Solver = CentroidSolver> {
    solver: S,
    params: SVMParameters,
}

impl SVM<CentroidSolver> {
    /// Create a new front end with the bundled solver and default parameters
    pub fn new() -> Self {
        Self {
            solver: CentroidSolver::new(),
            params: SVMParameters::default(),
        }
    }
}

impl Default for SVM<CentroidSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solver> SVM<S> {
    /// Use a custom solver behind the boundary
    pub fn with_solver(solver: S) -> Self {
        Self {
            solver,
            params: SVMParameters::default(),
        }
    }

    /// Set the kernel type passed through to the solver
    pub fn with_kernel(mut self, kernel: KernelType) -> Self {
        self.params.kernel = kernel;
        self
    }

    /// Set regularization parameter C
    pub fn with_c(mut self, c: f64) -> Self {
        self.params.c = c;
        self
    }

    /// Set the kernel coefficient gamma
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.params.gamma = gamma;
        self
    }

    /// Set the polynomial degree
    pub fn with_degree(mut self, degree: u32) -> Self {
        self.params.degree = degree;
        self
    }

    /// Set the independent kernel term coef0
    pub fn with_coef0(mut self, coef0: f64) -> Self {
        self.params.coef0 = coef0;
        self
    }

    /// Set the stopping tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.params.epsilon = epsilon;
        self
    }

    /// Set the solver-side cache size in bytes
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.params.cache_size = cache_size;
        self
    }

    /// Enable or disable the solver's shrinking heuristic
    pub fn with_shrinking(mut self, shrinking: bool) -> Self {
        self.params.shrinking = shrinking;
        self
    }

    /// The accumulated parameters
    pub fn params(&self) -> &SVMParameters {
        &self.params
    }

    /// Train on a problem
    pub fn train(self, problem: &Problem) -> Result<Model<S>> {
        Trainer::new(self.solver, self.params).train(problem)
    }

    /// Train from a libsvm format file
    pub fn train_from_file<P: AsRef<Path>>(self, path: P) -> Result<Model<S>> {
        let problem = load_problem(path)?;
        self.train(&problem)
    }
}

/// Fraction of a labeled problem's vectors the model predicts correctly.
///
/// Label comparison is exact, matching the solver contract that identical
/// inputs produce identical labels.
pub fn evaluate<S: Solver>(model: &Model<S>, problem: &Problem) -> Result<f64> {
    if problem.is_empty() {
        return Err(SVMError::InvalidParameter(
            "cannot evaluate against an empty problem".to_string(),
        ));
    }

    let mut correct = 0usize;
    for vector in problem.vectors() {
        if model.predict(&vector.nodes)? == vector.label {
            correct += 1;
        }
    }

    Ok(correct as f64 / problem.len() as f64)
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Train with default parameters on a libsvm file
    pub fn train_libsvm<P: AsRef<Path>>(path: P) -> Result<Model<CentroidSolver>> {
        SVM::new().train_from_file(path)
    }

    /// Train on one labeled file and report accuracy on another
    pub fn evaluate_split<P1: AsRef<Path>, P2: AsRef<Path>>(
        train_path: P1,
        test_path: P2,
    ) -> Result<f64> {
        let model = train_libsvm(train_path)?;
        let test_problem = load_problem(test_path)?;
        evaluate(&model, &test_problem)
    }
}
