//! Training entry point
//!
//! A [`Trainer`] pairs a solver with a parameter block and turns a
//! [`Problem`] into a [`Model`]. The problem is borrowed read-only; its
//! flat representation is allocated for the training call and released
//! when the call returns, on success and on error alike.

use crate::boundary::FlatProblem;
use crate::core::{Result, SVMError, SVMParameters};
use crate::model::Model;
use crate::problem::Problem;
use crate::solver::Solver;
use log::{debug, info};
use std::sync::Arc;

/// Trains models by handing marshaled problems to a solver.
pub struct Trainer<S: Solver> {
    solver: Arc<S>,
    params: SVMParameters,
}

impl<S: Solver> Trainer<S> {
    /// Create a trainer from a solver and parameters
    pub fn new(solver: S, params: SVMParameters) -> Self {
        Self {
            solver: Arc::new(solver),
            params,
        }
    }

    /// Create a trainer with default parameters
    pub fn with_solver(solver: S) -> Self {
        Self::new(solver, SVMParameters::default())
    }

    /// Train on a problem.
    ///
    /// Fails with [`SVMError::Training`] if the problem is empty or the
    /// solver reports failure. Solver errors are surfaced verbatim with no
    /// retry: training is deterministic, so retrying identical inputs
    /// cannot succeed.
    pub fn train(&self, problem: &Problem) -> Result<Model<S>> {
        if problem.is_empty() {
            return Err(SVMError::Training(
                "problem contains no training vectors".to_string(),
            ));
        }

        debug!(
            "marshaling problem: {} vectors for solver '{}'",
            problem.len(),
            self.solver.name()
        );
        let flat = FlatProblem::marshal(problem)?;

        let artifact = self.solver.train(&flat, &self.params)?;
        info!(
            "training completed: {} vectors, max feature index {}",
            flat.len(),
            flat.max_index()
        );

        Ok(Model::new(Arc::clone(&self.solver), artifact))
        // `flat` is dropped here, releasing every buffer marshaled for
        // this call.
    }

    /// The configured parameters
    pub fn params(&self) -> &SVMParameters {
        &self.params
    }

    /// The underlying solver
    pub fn solver(&self) -> &S {
        &self.solver
    }
}
