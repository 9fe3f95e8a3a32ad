//! Trained models
//!
//! A [`Model`] owns the opaque artifact a solver produced. The artifact is
//! released exactly once: either by an explicit [`close`](Model::close) or
//! when the model drops, whichever comes first. Prediction marshals its
//! input exactly once per call and the marshaled buffer never outlives the
//! call.

use crate::boundary::NodeBuffer;
use crate::core::{validate_nodes, Node, Result, SVMError};
use crate::solver::Solver;
use std::sync::Arc;

/// An immutable trained artifact supporting prediction.
pub struct Model<S: Solver> {
    solver: Arc<S>,
    artifact: Option<S::Artifact>,
}

impl<S: Solver> Model<S> {
    pub(crate) fn new(solver: Arc<S>, artifact: S::Artifact) -> Self {
        Self {
            solver,
            artifact: Some(artifact),
        }
    }

    /// Predict the label for a single feature vector.
    ///
    /// Fails with [`SVMError::InvalidVector`] under the same node-ordering
    /// rule as training vectors, and with [`SVMError::ModelClosed`] after
    /// an explicit close. Read-only: safe to call concurrently for
    /// different inputs against the same model.
    pub fn predict(&self, nodes: &[Node]) -> Result<f64> {
        validate_nodes(nodes)?;
        let artifact = self.artifact.as_ref().ok_or(SVMError::ModelClosed)?;

        // The scratch buffer is scoped strictly to this call: marshaled
        // once here, dropped on return — including early error returns.
        let input = NodeBuffer::marshal(nodes)?;
        self.solver.predict(artifact, &input)
    }

    /// Release the trained artifact deterministically.
    ///
    /// Idempotent; subsequent predictions fail with
    /// [`SVMError::ModelClosed`]. Dropping an unclosed model performs the
    /// same release automatically.
    pub fn close(&mut self) {
        self.artifact.take();
    }

    /// Check whether the model has been explicitly closed
    pub fn is_closed(&self) -> bool {
        self.artifact.is_none()
    }

    /// Read access to the solver's artifact, if still open
    pub fn artifact(&self) -> Option<&S::Artifact> {
        self.artifact.as_ref()
    }

    /// The solver that produced this model
    pub fn solver(&self) -> &S {
        &self.solver
    }
}
