//! Solver trait definition

use crate::boundary::{FlatProblem, NodeBuffer};
use crate::core::{Result, SVMParameters};

/// The external solver boundary.
///
/// A solver consumes a marshaled problem plus a parameter block and
/// produces an opaque trained artifact; prediction runs one inference pass
/// over a single marshaled input. Implementations must be deterministic
/// given identical inputs and parameters (solver-internal floating-point
/// nondeterminism excepted) and must not retain references to the flat
/// buffers beyond the call that passed them in.
pub trait Solver: Send + Sync {
    /// Opaque trained state owned by the resulting model
    type Artifact: Send + Sync + 'static;

    /// Short identifier used in model metadata
    fn name(&self) -> &'static str;

    /// Train on a flat problem view.
    ///
    /// The problem is guaranteed non-empty by the trainer. Failure or
    /// non-convergence is reported as
    /// [`SVMError::Training`](crate::core::SVMError).
    fn train(&self, problem: &FlatProblem, params: &SVMParameters) -> Result<Self::Artifact>;

    /// Predict the label for a single marshaled input.
    ///
    /// Read-only with respect to the artifact; safe to call concurrently
    /// for different inputs against the same artifact.
    fn predict(&self, artifact: &Self::Artifact, input: &NodeBuffer) -> Result<f64>;
}
