//! Problem construction
//!
//! A [`Problem`] is an accumulating collection of training vectors. It is
//! built incrementally by a single owner, then handed to a trainer as a
//! read-only borrow for the duration of the training call.

use crate::core::{validate_nodes, Node, Result, TrainingVector};

/// A mutable collection of training vectors, consumed once by training.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    vectors: Vec<TrainingVector>,
}

impl Problem {
    /// Create an empty problem
    pub fn new() -> Self {
        Self {
            vectors: Vec::new(),
        }
    }

    /// Append one training vector.
    ///
    /// Fails with [`SVMError::InvalidVector`](crate::core::SVMError) if the
    /// vector's node indices are not strictly ascending or any index is
    /// below 1. On failure the problem is left unchanged.
    pub fn add_training_vector(&mut self, vector: TrainingVector) -> Result<()> {
        validate_nodes(&vector.nodes)?;
        self.vectors.push(vector);
        Ok(())
    }

    /// Build a problem from a dense row-major matrix.
    ///
    /// Each row becomes one training vector with feature indices
    /// `1..=row.len()` in order, zero values included. The row's position
    /// (0-based) is used as a placeholder label. This is a convenience for
    /// tests and quick experiments; callers needing real labels must use
    /// [`add_training_vector`](Self::add_training_vector).
    ///
    /// ```
    /// use svm_bridge::Problem;
    ///
    /// let problem = Problem::from_dense_matrix(&[vec![1.0, 0.0, 1.0], vec![-1.0, 0.0, -1.0]]);
    /// assert_eq!(problem.len(), 2);
    /// ```
    pub fn from_dense_matrix(rows: &[Vec<f64>]) -> Self {
        let mut problem = Self::new();

        for (row_idx, row) in rows.iter().enumerate() {
            let nodes = row
                .iter()
                .enumerate()
                .map(|(col_idx, &value)| Node::new(col_idx as u32 + 1, value))
                .collect();

            // Indices 1..=len are ascending by construction, so this
            // cannot fail.
            problem
                .vectors
                .push(TrainingVector::new(row_idx as f64, nodes));
        }

        problem
    }

    /// Number of training vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check whether the problem holds no vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Read access to the accumulated vectors
    pub fn vectors(&self) -> &[TrainingVector] {
        &self.vectors
    }

    /// Get a single vector by position
    pub fn get(&self, i: usize) -> Option<&TrainingVector> {
        self.vectors.get(i)
    }
}
