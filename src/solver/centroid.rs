//! Nearest-centroid stand-in solver
//!
//! A deterministic reference implementation of the [`Solver`] boundary so
//! the train/predict workflow can run without an external optimizer. It
//! averages the vectors of each label into a dense centroid and predicts
//! the label of the nearest centroid. It is a stand-in, not an SVM: no
//! margins, no kernels, no optimization.

use crate::boundary::{FlatProblem, NodeBuffer};
use crate::core::{Result, SVMError, SVMParameters};
use crate::solver::Solver;
use serde::{Deserialize, Serialize};

/// Trained state of the centroid solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidArtifact {
    /// Distinct labels in first-seen training order
    pub labels: Vec<f64>,
    /// One dense centroid per label, all of length `dim`
    pub centroids: Vec<Vec<f64>>,
    /// Feature dimensionality (highest index seen during training)
    pub dim: usize,
}

impl CentroidArtifact {
    /// Check the structural invariants training guarantees.
    ///
    /// An artifact produced by [`CentroidSolver::train`] always satisfies
    /// these; artifacts decoded from external sources must be checked
    /// before prediction is allowed against them.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(SVMError::Serialization(
                "artifact holds no class labels".to_string(),
            ));
        }
        if self.centroids.len() != self.labels.len() {
            return Err(SVMError::Serialization(format!(
                "artifact has {} labels but {} centroids",
                self.labels.len(),
                self.centroids.len()
            )));
        }
        for (i, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != self.dim {
                return Err(SVMError::Serialization(format!(
                    "centroid {i} has {} dimensions, expected {}",
                    centroid.len(),
                    self.dim
                )));
            }
        }
        Ok(())
    }
}

/// Deterministic nearest-centroid solver
#[derive(Debug, Clone, Copy, Default)]
pub struct CentroidSolver;

impl CentroidSolver {
    /// Create a new centroid solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for CentroidSolver {
    type Artifact = CentroidArtifact;

    fn name(&self) -> &'static str {
        "centroid"
    }

    fn train(&self, problem: &FlatProblem, _params: &SVMParameters) -> Result<Self::Artifact> {
        if problem.is_empty() {
            return Err(SVMError::Training(
                "problem contains no training vectors".to_string(),
            ));
        }

        let dim = problem.max_index() as usize;

        let mut labels: Vec<f64> = Vec::new();
        let mut sums: Vec<Vec<f64>> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();

        for i in 0..problem.len() {
            let label = problem.labels()[i];
            if !label.is_finite() {
                return Err(SVMError::Training(format!(
                    "vector {i} has a non-finite label"
                )));
            }

            let group = match labels.iter().position(|&l| l == label) {
                Some(pos) => pos,
                None => {
                    labels.push(label);
                    sums.push(vec![0.0; dim]);
                    counts.push(0);
                    labels.len() - 1
                }
            };

            for cell in problem.row(i).nodes() {
                if !cell.value.is_finite() {
                    return Err(SVMError::Training(format!(
                        "vector {i} has a non-finite value at index {}",
                        cell.index
                    )));
                }
                sums[group][cell.index as usize - 1] += cell.value;
            }
            counts[group] += 1;
        }

        let centroids = sums
            .into_iter()
            .zip(counts.iter())
            .map(|(sum, &count)| sum.into_iter().map(|s| s / count as f64).collect())
            .collect();

        Ok(CentroidArtifact {
            labels,
            centroids,
            dim,
        })
    }

    fn predict(&self, artifact: &Self::Artifact, input: &NodeBuffer) -> Result<f64> {
        // Dense expansion of the input over the trained dimensionality.
        // Indices beyond it were unseen in training and contribute the same
        // amount to every distance.
        let mut dense = vec![0.0; artifact.dim];
        let mut extra = 0.0;
        for cell in input.nodes() {
            let idx = cell.index as usize;
            if idx <= artifact.dim {
                dense[idx - 1] = cell.value;
            } else {
                extra += cell.value * cell.value;
            }
        }

        let mut best_label = artifact.labels[0];
        let mut best_dist = f64::INFINITY;

        for (label, centroid) in artifact.labels.iter().zip(artifact.centroids.iter()) {
            let mut dist = extra;
            for (x, c) in dense.iter().zip(centroid.iter()) {
                let d = x - c;
                dist += d * d;
            }
            // Strict comparison: ties keep the first-seen label
            if dist < best_dist {
                best_dist = dist;
                best_label = *label;
            }
        }

        Ok(best_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Node, TrainingVector};
    use crate::problem::Problem;

    fn flat(problem: &Problem) -> FlatProblem {
        FlatProblem::marshal(problem).unwrap()
    }

    fn two_class_problem() -> Problem {
        let mut problem = Problem::new();
        for (label, value) in [(1.0, 2.0), (1.0, 1.5), (-1.0, -2.0), (-1.0, -1.5)] {
            problem
                .add_training_vector(TrainingVector::new(label, vec![Node::new(1, value)]))
                .unwrap();
        }
        problem
    }

    #[test]
    fn test_train_empty_problem_fails() {
        let solver = CentroidSolver::new();
        let result = solver.train(&flat(&Problem::new()), &SVMParameters::default());
        assert!(matches!(result, Err(SVMError::Training(_))));
    }

    #[test]
    fn test_train_computes_centroids() {
        use approx::assert_relative_eq;

        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&two_class_problem()), &SVMParameters::default())
            .unwrap();

        assert_eq!(artifact.labels, vec![1.0, -1.0]);
        assert_eq!(artifact.dim, 1);
        assert_relative_eq!(artifact.centroids[0][0], 1.75);
        assert_relative_eq!(artifact.centroids[1][0], -1.75);
    }

    #[test]
    fn test_train_rejects_non_finite_label() {
        let mut problem = Problem::new();
        problem
            .add_training_vector(TrainingVector::new(f64::NAN, vec![Node::new(1, 1.0)]))
            .unwrap();

        let solver = CentroidSolver::new();
        let result = solver.train(&flat(&problem), &SVMParameters::default());
        assert!(matches!(result, Err(SVMError::Training(_))));
    }

    #[test]
    fn test_train_rejects_non_finite_value() {
        let mut problem = Problem::new();
        problem
            .add_training_vector(TrainingVector::new(1.0, vec![Node::new(1, f64::INFINITY)]))
            .unwrap();

        let solver = CentroidSolver::new();
        let result = solver.train(&flat(&problem), &SVMParameters::default());
        assert!(matches!(result, Err(SVMError::Training(_))));
    }

    #[test]
    fn test_predict_nearest_centroid() {
        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&two_class_problem()), &SVMParameters::default())
            .unwrap();

        let input = NodeBuffer::marshal(&[Node::new(1, 1.0)]).unwrap();
        assert_eq!(solver.predict(&artifact, &input).unwrap(), 1.0);

        let input = NodeBuffer::marshal(&[Node::new(1, -0.5)]).unwrap();
        assert_eq!(solver.predict(&artifact, &input).unwrap(), -1.0);
    }

    #[test]
    fn test_predict_unseen_index_ignored_for_ranking() {
        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&two_class_problem()), &SVMParameters::default())
            .unwrap();

        // Index 9 was never seen in training; it shifts every distance
        // equally and must not change the winner.
        let input = NodeBuffer::marshal(&[Node::new(1, 1.0), Node::new(9, 100.0)]).unwrap();
        assert_eq!(solver.predict(&artifact, &input).unwrap(), 1.0);
    }

    #[test]
    fn test_predict_tie_keeps_first_seen_label() {
        let mut problem = Problem::new();
        problem
            .add_training_vector(TrainingVector::new(3.0, vec![Node::new(1, 1.0)]))
            .unwrap();
        problem
            .add_training_vector(TrainingVector::new(7.0, vec![Node::new(1, -1.0)]))
            .unwrap();

        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&problem), &SVMParameters::default())
            .unwrap();

        // Equidistant from both centroids
        let input = NodeBuffer::marshal(&[Node::new(1, 0.0)]).unwrap();
        assert_eq!(solver.predict(&artifact, &input).unwrap(), 3.0);
    }

    #[test]
    fn test_trained_artifact_validates() {
        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&two_class_problem()), &SVMParameters::default())
            .unwrap();
        assert!(artifact.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_labels() {
        let artifact = CentroidArtifact {
            labels: vec![],
            centroids: vec![],
            dim: 0,
        };
        assert!(matches!(
            artifact.validate(),
            Err(SVMError::Serialization(_))
        ));
    }

    #[test]
    fn test_validate_rejects_label_centroid_mismatch() {
        let artifact = CentroidArtifact {
            labels: vec![1.0, -1.0],
            centroids: vec![vec![0.5]],
            dim: 1,
        };
        assert!(matches!(
            artifact.validate(),
            Err(SVMError::Serialization(_))
        ));
    }

    #[test]
    fn test_validate_rejects_dim_mismatch() {
        let artifact = CentroidArtifact {
            labels: vec![1.0],
            centroids: vec![vec![0.5]],
            dim: 1_000_000,
        };
        assert!(matches!(
            artifact.validate(),
            Err(SVMError::Serialization(_))
        ));
    }

    #[test]
    fn test_single_class_always_predicted() {
        let mut problem = Problem::new();
        problem
            .add_training_vector(TrainingVector::new(5.0, vec![Node::new(2, 1.0)]))
            .unwrap();

        let solver = CentroidSolver::new();
        let artifact = solver
            .train(&flat(&problem), &SVMParameters::default())
            .unwrap();

        let input = NodeBuffer::marshal(&[Node::new(1, -40.0)]).unwrap();
        assert_eq!(solver.predict(&artifact, &input).unwrap(), 5.0);
    }
}
