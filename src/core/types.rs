//! Core type definitions for the SVM front end

use crate::core::{Result, SVMError};
use serde::{Deserialize, Serialize};

/// A single sparse feature: a 1-based index and its value.
///
/// Within a vector, indices must be strictly ascending with no duplicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Feature index, starting at 1
    pub index: u32,
    /// Feature value
    pub value: f64,
}

impl Node {
    /// Create a new node
    pub fn new(index: u32, value: f64) -> Self {
        Self { index, value }
    }
}

/// A labeled sparse feature vector used for training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingVector {
    /// Class label or regression target
    pub label: f64,
    /// Sparse features, sorted by index ascending
    pub nodes: Vec<Node>,
}

impl TrainingVector {
    /// Create a new training vector
    pub fn new(label: f64, nodes: Vec<Node>) -> Self {
        Self { label, nodes }
    }
}

/// Validate a node sequence: every index >= 1, strictly ascending.
///
/// Used on every path that crosses the solver boundary, for both training
/// vectors and prediction inputs.
pub fn validate_nodes(nodes: &[Node]) -> Result<()> {
    let mut prev = 0u32;
    for (pos, node) in nodes.iter().enumerate() {
        if node.index < 1 {
            return Err(SVMError::InvalidVector(format!(
                "node {pos} has index {}, indices start at 1",
                node.index
            )));
        }
        if node.index <= prev {
            return Err(SVMError::InvalidVector(format!(
                "node {pos} has index {} after index {prev}, indices must be strictly ascending",
                node.index
            )));
        }
        prev = node.index;
    }
    Ok(())
}

/// Kernel selector, passed through to the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KernelType {
    /// K(x, y) = x . y
    Linear,
    /// K(x, y) = (gamma * x . y + coef0)^degree
    Polynomial,
    /// K(x, y) = exp(-gamma * |x - y|^2)
    Rbf,
    /// K(x, y) = tanh(gamma * x . y + coef0)
    Sigmoid,
}

/// Solver configuration.
///
/// Opaque to the front end: every field is handed through to the solver
/// untouched. Defaults follow the conventional libsvm defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SVMParameters {
    /// Kernel function
    pub kernel: KernelType,
    /// Polynomial degree
    pub degree: u32,
    /// Kernel coefficient; 0.0 lets the solver choose
    pub gamma: f64,
    /// Independent term for polynomial/sigmoid kernels
    pub coef0: f64,
    /// Regularization parameter C
    pub c: f64,
    /// Stopping tolerance
    pub epsilon: f64,
    /// Solver-side kernel cache size in bytes
    pub cache_size: usize,
    /// Enable the solver's shrinking heuristic
    pub shrinking: bool,
}

impl Default for SVMParameters {
    fn default() -> Self {
        Self {
            kernel: KernelType::Linear,
            degree: 3,
            gamma: 0.0,
            coef0: 0.0,
            c: 1.0,
            epsilon: 0.001,
            cache_size: 100_000_000, // 100MB
            shrinking: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(3, 1.5);
        assert_eq!(node.index, 3);
        assert_eq!(node.value, 1.5);
    }

    #[test]
    fn test_training_vector_creation() {
        let nodes = vec![Node::new(1, 0.5), Node::new(4, 2.0)];
        let vector = TrainingVector::new(-1.0, nodes.clone());
        assert_eq!(vector.label, -1.0);
        assert_eq!(vector.nodes, nodes);
    }

    #[test]
    fn test_validate_nodes_ascending() {
        let nodes = vec![Node::new(1, 1.0), Node::new(2, 0.0), Node::new(7, 3.0)];
        assert!(validate_nodes(&nodes).is_ok());
    }

    #[test]
    fn test_validate_nodes_empty() {
        assert!(validate_nodes(&[]).is_ok());
    }

    #[test]
    fn test_validate_nodes_zero_index() {
        let nodes = vec![Node::new(0, 1.0)];
        let result = validate_nodes(&nodes);
        assert!(matches!(result, Err(SVMError::InvalidVector(_))));
    }

    #[test]
    fn test_validate_nodes_duplicate_index() {
        let nodes = vec![Node::new(2, 1.0), Node::new(2, 3.0)];
        let result = validate_nodes(&nodes);
        assert!(matches!(result, Err(SVMError::InvalidVector(_))));
    }

    #[test]
    fn test_validate_nodes_descending() {
        let nodes = vec![Node::new(5, 1.0), Node::new(3, 3.0)];
        let result = validate_nodes(&nodes);
        assert!(matches!(result, Err(SVMError::InvalidVector(_))));
    }

    #[test]
    fn test_parameters_default() {
        let params = SVMParameters::default();
        assert_eq!(params.kernel, KernelType::Linear);
        assert_eq!(params.degree, 3);
        assert_eq!(params.gamma, 0.0);
        assert_eq!(params.c, 1.0);
        assert_eq!(params.epsilon, 0.001);
        assert_eq!(params.cache_size, 100_000_000);
        assert!(params.shrinking);
    }
}
