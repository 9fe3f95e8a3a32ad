//! Boundary marshaling
//!
//! Converts the host data model ([`Node`], [`Problem`]) into the flat,
//! native-style representation a solver consumes: arrays of
//! `{index, value}` cells terminated by a sentinel, the classic libsvm
//! `svm_node` layout.
//!
//! Every flat buffer has exactly one owner ([`NodeBuffer`]) and exactly one
//! release point (its `Drop`). A global counter tracks live buffers so leak
//! behavior under repeated prediction is observable in tests.

use crate::core::{Node, Result, SVMError};
use crate::problem::Problem;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Index value terminating a flat node array
pub const SENTINEL_INDEX: i32 = -1;

static LIVE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

/// Number of flat node buffers currently alive, process-wide.
///
/// Scratch buffers allocated for a prediction call must be gone by the time
/// the call returns, so this returns to its prior value after any number of
/// predictions.
pub fn live_buffers() -> usize {
    LIVE_BUFFERS.load(Ordering::SeqCst)
}

/// One cell of a flat node array, in the layout a native solver reads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatNode {
    /// 1-based feature index, or [`SENTINEL_INDEX`] for the terminator
    pub index: i32,
    /// Feature value (unspecified in the terminator cell)
    pub value: f64,
}

/// An owned, sentinel-terminated flat node array.
///
/// Created immediately before a boundary call and dropped immediately
/// after; the drop is the single release point for the allocation.
#[derive(Debug)]
pub struct NodeBuffer {
    cells: Box<[FlatNode]>,
}

impl NodeBuffer {
    /// Marshal a node slice into a flat buffer.
    ///
    /// Fails with [`SVMError::Resource`] if an index does not fit the
    /// native `i32` representation. Ordering is not checked here; callers
    /// validate before marshaling.
    pub fn marshal(nodes: &[Node]) -> Result<Self> {
        let mut cells = Vec::with_capacity(nodes.len() + 1);

        for node in nodes {
            if node.index > i32::MAX as u32 {
                return Err(SVMError::Resource(format!(
                    "feature index {} exceeds the native index range",
                    node.index
                )));
            }
            cells.push(FlatNode {
                index: node.index as i32,
                value: node.value,
            });
        }
        cells.push(FlatNode {
            index: SENTINEL_INDEX,
            value: 0.0,
        });

        LIVE_BUFFERS.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    /// All cells including the sentinel terminator
    pub fn cells(&self) -> &[FlatNode] {
        &self.cells
    }

    /// Feature cells without the terminator
    pub fn nodes(&self) -> &[FlatNode] {
        &self.cells[..self.cells.len() - 1]
    }

    /// Number of feature cells (terminator excluded)
    pub fn len(&self) -> usize {
        self.cells.len() - 1
    }

    /// Check whether the buffer holds no feature cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for NodeBuffer {
    fn drop(&mut self) {
        LIVE_BUFFERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Flat view of a whole problem: one label and one node buffer per vector.
///
/// Lives exactly as long as the training call that consumes it.
#[derive(Debug)]
pub struct FlatProblem {
    labels: Vec<f64>,
    rows: Vec<NodeBuffer>,
}

impl FlatProblem {
    /// Marshal a problem into its flat representation
    pub fn marshal(problem: &Problem) -> Result<Self> {
        let mut labels = Vec::with_capacity(problem.len());
        let mut rows = Vec::with_capacity(problem.len());

        for vector in problem.vectors() {
            labels.push(vector.label);
            rows.push(NodeBuffer::marshal(&vector.nodes)?);
        }

        Ok(Self { labels, rows })
    }

    /// Number of training vectors
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the problem holds no vectors
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels in vector order
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Flat node buffer of vector `i`
    pub fn row(&self, i: usize) -> &NodeBuffer {
        &self.rows[i]
    }

    /// Highest feature index across all rows, 0 for an all-empty problem
    pub fn max_index(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.nodes().iter())
            .map(|cell| cell.index as u32)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrainingVector;

    #[test]
    fn test_marshal_layout() {
        let nodes = vec![Node::new(1, 0.5), Node::new(3, -2.0)];
        let buffer = NodeBuffer::marshal(&nodes).unwrap();

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.cells().len(), 3);
        assert_eq!(
            buffer.nodes(),
            &[
                FlatNode {
                    index: 1,
                    value: 0.5
                },
                FlatNode {
                    index: 3,
                    value: -2.0
                },
            ]
        );
        assert_eq!(buffer.cells()[2].index, SENTINEL_INDEX);
    }

    #[test]
    fn test_marshal_empty_nodes() {
        let buffer = NodeBuffer::marshal(&[]).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cells().len(), 1);
        assert_eq!(buffer.cells()[0].index, SENTINEL_INDEX);
    }

    #[test]
    fn test_marshal_index_overflow() {
        let nodes = vec![Node::new(i32::MAX as u32 + 1, 1.0)];
        let result = NodeBuffer::marshal(&nodes);
        assert!(matches!(result, Err(SVMError::Resource(_))));
    }

    #[test]
    fn test_marshal_boundary_index_fits() {
        let nodes = vec![Node::new(i32::MAX as u32, 1.0)];
        let buffer = NodeBuffer::marshal(&nodes).unwrap();
        assert_eq!(buffer.nodes()[0].index, i32::MAX);
    }

    #[test]
    fn test_flat_problem_marshal() {
        let mut problem = Problem::new();
        problem
            .add_training_vector(TrainingVector::new(
                1.0,
                vec![Node::new(1, 0.5), Node::new(4, 1.5)],
            ))
            .unwrap();
        problem
            .add_training_vector(TrainingVector::new(-1.0, vec![Node::new(2, 0.3)]))
            .unwrap();

        let flat = FlatProblem::marshal(&problem).unwrap();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.labels(), &[1.0, -1.0]);
        assert_eq!(flat.row(0).len(), 2);
        assert_eq!(flat.row(1).len(), 1);
        assert_eq!(flat.max_index(), 4);
    }

    #[test]
    fn test_flat_problem_empty() {
        let flat = FlatProblem::marshal(&Problem::new()).unwrap();
        assert!(flat.is_empty());
        assert_eq!(flat.max_index(), 0);
    }
}
