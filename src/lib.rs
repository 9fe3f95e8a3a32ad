//! Host-side front end for SVM training and prediction.
//!
//! Owns the sparse data model (nodes, training vectors, problems), the
//! solver boundary (a trait consuming marshaled problems and producing
//! opaque artifacts), and the marshaling layer with scoped ownership of
//! every flat buffer. The optimization algorithm itself lives behind the
//! [`Solver`] trait; a deterministic stand-in is bundled.

pub mod api;
pub mod boundary;
pub mod core;
pub mod data;
pub mod model;
pub mod persistence;
pub mod problem;
pub mod solver;
pub mod trainer;

// Re-export main types for convenience
pub use crate::api::{evaluate, SVM};
pub use crate::core::{KernelType, Node, Result, SVMError, SVMParameters, TrainingVector};
pub use crate::model::Model;
pub use crate::problem::Problem;
pub use crate::solver::{CentroidSolver, Solver};
pub use crate::trainer::Trainer;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
