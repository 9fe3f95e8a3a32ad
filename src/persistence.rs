//! Model serialization and persistence
//!
//! Saves and loads trained models as JSON so they can be exchanged between
//! the CLI and other processes. Persistence currently covers models trained
//! with the bundled centroid solver; external solvers define their own
//! artifact exchange.

use crate::core::{Result, SVMError, SVMParameters};
use crate::model::Model;
use crate::solver::{CentroidArtifact, CentroidSolver, Solver};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

/// Serializable representation of a trained model
#[derive(Serialize, Deserialize)]
pub struct SerializableModel {
    /// Solver identifier that produced the artifact
    pub solver: String,
    /// The trained artifact
    pub artifact: CentroidArtifact,
    /// Model metadata
    pub metadata: ModelMetadata,
}

/// Model metadata for tracking and validation
#[derive(Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Library version used to create the model
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
    /// Parameters the model was trained with
    pub params: SVMParameters,
}

impl SerializableModel {
    /// Create a serializable model from a trained model.
    ///
    /// Fails with [`SVMError::ModelClosed`] if the model has already
    /// released its artifact.
    pub fn from_model(model: &Model<CentroidSolver>, params: &SVMParameters) -> Result<Self> {
        let artifact = model.artifact().ok_or(SVMError::ModelClosed)?;

        Ok(Self {
            solver: model.solver().name().to_string(),
            artifact: artifact.clone(),
            metadata: ModelMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                params: params.clone(),
            },
        })
    }

    /// Save model to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(SVMError::Io)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| SVMError::Serialization(e.to_string()))?;
        Ok(())
    }

    /// Load model from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SVMError::Io)?;
        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .map_err(|e| SVMError::Serialization(e.to_string()))?;
        Ok(model)
    }

    /// Reconstruct a live model from the serialized artifact.
    ///
    /// The artifact came from outside the process, so its structural
    /// invariants are re-checked here; a file that decodes but describes
    /// an impossible artifact is rejected before any prediction can run
    /// against it.
    pub fn to_model(&self) -> Result<Model<CentroidSolver>> {
        if self.solver != CentroidSolver::new().name() {
            return Err(SVMError::InvalidParameter(format!(
                "Unsupported solver in model file: {}",
                self.solver
            )));
        }

        self.artifact.validate()?;

        Ok(Model::new(
            Arc::new(CentroidSolver::new()),
            self.artifact.clone(),
        ))
    }

    /// Print model summary
    pub fn print_summary(&self) {
        println!("=== Model Summary ===");
        println!("Solver: {}", self.solver);
        println!("Classes: {}", self.artifact.labels.len());
        println!("Dimensions: {}", self.artifact.dim);
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
        println!("Training Parameters:");
        println!("  Kernel: {:?}", self.metadata.params.kernel);
        println!("  C: {}", self.metadata.params.c);
        println!("  Epsilon: {}", self.metadata.params.epsilon);
    }
}
