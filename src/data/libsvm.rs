//! LibSVM format problem loading
//!
//! Supports the libsvm text format:
//! label index:value index:value ...
//!
//! Example:
//! +1 1:0.5 3:1.2 7:0.8
//! -1 2:0.3 5:2.1
//!
//! Indices are 1-based in the file and stay 1-based in the loaded problem;
//! labels are kept verbatim (the front end is label-agnostic, so regression
//! targets load as well as class labels).

use crate::core::{Node, Result, SVMError, TrainingVector};
use crate::problem::Problem;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a problem from a libsvm format file
pub fn load_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let file = File::open(path).map_err(SVMError::Io)?;
    load_problem_from_reader(BufReader::new(file))
}

/// Load a problem from a reader (for testing and flexibility)
pub fn load_problem_from_reader<R: BufRead>(reader: R) -> Result<Problem> {
    let mut problem = Problem::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(SVMError::Io)?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let vector = parse_line(line)
            .map_err(|e| SVMError::Parse(format!("Error parsing line {}: {}", line_num + 1, e)))?;

        // Ordering violations keep their error kind but gain the same
        // line context as other malformed lines.
        problem.add_training_vector(vector).map_err(|e| match e {
            SVMError::InvalidVector(msg) => SVMError::InvalidVector(format!(
                "Error parsing line {}: {}",
                line_num + 1,
                msg
            )),
            other => other,
        })?;
    }

    Ok(problem)
}

/// Parse a single line in libsvm format
fn parse_line(line: &str) -> Result<TrainingVector> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(SVMError::Parse("Empty line".to_string()));
    }

    let label = parts[0]
        .parse::<f64>()
        .map_err(|_| SVMError::Parse(format!("Invalid label: {}", parts[0])))?;

    let mut nodes = Vec::with_capacity(parts.len() - 1);

    for feature_str in &parts[1..] {
        let feature_parts: Vec<&str> = feature_str.split(':').collect();

        if feature_parts.len() != 2 {
            return Err(SVMError::Parse(format!(
                "Invalid feature format: {feature_str}"
            )));
        }

        let index = feature_parts[0].parse::<u32>().map_err(|_| {
            SVMError::Parse(format!("Invalid feature index: {}", feature_parts[0]))
        })?;

        if index < 1 {
            return Err(SVMError::Parse(format!(
                "Feature index must be positive: {index}"
            )));
        }

        let value = feature_parts[1].parse::<f64>().map_err(|_| {
            SVMError::Parse(format!("Invalid feature value: {}", feature_parts[1]))
        })?;

        nodes.push(Node::new(index, value));
    }

    Ok(TrainingVector::new(label, nodes))
}
