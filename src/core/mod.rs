//! Core types and errors for the SVM front end

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
