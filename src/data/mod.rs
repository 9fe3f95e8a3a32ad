//! Problem loading from external data formats

pub mod libsvm;

pub use self::libsvm::*;
