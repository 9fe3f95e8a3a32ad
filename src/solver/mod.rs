//! The solver boundary and the bundled stand-in implementation

pub mod centroid;
pub mod traits;

pub use self::centroid::*;
pub use self::traits::*;
