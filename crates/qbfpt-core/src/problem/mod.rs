//! Problem model: instances, solutions, evaluation and prohibited triples.

pub mod instance;
pub mod qbf;
pub mod solution;
pub mod triples;

pub use instance::QbfInstance;
pub use qbf::{Evaluator, Qbf};
pub use solution::Solution;
pub use triples::Triple;
