//! Execution engines. Currently only the sequential batch engine.

pub mod batch;
