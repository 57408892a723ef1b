//! Core library for the MAX-QBF/PT experiment driver.
//!
//! A quadratic binary function (QBF) is f(x) = xᵀ·A·x over binary variables;
//! maximising it is NP-hard even unconstrained. The PT variant adds
//! *prohibited triples*: deterministically generated triples of variables
//! that must never all be selected together.
//!
//! The crate provides three things:
//! - [`problem`]: instance loading, incremental evaluation, solutions and
//!   prohibited-triple generation;
//! - [`ga`]: a genetic algorithm with triple repair and a differing-window
//!   two-point crossover;
//! - [`engine`]: the batch engine that drives an external solver tool once
//!   per benchmark instance and collects its output under `results/<mode>/`.

pub mod engine;
pub mod errors;
pub mod ga;
pub mod generator;
pub mod problem;
