use super::instance::QbfInstance;
use super::solution::Solution;
use crate::errors::ProblemError;
use std::path::Path;

/// Maps solutions to objective values. The seam between problem definitions
/// and solvers: a solver only ever talks to an `Evaluator`.
///
/// The delta methods return the cost variation of a single move without
/// re-evaluating the whole solution.
pub trait Evaluator {
    /// Number of decision variables.
    fn domain_size(&self) -> usize;

    /// Evaluates `sol`, caching the value in `sol.cost`.
    fn evaluate(&mut self, sol: &mut Solution) -> f64;

    fn insertion_cost(&mut self, elem: usize, sol: &Solution) -> f64;

    fn removal_cost(&mut self, elem: usize, sol: &Solution) -> f64;

    fn exchange_cost(&mut self, elem_in: usize, elem_out: usize, sol: &Solution) -> f64;
}

/// QBF objective f(x) = xᵀ·A·x over a dense 0/1 variables vector.
pub struct Qbf {
    instance: QbfInstance,
    variables: Vec<f64>,
}

impl Qbf {
    pub fn new(instance: QbfInstance) -> Self {
        let variables = vec![0.0; instance.size()];
        Self {
            instance,
            variables,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        Ok(Self::new(QbfInstance::from_path(path)?))
    }

    pub fn instance(&self) -> &QbfInstance {
        &self.instance
    }

    fn reset_variables(&mut self) {
        self.variables.fill(0.0);
    }

    fn set_variables(&mut self, sol: &Solution) {
        self.reset_variables();
        for &elem in &sol.elements {
            self.variables[elem] = 1.0;
        }
    }

    /// f(x) over the current variables vector.
    fn value(&self) -> f64 {
        let n = self.instance.size();
        let mut sum = 0.0;
        for i in 0..n {
            let mut row = 0.0;
            for j in 0..n {
                row += self.variables[j] * self.instance.coeff(i, j);
            }
            sum += row * self.variables[i];
        }
        sum
    }

    /// Contribution of variable `i` against the current variables vector,
    /// using only row and column `i` of A. Disregards whether `i` is
    /// currently selected.
    fn contribution(&self, i: usize) -> f64 {
        let n = self.instance.size();
        let mut sum = 0.0;
        for j in 0..n {
            if i != j {
                sum += self.variables[j] * (self.instance.coeff(i, j) + self.instance.coeff(j, i));
            }
        }
        sum + self.instance.coeff(i, i)
    }

    fn insertion_delta(&self, i: usize) -> f64 {
        if self.variables[i] == 1.0 {
            return 0.0;
        }
        self.contribution(i)
    }

    fn removal_delta(&self, i: usize) -> f64 {
        if self.variables[i] == 0.0 {
            return 0.0;
        }
        -self.contribution(i)
    }

    fn exchange_delta(&self, elem_in: usize, elem_out: usize) -> f64 {
        if elem_in == elem_out {
            return 0.0;
        }
        if self.variables[elem_in] == 1.0 {
            return self.removal_delta(elem_out);
        }
        if self.variables[elem_out] == 0.0 {
            return self.insertion_delta(elem_in);
        }
        self.contribution(elem_in)
            - self.contribution(elem_out)
            - (self.instance.coeff(elem_in, elem_out) + self.instance.coeff(elem_out, elem_in))
    }
}

impl Evaluator for Qbf {
    fn domain_size(&self) -> usize {
        self.instance.size()
    }

    fn evaluate(&mut self, sol: &mut Solution) -> f64 {
        self.set_variables(sol);
        sol.cost = self.value();
        sol.cost
    }

    fn insertion_cost(&mut self, elem: usize, sol: &Solution) -> f64 {
        self.set_variables(sol);
        self.insertion_delta(elem)
    }

    fn removal_cost(&mut self, elem: usize, sol: &Solution) -> f64 {
        self.set_variables(sol);
        self.removal_delta(elem)
    }

    fn exchange_cost(&mut self, elem_in: usize, elem_out: usize, sol: &Solution) -> f64 {
        self.set_variables(sol);
        self.exchange_delta(elem_in, elem_out)
    }
}
