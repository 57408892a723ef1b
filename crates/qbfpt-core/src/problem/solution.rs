use serde::Serialize;
use std::fmt;

/// A candidate solution: the set of selected variable indices plus the
/// cached objective value. The cost starts at negative infinity (this is a
/// maximisation problem) and is filled in by an
/// [`Evaluator`](super::Evaluator).
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub elements: Vec<usize>,
    pub cost: f64,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            cost: f64::NEG_INFINITY,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, elem: usize) {
        self.elements.push(elem);
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: cost=[{}], size=[{}], elements={:?}",
            self.cost,
            self.len(),
            self.elements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_cost_size_and_elements() {
        let mut sol = Solution::new();
        sol.push(3);
        sol.push(7);
        sol.cost = 42.0;
        assert_eq!(
            sol.to_string(),
            "Solution: cost=[42], size=[2], elements=[3, 7]"
        );
    }
}
