//! Prohibited-triple generation for MAX-QBF/PT.
//!
//! Triples are generated deterministically from the instance dimension with
//! the linear congruential functions l, g and h: for each variable `u` the
//! triple `{u, g(u), h(u)}` (zero-based) is prohibited, meaning the three
//! variables must never all be selected at once.

use serde::Serialize;

/// Three sorted variable indices that must not all be 1 simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triple([usize; 3]);

impl Triple {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut elements = [a, b, c];
        elements.sort_unstable();
        Self(elements)
    }

    pub fn elements(&self) -> [usize; 3] {
        self.0
    }

    /// True when every element of the triple is selected in `bits`.
    pub fn violated_by(&self, bits: &[u8]) -> bool {
        self.0.iter().all(|&i| bits[i] == 1)
    }
}

/// l(π₁, π₂, u, n) = 1 + ((π₁·u + π₂) mod n), over 1-based values.
fn l(pi1: usize, pi2: usize, u: usize, n: usize) -> usize {
    1 + ((pi1 * u + pi2) % n)
}

/// g avoids mapping `u` to itself.
fn g(u: usize, n: usize) -> usize {
    let lu = l(131, 1031, u, n);
    if lu != u {
        lu
    } else {
        1 + (lu % n)
    }
}

/// h avoids mapping `u` to itself or to g(u).
fn h(u: usize, n: usize) -> usize {
    let lu = l(193, 1093, u, n);
    let gu = g(u, n);

    if lu != u && lu != gu {
        lu
    } else if (1 + (lu % n)) != u && (1 + (lu % n)) != gu {
        1 + (lu % n)
    } else {
        1 + ((lu + 1) % n)
    }
}

/// Generates the `n` prohibited triples for an instance of dimension `n`.
pub fn generate(n: usize) -> Vec<Triple> {
    assert!(n > 0, "cannot generate triples for an empty domain");
    (1..=n)
        .map(|u| Triple::new(u - 1, g(u - 1, n) - 1, h(u - 1, n) - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_one_triple_per_variable() {
        assert_eq!(generate(5).len(), 5);
        assert_eq!(generate(20).len(), 20);
    }

    #[test]
    fn matches_hand_computed_values_for_n5() {
        let triples = generate(5);
        // u=1: g(0,5)=2, h(0,5)=4 -> {0, 1, 3}
        assert_eq!(triples[0].elements(), [0, 1, 3]);
        // u=2: g(1,5)=3, h(1,5)=2 -> {1, 2, 1} sorted
        assert_eq!(triples[1].elements(), [1, 1, 2]);
    }

    #[test]
    fn elements_are_sorted_and_in_range() {
        for n in [3usize, 7, 40] {
            for triple in generate(n) {
                let e = triple.elements();
                assert!(e[0] <= e[1] && e[1] <= e[2]);
                assert!(e[2] < n, "element out of range for n={n}: {e:?}");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(40), generate(40));
    }

    #[test]
    fn violation_requires_all_elements_selected() {
        let triple = Triple::new(0, 1, 3);
        let mut bits = vec![0u8; 5];
        assert!(!triple.violated_by(&bits));
        bits[0] = 1;
        bits[1] = 1;
        assert!(!triple.violated_by(&bits));
        bits[3] = 1;
        assert!(triple.violated_by(&bits));
    }
}
