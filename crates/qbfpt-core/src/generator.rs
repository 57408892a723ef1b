//! Random instance generation in the on-disk format the parser reads:
//! the dimension, then the upper-triangular coefficients row by row.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Renders a random instance of `size` variables with integer coefficients
/// drawn uniformly from [-10, 10]. Deterministic for a fixed seed.
pub fn generate(size: usize, seed: Option<u64>) -> String {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut out = size.to_string();
    out.push('\n');
    for i in 0..size {
        let row: Vec<String> = (i..size)
            .map(|_| rng.gen_range(-10i32..=10).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::instance::QbfInstance;

    #[test]
    fn output_round_trips_through_the_parser() {
        let text = generate(20, Some(99));
        let inst = QbfInstance::parse(&text, "generated").unwrap();
        assert_eq!(inst.size(), 20);
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        assert_eq!(generate(10, Some(5)), generate(10, Some(5)));
    }

    #[test]
    fn coefficients_stay_in_range() {
        let text = generate(15, Some(1));
        let inst = QbfInstance::parse(&text, "generated").unwrap();
        for i in 0..15 {
            for j in i..15 {
                let c = inst.coeff(i, j);
                assert!((-10.0..=10.0).contains(&c));
            }
        }
    }
}
