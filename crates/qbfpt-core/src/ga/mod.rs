//! Genetic algorithm for MAX-QBF/PT.
//!
//! Chromosomes are binary vectors (locus i ↔ variable i). Prohibited-triple
//! feasibility is maintained by repair: any chromosome produced by random
//! generation or mutation has one random element of each violated triple
//! zeroed before it is ever evaluated. Crossover is a two-point exchange
//! restricted to the window where the parents actually differ, so identical
//! parents pass through unchanged.

use crate::problem::qbf::Evaluator;
use crate::problem::solution::Solution;
use crate::problem::triples::{self, Triple};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Chromosome = Vec<u8>;
pub type Population = Vec<Chromosome>;

/// GA parameters. Defaults match the original benchmark driver.
#[derive(Debug, Clone)]
pub struct GaParams {
    pub generations: u32,
    pub pop_size: usize,
    /// Per-locus flip probability applied to every offspring.
    pub mutation_rate: f64,
    /// Fixed seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            generations: 1000,
            pop_size: 1000,
            mutation_rate: 1.0 / 200.0,
            seed: None,
        }
    }
}

pub struct GaSolver<E: Evaluator> {
    evaluator: E,
    params: GaParams,
    triples: Vec<Triple>,
    rng: StdRng,
    n: usize,
}

impl<E: Evaluator> GaSolver<E> {
    pub fn new(evaluator: E, params: GaParams) -> Self {
        let n = evaluator.domain_size();
        let triples = triples::generate(n);
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // crossover consumes parents two at a time
        let mut params = params;
        params.pop_size = params.pop_size.max(2);
        if params.pop_size % 2 != 0 {
            params.pop_size += 1;
            tracing::debug!(
                pop_size = params.pop_size,
                "population size rounded up to even"
            );
        }

        Self {
            evaluator,
            params,
            triples,
            rng,
            n,
        }
    }

    /// Runs the generational loop and returns the best solution found.
    pub fn solve(&mut self) -> Solution {
        let mut population: Population = (0..self.params.pop_size)
            .map(|_| self.random_chromosome())
            .collect();
        let mut scores = self.score(&population);

        let mut best = self.decode(&population[argmax(&scores)]);
        tracing::debug!(cost = best.cost, "initial incumbent");

        for generation in 1..=self.params.generations {
            let parents = self.select_parents(&population, &scores);
            let mut offspring = self.crossover(&parents);
            self.mutate(&mut offspring);
            let mut offspring_scores = self.score(&offspring);

            // elitism: the best of the previous generation survives when it
            // beats the worst offspring
            let elite = argmax(&scores);
            let worst = argmin(&offspring_scores);
            if scores[elite] > offspring_scores[worst] {
                offspring[worst] = population[elite].clone();
                offspring_scores[worst] = scores[elite];
            }

            population = offspring;
            scores = offspring_scores;

            let leader = argmax(&scores);
            if scores[leader] > best.cost {
                best = self.decode(&population[leader]);
                tracing::debug!(generation, cost = best.cost, "incumbent improved");
            }
        }

        best
    }

    /// Expands a chromosome into a solution and evaluates it. An empty
    /// selection is known to cost zero, so the decode starts from there.
    pub fn decode(&mut self, chromosome: &Chromosome) -> Solution {
        let mut sol = Solution::new();
        sol.cost = 0.0;
        for (locus, &bit) in chromosome.iter().enumerate() {
            if bit == 1 {
                sol.push(locus);
            }
        }
        self.evaluator.evaluate(&mut sol);
        sol
    }

    fn fitness(&mut self, chromosome: &Chromosome) -> f64 {
        self.decode(chromosome).cost
    }

    fn score(&mut self, population: &Population) -> Vec<f64> {
        population.iter().map(|c| self.fitness(c)).collect()
    }

    fn random_chromosome(&mut self) -> Chromosome {
        let mut chromosome: Chromosome =
            (0..self.n).map(|_| self.rng.gen_range(0..2u8)).collect();
        self.repair(&mut chromosome);
        chromosome
    }

    /// Zeroes one random element of every violated triple. Violations are
    /// collected up front, so a fix that incidentally satisfies a later
    /// triple still triggers that triple's own fix.
    fn repair(&mut self, chromosome: &mut Chromosome) {
        let violated: Vec<[usize; 3]> = self
            .triples
            .iter()
            .filter(|t| t.violated_by(chromosome))
            .map(|t| t.elements())
            .collect();
        for elements in violated {
            let pick = self.rng.gen_range(0..3);
            chromosome[elements[pick]] = 0;
        }
    }

    fn violates_any_triple(&self, chromosome: &Chromosome) -> bool {
        self.triples.iter().any(|t| t.violated_by(chromosome))
    }

    /// Binary tournament: population-size times, pick two chromosomes at
    /// random and keep the fitter.
    fn select_parents(&mut self, population: &Population, scores: &[f64]) -> Population {
        let mut parents = Population::with_capacity(population.len());
        for _ in 0..population.len() {
            let a = self.rng.gen_range(0..population.len());
            let b = self.rng.gen_range(0..population.len());
            let winner = if scores[a] > scores[b] { a } else { b };
            parents.push(population[winner].clone());
        }
        parents
    }

    /// Two-point crossover restricted to the differing window: crosspoints
    /// are drawn from [first differing locus, last differing locus], and the
    /// loci in [c1, c2) are swapped between the parents.
    fn crossover(&mut self, parents: &Population) -> Population {
        let mut offspring = Population::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            let diff: Vec<usize> = (0..self.n).filter(|&j| p1[j] != p2[j]).collect();
            let (c1, c2) = match (diff.first(), diff.last()) {
                (Some(&start), Some(&end)) => {
                    let c1 = self.rng.gen_range(start..=end);
                    let c2 = self.rng.gen_range(c1..=end);
                    (c1, c2)
                }
                _ => (0, 0),
            };

            let mut o1 = Chromosome::with_capacity(self.n);
            let mut o2 = Chromosome::with_capacity(self.n);
            for j in 0..self.n {
                if j >= c1 && j < c2 {
                    o1.push(p2[j]);
                    o2.push(p1[j]);
                } else {
                    o1.push(p1[j]);
                    o2.push(p2[j]);
                }
            }
            offspring.push(o1);
            offspring.push(o2);
        }
        offspring
    }

    fn mutate(&mut self, offspring: &mut Population) {
        for chromosome in offspring.iter_mut() {
            for locus in 0..self.n {
                if self.rng.gen::<f64>() < self.params.mutation_rate {
                    chromosome[locus] = 1 - chromosome[locus];
                }
            }
            self.repair(chromosome);
        }
    }
}

fn argmax(scores: &[f64]) -> usize {
    let mut idx = 0;
    for (i, &s) in scores.iter().enumerate() {
        if s > scores[idx] {
            idx = i;
        }
    }
    idx
}

fn argmin(scores: &[f64]) -> usize {
    let mut idx = 0;
    for (i, &s) in scores.iter().enumerate() {
        if s < scores[idx] {
            idx = i;
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::instance::QbfInstance;
    use crate::problem::Qbf;

    fn solver(n: usize, seed: u64) -> GaSolver<Qbf> {
        let text = crate::generator::generate(n, Some(1));
        let inst = QbfInstance::parse(&text, "test").unwrap();
        GaSolver::new(
            Qbf::new(inst),
            GaParams {
                generations: 25,
                pop_size: 20,
                mutation_rate: 0.05,
                seed: Some(seed),
            },
        )
    }

    fn chromosome_of(sol: &Solution, n: usize) -> Chromosome {
        let mut bits = vec![0u8; n];
        for &e in &sol.elements {
            bits[e] = 1;
        }
        bits
    }

    #[test]
    fn repair_clears_all_violations() {
        let mut solver = solver(12, 7);
        let mut chromosome = vec![1u8; 12];
        solver.repair(&mut chromosome);
        assert!(!solver.violates_any_triple(&chromosome));
    }

    #[test]
    fn random_chromosomes_respect_triples() {
        let mut solver = solver(12, 3);
        for _ in 0..50 {
            let c = solver.random_chromosome();
            assert!(!solver.violates_any_triple(&c));
        }
    }

    #[test]
    fn identical_parents_cross_to_identical_offspring() {
        let mut solver = solver(10, 5);
        let parent = solver.random_chromosome();
        let parents = vec![parent.clone(), parent.clone()];
        let offspring = solver.crossover(&parents);
        assert_eq!(offspring, parents);
    }

    #[test]
    fn crossover_preserves_loci_outside_the_window() {
        let mut solver = solver(10, 11);
        let p1 = solver.random_chromosome();
        let p2 = solver.random_chromosome();
        let parents = vec![p1.clone(), p2.clone()];
        let offspring = solver.crossover(&parents);
        // every locus of each offspring comes from one of the two parents
        for o in &offspring {
            for j in 0..10 {
                assert!(o[j] == p1[j] || o[j] == p2[j]);
            }
        }
    }

    #[test]
    fn fixed_seed_reproduces_best_solution() {
        let a = solver(15, 42).solve();
        let b = solver(15, 42).solve();
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.elements, b.elements);
    }

    #[test]
    fn best_solution_violates_no_triple() {
        let mut s = solver(15, 9);
        let best = s.solve();
        let bits = chromosome_of(&best, 15);
        assert!(!s.violates_any_triple(&bits));
    }

    #[test]
    fn solve_returns_an_evaluated_solution() {
        let mut s = solver(15, 2);
        let best = s.solve();
        assert!(best.cost.is_finite());
        let bits = chromosome_of(&best, 15);
        let again = s.decode(&bits);
        assert_eq!(again.cost, best.cost);
    }

    #[test]
    fn odd_population_size_is_rounded_up() {
        let text = crate::generator::generate(8, Some(1));
        let inst = QbfInstance::parse(&text, "test").unwrap();
        let s = GaSolver::new(
            Qbf::new(inst),
            GaParams {
                pop_size: 7,
                ..Default::default()
            },
        );
        assert_eq!(s.params.pop_size, 8);
    }
}
