use super::super::args::SolveArgs;
use crate::exit_codes::SUCCESS;
use anyhow::Context;
use qbfpt_core::ga::{GaParams, GaSolver};
use qbfpt_core::problem::Qbf;
use std::time::Instant;

pub(crate) fn run(args: SolveArgs) -> anyhow::Result<i32> {
    let qbf = Qbf::from_path(&args.instance)
        .with_context(|| format!("loading instance {}", args.instance.display()))?;
    let params = GaParams {
        generations: args.generations,
        pop_size: args.pop_size,
        mutation_rate: args.mutation_rate,
        seed: args.seed,
    };

    let started = Instant::now();
    let mut solver = GaSolver::new(qbf, params);
    let best = solver.solve();
    let elapsed = started.elapsed();

    if args.json {
        let record = serde_json::json!({
            "instance": args.instance,
            "cost": best.cost,
            "size": best.len(),
            "elements": best.elements,
            "elapsed_ms": elapsed.as_millis() as u64,
            "seed": args.seed,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("best = {best}");
        println!("time = {:.3}s", elapsed.as_secs_f64());
    }

    Ok(SUCCESS)
}
