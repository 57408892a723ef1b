use super::super::args::BatchArgs;
use crate::exit_codes::{BATCH_FAILED, SUCCESS};
use qbfpt_core::engine::batch::{self, BatchPlan};

pub(crate) fn run(args: BatchArgs) -> anyhow::Result<i32> {
    let mut plan = BatchPlan::for_mode(&args.mode);
    plan.results_dir = args.results_dir;
    if !args.launcher.is_empty() {
        plan.launcher = args.launcher;
    }
    if let Some(tool) = args.tool {
        plan.tool = tool;
    }
    if let Some(instances) = args.instances {
        plan.instances = instances;
    }

    let report = batch::run(&plan)?;

    for row in &report.invocations {
        let status = match (row.success, row.exit_code) {
            (true, _) => "ok".to_string(),
            (false, Some(code)) => format!("exit {code}"),
            (false, None) => "failed to run".to_string(),
        };
        println!("{} -> {} [{}]", row.instance, row.output.display(), status);
    }
    let succeeded = report.invocations.iter().filter(|r| r.success).count();
    println!(
        "batch {}: {}/{} invocations succeeded",
        report.mode,
        succeeded,
        report.invocations.len()
    );

    if let Some(path) = args.report {
        report.write_json(&path)?;
    }

    Ok(if report.any_failed {
        BATCH_FAILED
    } else {
        SUCCESS
    })
}
