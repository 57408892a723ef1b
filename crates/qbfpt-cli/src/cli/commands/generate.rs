use super::super::args::GenArgs;
use crate::exit_codes::SUCCESS;
use anyhow::Context;

pub(crate) fn run(args: GenArgs) -> anyhow::Result<i32> {
    anyhow::ensure!(args.size > 0, "--size must be at least 1");

    let text = qbfpt_core::generator::generate(args.size, args.seed);
    match args.output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("writing instance {}", path.display()))?;
            tracing::info!(path = %path.display(), size = args.size, "instance written");
        }
        None => print!("{text}"),
    }

    Ok(SUCCESS)
}
