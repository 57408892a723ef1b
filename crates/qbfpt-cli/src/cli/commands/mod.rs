use super::args::*;

pub(crate) mod batch;
pub(crate) mod generate;
pub(crate) mod solve;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Batch(args) => batch::run(args),
        Command::Solve(args) => solve::run(args),
        Command::Gen(args) => generate::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
