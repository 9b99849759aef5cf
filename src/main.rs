use clap::Parser;

use commander::cli::{self, CliArgs};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    commander::logging::init(args.verbose);
    cli::run(args)
}
