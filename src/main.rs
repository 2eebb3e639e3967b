use clap::Parser;
use foliostat::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
