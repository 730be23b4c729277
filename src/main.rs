use anyhow::Result;
use edgelint::cli;
use edgelint::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();

    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    cli::run(cli)
}
