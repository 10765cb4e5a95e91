use clap::Parser;
use schemagen::Cli;

fn main() {
    let cli = Cli::parse();
    schemagen::init_tracing(cli.verbose);

    if let Err(err) = schemagen::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
