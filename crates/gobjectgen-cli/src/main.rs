// gobjectgen CLI Entry Point

use clap::Parser;
use gobjectgen_cli::{init_logging, output, Cli, CommandRouter, VerbosityLevel};

fn main() {
    // Argument errors are reported by clap and exit before any work is done
    let cli = Cli::parse();

    let verbosity = init_logging(cli.verbose, cli.quiet);

    if let Err(e) = CommandRouter::execute(&cli, verbosity) {
        output::print_error(&e.user_message());
        if verbosity >= VerbosityLevel::Verbose {
            eprintln!("{}", e.technical_details());
        }
        std::process::exit(1);
    }
}
