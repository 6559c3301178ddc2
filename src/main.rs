use clap::Parser;

use format_guard::cli::Cli;
use format_guard::commands::run_format;
use format_guard::output::Reporter;

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.color.into(), cli.verbose, cli.quiet);

    let exit_code = run_format(&cli, &reporter);
    reporter.flush();

    std::process::exit(exit_code);
}
