use clap::Parser;

use bikeshare_explorer::cli::{Cli, Commands};
use bikeshare_explorer::commands::{run_config, run_explore, run_init};
use bikeshare_explorer::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        None => run_explore(&cli.explore, &cli),
        Some(Commands::Explore(args)) => run_explore(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
