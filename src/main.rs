mod cli;
mod cli_help;
mod collect;
mod logging;
mod plan;
mod report;
mod report_helpers;

use std::error::Error;
use std::path::Path;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands, PlanArgs};
use collect::NameFilter;
use foldsplit::Config;

fn run_plan(args: &PlanArgs) -> Result<(), Box<dyn Error>> {
    let mut config = Config::discover(args.config.as_deref(), Path::new("."))?;
    logging::init(args.verbosity, &config.logging.level);

    args.apply_to(&mut config.split);
    let filter = NameFilter::new(&args.include, &args.exclude)?;
    plan::run(args.input_path(), &filter, &config.split, args.json)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan(args) => run_plan(&args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fsplit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
