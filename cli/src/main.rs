mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, count, expand, parse};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Parse { input } => {
            print::header("parsed ranges", cfg.quiet);
            parse::parse(&input, &cfg)?;
        }
        Commands::Expand {
            input,
            stream,
            parallel,
        } => {
            print::header("expanding ranges", cfg.quiet);
            expand::expand(&input, stream, parallel, &cfg)?;
        }
        Commands::Check { address, input } => {
            print::header("membership check", cfg.quiet);
            if !check::check(address, &input, &cfg)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Count { input } => {
            print::header("address count", cfg.quiet);
            count::count(&input, &cfg)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
