mod cli;
mod layout_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Layout {
            ref file,
            ref format,
            y_tolerance,
            min_confidence,
        } => layout_cmd::run(file, format, y_tolerance, min_confidence),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
