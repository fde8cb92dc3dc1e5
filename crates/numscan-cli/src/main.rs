mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use commands::InputArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numscan",
    version,
    about = "Find the largest number in a PDF, raw and with scale words applied"
)]
struct Cli {
    /// Log level filter: error, warn, info, debug or trace
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Append log records to FILE instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the largest number and the largest scaled number
    Scan {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the JSON summary to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Document name shown in the report (default: input file name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the numbers found on each page
    Pages {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Numbers listed per page in table output
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level, cli.log_file.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Scan {
            input,
            output,
            out,
            name,
        } => commands::scan::run(&input, &output, out, name),
        Commands::Pages {
            input,
            output,
            limit,
        } => commands::pages::run(&input, &output, limit),
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
