mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "labcard",
    version,
    about = "Render a personal lab result report as text, JSON or an interactive HTML page"
)]
struct Cli {
    /// Report JSON file to use instead of the built-in report
    #[arg(short, long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all results grouped by section
    List,
    /// Show the detail view for one result
    Show {
        /// Result id (e.g. "ferritin")
        id: String,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Print the plain-text report summary
    Summary {
        /// Date printed on the "Generated:" line (default: today)
        #[arg(long, value_name = "TEXT")]
        date: Option<String>,
    },
    /// Render the report as a self-contained HTML page
    Page {
        /// Write the page to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose > 0 {
        let level = match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::List => commands::catalog::list(catalog),
        Commands::Show { id, output } => commands::show::run(catalog, &id, &output),
        Commands::Summary { date } => commands::summary::run(catalog, date.as_deref()),
        Commands::Page { out } => commands::page::run(catalog, out),
        Commands::Validate { file } => commands::catalog::validate(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
