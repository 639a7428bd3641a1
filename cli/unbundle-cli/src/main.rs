mod commands;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unbundle")]
#[command(about = "Unpacks a CSV of source files onto disk", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extract options given before (or without) a subcommand
    #[command(flatten)]
    extract: ExtractArgs,

    /// Directory every record path is resolved against
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to unbundle.toml in the root, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ExtractArgs {
    /// CSV table with `filepath` and `content` columns, relative to the root
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Allow absolute paths and paths that climb out of the root
    #[arg(long)]
    allow_escape: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every row of the table to disk (the default)
    Extract(ExtractArgs),
    /// Only create the data directory and its marker file
    Init,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => commands::extract::run(
            &cli.root,
            cli.config.as_deref(),
            cli.extract.input,
            cli.extract.allow_escape,
        ),
        Some(Commands::Extract(args)) => commands::extract::run(
            &cli.root,
            cli.config.as_deref(),
            args.input.or(cli.extract.input),
            args.allow_escape || cli.extract.allow_escape,
        ),
        Some(Commands::Init) => commands::init::run(&cli.root, cli.config.as_deref()),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
