mod commands;

use clap::{Parser, Subcommand};

use hilight::core::logger;

#[derive(Parser)]
#[command(name = "hilight")]
#[command(about = "Recommend insurance products from selected interest tags", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the best matching product for the selected tags
    Recommend {
        #[arg(
            short,
            long = "tag",
            value_name = "CATEGORY=TAG",
            help = "Selected tag, e.g. 위험=#화재 or risk=화재 (repeatable)"
        )]
        tags: Vec<String>,
        #[arg(short, long, help = "Interest the tags were picked under")]
        interest: Option<String>,
        #[arg(short, long, help = "Free-text description of the situation")]
        situation: Option<String>,
        #[arg(long, help = "Show the score of every product")]
        explain: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List built-in interests
    Interests {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show tags offered for an interest
    Tags {
        interest: String,
        #[arg(long, help = "Show every tag of each category across interests")]
        all: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List catalog products
    Catalog {
        #[arg(long, help = "Fail when the catalog is missing or malformed")]
        strict: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Write the default config file
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Recommend {
            tags,
            interest,
            situation,
            explain,
            json,
        } => commands::recommend::run(
            &tags,
            interest.as_deref(),
            situation.as_deref(),
            explain,
            json,
        ),
        Commands::Interests { json } => commands::interests::run_list(json),
        Commands::Tags {
            interest,
            all,
            json,
        } => commands::interests::run_tags(&interest, all, json),
        Commands::Catalog { strict, json } => commands::catalog::run(strict, json),
        Commands::Init { force } => commands::init::run(force),
    }
}
