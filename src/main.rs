use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locations_etl::utils::logger;
use locations_etl::{
    CliArgs, Converter, Counter, EtlEngine, ExtractOutcome, Extractor, LocalStorage, RunSummary,
};

#[derive(Parser)]
#[command(name = "locations-etl")]
#[command(about = "Scrape embedded map coordinates from HTML into JSON and CSV")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// HTML -> JSON
    Extract,
    /// Count distinct location names in the JSON file
    Count,
    /// JSON -> CSV
    Convert,
    /// Run extract, count and convert in order
    Run,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.args.verbose);
    tracing::info!("Starting locations-etl");

    let settings = cli.args.settings().context("Invalid configuration")?;
    let storage = LocalStorage::current_dir();

    match cli.command {
        Command::Extract => match Extractor::new(&storage, &settings).run()? {
            ExtractOutcome::Saved { path, .. } => {
                println!("Successfully extracted and saved filtered locations to {}", path);
            }
            ExtractOutcome::NotFound => {
                println!("Could not find location data in the HTML file.");
            }
        },
        Command::Count => {
            let unique_count = Counter::new(&storage, &settings).run()?;
            println!("There are {} unique location names.", unique_count);
        }
        Command::Convert => {
            let csv_path = Converter::new(&storage, &settings).run()?;
            println!("Successfully converted {} to {}", settings.json_path, csv_path);
        }
        Command::Run => match EtlEngine::new(&storage, &settings).run()? {
            RunSummary::Completed {
                json_path,
                csv_path,
                records,
                unique_names,
            } => {
                println!("✅ Extracted {} locations to {}", records, json_path);
                println!("There are {} unique location names.", unique_names);
                println!("📁 CSV saved to: {}", csv_path);
            }
            RunSummary::NotFound => {
                println!("Could not find location data in the HTML file.");
            }
        },
    }

    Ok(())
}
