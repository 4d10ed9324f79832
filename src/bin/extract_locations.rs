use anyhow::{Context, Result};
use clap::Parser;
use locations_etl::utils::logger;
use locations_etl::{CliArgs, ExtractOutcome, Extractor, LocalStorage};

#[derive(Parser)]
#[command(name = "extract_locations")]
#[command(about = "Extract the embedded coordinate array from an HTML page into JSON")]
struct Args {
    #[command(flatten)]
    cli: CliArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.cli.verbose);

    let settings = args.cli.settings().context("Invalid configuration")?;
    let storage = LocalStorage::current_dir();

    let outcome = Extractor::new(&storage, &settings)
        .run()
        .with_context(|| format!("Failed to extract locations from {}", settings.html_path))?;

    match outcome {
        ExtractOutcome::Saved { path, .. } => {
            println!("Successfully extracted and saved filtered locations to {}", path);
        }
        ExtractOutcome::NotFound => {
            println!("Could not find location data in the HTML file.");
        }
    }

    Ok(())
}
