use anyhow::{Context, Result};
use clap::Parser;
use locations_etl::utils::logger;
use locations_etl::{CliArgs, Converter, LocalStorage};

#[derive(Parser)]
#[command(name = "to_csv")]
#[command(about = "Convert the location JSON file into CSV")]
struct Args {
    #[command(flatten)]
    cli: CliArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.cli.verbose);

    let settings = args.cli.settings().context("Invalid configuration")?;
    let storage = LocalStorage::current_dir();

    let csv_path = Converter::new(&storage, &settings)
        .run()
        .with_context(|| format!("Failed to convert {}", settings.json_path))?;

    println!("Successfully converted {} to {}", settings.json_path, csv_path);
    Ok(())
}
