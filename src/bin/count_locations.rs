use anyhow::{Context, Result};
use clap::Parser;
use locations_etl::utils::logger;
use locations_etl::{CliArgs, Counter, LocalStorage};

#[derive(Parser)]
#[command(name = "count_locations")]
#[command(about = "Count distinct location names in the location JSON file")]
struct Args {
    #[command(flatten)]
    cli: CliArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.cli.verbose);

    let settings = args.cli.settings().context("Invalid configuration")?;
    let storage = LocalStorage::current_dir();

    let unique_count = Counter::new(&storage, &settings)
        .run()
        .with_context(|| format!("Failed to count locations in {}", settings.json_path))?;

    println!("There are {} unique location names.", unique_count);
    Ok(())
}
