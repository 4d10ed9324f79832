pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::{cli::LocalStorage, EtlSettings};

pub use core::{
    convert::Converter,
    count::Counter,
    etl::{EtlEngine, RunSummary},
    extract::Extractor,
};
pub use domain::model::{ExtractOutcome, Location};
pub use utils::error::{EtlError, Result};
