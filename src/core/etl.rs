use crate::core::convert::Converter;
use crate::core::count::Counter;
use crate::core::extract::Extractor;
use crate::core::{ConfigProvider, ExtractOutcome, Storage};
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum RunSummary {
    Completed {
        json_path: String,
        csv_path: String,
        records: usize,
        unique_names: usize,
    },
    /// 找不到陣列字面值，後續階段未執行
    NotFound,
}

/// Runs extract, count and convert in order against one storage.
pub struct EtlEngine<'a, S: Storage, C: ConfigProvider> {
    storage: &'a S,
    config: &'a C,
}

impl<'a, S: Storage, C: ConfigProvider> EtlEngine<'a, S, C> {
    pub fn new(storage: &'a S, config: &'a C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("Starting locations ETL");

        // Extract
        let records = match Extractor::new(self.storage, self.config).run()? {
            ExtractOutcome::Saved { records, .. } => records,
            ExtractOutcome::NotFound => return Ok(RunSummary::NotFound),
        };

        // Count
        let unique_names = Counter::new(self.storage, self.config).run()?;

        // Convert
        let csv_path = Converter::new(self.storage, self.config).run()?;

        tracing::info!("ETL finished in {:?}", started.elapsed());
        Ok(RunSummary::Completed {
            json_path: self.config.json_path().to_string(),
            csv_path,
            records,
            unique_names,
        })
    }
}
