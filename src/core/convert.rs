use crate::core::{parse_records, ConfigProvider, RawRecord, Storage};
use crate::utils::error::Result;
use serde_json::Value;
use std::io::Write;

pub const CSV_HEADER: [&str; 3] = ["latitude", "longitude", "name"];

// 不做型別轉換：數字沿用 JSON 文字，字串原樣輸出。
// 布林值寫成 JSON 的 true/false（舊版 Python 腳本寫的是 True/False）
fn csv_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Writes the header and one row per record, every field in source order.
///
/// Records are not cut down to three fields here, so a row can be longer
/// or shorter than the header. Rows end in CRLF.
pub fn write_csv<W: Write>(records: &[RawRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(record.iter().map(csv_field))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn locations_to_csv(records: &[RawRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(buffer)
}

pub struct Converter<'a, S: Storage, C: ConfigProvider> {
    storage: &'a S,
    config: &'a C,
}

impl<'a, S: Storage, C: ConfigProvider> Converter<'a, S, C> {
    pub fn new(storage: &'a S, config: &'a C) -> Self {
        Self { storage, config }
    }

    /// Returns the path of the written CSV file.
    pub fn run(&self) -> Result<String> {
        let json_path = self.config.json_path();
        let csv_path = self.config.csv_path();
        tracing::info!("Converting {} to {}", json_path, csv_path);

        let data = self.storage.read_file(json_path)?;
        let records = parse_records(&data)?;
        let csv = locations_to_csv(&records)?;

        self.storage.write_file(csv_path, &csv)?;
        tracing::debug!("Wrote {} rows ({} bytes)", records.len(), csv.len());

        Ok(csv_path.to_string())
    }
}
