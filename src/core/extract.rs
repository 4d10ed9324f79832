use crate::core::{ConfigProvider, ExtractOutcome, Location, RawRecord, Storage};
use crate::utils::error::{EtlError, Result};
use regex::Regex;

const ANY_IDENTIFIER: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

/// Locates `var <name> = [[...]];` in a page and isolates the array literal.
///
/// The literal is matched lazily across newlines, so it ends at the first
/// `]];` after the opening `[[`.
#[derive(Debug, Clone)]
pub struct LiteralPattern {
    regex: Regex,
}

impl LiteralPattern {
    pub fn new(variable: Option<&str>) -> Result<Self> {
        let ident = match variable {
            Some(name) => regex::escape(name),
            None => ANY_IDENTIFIER.to_string(),
        };
        let pattern = format!(r"(?s)var\s+{}\s*=\s*(\[\[.*?\]\]);", ident);
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn find<'h>(&self, html: &'h str) -> Option<&'h str> {
        self.regex
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// 先用正規表達式切出陣列字面值，再交給 JSON 解析器
///
/// Returns `Ok(None)` when the page has no matching assignment. A literal
/// that is found but is not valid JSON is an error.
pub fn extract_locations_from_html(
    html: &str,
    pattern: &LiteralPattern,
) -> Result<Option<Vec<RawRecord>>> {
    let Some(literal) = pattern.find(html) else {
        return Ok(None);
    };

    tracing::debug!("Matched array literal of {} bytes", literal.len());
    let records: Vec<RawRecord> = serde_json::from_str(literal)?;
    Ok(Some(records))
}

/// Projects every record to `(latitude, longitude, name)`.
///
/// Fields past the third are dropped without inspection. Whether the
/// source ever carries meaningful data there is unknown, so the number of
/// dropped fields is logged.
pub fn filter_location_data(records: &[RawRecord]) -> Result<Vec<Location>> {
    let dropped: usize = records.iter().map(|r| r.len().saturating_sub(3)).sum();
    if dropped > 0 {
        tracing::debug!(
            "Dropping {} trailing field(s) across {} records",
            dropped,
            records.len()
        );
    }

    records
        .iter()
        .enumerate()
        .map(|(index, fields)| Location::project(index, fields))
        .collect()
}

pub struct Extractor<'a, S: Storage, C: ConfigProvider> {
    storage: &'a S,
    config: &'a C,
}

impl<'a, S: Storage, C: ConfigProvider> Extractor<'a, S, C> {
    pub fn new(storage: &'a S, config: &'a C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<ExtractOutcome> {
        let html_path = self.config.html_path();
        tracing::info!("Reading HTML from: {}", html_path);

        let bytes = self.storage.read_file(html_path)?;
        let html = String::from_utf8(bytes).map_err(|e| {
            EtlError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let pattern = LiteralPattern::new(self.config.variable())?;
        let Some(records) = extract_locations_from_html(&html, &pattern)? else {
            tracing::warn!("No array literal found in {}", html_path);
            return Ok(ExtractOutcome::NotFound);
        };

        let locations = filter_location_data(&records)?;
        let json = serde_json::to_vec_pretty(&locations)?;

        let json_path = self.config.json_path();
        self.storage.write_file(json_path, &json)?;
        tracing::info!("Wrote {} locations to {}", locations.len(), json_path);

        Ok(ExtractOutcome::Saved {
            path: json_path.to_string(),
            records: locations.len(),
        })
    }
}
