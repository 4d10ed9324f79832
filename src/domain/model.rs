use crate::utils::error::{EtlError, Result};
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One source record as found in the page, of any length.
pub type RawRecord = Vec<Value>;

/// A record projected to `(latitude, longitude, name)`.
///
/// Fields stay as JSON values: nothing is coerced, and numbers keep the
/// textual form they were parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: Value,
    pub longitude: Value,
    pub name: Value,
}

impl Location {
    /// 只保留前三個欄位。第三個之後的欄位會被直接丟棄，不做任何檢查。
    pub fn project(index: usize, fields: &[Value]) -> Result<Self> {
        match fields {
            [latitude, longitude, name, ..] => Ok(Self {
                latitude: latitude.clone(),
                longitude: longitude.clone(),
                name: name.clone(),
            }),
            _ => Err(EtlError::MalformedRecord {
                index,
                len: fields.len(),
            }),
        }
    }

    pub fn into_fields(self) -> [Value; 3] {
        [self.latitude, self.longitude, self.name]
    }
}

// 以三元素陣列輸出，與 locations.json 的格式一致
impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.latitude)?;
        tuple.serialize_element(&self.longitude)?;
        tuple.serialize_element(&self.name)?;
        tuple.end()
    }
}

/// 讀取 JSON 陣列的陣列，保留每筆記錄的所有欄位
pub fn parse_records(data: &[u8]) -> Result<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_slice(data)?;
    Ok(records)
}

/// Parses a persisted location collection (a JSON array of arrays).
///
/// A top level that is not an array, or an element that is not an array,
/// fails as a JSON error. An element with fewer than three positions fails
/// as [`EtlError::MalformedRecord`].
pub fn parse_collection(data: &[u8]) -> Result<Vec<Location>> {
    parse_records(data)?
        .iter()
        .enumerate()
        .map(|(index, fields)| Location::project(index, fields))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    Saved { path: String, records: usize },
    NotFound,
}
