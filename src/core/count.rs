use crate::core::{parse_collection, ConfigProvider, Location, Storage};
use crate::utils::error::Result;
use std::collections::HashSet;

/// Number of distinct values in the `name` position.
///
/// Names compare exactly, with no case or whitespace folding. Each name is
/// keyed by its JSON text, so the number `7` and the string `"7"` differ.
pub fn count_unique_locations(locations: &[Location]) -> usize {
    let mut unique_names: HashSet<String> = HashSet::new();
    for location in locations {
        unique_names.insert(location.name.to_string());
    }
    unique_names.len()
}

pub struct Counter<'a, S: Storage, C: ConfigProvider> {
    storage: &'a S,
    config: &'a C,
}

impl<'a, S: Storage, C: ConfigProvider> Counter<'a, S, C> {
    pub fn new(storage: &'a S, config: &'a C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<usize> {
        let json_path = self.config.json_path();
        tracing::info!("Counting locations in: {}", json_path);

        let data = self.storage.read_file(json_path)?;
        let locations = parse_collection(&data)?;
        let unique = count_unique_locations(&locations);

        tracing::debug!("{} records, {} unique names", locations.len(), unique);
        Ok(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{MockConfig, MockStorage};
    use crate::utils::error::EtlError;

    fn counter_for(json: &str) -> Result<usize> {
        let storage = MockStorage::new().with_file("locations.json", json.as_bytes());
        let config = MockConfig::new();
        Counter::new(&storage, &config).run()
    }

    #[test]
    fn test_count_with_duplicates() {
        assert_eq!(counter_for(r#"[[1,2,"A"],[3,4,"B"],[5,6,"A"]]"#).unwrap(), 2);
    }

    #[test]
    fn test_count_empty_collection() {
        assert_eq!(counter_for("[]").unwrap(), 0);
    }

    #[test]
    fn test_count_is_exact_match() {
        let json = r#"[[1,2,"Park"],[3,4,"park"],[5,6,"Park "],[7,8,"Park"]]"#;
        assert_eq!(counter_for(json).unwrap(), 3);
    }

    #[test]
    fn test_count_non_string_names() {
        let json = r#"[[1,2,7],[3,4,"7"],[5,6,7],[7,8,null]]"#;
        // 7 與 "7" 不同
        assert_eq!(counter_for(json).unwrap(), 3);
    }

    #[test]
    fn test_count_rejects_non_array() {
        assert!(matches!(
            counter_for(r#"{"locations": []}"#),
            Err(EtlError::SerializationError(_))
        ));
    }

    #[test]
    fn test_count_rejects_short_record() {
        assert!(matches!(
            counter_for(r#"[[1,2,"A"],[3,4]]"#),
            Err(EtlError::MalformedRecord { index: 1, len: 2 })
        ));
    }

    #[test]
    fn test_count_missing_file() {
        let storage = MockStorage::new();
        let config = MockConfig::new();
        assert!(matches!(
            Counter::new(&storage, &config).run(),
            Err(EtlError::IoError(_))
        ));
    }
}
