use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{EtlError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, data: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
        self
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Storage for MockStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

pub struct MockConfig {
    pub variable: Option<String>,
}

impl MockConfig {
    pub fn new() -> Self {
        Self { variable: None }
    }
}

impl ConfigProvider for MockConfig {
    fn html_path(&self) -> &str {
        "locations.html"
    }

    fn json_path(&self) -> &str {
        "locations.json"
    }

    fn csv_path(&self) -> &str {
        "locations.csv"
    }

    fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }
}
