use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn html_path(&self) -> &str;
    fn json_path(&self) -> &str;
    fn csv_path(&self) -> &str;
    /// `None` 表示接受任何變數名稱
    fn variable(&self) -> Option<&str>;
}
