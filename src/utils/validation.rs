use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// JavaScript 變數名稱：首字元為字母、`_` 或 `$`，其後可含數字
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid_head = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false);
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !valid_head || !valid_tail {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid JavaScript identifier".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct_paths(field_name: &str, a: &str, b: &str) -> Result<()> {
    if a == b {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: a.to_string(),
            reason: "Input and output paths must differ".to_string(),
        });
    }
    Ok(())
}
