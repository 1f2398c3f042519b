use crate::utils::error::{FloristError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FloristError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FloristError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_fee(field_name: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() {
        return Err(FloristError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Fee cannot be negative".to_string(),
        });
    }
    Ok(())
}
