use crate::utils::error::{Result, WhoArtError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WhoArtError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 字元集至少要兩個字元才能表現明暗
pub fn validate_charset(field_name: &str, charset: &str) -> Result<()> {
    if charset.chars().count() < 2 {
        return Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: charset.to_string(),
            reason: "Charset needs at least two glyphs".to_string(),
        });
    }
    if charset.chars().any(|c| c.is_control()) {
        return Err(WhoArtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: charset.escape_debug().to_string(),
            reason: "Charset cannot contain control characters".to_string(),
        });
    }
    Ok(())
}
