use crate::utils::error::{Result, ShowmailError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ShowmailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShowmailError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShowmailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowmailError::InvalidConfigValueError {
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
        return Err(ShowmailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ShowmailError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("site.base_url", "https://example.com").is_ok());
        assert!(validate_url("site.base_url", "http://example.com").is_ok());
        assert!(validate_url("site.base_url", "").is_err());
        assert!(validate_url("site.base_url", "invalid-url").is_err());
        assert!(validate_url("site.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("show.name", "The Episode").is_ok());
        assert!(validate_non_empty_string("show.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("clips.default", 4u8, 3u8, 5u8).is_ok());
        assert!(validate_range("clips.default", 6u8, 3u8, 5u8).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        assert!(validate_required_field("sheet", &present).is_ok());

        let missing: Option<String> = None;
        assert!(validate_required_field("sheet", &missing).is_err());
    }
}
