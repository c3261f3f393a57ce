use crate::utils::error::{CellBaseError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CellBaseError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A value that becomes a single URL path segment (version, species).
pub fn validate_path_segment(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('/') {
        return Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not contain '/'".to_string(),
        });
    }

    // URL path normalisation drops `.` and `..` segments.
    if value == "." || value == ".." {
        return Err(CellBaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be a dot segment".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("host", "https://ws.zettagenomics.com/cellbase").is_ok());
        assert!(validate_url("host", "http://localhost:9090").is_ok());
        assert!(validate_url("host", "").is_err());
        assert!(validate_url("host", "invalid-url").is_err());
        assert!(validate_url("host", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("species", "hsapiens").is_ok());
        assert!(validate_path_segment("species", "  ").is_err());

        let err = validate_path_segment("version", "v5/extra").unwrap_err();
        match err {
            CellBaseError::InvalidConfigValueError { field, .. } => assert_eq!(field, "version"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_path_segment_rejects_dot_segments() {
        assert!(validate_path_segment("version", ".").is_err());
        assert!(validate_path_segment("species", "..").is_err());
        assert!(validate_path_segment("version", "v5.1").is_ok());
    }
}
