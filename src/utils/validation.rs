use crate::utils::error::{Result, SalaryError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SalaryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SalaryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
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
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("headhunter.endpoint", "https://api.hh.ru/vacancies").is_ok());
        assert!(validate_url("headhunter.endpoint", "http://127.0.0.1:8080/v").is_ok());
        assert!(validate_url("headhunter.endpoint", "").is_err());
        assert!(validate_url("headhunter.endpoint", "invalid-url").is_err());
        assert!(validate_url("headhunter.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("http.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("http.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let key = Some("secret".to_string());
        assert_eq!(validate_required_field("superjob.api_key", &key).unwrap(), "secret");

        let missing: Option<String> = None;
        let err = validate_required_field("superjob.api_key", &missing).unwrap_err();
        assert!(matches!(err, SalaryError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("superjob.count", 20, 1, 100).is_ok());
        assert!(validate_range("superjob.count", 0, 1, 100).is_err());
        assert!(validate_range("superjob.count", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("report.specializations", "Python").is_ok());
        assert!(validate_non_empty_string("report.specializations", "   ").is_err());
    }
}
