use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://www.google.com";
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// TOML 請求設定檔，例如：
///
/// ```toml
/// [request]
/// endpoint = "https://example.com"
/// timeout_seconds = 10
/// headers = { Accept = "text/html" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

impl RequestFile {
    /// 從檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for RequestConfig {
    fn validate(&self) -> Result<()> {
        validate_url("request.endpoint", &self.endpoint)?;

        if let Some(seconds) = self.timeout_seconds {
            validate_range("request.timeout_seconds", seconds, 1, MAX_TIMEOUT_SECONDS)?;
        }

        for name in self.headers.keys() {
            validate_non_empty_string("request.headers", name)?;
        }

        Ok(())
    }
}

impl Validate for RequestFile {
    fn validate(&self) -> Result<()> {
        self.request.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DemoError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_request_file() {
        let toml_content = r#"
[request]
endpoint = "https://example.com/status"
timeout_seconds = 5

[request.headers]
Accept = "text/html"
"#;

        let file = RequestFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.request.endpoint, "https://example.com/status");
        assert_eq!(file.request.timeout_seconds, Some(5));
        assert_eq!(
            file.request.headers.get("Accept").map(String::as_str),
            Some("text/html")
        );
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = RequestFile::from_toml_str("").unwrap();
        assert_eq!(file.request, RequestConfig::default());
        assert_eq!(file.request.endpoint, DEFAULT_ENDPOINT);
        assert!(file.request.timeout_seconds.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[request]\nendpoint = \"http://localhost:9000/\"").unwrap();

        let file = RequestFile::from_file(temp.path()).unwrap();
        assert_eq!(file.request.endpoint, "http://localhost:9000/");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RequestFile::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DemoError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = RequestFile::from_toml_str("[request\nendpoint =").unwrap_err();
        assert!(matches!(err, DemoError::TomlError(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_scheme = RequestConfig {
            endpoint: "ftp://example.com".to_string(),
            ..RequestConfig::default()
        };
        assert!(bad_scheme.validate().is_err());

        let zero_timeout = RequestConfig {
            timeout_seconds: Some(0),
            ..RequestConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
