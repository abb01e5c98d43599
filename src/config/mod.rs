pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde_json::Value;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::{RequestConfig, RequestFile};

/// 以 JSON 解析運算元：`2` 為數字，`'"2"'` 為字串
/// 非合法 JSON 的輸入視為純文字
#[cfg(feature = "cli")]
pub fn parse_operand(raw: &str) -> std::result::Result<Value, String> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-demo")]
#[command(about = "Circle geometry and strictly typed addition")]
pub struct DemoConfig {
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub radius: f64,

    #[arg(long, default_value = "2", value_parser = parse_operand, allow_hyphen_values = true)]
    pub augend: Value,

    #[arg(long, default_value = "2", value_parser = parse_operand, allow_hyphen_values = true)]
    pub addend: Value,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fetch_demo")]
#[command(about = "Issue one GET request and print the outcome")]
pub struct FetchConfig {
    #[arg(long, help = "Target URL (default: http://www.google.com)")]
    pub url: Option<String>,

    #[arg(long, help = "Request timeout; unset means no timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with a [request] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl FetchConfig {
    /// 合併設定：命令列參數 > 設定檔 > 預設值
    pub fn request_config(&self) -> Result<RequestConfig> {
        let mut request = match &self.config {
            Some(path) => RequestFile::from_file(path)?.request,
            None => RequestConfig::default(),
        };

        if let Some(url) = &self.url {
            request.endpoint = url.clone();
        }
        if self.timeout_seconds.is_some() {
            request.timeout_seconds = self.timeout_seconds;
        }

        Ok(request)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_demo_defaults() {
        let config = DemoConfig::parse_from(["calc-demo"]);
        assert_eq!(config.radius, 4.0);
        assert_eq!(config.augend, json!(2));
        assert_eq!(config.addend, json!(2));
    }

    #[test]
    fn test_quoted_operand_stays_string() {
        let config = DemoConfig::parse_from(["calc-demo", "--augend", "\"2\"", "--addend", "abc"]);
        assert_eq!(config.augend, json!("2"));
        assert_eq!(config.addend, json!("abc"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(
            temp,
            "[request]\nendpoint = \"http://from-file.test/\"\ntimeout_seconds = 9"
        )
        .unwrap();

        let config = FetchConfig::parse_from([
            "fetch_demo",
            "--config",
            temp.path().to_str().unwrap(),
            "--url",
            "http://from-cli.test/",
        ]);
        let request = config.request_config().unwrap();

        assert_eq!(request.endpoint, "http://from-cli.test/");
        assert_eq!(request.timeout_seconds, Some(9));
    }

    #[test]
    fn test_fetch_defaults_have_no_timeout() {
        let request = FetchConfig::parse_from(["fetch_demo"]).request_config().unwrap();
        assert_eq!(request.endpoint, toml_config::DEFAULT_ENDPOINT);
        assert!(request.timeout_seconds.is_none());
    }
}
