use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BrowseError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BrowseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BrowseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOG_API_BASE_URL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("api.base_url", &self.api.base_url)?;
        crate::utils::validation::validate_positive_number(
            "api.timeout_seconds",
            self.timeout_seconds(),
            1,
        )?;
        Ok(())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://dog.ceo/api"
timeout_seconds = 5

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://dog.ceo/api");
        assert_eq!(config.timeout_seconds(), 5);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let toml_content = r#"
[api]
base_url = "https://dog.ceo/api"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_DOG_API_BASE_URL", "https://dog.test.local/api");

        let toml_content = r#"
[api]
base_url = "${TEST_DOG_API_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://dog.test.local/api");

        std::env::remove_var("TEST_DOG_API_BASE_URL");
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let toml_content = r#"
[api]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
base_url = "https://dog.ceo/api"
timeout_seconds = 3
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.timeout_seconds(), 3);
    }
}
