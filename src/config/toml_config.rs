use crate::utils::error::{Result, SalaryError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HEADHUNTER_ENDPOINT: &str = "https://api.hh.ru/vacancies";
pub const DEFAULT_SUPERJOB_ENDPOINT: &str = "https://api.superjob.ru/2.0/vacancies";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub http: HttpConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub specializations: Vec<String>,
    pub headhunter_title: String,
    pub superjob_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub enabled: bool,
    pub endpoint: String,
    /// HeadHunter 的職類代碼，例如 1.221 (程式開發)
    pub specialization: String,
    pub area: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub count: u32,
    pub town: String,
    pub search_keys: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            specializations: [
                "Python",
                "JavaScrip",
                "Java",
                "Ruby",
                "PHP",
                "C++",
                "CSS",
                "C#",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            headhunter_title: "HeadHunter Moscow".to_string(),
            superjob_title: "SuperJob Moscow".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: format!("salary-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_HEADHUNTER_ENDPOINT.to_string(),
            specialization: "1.221".to_string(),
            area: 1,
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_SUPERJOB_ENDPOINT.to_string(),
            api_key: None,
            count: 20,
            town: "Москва".to_string(),
            search_keys: "Программист".to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SalaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SalaryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SECRET_KEY})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SalaryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    pub fn specializations(&self) -> &[String] {
        &self.report.specializations
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.report.specializations.is_empty() {
            return Err(SalaryError::MissingConfigError {
                field: "report.specializations".to_string(),
            });
        }
        for name in &self.report.specializations {
            validation::validate_non_empty_string("report.specializations", name)?;
        }

        if !self.headhunter.enabled && !self.superjob.enabled {
            return Err(SalaryError::ConfigValidationError {
                field: "headhunter.enabled/superjob.enabled".to_string(),
                message: "at least one vacancy source must be enabled".to_string(),
            });
        }

        if let Some(timeout) = self.http.timeout_seconds {
            validation::validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }

        if self.headhunter.enabled {
            validation::validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
            validation::validate_non_empty_string(
                "headhunter.specialization",
                &self.headhunter.specialization,
            )?;
        }

        if self.superjob.enabled {
            validation::validate_url("superjob.endpoint", &self.superjob.endpoint)?;
            validation::validate_range("superjob.count", self.superjob.count, 1, 100)?;

            let key = validation::validate_required_field("superjob.api_key", &self.superjob.api_key)?;
            validation::validate_non_empty_string("superjob.api_key", key)?;
            if key.starts_with("${") {
                return Err(SalaryError::InvalidConfigValueError {
                    field: "superjob.api_key".to_string(),
                    value: key.clone(),
                    reason: "environment variable is not set".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
