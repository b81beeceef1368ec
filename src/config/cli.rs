use crate::config::toml_config::TomlConfig;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelection {
    #[value(name = "hh")]
    HeadHunter,
    #[value(name = "sj")]
    SuperJob,
    All,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Vacancy counts and average salaries per programming language")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Comma separated specializations, overrides the config file
    #[arg(long, value_delimiter = ',')]
    pub specializations: Vec<String>,

    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub source: SourceSelection,

    /// SuperJob application key
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub superjob_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if !self.specializations.is_empty() {
            config.report.specializations = self.specializations.clone();
        }

        if let Some(key) = &self.superjob_key {
            config.superjob.api_key = Some(key.clone());
        }

        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = Some(timeout);
        }

        match self.source {
            SourceSelection::HeadHunter => {
                config.headhunter.enabled = true;
                config.superjob.enabled = false;
            }
            SourceSelection::SuperJob => {
                config.headhunter.enabled = false;
                config.superjob.enabled = true;
            }
            SourceSelection::All => {}
        }
    }
}
