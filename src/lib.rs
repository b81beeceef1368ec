pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{pipelines::SalaryPipeline, run_report};
pub use config::TomlConfig;
pub use core::etl::ReportEngine;
pub use domain::estimate::predict_salary;
pub use utils::error::{Result, SalaryError};
