pub mod pipelines;

use crate::adapters::http::HttpClient;
use crate::adapters::sources::{HeadHunterSource, SuperJobSource};
use crate::config::toml_config::TomlConfig;
use crate::core::etl::ReportEngine;
use crate::core::fetcher::PageFetcher;
use crate::render::OutputFormat;
use crate::utils::error::Result;
use pipelines::SalaryPipeline;

/// 依序跑完所有啟用的來源 (HeadHunter 先，SuperJob 後)，回傳每個來源的輸出文字。
/// 任何一個來源失敗就整體失敗。
pub async fn run_report(config: &TomlConfig, format: OutputFormat) -> Result<Vec<String>> {
    let client = HttpClient::new(&config.http)?;
    let mut outputs = Vec::new();

    if config.headhunter.enabled {
        let fetcher = PageFetcher::new(
            HeadHunterSource::new(config.headhunter.clone()),
            client.clone(),
        );
        let pipeline = SalaryPipeline::new(
            fetcher,
            config.specializations().to_vec(),
            config.report.headhunter_title.clone(),
        )
        .with_format(format);
        outputs.push(ReportEngine::new(pipeline).run().await?);
    }

    if config.superjob.enabled {
        let fetcher = PageFetcher::new(SuperJobSource::new(config.superjob.clone()), client);
        let pipeline = SalaryPipeline::new(
            fetcher,
            config.specializations().to_vec(),
            config.report.superjob_title.clone(),
        )
        .with_format(format);
        outputs.push(ReportEngine::new(pipeline).run().await?);
    }

    Ok(outputs)
}
