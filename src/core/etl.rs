use crate::core::Pipeline;
use crate::utils::error::Result;

/// 依序執行 extract → transform → load，回傳要輸出的報表文字
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🔍 Fetching vacancies...");
        let samples = self.pipeline.extract().await?;
        tracing::info!("Fetched {} specializations", samples.len());

        let report = self.pipeline.transform(samples).await?;
        tracing::info!("📊 Aggregated report '{}'", report.title);

        let output = self.pipeline.load(report).await?;
        Ok(output)
    }
}
