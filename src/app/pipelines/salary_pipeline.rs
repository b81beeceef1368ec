use crate::core::aggregate::build_report;
use crate::core::fetcher::PageFetcher;
use crate::core::{Pipeline, Result, SalaryReport, SpecializationSample, VacancySource};
use crate::render::{self, OutputFormat};
use tracing::Instrument;

/// 單一職缺來源的報表管道：逐一關鍵字抓取、彙總、輸出
pub struct SalaryPipeline<S: VacancySource> {
    fetcher: PageFetcher<S>,
    specializations: Vec<String>,
    title: String,
    format: OutputFormat,
}

impl<S: VacancySource> SalaryPipeline<S> {
    pub fn new(
        fetcher: PageFetcher<S>,
        specializations: Vec<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            specializations,
            title: title.into(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// 依輸入順序彙總所有關鍵字，全部完成才回傳
    pub async fn aggregate(&self) -> Result<SalaryReport> {
        let samples = self.extract().await?;
        self.transform(samples).await
    }
}

#[async_trait::async_trait]
impl<S: VacancySource> Pipeline for SalaryPipeline<S> {
    async fn extract(&self) -> Result<Vec<SpecializationSample>> {
        let source = self.fetcher.source().name();
        tracing::info!(
            "🚀 Starting {} extraction for {} specializations",
            source,
            self.specializations.len()
        );

        let mut samples = Vec::with_capacity(self.specializations.len());
        for specialization in &self.specializations {
            let span = tracing::info_span!("fetch", source, specialization = %specialization);
            let sample = self
                .fetcher
                .fetch_specialization(specialization)
                .instrument(span)
                .await?;
            tracing::info!(
                "{} '{}': found {}, fetched {} listings",
                source,
                specialization,
                sample.vacancies_found,
                sample.estimates.len()
            );
            samples.push(sample);
        }

        Ok(samples)
    }

    async fn transform(&self, samples: Vec<SpecializationSample>) -> Result<SalaryReport> {
        let report = build_report(&self.title, &samples);

        for stats in report.iter() {
            match stats.average_salary {
                Some(average) => tracing::debug!(
                    "{}: processed {}, average {:.0}",
                    stats.specialization,
                    stats.vacancies_processed,
                    average
                ),
                None => tracing::warn!(
                    "No usable salaries for '{}' ({} found)",
                    stats.specialization,
                    stats.vacancies_found
                ),
            }
        }

        Ok(report)
    }

    async fn load(&self, report: SalaryReport) -> Result<String> {
        render::render(&report, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::HttpClient;
    use crate::adapters::sources::HeadHunterSource;
    use crate::config::toml_config::{HeadHunterConfig, HttpConfig};
    use httpmock::prelude::*;

    fn pipeline(server: &MockServer, specializations: &[&str]) -> SalaryPipeline<HeadHunterSource> {
        let source = HeadHunterSource::new(HeadHunterConfig {
            endpoint: server.url("/vacancies"),
            ..HeadHunterConfig::default()
        });
        let client = HttpClient::new(&HttpConfig::default()).unwrap();
        SalaryPipeline::new(
            PageFetcher::new(source, client),
            specializations.iter().map(|s| s.to_string()).collect(),
            "HeadHunter Moscow",
        )
    }

    #[tokio::test]
    async fn test_aggregate_single_page_python() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", "Python")
                .query_param("page", "0");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "found": 2,
                    "pages": 1,
                    "items": [
                        {"salary": {"from": 100000, "to": 150000, "currency": "RUR"}},
                        {"salary": null}
                    ]
                }));
        });

        let report = pipeline(&server, &["Python"]).aggregate().await.unwrap();

        api_mock.assert();
        let python = report.get("Python").unwrap();
        assert_eq!(python.vacancies_found, 2);
        assert_eq!(python.vacancies_processed, 1);
        assert_eq!(python.average_salary, Some(125000.0));
    }

    #[tokio::test]
    async fn test_specializations_processed_in_order() {
        let server = MockServer::start();
        let ruby = server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", "Ruby");
            then.status(200).json_body(serde_json::json!({
                "found": 5, "pages": 1, "items": [{"salary": null}]
            }));
        });
        let java = server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", "Java");
            then.status(200).json_body(serde_json::json!({
                "found": 7, "pages": 1,
                "items": [{"salary": {"from": null, "to": 200000, "currency": "RUR"}}]
            }));
        });

        let report = pipeline(&server, &["Ruby", "Java"]).aggregate().await.unwrap();

        ruby.assert();
        java.assert();
        assert_eq!(report.specializations(), vec!["Ruby", "Java"]);
        assert_eq!(report.get("Ruby").unwrap().average_salary, None);
        assert_eq!(report.get("Java").unwrap().average_salary, Some(180000.0));
    }

    #[tokio::test]
    async fn test_failure_mid_run_returns_no_partial_report() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", "PHP");
            then.status(200).json_body(serde_json::json!({
                "found": 1, "pages": 1, "items": []
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", "CSS");
            then.status(503);
        });

        let result = pipeline(&server, &["PHP", "CSS"]).aggregate().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_renders_table() {
        let server = MockServer::start();
        let pipeline = pipeline(&server, &[]);

        let mut report = SalaryReport::new("HeadHunter Moscow");
        report.insert(crate::core::SpecializationStats {
            specialization: "C#".to_string(),
            vacancies_found: 12,
            vacancies_processed: 4,
            average_salary: Some(210000.0),
        });

        let output = pipeline.load(report).await.unwrap();
        assert!(output.starts_with("HeadHunter Moscow"));
        assert!(output.contains("210000"));
    }
}
