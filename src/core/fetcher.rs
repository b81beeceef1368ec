use crate::adapters::http::HttpClient;
use crate::domain::model::SpecializationSample;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// 依序抓取單一關鍵字的所有分頁，並把每筆職缺換算成薪資估計。
pub struct PageFetcher<S: VacancySource> {
    source: S,
    client: HttpClient,
}

impl<S: VacancySource> PageFetcher<S> {
    pub fn new(source: S, client: HttpClient) -> Self {
        Self { source, client }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 至少抓一頁；之後由來源判斷是否還有下一頁。
    /// `vacancies_found` 取最後一頁回報的總數。
    pub async fn fetch_specialization(&self, specialization: &str) -> Result<SpecializationSample> {
        let mut page_index: u32 = 0;
        let mut estimates = Vec::new();

        let vacancies_found = loop {
            let request = self.source.build_request(specialization, page_index);
            let body = self.client.fetch(&request).await?;
            let page = self.source.parse_page(&body)?;

            tracing::debug!(
                "{} '{}' page {}: {} listings",
                self.source.name(),
                specialization,
                page_index,
                page.listings.len()
            );

            estimates.extend(
                page.listings
                    .iter()
                    .map(|listing| listing.and_then(|bounds| bounds.estimate())),
            );

            page_index += 1;
            if !self.source.has_next_page(&page, page_index) {
                break page.total_found;
            }
        };

        Ok(SpecializationSample {
            specialization: specialization.to_string(),
            vacancies_found,
            estimates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sources::{HeadHunterSource, SuperJobSource};
    use crate::config::toml_config::{HeadHunterConfig, HttpConfig, SuperJobConfig};
    use crate::utils::error::SalaryError;
    use httpmock::prelude::*;

    fn client() -> HttpClient {
        HttpClient::new(&HttpConfig::default()).unwrap()
    }

    fn headhunter(server: &MockServer) -> HeadHunterSource {
        HeadHunterSource::new(HeadHunterConfig {
            endpoint: server.url("/vacancies"),
            ..HeadHunterConfig::default()
        })
    }

    fn superjob(server: &MockServer) -> SuperJobSource {
        SuperJobSource::new(SuperJobConfig {
            endpoint: server.url("/2.0/vacancies"),
            api_key: Some("test-key".to_string()),
            ..SuperJobConfig::default()
        })
    }

    fn hh_body(pages: u32, from: u64) -> serde_json::Value {
        serde_json::json!({
            "found": 3,
            "pages": pages,
            "items": [{"salary": {"from": from, "to": null, "currency": "RUR"}}]
        })
    }

    #[tokio::test]
    async fn test_headhunter_visits_every_reported_page() {
        let server = MockServer::start();
        let mocks: Vec<_> = (0..3)
            .map(|page| {
                server.mock(|when, then| {
                    when.method(GET)
                        .path("/vacancies")
                        .query_param("text", "Python")
                        .query_param("page", page.to_string().as_str());
                    then.status(200)
                        .header("Content-Type", "application/json")
                        .json_body(hh_body(3, 100 * (page + 1)));
                })
            })
            .collect();

        let fetcher = PageFetcher::new(headhunter(&server), client());
        let sample = fetcher.fetch_specialization("Python").await.unwrap();

        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(sample.vacancies_found, 3);
        assert_eq!(sample.estimates.len(), 3);
        assert_eq!(sample.estimates[0], Some(120.0));
    }

    #[tokio::test]
    async fn test_headhunter_page_count_is_reread_each_response() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("page", "0");
            then.status(200).json_body(hh_body(2, 100));
        });
        // 第二頁回報的總頁數變大，迴圈應該延長
        let second = server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("page", "1");
            then.status(200).json_body(hh_body(3, 100));
        });
        let third = server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("page", "2");
            then.status(200).json_body(hh_body(1, 100));
        });

        let fetcher = PageFetcher::new(headhunter(&server), client());
        let sample = fetcher.fetch_specialization("Go").await.unwrap();

        first.assert();
        second.assert();
        third.assert();
        assert_eq!(sample.estimates.len(), 3);
    }

    #[tokio::test]
    async fn test_headhunter_zero_pages_makes_single_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(200)
                .json_body(serde_json::json!({"found": 0, "pages": 0, "items": []}));
        });

        let fetcher = PageFetcher::new(headhunter(&server), client());
        let sample = fetcher.fetch_specialization("Cobol").await.unwrap();

        mock.assert_hits(1);
        assert_eq!(sample.vacancies_found, 0);
        assert!(sample.estimates.is_empty());
    }

    #[tokio::test]
    async fn test_superjob_stops_when_more_is_false() {
        let server = MockServer::start();
        let mocks: Vec<_> = [true, true, false]
            .iter()
            .enumerate()
            .map(|(page, more)| {
                server.mock(|when, then| {
                    when.method(GET)
                        .path("/2.0/vacancies")
                        .header("X-Api-App-Id", "test-key")
                        .query_param("keyword", "Java")
                        .query_param("page", page.to_string().as_str());
                    then.status(200).json_body(serde_json::json!({
                        "total": 41,
                        "more": more,
                        "objects": [{"payment_from": 100000, "payment_to": 200000}]
                    }));
                })
            })
            .collect();

        let fetcher = PageFetcher::new(superjob(&server), client());
        let sample = fetcher.fetch_specialization("Java").await.unwrap();

        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(sample.vacancies_found, 41);
        assert_eq!(sample.estimates, vec![Some(150000.0); 3]);
    }

    #[tokio::test]
    async fn test_http_error_aborts_without_retry() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(500);
        });

        let fetcher = PageFetcher::new(headhunter(&server), client());
        let err = fetcher.fetch_specialization("Python").await.unwrap_err();

        mock.assert_hits(1);
        assert!(matches!(err, SalaryError::HttpStatusError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_aborts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies");
            then.status(200).json_body(serde_json::json!({"objects": []}));
        });

        let fetcher = PageFetcher::new(superjob(&server), client());
        let err = fetcher.fetch_specialization("PHP").await.unwrap_err();

        mock.assert();
        assert!(matches!(err, SalaryError::MalformedResponse { .. }));
    }
}
