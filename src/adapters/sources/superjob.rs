use crate::adapters::sources::malformed;
use crate::config::toml_config::SuperJobConfig;
use crate::domain::model::{Pagination, SalaryBounds, VacancyPage};
use crate::domain::ports::{PageRequest, VacancySource};
use crate::utils::error::Result;
use serde::Deserialize;

pub const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    more: bool,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct SjVacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
}

/// SuperJob (api.superjob.ru)，以 `more` 旗標分頁
#[derive(Debug, Clone)]
pub struct SuperJobSource {
    config: SuperJobConfig,
}

impl SuperJobSource {
    pub fn new(config: SuperJobConfig) -> Self {
        Self { config }
    }
}

impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "SuperJob"
    }

    fn build_request(&self, specialization: &str, page: u32) -> PageRequest {
        let headers = self
            .config
            .api_key
            .iter()
            .map(|key| (APP_ID_HEADER.to_string(), key.clone()))
            .collect();

        PageRequest {
            url: self.config.endpoint.clone(),
            headers,
            query: vec![
                ("keyword".to_string(), specialization.to_string()),
                ("page".to_string(), page.to_string()),
                ("count".to_string(), self.config.count.to_string()),
                ("town".to_string(), self.config.town.clone()),
                // 只搜尋職稱，關鍵字之間用 or
                ("keywords[0][srws]".to_string(), "1".to_string()),
                ("keywords[0][skwc]".to_string(), "or".to_string()),
                ("keywords[0][keys]".to_string(), self.config.search_keys.clone()),
            ],
        }
    }

    fn parse_page(&self, body: &[u8]) -> Result<VacancyPage> {
        let page: SjPage = serde_json::from_slice(body).map_err(|e| malformed(self.name(), e))?;

        Ok(VacancyPage {
            total_found: page.total,
            listings: page
                .objects
                .iter()
                .map(|vacancy| Some(SalaryBounds::new(vacancy.payment_from, vacancy.payment_to)))
                .collect(),
            pagination: Pagination::More(page.more),
        })
    }
}
