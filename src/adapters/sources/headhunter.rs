use crate::adapters::sources::malformed;
use crate::config::toml_config::HeadHunterConfig;
use crate::domain::model::{Pagination, SalaryBounds, VacancyPage};
use crate::domain::ports::{PageRequest, VacancySource};
use crate::utils::error::Result;
use serde::Deserialize;

/// 唯一接受計算的幣別，其他幣別的薪資視為未知
pub const DOMESTIC_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    #[serde(default)]
    salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl HhVacancy {
    fn bounds(&self) -> Option<SalaryBounds> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(DOMESTIC_CURRENCY) {
            return None;
        }
        Some(SalaryBounds::new(salary.from, salary.to))
    }
}

/// HeadHunter (api.hh.ru)，以總頁數分頁
#[derive(Debug, Clone)]
pub struct HeadHunterSource {
    config: HeadHunterConfig,
}

impl HeadHunterSource {
    pub fn new(config: HeadHunterConfig) -> Self {
        Self { config }
    }
}

impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn build_request(&self, specialization: &str, page: u32) -> PageRequest {
        PageRequest {
            url: self.config.endpoint.clone(),
            headers: Vec::new(),
            query: vec![
                (
                    "specialization".to_string(),
                    self.config.specialization.clone(),
                ),
                ("area".to_string(), self.config.area.to_string()),
                ("text".to_string(), specialization.to_string()),
                ("page".to_string(), page.to_string()),
            ],
        }
    }

    fn parse_page(&self, body: &[u8]) -> Result<VacancyPage> {
        let page: HhPage = serde_json::from_slice(body).map_err(|e| malformed(self.name(), e))?;

        Ok(VacancyPage {
            total_found: page.found,
            listings: page.items.iter().map(HhVacancy::bounds).collect(),
            pagination: Pagination::Pages(page.pages),
        })
    }
}
