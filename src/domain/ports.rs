use crate::domain::model::{SalaryReport, SpecializationSample, VacancyPage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 單次分頁請求。每次呼叫都重新建立，不共用可變狀態。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

/// 職缺資料來源：組請求、解析分頁、判斷是否繼續。
pub trait VacancySource: Send + Sync {
    fn name(&self) -> &str;

    fn build_request(&self, specialization: &str, page: u32) -> PageRequest;

    fn parse_page(&self, body: &[u8]) -> Result<VacancyPage>;

    fn has_next_page(&self, page: &VacancyPage, next_page: u32) -> bool {
        page.pagination.has_next(next_page)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SpecializationSample>>;
    async fn transform(&self, samples: Vec<SpecializationSample>) -> Result<SalaryReport>;
    async fn load(&self, report: SalaryReport) -> Result<String>;
}
