use crate::domain::estimate::predict_salary;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// 單一職缺的薪資區間
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryBounds {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryBounds {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }

    pub fn estimate(&self) -> Option<f64> {
        predict_salary(self.from, self.to)
    }
}

/// 分頁方式：HeadHunter 回報總頁數，SuperJob 回報是否還有下一頁
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    Pages(u32),
    More(bool),
}

impl Pagination {
    /// `next_page` 是下一個要抓的頁碼 (0 起算)
    pub fn has_next(&self, next_page: u32) -> bool {
        match *self {
            Pagination::Pages(total) => next_page < total,
            Pagination::More(more) => more,
        }
    }
}

/// 解析後的一頁結果。`listings` 中的 `None` 代表該職缺沒有可用薪資。
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyPage {
    pub total_found: u64,
    pub listings: Vec<Option<SalaryBounds>>,
    pub pagination: Pagination,
}

/// 一個關鍵字抓完所有分頁後的原始資料
#[derive(Debug, Clone, PartialEq)]
pub struct SpecializationSample {
    pub specialization: String,
    pub vacancies_found: u64,
    pub estimates: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationStats {
    pub specialization: String,
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: Option<f64>,
}

/// 依插入順序保存的統計結果。
///
/// 重複的關鍵字會覆寫既有的值，但保留原本的位置。
/// 序列化成以關鍵字為 key 的物件，標題不輸出。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryReport {
    pub title: String,
    entries: Vec<SpecializationStats>,
}

impl SalaryReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, stats: SpecializationStats) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.specialization == stats.specialization)
        {
            Some(existing) => *existing = stats,
            None => self.entries.push(stats),
        }
    }

    pub fn get(&self, specialization: &str) -> Option<&SpecializationStats> {
        self.entries
            .iter()
            .find(|stats| stats.specialization == specialization)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecializationStats> {
        self.entries.iter()
    }

    pub fn specializations(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|stats| stats.specialization.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Serialize)]
struct StatsEntry {
    vacancies_found: u64,
    vacancies_processed: usize,
    average_salary: Option<f64>,
}

impl Serialize for SalaryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for stats in &self.entries {
            let entry = StatsEntry {
                vacancies_found: stats.vacancies_found,
                vacancies_processed: stats.vacancies_processed,
                average_salary: stats.average_salary,
            };
            map.serialize_entry(&stats.specialization, &entry)?;
        }
        map.end()
    }
}
