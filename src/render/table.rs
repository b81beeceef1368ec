use crate::domain::model::{SalaryReport, SpecializationStats};
use crate::utils::error::Result;
use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// 沒有任何可用薪資時顯示的值
const NO_SALARY: &str = "-";

pub fn render_table(report: &SalaryReport) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADERS.to_vec());

    for stats in report.iter() {
        table.add_row(row(stats));
    }

    format!("{}\n{}", report.title, table)
}

pub fn render_json(report: &SalaryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn row(stats: &SpecializationStats) -> Vec<String> {
    vec![
        stats.specialization.clone(),
        stats.vacancies_found.to_string(),
        stats.vacancies_processed.to_string(),
        format_salary(stats.average_salary),
    ]
}

/// 平均薪資取整數 (無條件捨去小數)
fn format_salary(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{}", value.trunc() as i64),
        None => NO_SALARY.to_string(),
    }
}
