use crate::domain::model::{SalaryReport, SpecializationSample, SpecializationStats};

/// 只保留有估計值的職缺，計算筆數與平均。
/// 沒有任何估計值時平均為 `None`。
pub fn summarize(sample: &SpecializationSample) -> SpecializationStats {
    let known: Vec<f64> = sample.estimates.iter().flatten().copied().collect();

    SpecializationStats {
        specialization: sample.specialization.clone(),
        vacancies_found: sample.vacancies_found,
        vacancies_processed: known.len(),
        average_salary: mean(&known),
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn build_report(title: &str, samples: &[SpecializationSample]) -> SalaryReport {
    let mut report = SalaryReport::new(title);
    for sample in samples {
        report.insert(summarize(sample));
    }
    report
}
