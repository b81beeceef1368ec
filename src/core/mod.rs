pub mod aggregate;
pub mod etl;
pub mod fetcher;

pub use crate::domain::model::{SalaryReport, SpecializationSample, SpecializationStats};
pub use crate::domain::ports::{PageRequest, Pipeline, VacancySource};
pub use crate::utils::error::Result;
