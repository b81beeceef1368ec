pub mod salary_pipeline;

pub use salary_pipeline::SalaryPipeline;
