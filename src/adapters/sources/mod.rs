pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;

use crate::utils::error::SalaryError;

pub(crate) fn malformed(provider: &str, error: serde_json::Error) -> SalaryError {
    SalaryError::MalformedResponse {
        provider: provider.to_string(),
        message: error.to_string(),
    }
}
