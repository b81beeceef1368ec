use crate::config::toml_config::HttpConfig;
use crate::domain::ports::PageRequest;
use crate::utils::error::{Result, SalaryError};
use reqwest::Client;
use std::time::Duration;

/// reqwest 的薄包裝，負責送出分頁請求並檢查狀態碼
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        // 未設定時不限時，和原本一次性報表的行為一致
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// 送出 GET 請求並回傳原始 body；非 2xx 直接失敗，不重試
    pub async fn fetch(&self, request: &PageRequest) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {} {:?}", request.url, request.query);

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(SalaryError::HttpStatusError {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
