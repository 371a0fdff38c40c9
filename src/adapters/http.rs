use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, WhoArtError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

pub const DEFAULT_USER_AGENT: &str = concat!("whoart/", env!("CARGO_PKG_VERSION"));

/// 共用的 HTTP client；GitHub 拒絕沒有 User-Agent 的請求
pub fn build_client<C: ConfigProvider>(config: &C) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json, */*"),
    );

    if let Some(token) = config.api_token() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            WhoArtError::InvalidConfigValueError {
                field: "api.token".to_string(),
                value: "<redacted>".to_string(),
                reason: e.to_string(),
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let mut builder = Client::builder()
        .user_agent(config.user_agent())
        .default_headers(headers);

    // 預設不設逾時，與只跑一次的 CLI 行為一致
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}
