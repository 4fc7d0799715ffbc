use crate::config::site_profile::FetchConfig;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// 创建抓取 RSS 用的 HTTP Client。
    /// 单次请求超时由 FetchConfig 控制，失败不重试。
    pub fn create(fetch: &FetchConfig) -> Result<Client> {
        let builder = Client::builder()
            .user_agent(fetch.user_agent.clone())
            .timeout(Duration::from_secs(fetch.timeout_sec))
            .connect_timeout(Duration::from_secs(fetch.timeout_sec))
            .pool_idle_timeout(Duration::from_secs(90));

        info!("🌐 [Http Client] timeout={}s", fetch.timeout_sec);

        let client = builder.build()?;
        Ok(client)
    }
}
