use crate::config::site_profile::FeedSource;
use futures_util::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, warn};

pub struct FeedFetcher {
    client: Client,
    max_workers: usize,
}

impl FeedFetcher {
    pub fn new(client: Client, max_workers: usize) -> Self {
        Self {
            client,
            max_workers: max_workers.max(1),
        }
    }

    /// 并发抓取全部 RSS 源，失败的源只打 warn，不影响其余源。
    /// 返回 (feed 名称, 响应字节) 列表；完成顺序不重要，后续会统一排序。
    pub async fn fetch_all(&self, sources: &[FeedSource]) -> Vec<(String, Vec<u8>)> {
        let results: Vec<Option<(String, Vec<u8>)>> = stream::iter(sources.iter().cloned())
            .map(|source| {
                let client = self.client.clone();
                async move {
                    match Self::fetch_one(&client, &source).await {
                        Ok(bytes) => {
                            debug!("📥 [{}] {} bytes", source.name, bytes.len());
                            Some((source.name, bytes))
                        }
                        Err(e) => {
                            warn!("⚠️ Feed 抓取失败 [{}]: {}", source.name, e);
                            None
                        }
                    }
                }
            })
            .buffer_unordered(self.max_workers)
            .collect()
            .await;

        results.into_iter().flatten().collect()
    }

    async fn fetch_one(client: &Client, source: &FeedSource) -> anyhow::Result<Vec<u8>> {
        let resp = client.get(&source.url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}
