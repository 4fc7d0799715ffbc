mod config;
mod modules;
mod utils;

use anyhow::Result;
use chrono::Utc;
use std::fs;
use tracing::info;

use crate::config::{FilterRules, SiteProfile};
use crate::modules::perception::{feed, Candidate, FeedFetcher};
use crate::modules::pipeline::{store, FilterEngine, SnapshotStore};
use crate::modules::publish::{page, seo};
use crate::utils::http_client::HttpClientFactory;
use crate::utils::time::cst;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("Starting Wuxi AI News Builder V2.0...");

    let profile = SiteProfile::load()?;
    let client = HttpClientFactory::create(&profile.fetch)?;

    // 1. 并发抓取全部 Bing News RSS 源 (失败的源静默跳过)
    let sources = profile.feed_sources();
    info!("📡 Fetching {} feeds (workers={})...", sources.len(), profile.fetch.max_workers);
    let fetcher = FeedFetcher::new(client, profile.fetch.max_workers);
    let responses = fetcher.fetch_all(&sources).await;
    info!("📡 {}/{} feeds responded", responses.len(), sources.len());

    // 2. 解析成候选条目
    let mut candidates: Vec<Candidate> = Vec::new();
    for (name, bytes) in &responses {
        candidates.extend(feed::parse_feed(name, bytes, profile.limits.max_per_feed));
    }
    info!("🧾 Parsed {} raw candidates", candidates.len());

    // 3. 合并历史快照，过滤 + 去重 + 排序 + 截断
    let store_handle = SnapshotStore::new(&profile.output.data_path, profile.limits.cache_limit);
    let existing = store_handle.load_existing();
    info!("🗂️ Prior snapshot: {} items", existing.len());

    let engine = FilterEngine::new(FilterRules::default());
    let inputs = candidates
        .into_iter()
        .chain(existing.into_iter().map(Candidate::from));
    let items = store::merge_and_rank(inputs, &engine, profile.limits.cache_limit);
    info!("🧹 {} items survived filter/merge", items.len());

    // 4. 落盘：快照 + 页面 + SEO 侧文件 (顶层 IO 失败才是致命错误)。
    // 本轮时间戳只取一次，data.json 和 sitemap 保持一致。
    let now = Utc::now().with_timezone(&cst());
    store_handle.write(&items, now)?;

    let html = page::render_page(&items, &profile.limits);
    fs::write(&profile.output.html_path, html)?;

    fs::write(&profile.output.robots_path, seo::render_robots(&profile.output.site_url))?;
    fs::write(
        &profile.output.sitemap_path,
        seo::render_sitemap(&profile.output.site_url, now),
    )?;

    info!("✅ Build done: {} cached, page/robots/sitemap written", items.len());
    Ok(())
}
