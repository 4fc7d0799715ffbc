use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;
use url::Url;

/// 一条待抓取的 RSS 源 (名称 + 完整 URL)
#[derive(Debug, Clone)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_sec: u64,
    pub max_workers: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; WuxiAINewsBot/2.0; +https://wuxiai.com/)"
                .to_string(),
            timeout_sec: 10,
            max_workers: 8,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LimitsConfig {
    /// 页面最多展示条数
    pub max_items_on_page: usize,
    /// 同一来源在页面上的最大条数
    pub max_per_source_on_page: usize,
    /// 单个 RSS 源最多取多少条
    pub max_per_feed: usize,
    /// data.json 滚动缓存上限
    pub cache_limit: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_items_on_page: 12,
            max_per_source_on_page: 3,
            max_per_feed: 20,
            cache_limit: 120,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub site_url: String,
    pub data_path: String,
    pub html_path: String,
    pub robots_path: String,
    pub sitemap_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            site_url: "https://wuxiai.com".to_string(),
            data_path: "data.json".to_string(),
            html_path: "index.html".to_string(),
            robots_path: "robots.txt".to_string(),
            sitemap_path: "sitemap.xml".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteProfile {
    /// Bing News 检索关键词
    pub keywords: Vec<String>,
    /// 按站点 site: 限定的优先信源
    pub priority_sites: Vec<String>,
    pub fetch: FetchConfig,
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            keywords: vec![
                "无锡 人工智能".to_string(),
                "无锡 AI".to_string(),
                "无锡AI".to_string(),
                "Wuxi AI".to_string(),
                "无锡 大模型".to_string(),
            ],
            priority_sites: vec![
                "xinhuanet.com".to_string(),
                "chinanews.com.cn".to_string(),
                "thepaper.cn".to_string(),
                "people.com.cn".to_string(),
                "xhby.net".to_string(),
                "yzwb.net".to_string(),
            ],
            fetch: FetchConfig::default(),
            limits: LimitsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SiteProfile {
    /// 读取 site_config (可选)，缺省时全部走内置默认值
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("site_config").required(false))
            .build()?;

        let profile: SiteProfile = settings.try_deserialize()?;
        Ok(profile)
    }

    /// 展开全部抓取源：每个关键词一条通用查询 + 每个优先站点一条 site: 限定查询
    pub fn feed_sources(&self) -> Vec<FeedSource> {
        let mut sources = Vec::new();
        for kw in &self.keywords {
            sources.push(FeedSource {
                name: format!("bing:{}", kw),
                url: build_bing_rss_url(kw),
            });
            for site in &self.priority_sites {
                let scoped = format!("{} site:{}", kw, site);
                sources.push(FeedSource {
                    name: format!("bing:{}:{}", kw, site),
                    url: build_bing_rss_url(&scoped),
                });
            }
        }
        sources
    }
}

fn build_bing_rss_url(keyword: &str) -> String {
    // Url::parse_with_params 负责 query 编码
    let url = Url::parse_with_params(
        "https://www.bing.com/news/search",
        &[("q", keyword), ("format", "RSS"), ("setlang", "zh-hans")],
    )
    .expect("static base url is valid");
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_sources_expand_keywords_and_priority_sites() {
        let profile = SiteProfile::default();
        let sources = profile.feed_sources();
        // 每个关键词: 1 条通用 + 6 条 site: 限定
        assert_eq!(
            sources.len(),
            profile.keywords.len() * (1 + profile.priority_sites.len())
        );
        assert!(sources[0].name.starts_with("bing:"));
        assert!(sources[0].url.contains("format=RSS"));
    }

    #[test]
    fn bing_url_encodes_keyword() {
        let url = build_bing_rss_url("无锡 AI");
        assert!(url.starts_with("https://www.bing.com/news/search?q="));
        assert!(!url.contains("无锡 AI"));
        assert!(url.contains("setlang=zh-hans"));
    }
}
