use crate::modules::perception::Candidate;
use serde::{Deserialize, Serialize};

/// 通过全部过滤、带指纹的正式条目，data.json 里存的就是它。
/// 字段全部容错反序列化：老快照缺字段也能读进来，再被重筛一遍。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub source: String,
    pub published_at: String,
    pub feed: String,
    pub fingerprint: String,
    pub trusted: bool,
}

/// data.json 顶层结构
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub updated_at: String,
    pub item_count: usize,
    pub items: Vec<NewsItem>,
}

impl From<NewsItem> for Candidate {
    fn from(item: NewsItem) -> Self {
        Candidate {
            title: item.title,
            url: item.url,
            source: item.source,
            published_at: item.published_at,
            feed: item.feed,
        }
    }
}
