use serde::{Deserialize, Serialize};

/// RSS 解析出的候选条目，尚未过滤、未计算指纹
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    /// 已解开跳转包装并归一化的文章地址
    pub url: String,
    pub source: String,
    /// RFC 3339 (+08:00)，解析失败为空串
    pub published_at: String,
    /// 来源 feed 名称，如 bing:无锡 AI:thepaper.cn
    pub feed: String,
}
