use serde::Deserialize;

/// 过滤引擎使用的关键词/信任配置。
/// 显式传入而不是全局常量，便于单测时替换列表。
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FilterRules {
    pub trusted_domains: Vec<String>,
    pub blocked_domains: Vec<String>,
    pub trusted_source_keywords: Vec<String>,
    pub blocked_source_keywords: Vec<String>,
    pub ad_keywords: Vec<String>,
    pub relevance_keywords: Vec<String>,
    pub location_keywords: Vec<String>,
    pub topic_keywords: Vec<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            trusted_domains: to_strings(&[
                "xinhuanet.com",
                "chinanews.com.cn",
                "thepaper.cn",
                "people.com.cn",
                "xhby.net",
                "cctv.com",
                "yzwb.net",
                "wuxi.gov.cn",
                "jiangsu.gov.cn",
                "news.jiangnan.edu.cn",
            ]),
            blocked_domains: to_strings(&[
                "news.google.com",
                "bing.com",
                "toutiao.com",
                "sohu.com",
                "163.com",
            ]),
            trusted_source_keywords: to_strings(&[
                "新华网",
                "人民网",
                "中国新闻网",
                "澎湃",
                "新华报业网",
                "紫牛新闻",
                "江南大学新闻网",
                "央视网",
            ]),
            blocked_source_keywords: to_strings(&[
                "广告", "推广", "赞助", "营销", "百家号", "搜狐号",
            ]),
            ad_keywords: to_strings(&[
                "广告", "推广", "赞助", "招商", "代理", "课程报名", "优惠", "折扣", "限时",
                "团购", "邀请码", "加微信", "vx",
            ]),
            relevance_keywords: to_strings(&[
                "无锡", "wuxi", "江阴", "宜兴", "江苏", "jiangsu", "江南大学",
            ]),
            location_keywords: to_strings(&["无锡", "wuxi", "江阴", "宜兴"]),
            topic_keywords: to_strings(&[
                "人工智能", "大模型", "算力", "机器人", "机器学习", "智能体", "aigc", "算法",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
