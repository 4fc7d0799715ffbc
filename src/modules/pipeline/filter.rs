use super::structs::NewsItem;
use crate::config::FilterRules;
use crate::modules::perception::Candidate;
use crate::utils::urls::{clean_url, domain_matches, normalize_domain};
use regex::Regex;
use sha2::{Digest, Sha256};

/// 过滤 + 指纹引擎。对单个候选条目做纯函数式筛查，
/// 通过则产出带指纹和信任标记的 NewsItem。
pub struct FilterEngine {
    rules: FilterRules,
    /// 独立的 "ai" 词元：前后都不能是字母/数字，避免命中 air、aids 之类
    ai_token: Regex,
    whitespace: Regex,
    /// 归一化标题时去掉非 \w 非汉字的字符
    non_word: Regex,
}

impl FilterEngine {
    pub fn new(rules: FilterRules) -> Self {
        Self {
            rules,
            ai_token: Regex::new(r"(^|[^a-z0-9])ai([^a-z0-9]|$)").expect("static regex"),
            whitespace: Regex::new(r"\s+").expect("static regex"),
            non_word: Regex::new(r"[^\w\u{4e00}-\u{9fff}]+").expect("static regex"),
        }
    }

    /// 五段短路筛查：结构 → 域名/来源黑名单 → 广告词 → 相关性 → 本地+AI 主题。
    /// 全部通过才计算指纹并返回条目。
    pub fn screen(&self, candidate: &Candidate) -> Option<NewsItem> {
        let title = candidate.title.trim().to_string();
        let url = clean_url(candidate.url.trim());
        let source = candidate.source.trim().to_string();

        if title.is_empty() || !(url.starts_with("http://") || url.starts_with("https://")) {
            return None;
        }

        let domain = normalize_domain(&url);
        if domain.is_empty() || self.is_blocked_domain(&domain) || self.is_blocked_source(&source)
        {
            return None;
        }

        if self.is_ad_title(&title) {
            return None;
        }

        if !self.is_relevant(&title, &url, &source) {
            return None;
        }

        if !self.is_local_ai_topic(&title) {
            return None;
        }

        let fingerprint = self.fingerprint(&title, &domain);
        let trusted = self.is_trusted_domain(&domain) || self.is_trusted_source(&source);

        Some(NewsItem {
            title,
            url,
            domain,
            source,
            published_at: candidate.published_at.clone(),
            feed: candidate.feed.clone(),
            fingerprint,
            trusted,
        })
    }

    /// 标题归一化：实体解码、小写、空白折叠、去掉 " - 短尾注"、去符号。
    /// 幂等：norm(norm(t)) == norm(t)。
    pub fn normalize_title(&self, title: &str) -> String {
        let decoded = html_escape::decode_html_entities(title);
        let mut t = decoded.trim().to_lowercase();
        t = self.whitespace.replace_all(&t, " ").into_owned();

        // Bing 常在标题尾部拼 " - 媒体名"，短尾巴直接剁掉
        if t.contains(" - ") {
            let parts: Vec<&str> = t.split(" - ").collect();
            if let Some(last) = parts.last() {
                if last.chars().count() <= 12 {
                    t = parts[..parts.len() - 1].join(" - ");
                }
            }
        }

        self.non_word.replace_all(&t, "").into_owned()
    }

    /// 指纹 = sha256(归一化标题 | 域名)。同一故事换媒体转发时域名不同，
    /// 同媒体重发时指纹相同。
    pub fn fingerprint(&self, title: &str, domain: &str) -> String {
        let normalized = self.normalize_title(title);
        let mut hasher = Sha256::new();
        hasher.update(format!("{}|{}", normalized, domain).as_bytes());
        hex::encode(hasher.finalize())
    }

    fn is_trusted_domain(&self, domain: &str) -> bool {
        self.rules
            .trusted_domains
            .iter()
            .any(|p| domain_matches(domain, p))
    }

    fn is_blocked_domain(&self, domain: &str) -> bool {
        self.rules
            .blocked_domains
            .iter()
            .any(|p| domain_matches(domain, p))
    }

    fn is_trusted_source(&self, source: &str) -> bool {
        let s = source.trim();
        self.rules
            .trusted_source_keywords
            .iter()
            .any(|k| s.contains(k.as_str()))
    }

    fn is_blocked_source(&self, source: &str) -> bool {
        let s = source.trim();
        self.rules
            .blocked_source_keywords
            .iter()
            .any(|k| s.contains(k.as_str()))
    }

    fn is_ad_title(&self, title: &str) -> bool {
        let lt = title.trim().to_lowercase();
        self.rules.ad_keywords.iter().any(|k| lt.contains(k.as_str()))
    }

    fn is_relevant(&self, title: &str, url: &str, source: &str) -> bool {
        let text = format!("{} {} {}", title, url, source).to_lowercase();
        self.rules
            .relevance_keywords
            .iter()
            .any(|k| text.contains(k.as_str()))
    }

    /// 主题闸门：标题必须同时带地名和 AI 主题词
    /// (或独立的 "ai" 词元)，只看标题不看正文，宁缺毋滥。
    fn is_local_ai_topic(&self, title: &str) -> bool {
        let text = title.to_lowercase();
        let has_location = self
            .rules
            .location_keywords
            .iter()
            .any(|k| text.contains(k.as_str()));
        let has_topic = self
            .rules
            .topic_keywords
            .iter()
            .any(|k| text.contains(k.as_str()))
            || self.ai_token.is_match(&text);
        has_location && has_topic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FilterEngine {
        FilterEngine::new(FilterRules::default())
    }

    fn candidate(title: &str, url: &str, source: &str) -> Candidate {
        Candidate {
            title: title.to_string(),
            url: url.to_string(),
            source: source.to_string(),
            published_at: String::new(),
            feed: "bing:test".to_string(),
        }
    }

    #[test]
    fn normalize_title_is_idempotent() {
        let e = engine();
        let samples = [
            "无锡发布&nbsp;AI 新政 - 澎湃新闻",
            "  Wuxi   AI Lab opens - 新华网  ",
            "江阴机器人产业再提速！",
        ];
        for s in samples {
            let once = e.normalize_title(s);
            assert_eq!(e.normalize_title(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn normalize_title_strips_short_trailing_clause() {
        let e = engine();
        assert_eq!(
            e.normalize_title("无锡AI大会开幕 - 新华网"),
            e.normalize_title("无锡AI大会开幕")
        );
        // 长尾注不是媒体署名，保留
        let long_tail = "无锡AI大会开幕 - 这是一段很长很长超过十二个字符的副标题内容";
        assert_ne!(e.normalize_title(long_tail), e.normalize_title("无锡AI大会开幕"));
    }

    #[test]
    fn fingerprint_tracks_title_and_domain() {
        let e = engine();
        let a = e.fingerprint("无锡AI大会开幕 - 新华网", "xinhuanet.com");
        let b = e.fingerprint("无锡AI大会开幕", "xinhuanet.com");
        assert_eq!(a, b);
        assert_ne!(a, e.fingerprint("无锡AI大会开幕", "thepaper.cn"));
        assert_ne!(a, e.fingerprint("无锡AI大会闭幕", "xinhuanet.com"));
    }

    #[test]
    fn blocked_domain_is_rejected_even_with_matching_topic() {
        let e = engine();
        let c = candidate("无锡某AI大模型发布", "https://www.sohu.com/a/123", "搜狐");
        assert!(e.screen(&c).is_none());
    }

    #[test]
    fn ad_title_is_rejected_despite_location_and_topic() {
        let e = engine();
        let c = candidate(
            "无锡招商广告：AI课程报名优惠",
            "https://www.example-news.cn/a/1",
            "某媒体",
        );
        assert!(e.screen(&c).is_none());
    }

    #[test]
    fn blocked_source_keyword_rejects() {
        let e = engine();
        let c = candidate(
            "无锡人工智能产业提速",
            "https://www.example-news.cn/a/2",
            "某某百家号",
        );
        assert!(e.screen(&c).is_none());
    }

    #[test]
    fn missing_location_or_topic_fails_gate() {
        let e = engine();
        // 有主题没地名
        assert!(e
            .screen(&candidate("人工智能新突破", "https://www.xinhuanet.com/a", "新华网"))
            .is_none());
        // 有地名没主题
        assert!(e
            .screen(&candidate("无锡马拉松开跑", "https://www.xinhuanet.com/b", "新华网"))
            .is_none());
    }

    #[test]
    fn bare_ai_token_requires_word_boundary() {
        let e = engine();
        // "AI" 独立词元：放行
        let ok = candidate("无锡 AI 产业动态", "https://www.xinhuanet.com/a", "新华网");
        assert!(e.screen(&ok).is_some());
        // "aix" 里的 ai 不算；也没有其他主题词：拒绝
        let no = candidate("无锡 aix 峰会", "https://www.xinhuanet.com/b", "新华网");
        assert!(e.screen(&no).is_none());
        // 中文紧邻的 AI 仍是独立词元
        let cjk = candidate("无锡AI实验室揭牌", "https://www.xinhuanet.com/c", "新华网");
        assert!(e.screen(&cjk).is_some());
    }

    #[test]
    fn structural_checks_come_first() {
        let e = engine();
        assert!(e.screen(&candidate("", "https://www.xinhuanet.com/a", "s")).is_none());
        assert!(e.screen(&candidate("无锡AI", "ftp://example.com/a", "s")).is_none());
        assert!(e.screen(&candidate("无锡AI", "   ", "s")).is_none());
    }

    #[test]
    fn survivor_gets_domain_fingerprint_and_trust() {
        let e = engine();
        let item = e
            .screen(&candidate(
                "无锡大模型产业集群成型",
                "https://WWW.Xinhuanet.com/news/1.html?utm_source=rss",
                "新华网",
            ))
            .expect("should pass");
        assert_eq!(item.domain, "xinhuanet.com");
        assert_eq!(item.url, "https://www.xinhuanet.com/news/1.html");
        assert!(item.trusted);
        assert_eq!(item.fingerprint.len(), 64);
    }

    #[test]
    fn untrusted_domain_with_trusted_source_keyword_is_trusted() {
        let e = engine();
        let item = e
            .screen(&candidate(
                "宜兴算力中心投运",
                "https://news.unknown-site.cn/a/1",
                "澎湃新闻",
            ))
            .expect("should pass");
        assert!(item.trusted);
    }

    #[test]
    fn substituted_rules_change_behavior() {
        let rules = FilterRules {
            location_keywords: vec!["苏州".to_string()],
            ..FilterRules::default()
        };
        let e = FilterEngine::new(rules);
        assert!(e
            .screen(&candidate("苏州AI产业新政", "https://www.xinhuanet.com/a", "新华网"))
            .is_none()); // 相关性列表仍是无锡系，过不了第 4 关
    }
}
