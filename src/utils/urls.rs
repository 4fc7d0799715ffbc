use url::Url;

/// 取出小写 host 并去掉 www. 前缀；解析失败返回空串
pub fn normalize_domain(raw: &str) -> String {
    let parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let host = parsed.host_str().unwrap_or("").to_lowercase();
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}

/// 域名匹配：精确或子域名 (a.b.com 匹配 b.com)
pub fn domain_matches(domain: &str, pattern: &str) -> bool {
    domain == pattern || domain.ends_with(&format!(".{}", pattern))
}

const TRACKING_PARAMS: [&str; 5] = ["spm", "from", "ref", "source", "cmpid"];

/// URL 归一化：scheme/host 小写、去掉跟踪参数、去掉 fragment。
/// 解析失败时仅 trim 后原样返回，交给后续结构校验去拦。
pub fn clean_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut parsed = match Url::parse(trimmed) {
        Ok(u) => u,
        Err(_) => return trimmed.to_string(),
    };
    if parsed.host_str().is_none() {
        return trimmed.to_string();
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| {
            let lk = k.to_lowercase();
            !lk.starts_with("utm_") && !TRACKING_PARAMS.contains(&lk.as_str())
        })
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    parsed.set_fragment(None);
    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    parsed.to_string()
}

/// Bing News 的 apiclick 跳转链接里带着真实文章地址，取出来再归一化
pub fn extract_direct_url(link: &str) -> String {
    if normalize_domain(link) == "bing.com" {
        if let Ok(parsed) = Url::parse(link) {
            if parsed.path().ends_with("/news/apiclick.aspx") {
                let direct = parsed
                    .query_pairs()
                    .find(|(k, _)| k == "url")
                    .map(|(_, v)| v.trim().to_string())
                    .unwrap_or_default();
                if direct.starts_with("http://") || direct.starts_with("https://") {
                    return clean_url(&direct);
                }
            }
        }
    }
    clean_url(link)
}
