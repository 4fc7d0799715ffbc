use super::structs::Candidate;
use crate::utils::time::parse_pub_date;
use crate::utils::urls::{extract_direct_url, normalize_domain};
use rss::Channel;
use tracing::debug;

/// 把一个 feed 的原始字节解析成候选条目列表。
/// XML 坏掉就当这个源这轮没有产出，绝不让单个源拖垮整轮。
pub fn parse_feed(feed_name: &str, xml_bytes: &[u8], max_per_feed: usize) -> Vec<Candidate> {
    let channel = match Channel::read_from(xml_bytes) {
        Ok(c) => c,
        Err(e) => {
            debug!("🧾 [{}] RSS 解析失败: {}", feed_name, e);
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for entry in channel.items() {
        let title = entry.title().unwrap_or("").trim().to_string();
        let link = entry.link().unwrap_or("").trim().to_string();
        if title.is_empty() || link.is_empty() {
            continue;
        }

        let direct_url = extract_direct_url(&link);

        let mut source = entry
            .source()
            .and_then(|s| s.title())
            .unwrap_or("")
            .trim()
            .to_string();
        if source.is_empty() {
            source = normalize_domain(&direct_url);
        }
        if source.is_empty() {
            source = feed_name.to_string();
        }

        let published_at = parse_pub_date(entry.pub_date().unwrap_or(""));

        items.push(Candidate {
            title,
            url: direct_url,
            source,
            published_at,
            feed: feed_name.to_string(),
        });
        if items.len() >= max_per_feed {
            break;
        }
    }

    items
}
