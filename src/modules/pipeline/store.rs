use super::filter::FilterEngine;
use super::structs::{NewsItem, Snapshot};
use crate::modules::perception::Candidate;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// data.json 的读写 + 合并/去重/排序/截断。
/// 单写者假设：同一时刻只有一轮构建在跑，写入走临时文件 + rename。
pub struct SnapshotStore {
    path: PathBuf,
    cache_limit: usize,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>, cache_limit: usize) -> Self {
        Self {
            path: path.into(),
            cache_limit,
        }
    }

    /// 读上一轮快照。文件不存在、JSON 坏掉、结构不对，一律当空历史。
    pub fn load_existing(&self) -> Vec<NewsItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("⚠️ 快照损坏，按空历史处理: {}", e);
                return Vec::new();
            }
        };
        match value.get("items") {
            Some(items) => serde_json::from_value(items.clone()).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// 覆盖写快照：先写 .tmp 再 rename，崩溃不会留下半截文件。
    /// updated_at 由调用方统一传入，保证快照和 SEO 侧文件是同一时刻。
    pub fn write(&self, items: &[NewsItem], updated_at: DateTime<FixedOffset>) -> Result<()> {
        let snapshot = Snapshot {
            updated_at: updated_at.to_rfc3339(),
            item_count: items.len(),
            items: items.to_vec(),
        };
        let payload = serde_json::to_string_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload)
            .with_context(|| format!("写入临时快照失败: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("替换快照失败: {}", self.path.display()))?;

        info!("💾 快照已写入 {} ({} 条)", self.path.display(), snapshot.item_count);
        Ok(())
    }
}

/// 合并排序：输入顺序 = 新抓取在前、历史快照在后，全部重过一遍过滤器
/// (历史条目若不再满足当前规则就被淘汰)。
/// 去重双保险：URL 先到先得；指纹分组内保留 published_at 更新的那条。
/// 排序：trusted 降序 → published_at 字符串降序 (空时间排最后)，截断到缓存上限。
pub fn merge_and_rank(
    inputs: impl IntoIterator<Item = Candidate>,
    engine: &FilterEngine,
    cache_limit: usize,
) -> Vec<NewsItem> {
    let mut kept: Vec<NewsItem> = Vec::new();
    let mut index_by_fp: HashMap<String, usize> = HashMap::new();
    let mut seen_urls: HashSet<String> = HashSet::new();

    for candidate in inputs {
        let item = match engine.screen(&candidate) {
            Some(i) => i,
            None => continue,
        };

        if !seen_urls.insert(item.url.clone()) {
            continue;
        }

        match index_by_fp.get(&item.fingerprint) {
            None => {
                index_by_fp.insert(item.fingerprint.clone(), kept.len());
                kept.push(item);
            }
            Some(&idx) => {
                // 同一故事的重发：时间戳严格更新才替换代表条目
                let prev_time = kept[idx].published_at.as_str();
                if !item.published_at.is_empty()
                    && (prev_time.is_empty() || item.published_at.as_str() > prev_time)
                {
                    kept[idx] = item;
                }
            }
        }
    }

    kept.sort_by(|a, b| {
        (b.trusted, b.published_at.as_str()).cmp(&(a.trusted, a.published_at.as_str()))
    });
    kept.truncate(cache_limit);
    kept
}
