use crate::config::site_profile::LimitsConfig;
use crate::modules::pipeline::NewsItem;
use crate::utils::time::format_display_time;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::HashMap;

/// 按排名顺序挑出页面展示子集：单一来源最多 max_per_source_on_page 条，
/// 总数不超过 max_items_on_page。
pub fn select_display_items<'a>(items: &'a [NewsItem], limits: &LimitsConfig) -> Vec<&'a NewsItem> {
    let mut picked = Vec::new();
    let mut source_counts: HashMap<String, usize> = HashMap::new();

    for item in items {
        let mut src = item.source.trim().to_string();
        if src.is_empty() {
            src = "未知来源".to_string();
        }
        let count = source_counts.entry(src).or_insert(0);
        if *count >= limits.max_per_source_on_page {
            continue;
        }
        *count += 1;
        picked.push(item);
        if picked.len() >= limits.max_items_on_page {
            break;
        }
    }

    picked
}

/// 渲染静态列表页。条目只放标题链接、来源和东八区时间，别的都不放。
pub fn render_page(items: &[NewsItem], limits: &LimitsConfig) -> String {
    let display_items = select_display_items(items, limits);

    let mut out = String::new();
    out.push_str("<!doctype html>\n");
    out.push_str("<html lang=\"zh-CN\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("  <meta name=\"description\" content=\"无锡AI新闻与无锡人工智能新闻聚合，聚焦无锡与人工智能相关资讯。\">\n");
    out.push_str("  <meta name=\"keywords\" content=\"无锡AI新闻, 无锡人工智能新闻, 无锡AI, 无锡人工智能\">\n");
    out.push_str("  <title>无锡AI</title>\n");
    out.push_str("  <style>\n");
    out.push_str("    body { font-family: -apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif; max-width: 900px; margin: 24px auto; padding: 0 16px; line-height: 1.7; color: #111; }\n");
    out.push_str("    h1 { margin: 0 0 8px; font-size: 28px; }\n");
    out.push_str("    .meta { color: #666; margin: 0 0 20px; font-size: 14px; }\n");
    out.push_str("    ul { padding-left: 18px; }\n");
    out.push_str("    li { margin: 10px 0; }\n");
    out.push_str("    a { color: #0b57d0; text-decoration: none; }\n");
    out.push_str("    a:hover { text-decoration: underline; }\n");
    out.push_str("    .src { color: #666; font-size: 14px; }\n");
    out.push_str("    .contact { margin-top: 24px; padding-top: 12px; border-top: 1px solid #ddd; color: #444; font-size: 14px; }\n");
    out.push_str("  </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("  <h1>无锡AI</h1>\n");
    out.push_str("  <p class=\"meta\">自动更新，仅提供标题与原文链接。</p>\n");

    if items.is_empty() {
        out.push_str("  <p>暂无可展示的新闻，请稍后再试。</p>\n");
    } else {
        out.push_str("  <ul>\n");
        for news in &display_items {
            let title = encode_text(&news.title);
            let source = encode_text(if news.source.trim().is_empty() {
                "未知来源"
            } else {
                news.source.trim()
            });
            let pub_date = format_display_time(&news.published_at);
            let url = encode_double_quoted_attribute(&news.url);
            out.push_str(&format!(
                "    <li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a><br><span class=\"src\">{} | {}</span></li>\n",
                url,
                title,
                source,
                encode_text(&pub_date)
            ));
        }
        out.push_str("  </ul>\n");
    }

    out.push_str("  <div class=\"contact\">\n");
    out.push_str("    <a href=\"/contact.html\">联系方式</a> | 友情链接：<a href=\"https://robot.tv\" target=\"_blank\" rel=\"noopener noreferrer\">robot.tv</a>、<a href=\"https://aild.org\" target=\"_blank\" rel=\"noopener noreferrer\">aild.org</a>\n");
    out.push_str("  </div>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}
