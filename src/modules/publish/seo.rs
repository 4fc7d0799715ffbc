use chrono::{DateTime, FixedOffset};

/// robots.txt：全站放行 + sitemap 指引
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

/// sitemap.xml：首页 + 联系页，lastmod 取本轮更新日期
pub fn render_sitemap(site_url: &str, updated_at: DateTime<FixedOffset>) -> String {
    let base = site_url.trim_end_matches('/');
    let lastmod = updated_at.format("%Y-%m-%d").to_string();

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (path, freq) in [("/", "hourly"), ("/contact.html", "monthly")] {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}{}</loc>\n", base, path));
        out.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        out.push_str(&format!("    <changefreq>{}</changefreq>\n", freq));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::cst;
    use chrono::TimeZone;

    #[test]
    fn robots_points_to_sitemap() {
        let txt = render_robots("https://wuxiai.com/");
        assert!(txt.contains("User-agent: *"));
        assert!(txt.contains("Sitemap: https://wuxiai.com/sitemap.xml"));
    }

    #[test]
    fn sitemap_carries_run_date() {
        let ts = cst().with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let xml = render_sitemap("https://wuxiai.com", ts);
        assert!(xml.contains("<loc>https://wuxiai.com/</loc>"));
        assert!(xml.contains("<loc>https://wuxiai.com/contact.html</loc>"));
        assert_eq!(xml.matches("<lastmod>2026-08-24</lastmod>").count(), 2);
    }
}
