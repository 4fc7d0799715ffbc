use chrono::{DateTime, FixedOffset};

/// 东八区固定时区，所有展示/存储时间统一到 +08:00
pub fn cst() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("+08:00 is a valid offset")
}

/// RSS pubDate (RFC 2822) → RFC 3339 (+08:00)；解析失败返回空串
pub fn parse_pub_date(pub_date: &str) -> String {
    let trimmed = pub_date.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    DateTime::parse_from_rfc2822(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .map(|dt| dt.with_timezone(&cst()).to_rfc3339())
        .unwrap_or_default()
}

/// 存储时间 → 页面展示格式；空或坏数据显示占位符
pub fn format_display_time(iso_time: &str) -> String {
    if iso_time.is_empty() {
        return "时间未知".to_string();
    }
    match DateTime::parse_from_rfc3339(iso_time) {
        Ok(dt) => dt.with_timezone(&cst()).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => "时间未知".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pub_date_converts_to_cst_iso() {
        let iso = parse_pub_date("Mon, 24 Aug 2026 04:00:00 GMT");
        assert_eq!(iso, "2026-08-24T12:00:00+08:00");
    }

    #[test]
    fn bad_pub_date_becomes_empty() {
        assert_eq!(parse_pub_date("not a date"), "");
        assert_eq!(parse_pub_date(""), "");
    }

    #[test]
    fn display_time_formats_or_falls_back() {
        assert_eq!(format_display_time("2026-08-24T12:30:00+08:00"), "2026-08-24 12:30");
        // 其他时区转到东八区再展示
        assert_eq!(format_display_time("2026-08-24T04:30:00+00:00"), "2026-08-24 12:30");
        assert_eq!(format_display_time(""), "时间未知");
        assert_eq!(format_display_time("garbage"), "时间未知");
    }
}
