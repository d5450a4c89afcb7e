//! 预订日期计算模块
//!
//! 入住/退房均为整日 (`NaiveDate`)，晚数即两个日期的天数差。
//! 纯 chrono 实现，可在原生目标上直接测试。

use chrono::NaiveDate;

/// 两个日期之间的晚数（退房 - 入住）
///
/// 退房早于或等于入住时返回非正数，由调用方决定如何处理。
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// 日期区间是否有效：退房严格晚于入住
pub fn is_valid_range(check_in: NaiveDate, check_out: NaiveDate) -> bool {
    check_out > check_in
}

/// 解析日期输入框的 `YYYY-MM-DD` 值
///
/// 空串或非法格式返回 None
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// 格式化为日期输入框可用的 `YYYY-MM-DD`
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 展示用短格式 `DD/MM/YYYY`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn nights_counts_whole_days() {
        assert_eq!(nights_between(d("2024-06-01"), d("2024-06-04")), 3);
        assert_eq!(nights_between(d("2024-06-01"), d("2024-06-02")), 1);
    }

    #[test]
    fn nights_is_non_positive_for_inverted_range() {
        assert_eq!(nights_between(d("2024-06-04"), d("2024-06-01")), -3);
        assert_eq!(nights_between(d("2024-06-01"), d("2024-06-01")), 0);
    }

    #[test]
    fn range_requires_strictly_later_checkout() {
        assert!(is_valid_range(d("2024-06-01"), d("2024-06-02")));
        assert!(!is_valid_range(d("2024-06-01"), d("2024-06-01")));
        assert!(!is_valid_range(d("2024-06-02"), d("2024-06-01")));
    }

    #[test]
    fn input_date_round_trips() {
        let date = parse_input_date("2024-06-01").unwrap();
        assert_eq!(format_input_date(date), "2024-06-01");
        assert_eq!(format_display_date(date), "01/06/2024");
    }

    #[test]
    fn input_date_rejects_garbage() {
        assert!(parse_input_date("").is_none());
        assert!(parse_input_date("  ").is_none());
        assert!(parse_input_date("June 1st").is_none());
        assert!(parse_input_date("2024-13-40").is_none());
    }
}
