//! 时间工具函数
//!
//! 所有时间戳统一为 `i64` Unix millis，repository 层不处理时区。

use chrono::{Duration, Utc};

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `now + days` as Unix millis
pub fn days_from_now_millis(days: i64) -> i64 {
    (Utc::now() + Duration::days(days)).timestamp_millis()
}

/// `check` lies strictly between `start` and `end`
pub fn in_time_span(start: i64, end: i64, check: i64) -> bool {
    check > start && check < end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_exclusive_on_both_ends() {
        assert!(in_time_span(10, 20, 15));
        assert!(!in_time_span(10, 20, 10));
        assert!(!in_time_span(10, 20, 20));
        assert!(!in_time_span(20, 10, 15));
    }

    #[test]
    fn days_from_now_is_in_the_future() {
        let now = now_millis();
        let tomorrow = days_from_now_millis(1);
        assert!(tomorrow - now >= 86_399_000);
    }
}
