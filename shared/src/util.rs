/// 获取当前 UTC 时间戳（微秒）
pub fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}

/// Generate a catalog identifier: `prefix` followed by a random UUID v4
/// in simple (hyphen-free) form, e.g. `p3f0c…` or `lot9ab2…`.
///
/// Wall-clock time plays no part, so two creates in the same millisecond
/// never collide.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}{}", uuid::Uuid::new_v4().simple())
}
