// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use tribune_core::application::ports::{time::Clock, util::SlugGenerator};

/// 常に同じ時刻を返すクロック
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// 本番と同じ `slug` クレートでスラッグを生成する
pub struct TestSlug;

impl SlugGenerator for TestSlug {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
