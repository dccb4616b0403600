// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use quill_core::application::ports::{time::Clock, util::SlugGenerator};
use quill_core::infrastructure::util::DefaultSlugGenerator;

use super::time::fixed_now;

/// 固定時刻を返す時計
#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 本番のスラグ生成器に呼び出し回数のカウントを付けたもの
#[derive(Default)]
pub struct CountingSlug {
    inner: DefaultSlugGenerator,
    calls: AtomicUsize,
}

impl CountingSlug {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for CountingSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.slugify(input)
    }
}
