//! 远端调用限流：相邻两次被放行的远端调用之间至少间隔 `min_interval`。

use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(150);

pub struct RateLimiter {
    /// 上一次被放行的远端调用时间
    last_granted: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_granted: Mutex::new(None),
            min_interval,
        }
    }

    /// 检查并占用一次调用额度。放行时在同一临界区内更新时间戳。
    pub fn try_acquire(&self, now: Instant) -> bool {
        let mut last = self.last_granted.lock();
        if let Some(prev) = *last {
            if now.saturating_duration_since(prev) < self.min_interval {
                return false;
            }
        }
        *last = Some(now);
        true
    }

    /// 距离下次可放行还需等待多久（可立即放行时为 0）。
    pub fn wait_duration(&self, now: Instant) -> Duration {
        match *self.last_granted.lock() {
            Some(prev) => self
                .min_interval
                .saturating_sub(now.saturating_duration_since(prev)),
            None => Duration::ZERO,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
