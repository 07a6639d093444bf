//! 结果缓存：以输入文本末尾（最多 30 个字符）为键，带 TTL 与容量上限。
//!
//! 约定：
//! - 过期只在读取时惰性判断，不做后台清理
//! - 写满时淘汰最早插入的条目；重复写入同一个键会刷新它的位置与时间戳

use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::model::Prediction;

/// 缓存键取输入的最后 30 个字符。
pub const CACHE_KEY_CHARS: usize = 30;
pub const DEFAULT_TTL: Duration = Duration::from_millis(5_000);
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
struct CacheEntry {
    predictions: Vec<Prediction>,
    inserted_at: Instant,
}

#[derive(Debug)]
pub struct ResultCache {
    /// 插入顺序即淘汰顺序
    entries: IndexMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity),
            ttl,
            capacity,
        }
    }

    /// 取 `text` 的末尾（按字符而非字节）作为缓存键。
    pub fn cache_key(text: &str) -> String {
        let count = text.chars().count();
        text.chars().skip(count.saturating_sub(CACHE_KEY_CHARS)).collect()
    }

    /// 读取未过期的条目；过期条目会被顺手移除并视为未命中。
    pub fn get(&mut self, key: &str, now: Instant) -> Option<Vec<Prediction>> {
        let entry = self.entries.get(key)?;
        if now.saturating_duration_since(entry.inserted_at) < self.ttl {
            return Some(entry.predictions.clone());
        }
        self.entries.shift_remove(key);
        None
    }

    pub fn insert(&mut self, key: String, predictions: Vec<Prediction>, now: Instant) {
        self.entries.shift_remove(&key);
        while self.entries.len() >= self.capacity {
            if self.entries.shift_remove_index(0).is_none() {
                break;
            }
        }
        self.entries.insert(
            key,
            CacheEntry {
                predictions,
                inserted_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn preds() -> Vec<Prediction> {
        vec![Prediction::new('E', 1.0), Prediction::new('A', 0.5)]
    }

    #[test]
    fn key_is_last_thirty_chars() {
        assert_eq!(ResultCache::cache_key("short"), "short");
        let long = "a".repeat(10) + &"b".repeat(30);
        assert_eq!(ResultCache::cache_key(&long), "b".repeat(30));
        // 多字节字符按字符计数
        let wide = "é".repeat(40);
        assert_eq!(ResultCache::cache_key(&wide).chars().count(), 30);
    }

    #[test]
    fn entries_expire_at_ttl() {
        let start = Instant::now();
        let mut cache = ResultCache::default();
        cache.insert("th".into(), preds(), start);

        let almost = start + Duration::from_millis(4_999);
        assert_eq!(cache.get("th", almost), Some(preds()));

        let expired = start + DEFAULT_TTL;
        assert_eq!(cache.get("th", expired), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let now = Instant::now();
        let mut cache = ResultCache::default();
        for i in 0..120 {
            cache.insert(format!("key-{i}"), preds(), now);
            assert!(cache.len() <= DEFAULT_CAPACITY);
        }
        assert_eq!(cache.len(), DEFAULT_CAPACITY);
        // 最早的键被淘汰，最新的键保留
        assert_eq!(cache.get("key-0", now), None);
        assert!(cache.get("key-119", now).is_some());
    }

    #[test]
    fn reinsert_refreshes_position() {
        let now = Instant::now();
        let mut cache = ResultCache::new(2, DEFAULT_TTL);
        cache.insert("a".into(), preds(), now);
        cache.insert("b".into(), preds(), now);
        cache.insert("a".into(), preds(), now);
        cache.insert("c".into(), preds(), now);
        assert!(cache.get("a", now).is_some());
        assert_eq!(cache.get("b", now), None);
    }
}
