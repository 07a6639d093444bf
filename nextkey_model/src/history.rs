//! 用户输入历史：最近完成的词、词频与词二元组频次。
//!
//! 目前只采集不消费：排序逻辑还没有读取这里的数据。

use std::collections::{HashMap, VecDeque};

/// 最近词环形缓冲的容量。
pub const RECENT_CAPACITY: usize = 50;
/// `recent_words` 返回的窗口大小。
pub const RECENT_WINDOW: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct TypingHistory {
    recent: VecDeque<String>,
    word_counts: HashMap<String, u32>,
    bigram_counts: HashMap<(String, String), u32>,
}

impl TypingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self.recent.len() == RECENT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(word.clone());
        *self.word_counts.entry(word).or_insert(0) += 1;
    }

    pub fn add_bigram(&mut self, first: &str, second: &str) {
        let key = (first.to_lowercase(), second.to_lowercase());
        *self.bigram_counts.entry(key).or_insert(0) += 1;
    }

    pub fn word_frequency(&self, word: &str) -> u32 {
        self.word_counts
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn bigram_frequency(&self, first: &str, second: &str) -> u32 {
        self.bigram_counts
            .get(&(first.to_lowercase(), second.to_lowercase()))
            .copied()
            .unwrap_or(0)
    }

    /// 最近 `RECENT_WINDOW` 个词（旧 -> 新）。
    pub fn recent_words(&self) -> Vec<String> {
        let skip = self.recent.len().saturating_sub(RECENT_WINDOW);
        self.recent.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
