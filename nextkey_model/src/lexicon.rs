use std::{collections::BTreeMap, fs, io, path::Path};

use crate::tables::COMMON_WORDS;

/// 词频上限：静态词表第 r 个词的频次为 `MAX_FREQUENCY - r`。
pub const MAX_FREQUENCY: u32 = 1_000;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] io::Error),
    #[error("lexicon line {line}: missing word")]
    MissingWord { line: usize },
    #[error("lexicon line {line}: invalid weight `{value}`")]
    InvalidWeight { line: usize, value: String },
}

/// 前缀词典：大写词 -> 频次。
///
/// TSV 格式（简化版）：
///
/// - `word<TAB>weight`
/// - weight 可省略，默认 1
/// - 允许 `#` 开头注释行
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: BTreeMap<String, u32>,
}

impl Lexicon {
    /// 由内置常用词表构建。
    pub fn builtin() -> Self {
        let mut words = BTreeMap::new();
        for (rank, word) in COMMON_WORDS.iter().enumerate() {
            let frequency = MAX_FREQUENCY.saturating_sub(rank as u32).max(1);
            // 重复词保留第一次出现（更高）的频次
            words.entry(word.to_uppercase()).or_insert(frequency);
        }
        Self { words }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let s = fs::read_to_string(path)?;
        Self::from_tsv_str(&s)
    }

    pub fn from_tsv_str(s: &str) -> Result<Self, LexiconError> {
        let mut words = BTreeMap::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut it = line.split('\t');
            let word = it.next().unwrap_or("").trim();
            if word.is_empty() {
                return Err(LexiconError::MissingWord { line: idx + 1 });
            }
            let weight = match it.next().map(str::trim).filter(|x| !x.is_empty()) {
                Some(x) => x.parse::<u32>().map_err(|_| LexiconError::InvalidWeight {
                    line: idx + 1,
                    value: x.to_string(),
                })?,
                None => 1,
            };
            let entry = words.entry(word.to_uppercase()).or_insert(0);
            *entry = (*entry).max(weight);
        }
        Ok(Self { words })
    }

    /// 合并另一份词典，同一个词取较大频次。
    pub fn extend(&mut self, other: Lexicon) {
        for (word, weight) in other.words {
            let entry = self.words.entry(word).or_insert(0);
            *entry = (*entry).max(weight);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.words.get(&word.to_uppercase()).copied()
    }

    /// 以 `prefix`（大写）开头且更长的词，按“前缀后的下一个字符”聚合频次。
    ///
    /// 返回值按首次出现顺序排列（词典序），权重为 `频次 / MAX_FREQUENCY` 之和。
    pub fn next_letters(&self, prefix: &str) -> Vec<(char, f32)> {
        let mut out: Vec<(char, f32)> = Vec::new();
        if prefix.is_empty() {
            return out;
        }
        let skip = prefix.chars().count();
        for (word, &frequency) in self.words.range(prefix.to_string()..) {
            if !word.starts_with(prefix) {
                break;
            }
            let Some(next) = word.chars().nth(skip) else {
                continue;
            };
            let weight = frequency as f32 / MAX_FREQUENCY as f32;
            match out.iter_mut().find(|(c, _)| *c == next) {
                Some((_, w)) => *w += weight,
                None => out.push((next, weight)),
            }
        }
        out
    }
}
