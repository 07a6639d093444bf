//! 本地统计模型：只依赖静态表的确定性预测。
//!
//! 三种情形：
//! - 空输入：固定的起始字母
//! - 词首（末尾是空白或 `. ! ?`）：查前一个词的后继词表，按首字母聚合
//! - 词中：前缀词典 + 两字母上下文表 + 单字母后继表，按字母加权求和

use std::collections::HashMap;

use nextkey_core::context::{Boundary, InputContext, is_word_boundary};
use nextkey_core::filter::{Filter, NormalizeTop, sort_descending};
use nextkey_core::{LocalPredictor, Prediction};
use parking_lot::Mutex;

use crate::history::TypingHistory;
use crate::lexicon::Lexicon;
use crate::tables::{
    FALLBACK_LETTERS, LETTER_SUCCESSORS, SEED_LETTERS, TRIGRAMS, WORD_START_LETTERS,
    WORD_TRANSITIONS,
};

/// 本地模型原始输出的长度上限。
pub const RAW_LIMIT: usize = 5;

/// 单字母后继表中第一个后继字母的权重，之后逐位递减。
const SUCCESSOR_TOP_WEIGHT: f32 = 0.8;
const SUCCESSOR_STEP: f32 = 0.1;

pub struct LocalModel {
    lexicon: Lexicon,
    transitions: HashMap<&'static str, &'static [&'static str]>,
    trigrams: HashMap<&'static str, &'static [(char, f32)]>,
    successors: HashMap<char, &'static [char]>,
    history: Mutex<HistoryState>,
}

#[derive(Default)]
struct HistoryState {
    history: TypingHistory,
    /// 上一次记录时的文本，避免同一段输入被重复计数
    last_observed: Option<String>,
}

impl LocalModel {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            transitions: WORD_TRANSITIONS.iter().copied().collect(),
            trigrams: TRIGRAMS.iter().copied().collect(),
            successors: LETTER_SUCCESSORS.iter().copied().collect(),
            history: Mutex::new(HistoryState::default()),
        }
    }

    /// 输入历史的快照。
    pub fn history(&self) -> TypingHistory {
        self.history.lock().history.clone()
    }

    fn predict_context(&self, ctx: &InputContext) -> Vec<Prediction> {
        match ctx.boundary {
            Boundary::Empty => finish(SEED_LETTERS.to_vec()),
            Boundary::WordStart => self.predict_word_start(ctx),
            Boundary::MidWord => self.predict_mid_word(ctx),
        }
    }

    fn predict_word_start(&self, ctx: &InputContext) -> Vec<Prediction> {
        let successors = ctx
            .previous_word
            .as_deref()
            .and_then(|word| self.transitions.get(word));
        if let Some(successors) = successors {
            let n = successors.len() as f32;
            let mut scores = Vec::new();
            for (i, word) in successors.iter().enumerate() {
                if let Some(first) = word.chars().next() {
                    add_score(&mut scores, first.to_ascii_uppercase(), (n - i as f32) / n);
                }
            }
            if !scores.is_empty() {
                return finish(scores);
            }
        }
        finish(WORD_START_LETTERS.to_vec())
    }

    fn predict_mid_word(&self, ctx: &InputContext) -> Vec<Prediction> {
        let mut scores = Vec::new();

        // 1) 前缀词典
        for (letter, weight) in self.lexicon.next_letters(&ctx.partial_word) {
            add_score(&mut scores, letter, weight);
        }

        let chars: Vec<char> = ctx.partial_word.chars().collect();

        // 2) 两字母上下文
        if chars.len() >= 2 {
            let key: String = chars[chars.len() - 2..].iter().collect();
            if let Some(table) = self.trigrams.get(key.as_str()) {
                for &(letter, p) in table.iter() {
                    add_score(&mut scores, letter, p);
                }
            }
        }

        // 3) 单字母后继
        if let Some(list) = chars.last().and_then(|c| self.successors.get(c)) {
            for (i, &letter) in list.iter().enumerate() {
                add_score(&mut scores, letter, SUCCESSOR_TOP_WEIGHT - SUCCESSOR_STEP * i as f32);
            }
        }

        if scores.is_empty() {
            return finish(FALLBACK_LETTERS.to_vec());
        }
        finish(scores)
    }

    /// 词首时把刚完成的词（及词二元组）记入历史。
    fn observe(&self, text: &str, ctx: &InputContext) {
        let Some(word) = ctx.previous_word.as_deref() else {
            return;
        };
        let key = text.trim_end_matches(is_word_boundary);
        let mut state = self.history.lock();
        if state.last_observed.as_deref() == Some(key) {
            return;
        }
        state.history.add_word(word);
        if let Some(earlier) = ctx.earlier_word.as_deref() {
            state.history.add_bigram(earlier, word);
        }
        state.last_observed = Some(key.to_string());
    }
}

impl Default for LocalModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalPredictor for LocalModel {
    fn predict(&self, text: &str) -> Vec<Prediction> {
        let ctx = InputContext::from_text(text);
        if ctx.is_word_start() {
            self.observe(text, &ctx);
        }
        let predictions = self.predict_context(&ctx);
        log::debug!("local model: {:?} -> {} predictions", ctx.boundary, predictions.len());
        predictions
    }
}

fn add_score(scores: &mut Vec<(char, f32)>, letter: char, weight: f32) {
    match scores.iter_mut().find(|(c, _)| *c == letter) {
        Some((_, w)) => *w += weight,
        None => scores.push((letter, weight)),
    }
}

/// 排序（稳定）-> 截断到 `RAW_LIMIT` -> 首项归一到 1.0。
fn finish(scores: Vec<(char, f32)>) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = scores
        .into_iter()
        .map(|(letter, weight)| Prediction::new(letter, weight))
        .collect();
    sort_descending(&mut predictions);
    predictions.truncate(RAW_LIMIT);
    NormalizeTop.apply(predictions)
}
