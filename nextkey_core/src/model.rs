use serde::{Deserialize, Serialize};

/// 单个预测：下一个字符及其置信度。
///
/// 注意：`letter` 对字母统一为大写；空格与标点原样保留。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// 预测的下一个字符
    pub letter: char,
    /// 置信度，取值 [0, 1]
    pub confidence: f32,
}

impl Prediction {
    pub fn new(letter: char, confidence: f32) -> Self {
        Self { letter, confidence }
    }

    /// 大小写无关的比较键（用于去重）。
    pub fn dedup_key(&self) -> char {
        self.letter.to_uppercase().next().unwrap_or(self.letter)
    }
}

/// 结果来源层级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// 命中结果缓存
    Cache,
    /// 远端 LLM 服务
    Remote,
    /// 本地统计模型
    Local,
}

/// `predict_detailed` 的返回：预测列表 + 来源层级。
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub predictions: Vec<Prediction>,
    pub tier: Tier,
}
