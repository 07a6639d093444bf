//! `filter`：预测列表后处理（截断置信度、去重、裁剪、归一化）。

use std::collections::HashSet;

use crate::model::Prediction;

/// Filter：对预测列表做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, predictions: Vec<Prediction>) -> Vec<Prediction>;
}

/// 大小写无关去重 + 截断到 limit。
///
/// 保序：先出现（排名更高）的条目胜出，不做重新排序。
pub struct DedupTruncate {
    pub limit: usize,
}

impl Filter for DedupTruncate {
    fn apply(&self, mut predictions: Vec<Prediction>) -> Vec<Prediction> {
        let mut seen = HashSet::new();
        predictions.retain(|p| seen.insert(p.dedup_key()));
        predictions.truncate(self.limit);
        predictions
    }
}

/// 把置信度夹到 [0, 1]；NaN 视为 0。
pub struct ClampConfidence;

impl Filter for ClampConfidence {
    fn apply(&self, mut predictions: Vec<Prediction>) -> Vec<Prediction> {
        for p in &mut predictions {
            p.confidence = if p.confidence.is_nan() {
                0.0
            } else {
                p.confidence.clamp(0.0, 1.0)
            };
        }
        predictions
    }
}

/// 按首项缩放，使首项置信度恰好为 1.0。
///
/// 要求输入已按置信度倒序；首项不为正数时原样返回。
pub struct NormalizeTop;

impl Filter for NormalizeTop {
    fn apply(&self, mut predictions: Vec<Prediction>) -> Vec<Prediction> {
        let Some(top) = predictions.first().map(|p| p.confidence) else {
            return predictions;
        };
        if top.is_nan() || top <= 0.0 {
            return predictions;
        }
        for p in &mut predictions {
            p.confidence /= top;
        }
        predictions
    }
}

/// 稳定排序（倒序），同分保持原有顺序。
pub fn sort_descending(predictions: &mut [Prediction]) {
    predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn p(letter: char, confidence: f32) -> Prediction {
        Prediction::new(letter, confidence)
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first() {
        let out = DedupTruncate { limit: 4 }.apply(vec![
            p('e', 0.9),
            p('T', 0.8),
            p('E', 0.7),
            p('t', 0.6),
            p(' ', 0.5),
        ]);
        assert_eq!(out, vec![p('e', 0.9), p('T', 0.8), p(' ', 0.5)]);
    }

    #[test]
    fn dedup_truncates_without_padding() {
        let input: Vec<_> = "ABCDEF".chars().map(|c| p(c, 0.5)).collect();
        assert_eq!(DedupTruncate { limit: 4 }.apply(input).len(), 4);
        assert_eq!(DedupTruncate { limit: 4 }.apply(vec![p('A', 1.0)]).len(), 1);
    }

    #[test]
    fn clamp_bounds_confidences() {
        let out = ClampConfidence.apply(vec![p('A', 1.7), p('B', -0.2), p('C', f32::NAN)]);
        assert_eq!(out, vec![p('A', 1.0), p('B', 0.0), p('C', 0.0)]);
    }

    #[test]
    fn normalize_sets_top_to_one() {
        let out = NormalizeTop.apply(vec![p('A', 0.2), p('B', 0.1)]);
        assert_eq!(out[0].confidence, 1.0);
        assert_eq!(out[1].confidence, 0.5);
        assert!(NormalizeTop.apply(Vec::new()).is_empty());
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut v = vec![p('Q', 1.0), p('B', 0.9), p('S', 1.0)];
        sort_descending(&mut v);
        assert_eq!(v, vec![p('Q', 1.0), p('S', 1.0), p('B', 0.9)]);
    }
}
