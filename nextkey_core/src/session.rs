//! `TypingSession`：对上层（CLI/GUI）提供的输入会话对象。
//!
//! `TypingSession` 自身不做预测，而是：
//! - 持有当前文本与当前展示的预测
//! - 把每次 `InputEvent` 应用到文本上，并产出按键记录
//! - 为每次预测请求分配单调递增的序号，丢弃比已应用序号更旧的响应
//!
//! 远端响应可能乱序到达（后发的缓存/本地请求先返回），所以“是否过期”
//! 由序号显式判断，而不是依赖流水线内部取消。

use crate::{
    key_event::{Action, InputEvent, KeystrokeRecord},
    model::Prediction,
    predictor::{LocalPredictor, RemotePredictor},
    service::PredictorService,
};

/// 一次待发出的预测请求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub seq: u64,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct TypingSession {
    /// 已输入文本
    text: String,
    /// 当前展示的预测（来自已应用的最新响应）
    offered: Vec<Prediction>,
    /// 最近一次分配出去的序号
    issued_seq: u64,
    /// 最近一次被应用的序号
    applied_seq: u64,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offered(&self) -> &[Prediction] {
        &self.offered
    }

    /// 处理一个输入事件，返回需要交给宿主的动作。
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        let position = self.text.chars().count();
        let record = match event {
            InputEvent::Char(ch) => {
                let hit = self.offered_match(ch);
                self.text.push(ch);
                KeystrokeRecord {
                    key: ch.to_string(),
                    matched_prediction: hit.is_some(),
                    confidence: hit.map(|p| p.confidence),
                    position,
                    is_backspace: false,
                }
            }
            InputEvent::Accept(index) => {
                let Some(p) = self.offered.get(index).copied() else {
                    return Vec::new();
                };
                self.text.push(p.letter.to_ascii_lowercase());
                KeystrokeRecord {
                    key: p.letter.to_string(),
                    matched_prediction: true,
                    confidence: Some(p.confidence),
                    position,
                    is_backspace: false,
                }
            }
            InputEvent::Backspace => {
                if self.text.pop().is_none() {
                    return Vec::new();
                }
                KeystrokeRecord {
                    key: "Backspace".into(),
                    matched_prediction: false,
                    confidence: None,
                    position,
                    is_backspace: true,
                }
            }
            InputEvent::Clear => {
                self.text.clear();
                self.offered.clear();
                return Vec::new();
            }
        };
        // 文本变了，旧预测不再对应当前输入
        self.offered.clear();
        vec![Action::Keystroke(record)]
    }

    /// 为当前文本分配一个新的请求序号。
    pub fn begin_request(&mut self) -> PredictionRequest {
        self.issued_seq += 1;
        PredictionRequest {
            seq: self.issued_seq,
            text: self.text.clone(),
        }
    }

    /// 应用一个响应；序号不新于已应用序号时丢弃并返回 false。
    pub fn apply(&mut self, seq: u64, predictions: Vec<Prediction>) -> bool {
        if seq <= self.applied_seq {
            log::debug!("dropping stale predictions #{seq} (applied #{})", self.applied_seq);
            return false;
        }
        self.applied_seq = seq;
        self.offered = predictions;
        true
    }

    /// 便捷接口：对当前文本发起预测并立即应用。
    pub async fn refresh<L, R>(
        &mut self,
        service: &PredictorService<L, R>,
        allow_remote: bool,
    ) -> &[Prediction]
    where
        L: LocalPredictor,
        R: RemotePredictor,
    {
        let request = self.begin_request();
        let predictions = service.predict(&request.text, allow_remote).await;
        self.apply(request.seq, predictions);
        &self.offered
    }

    fn offered_match(&self, ch: char) -> Option<Prediction> {
        let key = ch.to_uppercase().next().unwrap_or(ch);
        self.offered.iter().copied().find(|p| p.dedup_key() == key)
    }
}
