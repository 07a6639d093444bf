use serde::{Deserialize, Serialize};

/// 输入事件（逻辑键盘事件）。
///
/// 说明：
/// - `TypingSession` 只关心“语义事件”，不关心具体平台键值
/// - CLI/GUI 层负责把系统按键或预测轮盘的点击转换成这些事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 直接输入一个字符
    Char(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空当前文本
    Clear,
    /// 采纳当前展示的第 n 个预测（0 起）
    Accept(usize),
}

/// 会话输出动作（交给宿主处理的副作用）。
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 一次按键记录，宿主转发给外部的会话日志
    Keystroke(KeystrokeRecord),
}

/// 按键记录：会话日志需要的全部字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystrokeRecord {
    /// 输入的字符；退格记为 `"Backspace"`
    pub key: String,
    /// 该字符是否命中了当时展示的某个预测
    pub matched_prediction: bool,
    /// 命中预测的置信度
    pub confidence: Option<f32>,
    /// 按键前的光标位置（字符数）
    pub position: usize,
    pub is_backspace: bool,
}
