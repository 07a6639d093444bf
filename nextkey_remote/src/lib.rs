//! `nextkey_remote`：远端 LLM 预测适配器。
pub mod gemini;

pub use gemini::{GeminiPredictor, parse_reply};
