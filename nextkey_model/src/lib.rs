//! `nextkey_model`：本地统计预测模型（前缀词典 + n-gram + 词转移表）。
pub mod history;
pub mod lexicon;
pub mod model;
pub mod tables;

pub use history::TypingHistory;
pub use lexicon::{Lexicon, LexiconError};
pub use model::LocalModel;
