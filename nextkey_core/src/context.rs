//! `InputContext`：每次预测时从输入文本推导出的上下文，不做存储。
//!
//! 约定：
//! - `partial_word`：正在输入的词（大写），仅在词中状态下非空
//! - `previous_word`：最近一个已完成的词（小写，去掉首尾标点）
//! - `earlier_word`：`previous_word` 之前的一个词，用于记录词二元组
//! - `boundary`：输入为空 / 处于词首 / 处于词中

/// 输入所处的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// 空输入（或只有空白）
    Empty,
    /// 末尾是空白或 `. ! ?`，下一个字符是新词的首字母
    WordStart,
    /// 正在输入一个词
    MidWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputContext {
    pub partial_word: String,
    pub previous_word: Option<String>,
    pub earlier_word: Option<String>,
    pub last_char: Option<char>,
    pub boundary: Boundary,
}

impl InputContext {
    pub fn from_text(text: &str) -> Self {
        let last_char = text.chars().last();
        if text.trim().is_empty() {
            return Self {
                partial_word: String::new(),
                previous_word: None,
                earlier_word: None,
                last_char,
                boundary: Boundary::Empty,
            };
        }

        let boundary = match last_char {
            Some(c) if is_word_boundary(c) => Boundary::WordStart,
            _ => Boundary::MidWord,
        };

        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        let partial_word = if boundary == Boundary::MidWord {
            let token = tokens.pop().unwrap_or_default();
            token
                .trim_start_matches(|c: char| !is_word_char(c))
                .to_uppercase()
        } else {
            String::new()
        };

        let mut completed = tokens.iter().rev().filter_map(|t| clean_word(t));
        let previous_word = completed.next();
        let earlier_word = completed.next();

        Self {
            partial_word,
            previous_word,
            earlier_word,
            last_char,
            boundary,
        }
    }

    pub fn is_word_start(&self) -> bool {
        self.boundary == Boundary::WordStart
    }
}

/// 空白以及句末标点视为词边界。
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '!' | '?')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// 去掉首尾标点并转小写；剩余为空时返回 None。
fn clean_word(token: &str) -> Option<String> {
    let word = token.trim_matches(|c: char| !is_word_char(c));
    (!word.is_empty()).then(|| word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(InputContext::from_text("").boundary, Boundary::Empty);
        assert_eq!(InputContext::from_text("   ").boundary, Boundary::Empty);
    }

    #[test]
    fn mid_word_context() {
        let ctx = InputContext::from_text("the quick br");
        assert_eq!(ctx.boundary, Boundary::MidWord);
        assert_eq!(ctx.partial_word, "BR");
        assert_eq!(ctx.previous_word.as_deref(), Some("quick"));
        assert_eq!(ctx.earlier_word.as_deref(), Some("the"));
        assert_eq!(ctx.last_char, Some('r'));
    }

    #[test]
    fn word_start_after_space_and_sentence_end() {
        let ctx = InputContext::from_text("The ");
        assert!(ctx.is_word_start());
        assert_eq!(ctx.previous_word.as_deref(), Some("the"));
        assert_eq!(ctx.partial_word, "");

        let ctx = InputContext::from_text("I saw a dog.");
        assert!(ctx.is_word_start());
        assert_eq!(ctx.previous_word.as_deref(), Some("dog"));
        assert_eq!(ctx.earlier_word.as_deref(), Some("a"));
    }

    #[test]
    fn leading_punctuation_is_not_part_of_the_word() {
        let ctx = InputContext::from_text("said \"th");
        assert_eq!(ctx.partial_word, "TH");
    }

    #[test]
    fn comma_keeps_mid_word() {
        let ctx = InputContext::from_text("well,");
        assert_eq!(ctx.boundary, Boundary::MidWord);
        assert_eq!(ctx.partial_word, "WELL,");
    }
}
