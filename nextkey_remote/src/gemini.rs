//! Google Gemini `generateContent` 适配器。
//!
//! 一次 `predict` 对应恰好一次 HTTP 往返，不重试。回复文本必须整体是
//! `[{"letter": "E", "confidence": 0.8}, ...]`，任何结构不符都直接失败，
//! 由上层回退到本地模型。

use std::time::Duration;

use async_trait::async_trait;
use nextkey_core::{PredictError, Prediction, RemoteConfig, RemotePredictor};
use reqwest::Client;
use serde::Deserialize;

/// 远端最多返回的预测数。
pub const MAX_PREDICTIONS: usize = 4;

/// 错误响应体在错误信息里保留的最大长度。
const MAX_ERROR_BODY: usize = 200;

pub struct GeminiPredictor {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiPredictor {
    /// 缺少凭据时返回 `PredictError::Configuration`，调用方应降级为纯本地。
    pub fn new(config: &RemoteConfig) -> Result<Self, PredictError> {
        let api_key = config.credential().ok_or_else(|| {
            PredictError::Configuration(format!("{} is not set", config.api_key_env))
        })?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| PredictError::Configuration(err.to_string()))?;
        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(text) }] }],
            "generationConfig": {
                "temperature": 0.3,
                "maxOutputTokens": 100,
                "responseMimeType": "application/json",
            }
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> PredictError {
        if err.is_timeout() {
            PredictError::Timeout(self.timeout)
        } else {
            PredictError::Transport(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl RemotePredictor for GeminiPredictor {
    async fn predict(&self, text: &str) -> Result<Vec<Prediction>, PredictError> {
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(text))
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PredictError::Http {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = resp.text().await.map_err(|err| self.transport_error(err))?;
        let reply: GenerateContentResponse = serde_json::from_str(&body)?;
        let reply_text = reply
            .first_text()
            .ok_or_else(|| PredictError::Parse("reply has no text part".into()))?;
        log::debug!("gemini reply: {reply_text}");
        parse_reply(reply_text)
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a predictive text assistant. Given the text: "{text}"

Predict the 4 most likely next characters the user will type, considering common English words, the previous words, grammar, spaces and punctuation.

Return letters in uppercase ("E"), a space as " ", punctuation as itself (".", ",", "!", "?").

Respond ONLY with a JSON array of 4 objects, each with "letter" (a single character) and "confidence" (0-1), for example:
[{{"letter":"E","confidence":0.8}},{{"letter":"T","confidence":0.6}},{{"letter":" ","confidence":0.5}},{{"letter":"A","confidence":0.4}}]"#
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// 回复中的单个条目。
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireLetter {
    letter: String,
    confidence: f64,
}

/// 严格解码回复文本：整体必须是 `{letter, confidence}` 数组。
///
/// - `letter` 必须恰好一个字符；字母转大写，空格与标点原样保留
/// - `confidence` 夹到 [0, 1]
/// - 空数组视为失败
/// - 最多保留前 4 项
pub fn parse_reply(text: &str) -> Result<Vec<Prediction>, PredictError> {
    let wire: Vec<WireLetter> = serde_json::from_str(text.trim())?;
    if wire.is_empty() {
        return Err(PredictError::Parse("empty prediction list".into()));
    }
    wire.into_iter()
        .take(MAX_PREDICTIONS)
        .map(|w| {
            let mut chars = w.letter.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(PredictError::Parse(format!(
                    "`letter` must be one character, got {:?}",
                    w.letter
                )));
            };
            let letter = if ch.is_alphabetic() {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch
            };
            Ok(Prediction::new(letter, w.confidence.clamp(0.0, 1.0) as f32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_and_normalizes_letters() {
        let out = parse_reply(
            r#" [{"letter":"e","confidence":0.8},{"letter":" ","confidence":1.5},
                 {"letter":".","confidence":-1},{"letter":"T","confidence":0.3},
                 {"letter":"A","confidence":0.2}] "#,
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                Prediction::new('E', 0.8),
                Prediction::new(' ', 1.0),
                Prediction::new('.', 0.0),
                Prediction::new('T', 0.3),
            ]
        );
    }

    #[test]
    fn prose_wrapped_reply_fails_closed() {
        let err = parse_reply(r#"Sure! [{"letter":"E","confidence":0.8}]"#).unwrap_err();
        assert!(matches!(err, PredictError::Parse(_)));
        assert!(matches!(parse_reply("no idea"), Err(PredictError::Parse(_))));
    }

    #[test]
    fn shape_mismatches_fail_closed() {
        for reply in [
            "[]",
            r#"[{"letter":"EE","confidence":0.5}]"#,
            r#"[{"letter":"","confidence":0.5}]"#,
            r#"[{"letter":"E"}]"#,
            r#"[{"letter":"E","confidence":"high"}]"#,
            r#"[{"letter":"E","confidence":0.5,"reason":"common"}]"#,
            r#"{"letter":"E","confidence":0.5}"#,
        ] {
            assert!(
                matches!(parse_reply(reply), Err(PredictError::Parse(_))),
                "accepted {reply}"
            );
        }
    }

    #[test]
    fn first_text_walks_candidates() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"[]"}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(reply.first_text(), Some("[]"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let config = RemoteConfig {
            api_key: None,
            api_key_env: "NEXTKEY_TEST_UNSET_VARIABLE".into(),
            ..RemoteConfig::default()
        };
        assert!(matches!(
            GeminiPredictor::new(&config),
            Err(PredictError::Configuration(_))
        ));
    }

    #[test]
    fn prompt_embeds_text() {
        assert!(build_prompt("the qu").contains("\"the qu\""));
        let body = GeminiPredictor::request_body("hi");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }
}
