use std::time::Duration;

/// 远端预测链路上的错误分类。
///
/// 这些错误只在 `PredictorService` 内部流转：被记录、计数，然后回退到本地模型，
/// 永远不会从 `predict` 抛给调用方。
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// 请求了远端但缺少凭据等配置
    #[error("remote predictor is not configured: {0}")]
    Configuration(String),

    /// 连接失败、读写中断等传输层错误
    #[error("transport error: {0}")]
    Transport(String),

    /// 非 2xx 响应
    #[error("remote returned {status}: {message}")]
    Http { status: u16, message: String },

    /// 响应体不符合 `[{letter, confidence}]` 结构
    #[error("unparseable remote reply: {0}")]
    Parse(String),

    /// 超过请求超时
    #[error("remote call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
