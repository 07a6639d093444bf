use async_trait::async_trait;

use crate::{error::PredictError, model::Prediction};

/// 本地预测抽象：core 不关心词表来自静态数据、文件还是其他来源。
///
/// 约定：
/// - 不会失败，总是返回一个（可能是通用的）列表
/// - 返回值按置信度倒序，长度不超过 5，首项置信度为 1.0
pub trait LocalPredictor: Send + Sync {
    fn predict(&self, text: &str) -> Vec<Prediction>;
}

/// 远端预测抽象：一次调用对应恰好一次请求/响应，不做重试。
///
/// 实现需要把字母统一为大写、把置信度夹到 [0, 1]，并在响应结构不符时返回错误，
/// 而不是猜测。
#[async_trait]
pub trait RemotePredictor: Send + Sync {
    async fn predict(&self, text: &str) -> Result<Vec<Prediction>, PredictError>;
}

/// 未配置远端时的占位实现。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRemote;

#[async_trait]
impl RemotePredictor for NoRemote {
    async fn predict(&self, _text: &str) -> Result<Vec<Prediction>, PredictError> {
        Err(PredictError::Configuration("no remote predictor".into()))
    }
}
