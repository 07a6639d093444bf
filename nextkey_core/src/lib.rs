//! `nextkey_core`：预测流水线的编排层，不包含任何具体模型与网络实现。
//!
//! 设计目标：
//! - **单一入口**：所有 UI 只调用 `PredictorService::predict`
//! - **分层清晰**：service -> cache -> rate_limiter -> remote / local -> filter -> 输出
//! - **可替换**：本地模型（`LocalPredictor`）与远端适配器（`RemotePredictor`）都是 trait，
//!   由 `nextkey_model` / `nextkey_remote` 提供实现
pub mod cache;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod key_event;
pub mod model;
pub mod predictor;
pub mod rate_limiter;
pub mod service;
pub mod session;

pub use config::{PredictionMode, PredictorConfig, RemoteConfig};
pub use error::PredictError;
pub use model::{Prediction, PredictionOutcome, Tier};
pub use predictor::{LocalPredictor, NoRemote, RemotePredictor};
pub use service::{PredictorService, ServiceStats};
