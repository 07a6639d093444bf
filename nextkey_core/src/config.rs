//! 预测配置：进程启动时加载一次，之后只读。
//!
//! 配置文件为 JSON，所有字段都有默认值，缺失的字段按默认值补齐：
//!
//! ```json
//! { "mode": "hybrid", "cache_enabled": true, "cache_capacity": 50,
//!   "remote": { "model": "gemini-2.5-flash-lite", "timeout_ms": 4000 } }
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::{cache, rate_limiter};

/// 预测模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionMode {
    /// 只用本地模型
    LocalOnly,
    /// 允许时优先远端，失败回退本地
    #[default]
    RemotePreferred,
    /// 远端结果优先占位，本地结果补足剩余名额
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub mode: PredictionMode,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    pub cache_ttl_ms: u64,
    /// 相邻远端调用的最小间隔
    pub min_remote_interval_ms: u64,
    pub remote: RemoteConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            mode: PredictionMode::default(),
            cache_enabled: true,
            cache_capacity: cache::DEFAULT_CAPACITY,
            cache_ttl_ms: cache::DEFAULT_TTL.as_millis() as u64,
            min_remote_interval_ms: rate_limiter::DEFAULT_MIN_INTERVAL.as_millis() as u64,
            remote: RemoteConfig::default(),
        }
    }
}

impl PredictorConfig {
    /// 从指定路径加载；文件不存在时返回默认配置。
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("predictor config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read predictor config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse predictor config from {}", path.display()))?;
        log::info!("predictor config loaded from {}", path.display());
        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn min_remote_interval(&self) -> Duration {
        Duration::from_millis(self.min_remote_interval_ms)
    }
}

/// 远端 LLM 服务配置（Gemini `generateContent` 接口）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// 直接给出的凭据；为空时读取 `api_key_env` 指定的环境变量
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-2.5-flash-lite".into(),
            timeout_ms: 4_000,
        }
    }
}

impl RemoteConfig {
    /// 解析凭据：显式配置优先，其次环境变量；空串视为未配置。
    pub fn credential(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
