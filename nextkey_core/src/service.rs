use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::cache::ResultCache;
use crate::clock::{Clock, SystemClock};
use crate::config::{PredictionMode, PredictorConfig};
use crate::filter::{ClampConfidence, DedupTruncate, Filter, sort_descending};
use crate::model::{Prediction, PredictionOutcome, Tier};
use crate::predictor::{LocalPredictor, NoRemote, RemotePredictor};
use crate::rate_limiter::RateLimiter;

/// 对调用方返回的预测数量上限。
pub const RESULT_LIMIT: usize = 4;

/// 分层预测服务：负责在 cache / remote / local 之间做决策。
///
/// 结构上对应的流水线：
/// - cache（命中直接返回） -> rate_limiter（决定是否放行远端） -> remote（失败回退） -> local
///   -> filter（夹紧/去重/截断） -> 写回 cache
///
/// 一个进程（或一次输入会话）只构造一个实例，显式传给各个调用点。
pub struct PredictorService<L, R = NoRemote> {
    /// 本地统计模型（总是可用）
    local: L,
    /// 远端适配器；None 表示未配置凭据，静默降级为纯本地
    remote: Option<R>,
    mode: PredictionMode,
    /// None 表示关闭缓存
    cache: Option<Mutex<ResultCache>>,
    rate_limiter: RateLimiter,
    clock: Arc<dyn Clock>,
    result_limit: usize,
    counters: Counters,
}

/// 诊断计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub cache_hits: u64,
    pub remote_calls: u64,
    pub remote_failures: u64,
    pub rate_limited: u64,
    pub local_predictions: u64,
}

#[derive(Debug, Default)]
struct Counters {
    cache_hits: AtomicU64,
    remote_calls: AtomicU64,
    remote_failures: AtomicU64,
    rate_limited: AtomicU64,
    local_predictions: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ServiceStats {
        ServiceStats {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            remote_calls: self.remote_calls.load(Ordering::Relaxed),
            remote_failures: self.remote_failures.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            local_predictions: self.local_predictions.load(Ordering::Relaxed),
        }
    }
}

impl<L> PredictorService<L, NoRemote>
where
    L: LocalPredictor,
{
    /// 默认配置、无远端。
    pub fn new(local: L) -> Self {
        Self::from_config(&PredictorConfig::default(), local)
    }

    pub fn from_config(config: &PredictorConfig, local: L) -> Self {
        Self {
            local,
            remote: None,
            mode: config.mode,
            cache: config
                .cache_enabled
                .then(|| Mutex::new(ResultCache::new(config.cache_capacity, config.cache_ttl()))),
            rate_limiter: RateLimiter::new(config.min_remote_interval()),
            clock: Arc::new(SystemClock),
            result_limit: RESULT_LIMIT,
            counters: Counters::default(),
        }
    }
}

impl<L, R> PredictorService<L, R>
where
    L: LocalPredictor,
    R: RemotePredictor,
{
    /// 挂上远端适配器。
    pub fn with_remote<R2: RemotePredictor>(self, remote: R2) -> PredictorService<L, R2> {
        if self.mode == PredictionMode::LocalOnly {
            log::debug!("remote predictor attached but mode is local-only; it will not be called");
        }
        PredictorService {
            local: self.local,
            remote: Some(remote),
            mode: self.mode,
            cache: self.cache,
            rate_limiter: self.rate_limiter,
            clock: self.clock,
            result_limit: self.result_limit,
            counters: self.counters,
        }
    }

    /// 替换时间来源（测试里注入手动时钟）。
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn mode(mut self, mode: PredictionMode) -> Self {
        self.mode = mode;
        self
    }

    /// 唯一对外入口：返回最多 4 个、按置信度倒序、大小写无关去重的预测。
    ///
    /// 远端失败只会降低质量，不会让调用失败。
    pub async fn predict(&self, text: &str, allow_remote: bool) -> Vec<Prediction> {
        self.predict_detailed(text, allow_remote).await.predictions
    }

    /// 与 `predict` 相同，但额外给出结果来源。
    pub async fn predict_detailed(&self, text: &str, allow_remote: bool) -> PredictionOutcome {
        let key = ResultCache::cache_key(text);
        let cached = self
            .cache
            .as_ref()
            .and_then(|cache| cache.lock().get(&key, self.clock.now()));
        if let Some(predictions) = cached {
            Counters::bump(&self.counters.cache_hits);
            log::debug!("cache hit for {key:?}");
            return PredictionOutcome {
                predictions,
                tier: Tier::Cache,
            };
        }

        let outcome = match self.remote_for(allow_remote) {
            Some(remote) => self.predict_remote(remote, text).await,
            None => self.predict_local(text),
        };

        if let Some(cache) = &self.cache {
            cache
                .lock()
                .insert(key, outcome.predictions.clone(), self.clock.now());
        }
        outcome
    }

    pub fn stats(&self) -> ServiceStats {
        self.counters.snapshot()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    /// 是否存在可用的远端（模式允许且已配置）。
    pub fn has_remote(&self) -> bool {
        self.mode != PredictionMode::LocalOnly && self.remote.is_some()
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    fn remote_for(&self, allow_remote: bool) -> Option<&R> {
        if !allow_remote || self.mode == PredictionMode::LocalOnly {
            return None;
        }
        self.remote.as_ref()
    }

    async fn predict_remote(&self, remote: &R, text: &str) -> PredictionOutcome {
        let now = self.clock.now();
        if !self.rate_limiter.try_acquire(now) {
            Counters::bump(&self.counters.rate_limited);
            log::debug!(
                "remote call skipped by rate limiter ({:?} remaining)",
                self.rate_limiter.wait_duration(now)
            );
            return self.predict_local(text);
        }

        Counters::bump(&self.counters.remote_calls);
        match remote.predict(text).await {
            Ok(predictions) => {
                let mut predictions = ClampConfidence.apply(predictions);
                if self.mode == PredictionMode::Hybrid {
                    predictions.extend(self.local.predict(text));
                }
                let mut predictions = DedupTruncate {
                    limit: self.result_limit,
                }
                .apply(predictions);
                // 去重按到达顺序（远端优先），输出按置信度
                sort_descending(&mut predictions);
                if predictions.is_empty() {
                    Counters::bump(&self.counters.remote_failures);
                    log::warn!("remote predictor returned no predictions, falling back to local model");
                    return self.predict_local(text);
                }
                PredictionOutcome {
                    predictions,
                    tier: Tier::Remote,
                }
            }
            Err(err) => {
                Counters::bump(&self.counters.remote_failures);
                log::warn!("remote prediction failed, falling back to local model: {err}");
                self.predict_local(text)
            }
        }
    }

    fn predict_local(&self, text: &str) -> PredictionOutcome {
        Counters::bump(&self.counters.local_predictions);
        let predictions = DedupTruncate {
            limit: self.result_limit,
        }
        .apply(self.local.predict(text));
        PredictionOutcome {
            predictions,
            tier: Tier::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::ManualClock;
    use crate::error::PredictError;

    /// 以最后一个字符决定输出，便于断言。
    struct EchoLocal;

    impl LocalPredictor for EchoLocal {
        fn predict(&self, text: &str) -> Vec<Prediction> {
            let first = text
                .chars()
                .last()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('T');
            vec![
                Prediction::new(first, 1.0),
                Prediction::new('E', 0.8),
                Prediction::new('e', 0.7),
                Prediction::new('A', 0.6),
                Prediction::new('O', 0.5),
            ]
        }
    }

    #[derive(Clone)]
    struct FakeRemote {
        calls: Arc<AtomicUsize>,
        reply: Result<Vec<Prediction>, &'static str>,
    }

    impl FakeRemote {
        fn ok(reply: Vec<Prediction>) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Ok(reply),
            }
        }

        fn failing() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Err("no JSON array in reply"),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemotePredictor for FakeRemote {
        async fn predict(&self, _text: &str) -> Result<Vec<Prediction>, PredictError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .map_err(|msg| PredictError::Parse(msg.to_string()))
        }
    }

    fn remote_reply() -> Vec<Prediction> {
        vec![
            Prediction::new('R', 0.9),
            Prediction::new('S', 1.4),
            Prediction::new('r', 0.5),
            Prediction::new(' ', -0.3),
            Prediction::new('.', 0.2),
            Prediction::new('X', 0.1),
        ]
    }

    fn service_with(
        remote: FakeRemote,
        mode: PredictionMode,
    ) -> (PredictorService<EchoLocal, FakeRemote>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let service = PredictorService::new(EchoLocal)
            .mode(mode)
            .clock(clock.clone())
            .with_remote(remote);
        (service, clock)
    }

    #[tokio::test]
    async fn local_results_are_deduped_and_capped() {
        let service = PredictorService::new(EchoLocal);
        let out = service.predict("th", false).await;
        assert_eq!(
            out,
            vec![
                Prediction::new('H', 1.0),
                Prediction::new('E', 0.8),
                Prediction::new('A', 0.6),
                Prediction::new('O', 0.5),
            ]
        );
    }

    #[tokio::test]
    async fn second_identical_call_is_served_from_cache() {
        let service = PredictorService::new(EchoLocal);
        let first = service.predict_detailed("hello wor", false).await;
        let second = service.predict_detailed("hello wor", false).await;
        assert_eq!(first.tier, Tier::Local);
        assert_eq!(second.tier, Tier::Cache);
        assert_eq!(first.predictions, second.predictions);
        assert_eq!(service.stats().cache_hits, 1);
    }

    #[tokio::test]
    async fn cache_entries_expire_after_ttl() {
        let clock = Arc::new(ManualClock::new());
        let service = PredictorService::new(EchoLocal).clock(clock.clone());
        service.predict("abc", false).await;
        clock.advance(Duration::from_millis(4_999));
        assert_eq!(service.predict_detailed("abc", false).await.tier, Tier::Cache);
        clock.advance(Duration::from_millis(1));
        assert_eq!(service.predict_detailed("abc", false).await.tier, Tier::Local);
    }

    #[tokio::test]
    async fn remote_disallowed_never_calls_remote() {
        let remote = FakeRemote::ok(remote_reply());
        let (service, _) = service_with(remote.clone(), PredictionMode::RemotePreferred);
        let out = service.predict_detailed("th", false).await;
        assert_eq!(out.tier, Tier::Local);
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn remote_reply_is_clamped_deduped_and_capped() {
        let remote = FakeRemote::ok(remote_reply());
        let (service, _) = service_with(remote.clone(), PredictionMode::RemotePreferred);
        let out = service.predict_detailed("the", true).await;
        assert_eq!(out.tier, Tier::Remote);
        assert_eq!(
            out.predictions,
            vec![
                Prediction::new('S', 1.0),
                Prediction::new('R', 0.9),
                Prediction::new('.', 0.2),
                Prediction::new(' ', 0.0),
            ]
        );
        assert_eq!(remote.calls(), 1);
    }

    #[tokio::test]
    async fn calls_within_min_interval_skip_the_network() {
        let remote = FakeRemote::ok(remote_reply());
        let (service, clock) = service_with(remote.clone(), PredictionMode::RemotePreferred);

        assert_eq!(service.predict_detailed("the q", true).await.tier, Tier::Remote);
        clock.advance(Duration::from_millis(50));
        assert_eq!(service.predict_detailed("the qu", true).await.tier, Tier::Local);
        assert_eq!(remote.calls(), 1);
        assert_eq!(service.stats().rate_limited, 1);

        clock.advance(Duration::from_millis(100));
        assert_eq!(service.predict_detailed("the qui", true).await.tier, Tier::Remote);
        assert_eq!(remote.calls(), 2);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_and_is_cached() {
        let remote = FakeRemote::failing();
        let (service, _) = service_with(remote.clone(), PredictionMode::RemotePreferred);

        let out = service.predict_detailed("th", true).await;
        assert_eq!(out.tier, Tier::Local);
        assert!(!out.predictions.is_empty());
        assert_eq!(service.stats().remote_failures, 1);

        let again = service.predict_detailed("th", true).await;
        assert_eq!(again.tier, Tier::Cache);
        assert_eq!(again.predictions, out.predictions);
        assert_eq!(remote.calls(), 1);
    }

    #[tokio::test]
    async fn empty_remote_reply_counts_as_failure() {
        let remote = FakeRemote::ok(Vec::new());
        let (service, _) = service_with(remote, PredictionMode::RemotePreferred);
        let out = service.predict_detailed("th", true).await;
        assert_eq!(out.tier, Tier::Local);
        assert_eq!(service.stats().remote_failures, 1);
    }

    #[tokio::test]
    async fn hybrid_fills_remaining_slots_from_local() {
        let remote = FakeRemote::ok(vec![Prediction::new('E', 0.9)]);
        let (service, _) = service_with(remote, PredictionMode::Hybrid);
        let out = service.predict_detailed("th", true).await;
        assert_eq!(out.tier, Tier::Remote);
        assert_eq!(
            out.predictions,
            vec![
                Prediction::new('H', 1.0),
                Prediction::new('E', 0.9),
                Prediction::new('A', 0.6),
                Prediction::new('O', 0.5),
            ]
        );
    }

    #[tokio::test]
    async fn local_only_mode_ignores_remote() {
        let remote = FakeRemote::ok(remote_reply());
        let (service, _) = service_with(remote.clone(), PredictionMode::LocalOnly);
        assert!(!service.has_remote());
        assert_eq!(service.predict_detailed("th", true).await.tier, Tier::Local);
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn disabled_cache_always_recomputes() {
        let config = PredictorConfig {
            cache_enabled: false,
            ..PredictorConfig::default()
        };
        let service = PredictorService::from_config(&config, EchoLocal);
        service.predict("th", false).await;
        assert_eq!(service.predict_detailed("th", false).await.tier, Tier::Local);
        assert_eq!(service.cache_len(), 0);
    }

    #[tokio::test]
    async fn clear_cache_forces_recompute() {
        let service = PredictorService::new(EchoLocal);
        service.predict("abc", false).await;
        assert_eq!(service.cache_len(), 1);
        service.clear_cache();
        assert_eq!(service.cache_len(), 0);
        assert_eq!(service.predict_detailed("abc", false).await.tier, Tier::Local);
    }

    #[tokio::test]
    async fn cache_stays_bounded() {
        let service = PredictorService::new(EchoLocal);
        for i in 0..75 {
            service.predict(&format!("word {i}"), false).await;
            assert!(service.cache_len() <= 50);
        }
        assert_eq!(service.cache_len(), 50);
    }
}
