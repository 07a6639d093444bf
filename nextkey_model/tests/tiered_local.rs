use std::collections::HashSet;

use nextkey_core::{PredictorService, Tier};
use nextkey_model::LocalModel;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn empty_text_yields_seed_letters() {
    let service = PredictorService::new(LocalModel::new());
    let out = service.predict("", false).await;
    let got: String = out.iter().map(|p| p.letter).collect();
    assert_eq!(got, "TAIS");
    assert_eq!(out[0].confidence, 1.0);
}

#[tokio::test]
async fn mid_word_th_predicts_e() {
    let service = PredictorService::new(LocalModel::new());
    let out = service.predict("th", false).await;
    assert_eq!(out[0].letter, 'E');
}

#[tokio::test]
async fn completed_word_uses_transition_table() {
    let service = PredictorService::new(LocalModel::new());
    let out = service.predict("the ", false).await;
    assert_eq!(out[0].letter, 'Q');
    assert_eq!(out.len(), 4);
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let service = PredictorService::new(LocalModel::new());
    let texts = ["", "t", "th", "the", "the ", "the qu", "I am ", "hello, wor", "x9"];
    for text in texts {
        let first = service.predict_detailed(text, false).await;
        let second = service.predict_detailed(text, false).await;
        assert_eq!(first.predictions, second.predictions, "text {text:?}");
        assert_eq!(second.tier, Tier::Cache);
    }
}

#[tokio::test]
async fn results_hold_length_dedup_and_normalization() {
    let service = PredictorService::new(LocalModel::new());
    let sentence = "The quick brown fox jumps over the lazy dog. Predictive text helps people type faster!";
    for end in 0..=sentence.len() {
        let out = service.predict(&sentence[..end], false).await;
        assert!(!out.is_empty() && out.len() <= 4);
        assert_eq!(out[0].confidence, 1.0);
        let distinct: HashSet<char> = out.iter().map(|p| p.dedup_key()).collect();
        assert_eq!(distinct.len(), out.len());
        assert!(out.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }
}
