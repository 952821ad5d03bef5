//! Integration tests for state export and code binding.

mod common;

use common::fixtures::{TEST_DIMS, corpus, vector};
use reflex_bq::{BinaryQuantizer, LengthPolicy, QuantizerState, SharedQuantizer};

#[test]
fn test_restored_quantizer_reproduces_codes() {
    common::init_tracing();

    let mut bq = BinaryQuantizer::new(TEST_DIMS);
    bq.fit(&corpus(32, TEST_DIMS)).unwrap();
    let queries = corpus(10, TEST_DIMS);
    let codes = bq.encode_batch(&queries).unwrap();

    let bytes = QuantizerState::from_quantizer(&bq).to_bytes().unwrap();
    let restored = QuantizerState::from_bytes(&bytes)
        .unwrap()
        .into_quantizer(LengthPolicy::Strict)
        .unwrap();

    assert_eq!(restored.encode_batch(&queries).unwrap(), codes);
    assert_eq!(restored.fingerprint(), bq.fingerprint());
}

#[test]
fn test_fingerprint_detects_refit() {
    let shared = SharedQuantizer::new(BinaryQuantizer::new(TEST_DIMS));
    shared.fit(&corpus(32, TEST_DIMS)).unwrap();

    let stored = QuantizerState::from_quantizer(&shared.snapshot());
    let code = shared.encode(&vector(7, TEST_DIMS)).unwrap();
    assert_eq!(stored.fingerprint(), shared.fingerprint());

    let refit: Vec<Vec<f32>> = (100..132).map(|s| vector(s, TEST_DIMS)).collect();
    shared.fit(&refit).unwrap();

    assert_ne!(stored.fingerprint(), shared.fingerprint());
    assert_eq!(code.len(), shared.read().code_words());
}

#[test]
fn test_json_and_rkyv_agree() {
    let mut bq = BinaryQuantizer::new(TEST_DIMS);
    bq.fit(&corpus(16, TEST_DIMS)).unwrap();
    let state = QuantizerState::from_quantizer(&bq);

    let from_json = QuantizerState::from_json(&state.to_json().unwrap()).unwrap();
    let from_rkyv = QuantizerState::from_bytes(&state.to_bytes().unwrap()).unwrap();

    assert_eq!(from_json, from_rkyv);
    assert_eq!(from_json.fingerprint(), state.fingerprint());
}
