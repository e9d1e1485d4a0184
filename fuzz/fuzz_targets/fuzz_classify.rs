#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use warden::Classifier;
use warden::infrastructure::decode_lossy;

static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let classifier = CLASSIFIER.get_or_init(|| Classifier::with_default_keywords().unwrap());
    let text = decode_lossy(data.to_vec());
    assert!(!classifier.classify(&text).is_error());
});
