//! End-to-end scenarios exercising `dedup_exact`/`dedup_fuzzy` against the
//! corpora named in the host external-interface contract.

use corpus_dedup::{dedup_exact, dedup_fuzzy, Config, LshConfig};

#[test]
fn s1_exact_identical() {
    let cfg = Config::default();
    let mut source: Vec<String> = vec!["hello".into(), "hello".into(), "world".into()];
    let mut sink: Vec<usize> = Vec::new();

    dedup_exact(&mut source, &mut sink, &cfg).unwrap();

    assert_eq!(sink, vec![0, 2]);
}

#[test]
fn s2_exact_case_sensitive() {
    let cfg = Config::default();
    let mut source: Vec<String> = vec!["Hello".into(), "hello".into()];
    let mut sink: Vec<usize> = Vec::new();

    dedup_exact(&mut source, &mut sink, &cfg).unwrap();

    assert_eq!(sink, vec![0, 1]);
}

#[test]
fn s3_fuzzy_identical() {
    let cfg = Config::new()
        .with_ngram(3)
        .with_num_perm(128)
        .with_threshold(0.7);
    let mut source: Vec<String> = vec![
        "the quick brown fox".into(),
        "the quick brown fox".into(),
    ];
    let mut sink: Vec<usize> = Vec::new();

    dedup_fuzzy(&mut source, &mut sink, &cfg).unwrap();

    assert_eq!(sink, vec![0]);
}

#[test]
fn s4_fuzzy_near_dup() {
    let cfg = Config::new()
        .with_ngram(3)
        .with_num_perm(256)
        .with_threshold(0.7);
    let mut source: Vec<String> = vec![
        "the quick brown fox jumps over the lazy dog".into(),
        "the quick brown fox jumps over the lazy dogs".into(),
    ];
    let mut sink: Vec<usize> = Vec::new();

    dedup_fuzzy(&mut source, &mut sink, &cfg).unwrap();

    assert_eq!(sink, vec![0]);
}

#[test]
fn s5_fuzzy_disjoint() {
    let cfg = Config::new().with_ngram(3).with_num_perm(128);
    let mut source: Vec<String> = vec![
        "alpha beta gamma delta epsilon".into(),
        "one two three four five".into(),
    ];
    let mut sink: Vec<usize> = Vec::new();

    dedup_fuzzy(&mut source, &mut sink, &cfg).unwrap();

    assert_eq!(sink, vec![0, 1]);
}

#[test]
fn s6_oracle_beats_naive_band_row_split() {
    let cfg = LshConfig::new().with_threshold(0.8);

    let (b, r) = corpus_dedup::optimal_param(&cfg, 128).unwrap();
    assert!(b * r <= 128);

    let error_at = |b: u32, r: u32| -> f64 {
        let fp = |s: f64| 1.0 - (1.0 - s.powi(r as i32)).powi(b as i32);
        let fn_ = |s: f64| (1.0 - s.powi(r as i32)).powi(b as i32);
        let fp_area = simple_integral(fp, 0.0, cfg.threshold);
        let fn_area = simple_integral(fn_, cfg.threshold, 1.0);
        fp_area * cfg.false_positive_weight + fn_area * cfg.false_negative_weight
    };

    assert!(error_at(b, r) <= error_at(16, 8) + 1e-9);
}

/// Coarse fixed-step integral used only to cross-check the oracle's pick
/// against a known baseline `(16, 8)`, independent of the crate's own
/// adaptive-quadrature implementation.
fn simple_integral(f: impl Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    if a >= b {
        return 0.0;
    }
    let steps = 2000;
    let h = (b - a) / steps as f64;
    let mut sum = 0.0;
    for i in 0..steps {
        let x0 = a + i as f64 * h;
        let x1 = x0 + h;
        sum += (f(x0) + f(x1)) * 0.5 * h;
    }
    sum
}
