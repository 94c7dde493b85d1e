//! # DSA Layer Tests: JapaneseContextAnalysis
//!
//! Validates hiragana pair scoring, the minimum-sample gate, continuity
//! breaks, and the counting ceiling.

use charprobe_codec::context_table::HIRAGANA_CONTEXT;
use charprobe_dsa::{ContextPolicy, JapaneseContextAnalysis, KanaScheme};
use std::time::Instant;

/// EUC-JP bytes of a hiragana letter.
fn kana(c: char) -> [u8; 2] {
    [0xA4, 0xA1 + (c as u32 - 0x3041) as u8]
}

fn feed_kana(ca: &mut JapaneseContextAnalysis, text: &str) {
    for c in text.chars() {
        ca.feed(kana(c), 2);
    }
}

fn analysis(policy: ContextPolicy) -> JapaneseContextAnalysis {
    JapaneseContextAnalysis::new(KanaScheme::EucJp, &HIRAGANA_CONTEXT, policy)
}

/// Verifies confidence is zero until more than the minimum number of pairs.
#[test]
fn test_minimum_pairs_gate() {
    let t = Instant::now();

    let mut ca = analysis(ContextPolicy::default());
    feed_kana(&mut ca, "ましたまし");
    assert_eq!(ca.total_pairs(), 4);
    assert_eq!(ca.get_confidence(), 0.0);

    feed_kana(&mut ca, "た");
    assert_eq!(ca.total_pairs(), 5);
    assert_eq!(ca.get_confidence(), 1.0);

    let overhead = t.elapsed();
    println!("test_minimum_pairs_gate: Testing Overhead = {:?}", overhead);
}

/// Verifies improbable pairs pull the confidence down in proportion.
#[test]
fn test_improbable_pairs_lower_confidence() {
    let t = Instant::now();

    // あ->ょ never occurs; ょ->あ is ordinary.
    let mut ca = analysis(ContextPolicy::default());
    feed_kana(&mut ca, "あょあょあょあょあょあ");
    assert_eq!(ca.total_pairs(), 10);
    assert_eq!(ca.rel_sample()[0], 5);
    assert!((ca.get_confidence() - 0.5).abs() < 1e-6);

    let overhead = t.elapsed();
    println!("test_improbable_pairs_lower_confidence: Testing Overhead = {:?}", overhead);
}

/// Verifies ASCII and non-hiragana characters break the pair chain.
#[test]
fn test_non_hiragana_breaks_continuity() {
    let t = Instant::now();

    let mut ca = analysis(ContextPolicy::default());
    ca.feed(kana('ま'), 2);
    ca.feed([0x00, b'a'], 1);
    ca.feed(kana('す'), 2);
    assert_eq!(ca.total_pairs(), 0);

    // 日 (C6 FC) sits between two kana.
    ca.feed([0xC6, 0xFC], 2);
    ca.feed(kana('の'), 2);
    assert_eq!(ca.total_pairs(), 0);

    ca.feed(kana('は'), 2);
    assert_eq!(ca.total_pairs(), 1);
    assert_eq!(ca.rel_sample()[5], 1);

    let overhead = t.elapsed();
    println!("test_non_hiragana_breaks_continuity: Testing Overhead = {:?}", overhead);
}

/// Verifies `got_enough_data`, the counting ceiling, and `reset`.
#[test]
fn test_enough_data_and_ceiling() {
    let t = Instant::now();

    let policy = ContextPolicy {
        minimum_pairs: 4,
        enough_pairs: 8,
        max_pairs: 10,
    };
    let mut ca = analysis(policy);
    feed_kana(&mut ca, "ましたましたまし");
    assert_eq!(ca.total_pairs(), 7);
    assert!(!ca.got_enough_data());
    feed_kana(&mut ca, "たま");
    assert!(ca.got_enough_data());

    feed_kana(&mut ca, "したましたましたました");
    assert_eq!(ca.total_pairs(), 11, "counting stops past the ceiling");
    assert_eq!(ca.rel_sample().iter().sum::<u32>(), 10);

    ca.reset();
    assert_eq!(ca.total_pairs(), 0);
    assert!(!ca.got_enough_data());
    feed_kana(&mut ca, "ましたまし");
    assert_eq!(ca.total_pairs(), 4);

    let overhead = t.elapsed();
    println!("test_enough_data_and_ceiling: Testing Overhead = {:?}", overhead);
}

/// Verifies Shift_JIS kana score identically to their EUC-JP spelling.
#[test]
fn test_shift_jis_kana_scheme() {
    let t = Instant::now();

    let mut euc = analysis(ContextPolicy::default());
    let mut sjis = JapaneseContextAnalysis::new(KanaScheme::ShiftJis, &HIRAGANA_CONTEXT, ContextPolicy::default());
    for c in "ありがとうございました".chars() {
        let offset = (c as u32 - 0x3041) as u8;
        euc.feed(kana(c), 2);
        sjis.feed([0x82, 0x9F + offset], 2);
    }
    assert_eq!(euc.rel_sample(), sjis.rel_sample());
    assert_eq!(euc.get_confidence(), sjis.get_confidence());

    let overhead = t.elapsed();
    println!("test_shift_jis_kana_scheme: Testing Overhead = {:?}", overhead);
}
