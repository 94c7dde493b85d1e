//! # DSA Layer Tests: CodingStateMachine
//!
//! Validates the shipped transition tables against real encoder output,
//! character-length tracking, and rejection of illegal bytes.

mod common;

use charprobe_codec::models::{
    ALL_MODELS, BIG5_MODEL, EUCJP_MODEL, EUCKR_MODEL, EUCTW_MODEL, GB2312_MODEL, SJIS_MODEL,
    UTF8_MODEL,
};
use charprobe_dsa::{CodingStateMachine, MachineState, StateMachineModel};
use std::time::Instant;

/// Runs `bytes` through a fresh machine and returns the lengths of the
/// completed characters, or the offset of the first illegal byte.
fn char_lengths(model: &'static StateMachineModel, bytes: &[u8]) -> Result<Vec<usize>, usize> {
    let mut sm = CodingStateMachine::new(model);
    let mut lengths = Vec::new();
    for (i, &b) in bytes.iter().enumerate() {
        match sm.next_state(b) {
            MachineState::Start => lengths.push(sm.get_current_charlen()),
            MachineState::Error => return Err(i),
            _ => {}
        }
    }
    assert_eq!(sm.state(), MachineState::Start, "{}: input ended mid-character", model.name);
    Ok(lengths)
}

/// Verifies each table accepts text produced by a real encoder.
#[test]
fn test_models_accept_their_own_encoding() {
    let t = Instant::now();

    let cases: [(&'static StateMachineModel, Vec<u8>); 6] = [
        (&EUCJP_MODEL, common::euc_jp(common::JAPANESE)),
        (&SJIS_MODEL, common::shift_jis(common::JAPANESE)),
        (&UTF8_MODEL, common::JAPANESE.as_bytes().to_vec()),
        (&GB2312_MODEL, common::gbk(common::SIMPLIFIED_CHINESE)),
        (&BIG5_MODEL, common::big5(common::TRADITIONAL_CHINESE)),
        (&EUCKR_MODEL, common::euc_kr(common::KOREAN)),
    ];
    for (model, bytes) in &cases {
        let lengths = char_lengths(*model, bytes);
        assert!(lengths.is_ok(), "{} rejected its own text at {:?}", model.name, lengths.err());
    }

    let overhead = t.elapsed();
    println!("test_models_accept_their_own_encoding: Testing Overhead = {:?}", overhead);
}

/// Verifies `get_current_charlen` reports the byte length of each completed
/// character across 1- to 4-byte forms.
#[test]
fn test_character_lengths() {
    let t = Instant::now();

    // "a", あ, half-width ｱ (SS2), JIS X 0212 (SS3).
    let euc_jp = [b'a', 0xA4, 0xA2, 0x8E, 0xB1, 0x8F, 0xB0, 0xA1];
    assert_eq!(char_lengths(&EUCJP_MODEL, &euc_jp), Ok(vec![1, 2, 2, 3]));

    // "a", あ, half-width ｱ.
    let sjis = [b'a', 0x82, 0xA0, 0xB1];
    assert_eq!(char_lengths(&SJIS_MODEL, &sjis), Ok(vec![1, 2, 1]));

    // "a", é, 日, U+1D11E.
    let utf8 = "aé日𝄞".as_bytes();
    assert_eq!(char_lengths(&UTF8_MODEL, utf8), Ok(vec![1, 2, 3, 4]));

    // Plane 1 hanzi, then the same hanzi spelled through SS2 plane 2.
    let euc_tw = [0xC4, 0xA1, 0x8E, 0xA2, 0xC4, 0xA1];
    assert_eq!(char_lengths(&EUCTW_MODEL, &euc_tw), Ok(vec![2, 4]));

    let overhead = t.elapsed();
    println!("test_character_lengths: Testing Overhead = {:?}", overhead);
}

/// Verifies illegal bytes drive the machine to ERROR and that ERROR absorbs
/// everything after it.
#[test]
fn test_illegal_bytes_reach_error() {
    let t = Instant::now();

    assert_eq!(char_lengths(&EUCKR_MODEL, &[b'a', 0xFF]), Err(1));
    assert_eq!(char_lengths(&BIG5_MODEL, &[0x80]), Err(0));
    assert_eq!(char_lengths(&SJIS_MODEL, &[0x82, 0x7F]), Err(1));
    assert_eq!(char_lengths(&UTF8_MODEL, &[0xE6, 0x97, b'a']), Err(2));

    let mut sm = CodingStateMachine::new(&EUCKR_MODEL);
    assert_eq!(sm.next_state(0xFF), MachineState::Error);
    for b in [b'a', 0xB0, 0xA1, 0x00] {
        assert_eq!(sm.next_state(b), MachineState::Error);
    }
    sm.reset();
    assert_eq!(sm.next_state(b'a'), MachineState::Start);

    let overhead = t.elapsed();
    println!("test_illegal_bytes_reach_error: Testing Overhead = {:?}", overhead);
}

/// Verifies every byte value is classified by every model without panicking.
#[test]
fn test_every_byte_has_a_class() {
    let t = Instant::now();

    for model in ALL_MODELS {
        for first in 0..=255u8 {
            let mut sm = CodingStateMachine::new(model);
            sm.next_state(first);
            for second in [0x00, 0x41, 0x80, 0xA1, 0xFF] {
                sm.next_state(second);
            }
        }
    }

    let overhead = t.elapsed();
    println!("test_every_byte_has_a_class: Testing Overhead = {:?}", overhead);
}

/// Verifies two machines over the same bytes produce the same state sequence.
#[test]
fn test_state_sequence_is_deterministic() {
    let t = Instant::now();

    let bytes = common::shift_jis(common::JAPANESE);
    let mut a = CodingStateMachine::new(&SJIS_MODEL);
    let mut b = CodingStateMachine::new(&SJIS_MODEL);
    for &byte in &bytes {
        assert_eq!(a.next_state(byte), b.next_state(byte));
        assert_eq!(a.get_current_charlen(), b.get_current_charlen());
    }

    let overhead = t.elapsed();
    println!("test_state_sequence_is_deterministic: Testing Overhead = {:?}", overhead);
}
