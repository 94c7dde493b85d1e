//! # Coding State Machine Models
//!
//! Transition tables for every multi-byte encoding the group probes.
//!
//! ## Layout
//! Each row of a state table is one state; each column is one byte class.
//! Rows 1 (ERROR) and 2 (ITS_ME) are absorbing. Bytes a family never uses
//! (C1 controls, 0xFF, ISO-2022 shifts) land in a class with no legal
//! transition.

use charprobe_dsa::code::{ERROR as E, ITS_ME as M, START as S};
use charprobe_dsa::StateMachineModel;

/// Builds a byte-class table from inclusive `(first, last, class)` ranges
/// over a default class. Later ranges win.
const fn classes<const N: usize>(default: u8, ranges: [(u8, u8, u8); N]) -> [u8; 256] {
    let mut table = [default; 256];
    let mut r = 0;
    while r < N {
        let (first, last, class) = ranges[r];
        let mut b = first as usize;
        while b <= last as usize {
            table[b] = class;
            b += 1;
        }
        r += 1;
    }
    table
}

const SO: u8 = 0x0E;
const SI: u8 = 0x0F;
const ESC: u8 = 0x1B;

// EUC-JP
// 0: lead E0-FE | 1: SS2 | 2: lead/trail A1-DF | 3: SS3 | 4: ASCII | 5: illegal
static EUCJP_CLASSES: [u8; 256] = classes(
    4,
    [
        (0xE0, 0xFE, 0),
        (0x8E, 0x8E, 1),
        (0xA1, 0xDF, 2),
        (0x8F, 0x8F, 3),
        (0x80, 0x8D, 5),
        (0x90, 0xA0, 5),
        (0xFF, 0xFF, 5),
        (SO, SO, 5),
        (SI, SI, 5),
        (ESC, ESC, 5),
    ],
);

#[rustfmt::skip]
static EUCJP_STATES: [u8; 7 * 6] = [
    3, 4, 3, 5, S, E, // start
    E, E, E, E, E, E,
    M, M, M, M, M, M,
    S, E, S, E, E, E, // JIS X 0208 trail
    E, E, S, E, E, E, // half-width katakana trail
    6, E, 6, E, E, E, // JIS X 0212 second byte
    S, E, S, E, E, E, // JIS X 0212 third byte
];

pub static EUCJP_MODEL: StateMachineModel = StateMachineModel {
    name: "EUC-JP",
    class_table: &EUCJP_CLASSES,
    class_factor: 6,
    state_table: &EUCJP_STATES,
    char_len_table: &[2, 2, 2, 3, 1, 0],
};

// Shift_JIS
// 0: ASCII | 1: trail-only 40-7E | 2: 80, A0 | 3: lead | 4: half-width kana | 5: illegal
static SJIS_CLASSES: [u8; 256] = classes(
    0,
    [
        (0x40, 0x7E, 1),
        (0x80, 0x80, 2),
        (0xA0, 0xA0, 2),
        (0x81, 0x9F, 3),
        (0xE0, 0xFC, 3),
        (0xA1, 0xDF, 4),
        (0xFD, 0xFF, 5),
    ],
);

#[rustfmt::skip]
static SJIS_STATES: [u8; 4 * 6] = [
    S, S, E, 3, S, E,
    E, E, E, E, E, E,
    M, M, M, M, M, M,
    E, S, S, S, S, E,
];

pub static SJIS_MODEL: StateMachineModel = StateMachineModel {
    name: "SHIFT_JIS",
    class_table: &SJIS_CLASSES,
    class_factor: 6,
    state_table: &SJIS_STATES,
    char_len_table: &[1, 1, 0, 2, 1, 0],
};

// EUC-KR
// 0: ASCII | 1: A1-FE | 2: illegal
static EUCKR_CLASSES: [u8; 256] = classes(
    0,
    [
        (0xA1, 0xFE, 1),
        (0x80, 0xA0, 2),
        (0xFF, 0xFF, 2),
        (SO, SO, 2),
        (SI, SI, 2),
        (ESC, ESC, 2),
    ],
);

#[rustfmt::skip]
static EUCKR_STATES: [u8; 4 * 3] = [
    S, 3, E,
    E, E, E,
    M, M, M,
    E, S, E,
];

pub static EUCKR_MODEL: StateMachineModel = StateMachineModel {
    name: "EUC-KR",
    class_table: &EUCKR_CLASSES,
    class_factor: 3,
    state_table: &EUCKR_STATES,
    char_len_table: &[1, 2, 0],
};

// GB2312, accepting the GB18030 two- and four-byte forms.
// 0: ASCII | 1: digits | 2: 40-7E | 3: 80 | 4: 81-FE | 5: illegal
static GB2312_CLASSES: [u8; 256] = classes(
    0,
    [
        (0x30, 0x39, 1),
        (0x40, 0x7E, 2),
        (0x80, 0x80, 3),
        (0x81, 0xFE, 4),
        (0xFF, 0xFF, 5),
        (SO, SO, 5),
        (SI, SI, 5),
        (ESC, ESC, 5),
    ],
);

#[rustfmt::skip]
static GB2312_STATES: [u8; 6 * 6] = [
    S, S, S, E, 3, E,
    E, E, E, E, E, E,
    M, M, M, M, M, M,
    E, 4, S, S, S, E, // second byte; a digit opens a four-byte sequence
    E, E, E, E, 5, E,
    E, S, E, E, E, E,
];

pub static GB2312_MODEL: StateMachineModel = StateMachineModel {
    name: "GB2312",
    class_table: &GB2312_CLASSES,
    class_factor: 6,
    state_table: &GB2312_STATES,
    char_len_table: &[1, 1, 1, 0, 2, 0],
};

// Big5
// 0: ASCII | 1: trail 40-7E | 2: 80-A0 | 3: A1-FE | 4: illegal
static BIG5_CLASSES: [u8; 256] = classes(
    0,
    [
        (0x40, 0x7E, 1),
        (0x80, 0xA0, 2),
        (0xA1, 0xFE, 3),
        (0xFF, 0xFF, 4),
        (SO, SO, 4),
        (SI, SI, 4),
        (ESC, ESC, 4),
    ],
);

#[rustfmt::skip]
static BIG5_STATES: [u8; 4 * 5] = [
    S, S, E, 3, E,
    E, E, E, E, E,
    M, M, M, M, M,
    E, S, E, S, E,
];

pub static BIG5_MODEL: StateMachineModel = StateMachineModel {
    name: "Big5",
    class_table: &BIG5_CLASSES,
    class_factor: 5,
    state_table: &BIG5_STATES,
    char_len_table: &[1, 1, 0, 2, 0],
};

// EUC-TW
// 0: ASCII | 1: SS2 | 2: A1-B0 | 3: B1-FE | 4: illegal
static EUCTW_CLASSES: [u8; 256] = classes(
    0,
    [
        (0x8E, 0x8E, 1),
        (0xA1, 0xB0, 2),
        (0xB1, 0xFE, 3),
        (0x80, 0x8D, 4),
        (0x8F, 0xA0, 4),
        (0xFF, 0xFF, 4),
        (SO, SO, 4),
        (SI, SI, 4),
        (ESC, ESC, 4),
    ],
);

#[rustfmt::skip]
static EUCTW_STATES: [u8; 7 * 5] = [
    S, 4, 3, 3, E,
    E, E, E, E, E,
    M, M, M, M, M,
    E, E, S, S, E, // plane 1 trail
    E, E, 5, E, E, // SS2 plane byte
    E, E, 6, 6, E,
    E, E, S, S, E,
];

pub static EUCTW_MODEL: StateMachineModel = StateMachineModel {
    name: "EUC-TW",
    class_table: &EUCTW_CLASSES,
    class_factor: 5,
    state_table: &EUCTW_STATES,
    char_len_table: &[1, 4, 2, 2, 0],
};

// UTF-8 (RFC 3629: no overlongs, no surrogates, nothing past U+10FFFF)
// 0: ASCII | 1: 80-8F | 2: 90-9F | 3: A0-BF | 4: never legal | 5: C2-DF
// 6: E0 | 7: E1-EC, EE-EF | 8: ED | 9: F0 | 10: F1-F3 | 11: F4
static UTF8_CLASSES: [u8; 256] = classes(
    0,
    [
        (0x80, 0x8F, 1),
        (0x90, 0x9F, 2),
        (0xA0, 0xBF, 3),
        (0xC0, 0xC1, 4),
        (0xF5, 0xFF, 4),
        (0xC2, 0xDF, 5),
        (0xE0, 0xE0, 6),
        (0xE1, 0xEC, 7),
        (0xEE, 0xEF, 7),
        (0xED, 0xED, 8),
        (0xF0, 0xF0, 9),
        (0xF1, 0xF3, 10),
        (0xF4, 0xF4, 11),
    ],
);

#[rustfmt::skip]
static UTF8_STATES: [u8; 10 * 12] = [
    S, E, E, E, E, 3, 5, 4, 6, 8, 7, 9,
    E, E, E, E, E, E, E, E, E, E, E, E,
    M, M, M, M, M, M, M, M, M, M, M, M,
    E, S, S, S, E, E, E, E, E, E, E, E, // one continuation left
    E, 3, 3, 3, E, E, E, E, E, E, E, E, // two left
    E, E, E, 3, E, E, E, E, E, E, E, E, // after E0
    E, 3, 3, E, E, E, E, E, E, E, E, E, // after ED
    E, 4, 4, 4, E, E, E, E, E, E, E, E, // three left
    E, E, 4, 4, E, E, E, E, E, E, E, E, // after F0
    E, 4, E, E, E, E, E, E, E, E, E, E, // after F4
];

pub static UTF8_MODEL: StateMachineModel = StateMachineModel {
    name: "UTF-8",
    class_table: &UTF8_CLASSES,
    class_factor: 12,
    state_table: &UTF8_STATES,
    char_len_table: &[1, 0, 0, 0, 0, 2, 3, 3, 3, 4, 4, 4],
};

/// Every model shipped with the crate.
pub static ALL_MODELS: [&StateMachineModel; 7] = [
    &UTF8_MODEL,
    &SJIS_MODEL,
    &EUCJP_MODEL,
    &GB2312_MODEL,
    &EUCKR_MODEL,
    &BIG5_MODEL,
    &EUCTW_MODEL,
];

/// True when `byte`, read at a character boundary, is a complete one-byte
/// character in every model. Runs of such bytes cannot change any verdict.
pub fn is_neutral_byte(byte: u8) -> bool {
    ALL_MODELS.iter().all(|model| {
        let class = model.class_table[byte as usize] as usize;
        model.state_table[S as usize * model.class_factor + class] == S
    })
}


#[cfg(kani)]
mod proofs {
    use super::*;
    use charprobe_dsa::{CodingStateMachine, MachineState};

    #[kani::proof]
    #[kani::unwind(5)]
    fn prove_utf8_error_is_absorbing() {
        let mut sm = CodingStateMachine::new(&UTF8_MODEL);
        let bytes = kani::any::<[u8; 4]>();
        let mut failed = false;
        for b in bytes {
            let state = sm.next_state(b);
            if failed {
                assert_eq!(state, MachineState::Error);
            }
            failed |= state == MachineState::Error;
        }
    }
}
