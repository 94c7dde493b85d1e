//! Hiragana co-occurrence table.
//!
//! Indexed `[previous][current]` by hiragana order (code point minus
//! U+3041). Categories: 0 never occurs in real text, 1 rare, 3 ordinary,
//! 5 very frequent.

use charprobe_dsa::{ContextTable, HIRAGANA_COUNT};

const IMPROBABLE: u8 = 0;
const RARE: u8 = 1;
const ORDINARY: u8 = 3;
const FREQUENT: u8 = 5;

const SMALL_Y: &[char] = &['ゃ', 'ゅ', 'ょ'];
const SMALL_VOWELS: &[char] = &['ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ'];
/// Kana that take a small ya/yu/yo.
const I_ROW: &[char] = &['き', 'ぎ', 'し', 'じ', 'ち', 'ぢ', 'に', 'ひ', 'び', 'ぴ', 'み', 'り'];
/// Kana that take a small vowel in loan-word spellings.
const SMALL_VOWEL_HOSTS: &[char] = &[
    'ふ', 'て', 'で', 'ち', 'し', 'じ', 'つ', 'う', 'く', 'ぐ', 'と', 'ど', 'ぶ',
];
/// Kana a sokuon can geminate.
const AFTER_SOKUON: &[char] = &[
    'か', 'が', 'き', 'ぎ', 'く', 'ぐ', 'け', 'げ', 'こ', 'ご', 'さ', 'ざ', 'し', 'じ', 'す', 'ず',
    'せ', 'ぜ', 'そ', 'ぞ', 'た', 'だ', 'ち', 'ぢ', 'つ', 'づ', 'て', 'で', 'と', 'ど', 'ぱ', 'ぴ',
    'ぷ', 'ぺ', 'ぽ', 'ば', 'び', 'ぶ', 'べ', 'ぼ', 'は', 'ひ', 'ふ', 'へ', 'ほ',
];
const ARCHAIC: &[char] = &['ゐ', 'ゑ'];
const COMMON_PAIRS: &[(char, char)] = &[
    ('ま', 'す'), ('し', 'た'), ('し', 'て'), ('で', 'す'), ('な', 'い'),
    ('い', 'る'), ('て', 'い'), ('っ', 'た'), ('こ', 'と'), ('も', 'の'),
    ('す', 'る'), ('れ', 'る'), ('ら', 'れ'), ('の', 'は'), ('に', 'は'),
    ('で', 'は'), ('と', 'い'), ('い', 'う'), ('ま', 'し'), ('ま', 'せ'),
    ('せ', 'ん'), ('か', 'っ'), ('た', 'の'), ('で', 'し'), ('な', 'っ'),
];

const fn kana(order: usize) -> char {
    match char::from_u32(0x3041 + order as u32) {
        Some(c) => c,
        None => '\0',
    }
}

const fn contains(set: &[char], c: char) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == c {
            return true;
        }
        i += 1;
    }
    false
}

const fn is_common(prev: char, curr: char) -> bool {
    let mut i = 0;
    while i < COMMON_PAIRS.len() {
        if COMMON_PAIRS[i].0 == prev && COMMON_PAIRS[i].1 == curr {
            return true;
        }
        i += 1;
    }
    false
}

const fn category(prev: char, curr: char) -> u8 {
    if contains(SMALL_Y, curr) {
        return if contains(I_ROW, prev) { ORDINARY } else { IMPROBABLE };
    }
    if contains(SMALL_VOWELS, curr) {
        return if contains(SMALL_VOWEL_HOSTS, prev) { RARE } else { IMPROBABLE };
    }
    if curr == 'ゎ' {
        return if prev == 'く' || prev == 'ぐ' { RARE } else { IMPROBABLE };
    }
    if prev == 'っ' {
        return if contains(AFTER_SOKUON, curr) { ORDINARY } else { IMPROBABLE };
    }
    if prev == 'ん' && curr == 'っ' {
        return IMPROBABLE;
    }
    if contains(ARCHAIC, curr) || contains(ARCHAIC, prev) {
        return RARE;
    }
    if is_common(prev, curr) {
        return FREQUENT;
    }
    ORDINARY
}

const fn build() -> ContextTable {
    let mut table = [[0u8; HIRAGANA_COUNT]; HIRAGANA_COUNT];
    let mut p = 0;
    while p < HIRAGANA_COUNT {
        let mut c = 0;
        while c < HIRAGANA_COUNT {
            table[p][c] = category(kana(p), kana(c));
            c += 1;
        }
        p += 1;
    }
    table
}

pub static HIRAGANA_CONTEXT: ContextTable = build();

#[cfg(test)]
mod tests {
    use super::*;

    fn order(c: char) -> usize {
        c as usize - 0x3041
    }

    #[test]
    fn table_spans_the_hiragana_block() {
        assert_eq!(kana(0), 'ぁ');
        assert_eq!(kana(HIRAGANA_COUNT - 1), 'ん');
    }

    #[test]
    fn categories_follow_kana_phonotactics() {
        let cat = |p, c| HIRAGANA_CONTEXT[order(p)][order(c)];
        assert_eq!(cat('き', 'ょ'), ORDINARY);
        assert_eq!(cat('あ', 'ょ'), IMPROBABLE);
        assert_eq!(cat('っ', 'て'), ORDINARY);
        assert_eq!(cat('っ', 'あ'), IMPROBABLE);
        assert_eq!(cat('ま', 'す'), FREQUENT);
        assert_eq!(cat('の', 'か'), ORDINARY);
    }
}
