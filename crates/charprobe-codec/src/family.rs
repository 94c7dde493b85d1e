//! Encoding families: the static data a [`crate::MultiByteCharSetProber`]
//! is built from.

use charprobe_dsa::{rank_table, FrequencyProfile, KanaScheme, OrderScheme, StateMachineModel};

use crate::models::{BIG5_MODEL, EUCJP_MODEL, EUCKR_MODEL, EUCTW_MODEL, GB2312_MODEL, SJIS_MODEL};
use crate::profiles::{BIG5_RANKED, EUCKR_RANKED, GB2312_RANKED, JIS_RANKED};

/// Everything that distinguishes one multi-byte prober from another.
#[derive(Debug)]
pub struct MbcsFamily {
    pub charset_name: &'static str,
    pub language: &'static str,
    pub model: &'static StateMachineModel,
    pub profile: &'static FrequencyProfile,
    /// Present for encodings scored on hiragana context as well.
    pub context: Option<KanaScheme>,
}

const JIS_ORDERS: usize = 94 * 94;
const GB2312_ORDERS: usize = 94 * 40;
const EUCKR_ORDERS: usize = 94 * 25;
const BIG5_ORDERS: usize = 157 * 34;
const EUCTW_ORDERS: usize = BIG5_ORDERS;

static JIS_RANKS: [u16; JIS_ORDERS] = rank_table(&JIS_RANKED);
static GB2312_RANKS: [u16; GB2312_ORDERS] = rank_table(&GB2312_RANKED);
static EUCKR_RANKS: [u16; EUCKR_ORDERS] = rank_table(&EUCKR_RANKED);
static BIG5_RANKS: [u16; BIG5_ORDERS] = rank_table(&BIG5_RANKED);
// CNS 11643 plane 1 enumerates level-one hanzi in Big5 order, so the
// sequential ranks carry over once rows are 94 wide.
static EUCTW_RANKS: [u16; EUCTW_ORDERS] = rank_table(&BIG5_RANKED);

static EUCJP_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::EucJp,
    ranks: &JIS_RANKS,
    typical_ratio: 3.0,
};

static SJIS_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::ShiftJis,
    ranks: &JIS_RANKS,
    typical_ratio: 3.0,
};

static GB2312_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::Gb2312,
    ranks: &GB2312_RANKS,
    typical_ratio: 0.9,
};

static EUCKR_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::EucKr,
    ranks: &EUCKR_RANKS,
    typical_ratio: 6.0,
};

static BIG5_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::Big5,
    ranks: &BIG5_RANKS,
    typical_ratio: 0.75,
};

static EUCTW_PROFILE: FrequencyProfile = FrequencyProfile {
    scheme: OrderScheme::EucTw,
    ranks: &EUCTW_RANKS,
    typical_ratio: 0.75,
};

pub static SHIFT_JIS: MbcsFamily = MbcsFamily {
    charset_name: "SHIFT_JIS",
    language: "Japanese",
    model: &SJIS_MODEL,
    profile: &SJIS_PROFILE,
    context: Some(KanaScheme::ShiftJis),
};

pub static EUC_JP: MbcsFamily = MbcsFamily {
    charset_name: "EUC-JP",
    language: "Japanese",
    model: &EUCJP_MODEL,
    profile: &EUCJP_PROFILE,
    context: Some(KanaScheme::EucJp),
};

pub static GB2312: MbcsFamily = MbcsFamily {
    charset_name: "GB2312",
    language: "Chinese",
    model: &GB2312_MODEL,
    profile: &GB2312_PROFILE,
    context: None,
};

pub static EUC_KR: MbcsFamily = MbcsFamily {
    charset_name: "EUC-KR",
    language: "Korean",
    model: &EUCKR_MODEL,
    profile: &EUCKR_PROFILE,
    context: None,
};

pub static BIG5: MbcsFamily = MbcsFamily {
    charset_name: "Big5",
    language: "Chinese",
    model: &BIG5_MODEL,
    profile: &BIG5_PROFILE,
    context: None,
};

pub static EUC_TW: MbcsFamily = MbcsFamily {
    charset_name: "EUC-TW",
    language: "Taiwan",
    model: &EUCTW_MODEL,
    profile: &EUCTW_PROFILE,
    context: None,
};

/// Legacy families in group registration order.
pub static LEGACY_FAMILIES: [&MbcsFamily; 6] = [&SHIFT_JIS, &EUC_JP, &GB2312, &EUC_KR, &BIG5, &EUC_TW];

static_assertions::const_assert!(JIS_ORDERS < u16::MAX as usize);
static_assertions::const_assert!(BIG5_ORDERS < u16::MAX as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_lists_have_no_repeats() {
        let lists: [(&str, &[u16]); 4] = [
            ("JIS", &JIS_RANKED),
            ("GB2312", &GB2312_RANKED),
            ("EUC-KR", &EUCKR_RANKED),
            ("Big5", &BIG5_RANKED),
        ];
        for (name, ranked) in lists {
            let mut sorted = ranked.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ranked.len(), "{name} repeats an order");
        }
        let frequent = GB2312_RANKS.iter().filter(|&&r| r < 512).count();
        assert_eq!(frequent, 512);
    }

    #[test]
    fn frequent_characters_rank_high() {
        // 的 in GB2312 (B5 C4) and の in EUC-JP (A4 CE).
        let gb = GB2312.profile.scheme.order([0xB5, 0xC4]).map(|o| GB2312_RANKS[o]);
        assert!(matches!(gb, Some(rank) if rank < 16));
        let jis = EUC_JP.profile.scheme.order([0xA4, 0xCE]).map(|o| JIS_RANKS[o]);
        assert!(matches!(jis, Some(rank) if rank < 16));
    }
}
