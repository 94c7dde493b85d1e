//! # Character Distribution Analysis
//!
//! Scores how closely the observed two-byte characters follow a language's
//! frequency profile.
//!
//! ## Confidence
//! `freq / ((total - freq) * typical_ratio)`, where `freq` counts characters
//! ranked below [`FREQUENT_RANK_LIMIT`]. The result is pinned to `sure_no`
//! until more than `minimum_frequent_chars` frequent characters have been
//! seen, and capped at `sure_yes` so a competing encoding can still tie.

/// Ranks below this limit form the high-frequency set.
pub const FREQUENT_RANK_LIMIT: u16 = 512;

/// Rank stored for orders absent from a profile.
pub const UNRANKED: u16 = u16::MAX;

/// Width of one bucket in the rank histogram.
pub const RANK_BUCKET_WIDTH: u16 = 64;

/// Histogram buckets: eight inside the frequent set, one for everything else.
pub const RANK_BUCKETS: usize = (FREQUENT_RANK_LIMIT / RANK_BUCKET_WIDTH) as usize + 1;

static_assertions::const_assert_eq!(FREQUENT_RANK_LIMIT % RANK_BUCKET_WIDTH, 0);

/// Expands a most-frequent-first list of orders into a dense `order -> rank`
/// table. Repeated orders keep their first rank; orders past `SIZE` are skipped.
pub const fn rank_table<const SIZE: usize>(ranked: &[u16]) -> [u16; SIZE] {
    let mut table = [UNRANKED; SIZE];
    let mut rank = 0;
    while rank < ranked.len() {
        let order = ranked[rank] as usize;
        if order < SIZE && table[order] == UNRANKED {
            table[order] = rank as u16;
        }
        rank += 1;
    }
    table
}

/// Maps the trailing two bytes of a character to its distribution order.
///
/// One variant per encoding family; the order space is the family's native
/// row/cell (or lead/trail) numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScheme {
    EucKr,
    Gb2312,
    Big5,
    EucTw,
    EucJp,
    /// Shift_JIS, folded into the same JIS X 0208 row/cell space as EUC-JP.
    ShiftJis,
}

impl OrderScheme {
    pub fn order(self, pair: [u8; 2]) -> Option<usize> {
        let [first, second] = pair;
        let (first, second) = (first as usize, second as usize);
        match self {
            OrderScheme::EucKr => {
                if first >= 0xB0 && second >= 0xA1 {
                    Some(94 * (first - 0xB0) + second - 0xA1)
                } else {
                    None
                }
            }
            OrderScheme::Gb2312 => {
                if first >= 0xB0 && second >= 0xA1 {
                    Some(94 * (first - 0xB0) + second - 0xA1)
                } else {
                    None
                }
            }
            OrderScheme::Big5 => {
                if first < 0xA4 {
                    None
                } else if second >= 0xA1 {
                    Some(157 * (first - 0xA4) + second - 0xA1 + 63)
                } else if second >= 0x40 {
                    Some(157 * (first - 0xA4) + second - 0x40)
                } else {
                    None
                }
            }
            OrderScheme::EucTw => {
                if first >= 0xC4 && second >= 0xA1 {
                    Some(94 * (first - 0xC4) + second - 0xA1)
                } else {
                    None
                }
            }
            OrderScheme::EucJp => {
                if first >= 0xA1 && second >= 0xA1 {
                    Some(94 * (first - 0xA1) + second - 0xA1)
                } else {
                    None
                }
            }
            OrderScheme::ShiftJis => {
                let row = match first {
                    0x81..=0x9F => (first - 0x81) * 2,
                    0xE0..=0xEF => (first - 0xC1) * 2,
                    _ => return None,
                };
                let (row, cell) = match second {
                    0x9F..=0xFC => (row + 1, second - 0x9F),
                    0x80..=0x9E => (row, second - 0x41),
                    0x40..=0x7E => (row, second - 0x40),
                    _ => return None,
                };
                Some(94 * row + cell)
            }
        }
    }
}

/// The statistical profile a [`DistributionAnalysis`] scores against.
#[derive(Debug)]
pub struct FrequencyProfile {
    pub scheme: OrderScheme,
    /// Dense `order -> rank` table; [`UNRANKED`] for orders outside the profile.
    pub ranks: &'static [u16],
    /// Frequent-to-infrequent ratio of typical text in this language.
    pub typical_ratio: f32,
}

/// Tuning constants for distribution scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionPolicy {
    pub sure_yes: f32,
    pub sure_no: f32,
    pub minimum_frequent_chars: u32,
    pub enough_data_chars: u32,
}

impl Default for DistributionPolicy {
    fn default() -> Self {
        Self {
            sure_yes: 0.99,
            sure_no: 0.01,
            minimum_frequent_chars: 3,
            enough_data_chars: 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DistributionAnalysis {
    profile: &'static FrequencyProfile,
    policy: DistributionPolicy,
    /// Characters seen per rank bucket; the last bucket collects unranked ones.
    rank_histogram: [u32; RANK_BUCKETS],
    total_chars: u32,
    freq_chars: u32,
}

impl DistributionAnalysis {
    pub fn new(profile: &'static FrequencyProfile, policy: DistributionPolicy) -> Self {
        Self {
            profile,
            policy,
            rank_histogram: [0; RANK_BUCKETS],
            total_chars: 0,
            freq_chars: 0,
        }
    }

    pub fn reset(&mut self) {
        self.rank_histogram = [0; RANK_BUCKETS];
        self.total_chars = 0;
        self.freq_chars = 0;
    }

    /// Records one completed character given its last two bytes.
    ///
    /// Only two-byte characters carry a distribution order; anything else is
    /// ignored.
    pub fn feed(&mut self, pair: [u8; 2], char_len: usize) {
        if char_len != 2 {
            return;
        }
        let Some(order) = self.profile.scheme.order(pair) else { return };
        self.total_chars = self.total_chars.saturating_add(1);

        let rank = self.profile.ranks.get(order).copied().unwrap_or(UNRANKED);
        if rank < FREQUENT_RANK_LIMIT {
            self.freq_chars = self.freq_chars.saturating_add(1);
            let bucket = &mut self.rank_histogram[(rank / RANK_BUCKET_WIDTH) as usize];
            *bucket = bucket.saturating_add(1);
        } else {
            let bucket = &mut self.rank_histogram[RANK_BUCKETS - 1];
            *bucket = bucket.saturating_add(1);
        }
    }

    pub fn get_confidence(&self) -> f32 {
        let policy = &self.policy;
        if self.total_chars == 0 || self.freq_chars <= policy.minimum_frequent_chars {
            return policy.sure_no;
        }
        if self.total_chars != self.freq_chars {
            let rare = (self.total_chars - self.freq_chars) as f32;
            let r = self.freq_chars as f32 / (rare * self.profile.typical_ratio);
            if r < policy.sure_yes {
                return r.max(policy.sure_no);
            }
        }
        policy.sure_yes
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_chars > self.policy.enough_data_chars
    }

    pub fn total_chars(&self) -> u32 {
        self.total_chars
    }

    pub fn freq_chars(&self) -> u32 {
        self.freq_chars
    }

    pub fn rank_histogram(&self) -> &[u32; RANK_BUCKETS] {
        &self.rank_histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKED: [u16; 3] = [5, 1, 5];
    static RANKS: [u16; 8] = rank_table::<8>(&RANKED);

    #[test]
    fn rank_table_keeps_first_rank() {
        assert_eq!(RANKS[5], 0);
        assert_eq!(RANKS[1], 1);
        assert_eq!(RANKS[0], UNRANKED);
    }

    #[test]
    fn shift_jis_folds_onto_jis_rows() {
        // HIRAGANA LETTER A: EUC-JP A4 A2, Shift_JIS 82 A0.
        assert_eq!(
            OrderScheme::ShiftJis.order([0x82, 0xA0]),
            OrderScheme::EucJp.order([0xA4, 0xA2])
        );
        // IDEOGRAPHIC COMMA: EUC-JP A1 A2, Shift_JIS 81 41.
        assert_eq!(
            OrderScheme::ShiftJis.order([0x81, 0x41]),
            OrderScheme::EucJp.order([0xA1, 0xA2])
        );
        assert_eq!(OrderScheme::ShiftJis.order([0x82, 0x7F]), None);
    }

    static KR_RANKS: [u16; 2] = rank_table::<2>(&[0]);
    static KR: FrequencyProfile = FrequencyProfile {
        scheme: OrderScheme::EucKr,
        ranks: &KR_RANKS,
        typical_ratio: 6.0,
    };

    #[test]
    fn full_buckets_stay_full() {
        let mut analysis = DistributionAnalysis::new(&KR, DistributionPolicy::default());
        analysis.rank_histogram[0] = u32::MAX;
        analysis.rank_histogram[RANK_BUCKETS - 1] = u32::MAX;

        analysis.feed([0xB0, 0xA1], 2);
        analysis.feed([0xB0, 0xA2], 2);
        assert_eq!(analysis.rank_histogram()[0], u32::MAX);
        assert_eq!(analysis.rank_histogram()[RANK_BUCKETS - 1], u32::MAX);
        assert_eq!(analysis.total_chars(), 2);
        assert_eq!(analysis.freq_chars(), 1);
    }
}
