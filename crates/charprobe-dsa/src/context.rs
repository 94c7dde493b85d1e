//! # Japanese Context Analysis
//!
//! Scores adjacent hiragana pairs against a co-occurrence table. Genuine
//! Japanese prose rarely produces category-0 pairs; decoding the wrong
//! encoding does so constantly.

/// Hiragana letters tracked by the context table (U+3041..=U+3093).
pub const HIRAGANA_COUNT: usize = 83;

/// Co-occurrence categories; 0 is "improbable", 5 is "very frequent".
pub const CONTEXT_CATEGORIES: usize = 6;

pub type ContextTable = [[u8; HIRAGANA_COUNT]; HIRAGANA_COUNT];

/// How the trailing two bytes of a character map to a hiragana order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaScheme {
    /// Row 0xA4, cells 0xA1..=0xF3.
    EucJp,
    /// Lead 0x82, trails 0x9F..=0xF1.
    ShiftJis,
}

impl KanaScheme {
    pub fn order(self, pair: [u8; 2]) -> Option<usize> {
        let (lead, trail, base) = match self {
            KanaScheme::EucJp => (0xA4, pair[1], 0xA1),
            KanaScheme::ShiftJis => (0x82, pair[1], 0x9F),
        };
        if pair[0] != lead || trail < base {
            return None;
        }
        let order = (trail - base) as usize;
        (order < HIRAGANA_COUNT).then_some(order)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextPolicy {
    /// Below this many pairs the confidence is 0.
    pub minimum_pairs: u32,
    /// Above this many pairs a shortcut decision is allowed.
    pub enough_pairs: u32,
    /// Counting stops once this many pairs have been seen.
    pub max_pairs: u32,
}

impl Default for ContextPolicy {
    fn default() -> Self {
        Self {
            minimum_pairs: 4,
            enough_pairs: 100,
            max_pairs: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JapaneseContextAnalysis {
    scheme: KanaScheme,
    table: &'static ContextTable,
    policy: ContextPolicy,
    rel_sample: [u32; CONTEXT_CATEGORIES],
    total_rel: u32,
    last_order: Option<usize>,
    done: bool,
}

impl JapaneseContextAnalysis {
    pub fn new(scheme: KanaScheme, table: &'static ContextTable, policy: ContextPolicy) -> Self {
        Self {
            scheme,
            table,
            policy,
            rel_sample: [0; CONTEXT_CATEGORIES],
            total_rel: 0,
            last_order: None,
            done: false,
        }
    }

    pub fn reset(&mut self) {
        self.rel_sample = [0; CONTEXT_CATEGORIES];
        self.total_rel = 0;
        self.last_order = None;
        self.done = false;
    }

    /// Records one completed character.
    ///
    /// Any character that is not a two-byte hiragana (ASCII included) breaks
    /// the chain, so the next hiragana starts a fresh pair.
    pub fn feed(&mut self, pair: [u8; 2], char_len: usize) {
        if self.done {
            return;
        }
        let order = if char_len == 2 { self.scheme.order(pair) } else { None };
        if let (Some(prev), Some(curr)) = (self.last_order, order) {
            self.total_rel += 1;
            if self.total_rel > self.policy.max_pairs {
                self.done = true;
                return;
            }
            let category = self.table[prev][curr] as usize;
            if let Some(slot) = self.rel_sample.get_mut(category) {
                *slot += 1;
            }
        }
        self.last_order = order;
    }

    /// Share of pairs outside the improbable category, or 0 below the
    /// minimum sample.
    pub fn get_confidence(&self) -> f32 {
        if self.total_rel > self.policy.minimum_pairs {
            (self.total_rel - self.rel_sample[0]) as f32 / self.total_rel as f32
        } else {
            0.0
        }
    }

    pub fn got_enough_data(&self) -> bool {
        self.total_rel > self.policy.enough_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_rel
    }

    /// Pair counts per category.
    pub fn rel_sample(&self) -> &[u32; CONTEXT_CATEGORIES] {
        &self.rel_sample
    }
}
