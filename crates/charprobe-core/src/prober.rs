use std::fmt;

/// Detection progress of a single prober.
///
/// `FoundIt` and `NotMe` are terminal until `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbingState {
    Detecting,
    FoundIt,
    NotMe,
}

impl ProbingState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ProbingState::Detecting)
    }
}

impl fmt::Display for ProbingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProbingState::Detecting => "detecting",
            ProbingState::FoundIt => "found-it",
            ProbingState::NotMe => "not-me",
        };
        f.write_str(label)
    }
}

/// A per-encoding detector fed successive chunks of one byte stream.
///
/// Malformed input is never an error: it only drives the prober towards
/// `NotMe` or a low confidence.
pub trait CharSetProber: Send {
    /// Stable encoding label, e.g. `"EUC-JP"`.
    fn charset_name(&self) -> &'static str;

    /// Natural-language tag; empty when the encoding is language-neutral.
    fn language(&self) -> &'static str;

    fn feed(&mut self, chunk: &[u8]) -> ProbingState;

    fn state(&self) -> ProbingState;

    /// Always a finite value in `[0, 1]`.
    fn get_confidence(&self) -> f32;

    /// Returns the prober to its freshly constructed behavior.
    fn reset(&mut self);
}
