use std::fmt;
use std::sync::Arc;

use charprobe_core::{
    CharSetProber, ProbeConfig, ProbeError, ProbeObserver, ProbingState, StateEvent,
    TransitionReason,
};
use charprobe_dsa::{CodingStateMachine, DistributionAnalysis, JapaneseContextAnalysis, MachineState};

use crate::context_table::HIRAGANA_CONTEXT;
use crate::family::MbcsFamily;

/// Probes one legacy multi-byte encoding.
///
/// ## Pipeline
/// Every byte drives the coding state machine. Each completed character is
/// handed, as its trailing two bytes plus its length, to the distribution
/// analyzer and, for Japanese families, the hiragana context analyzer.
///
/// ## Chunk boundaries
/// `last_char[0]` keeps the final byte of the previous chunk, so a character
/// split across two `feed` calls is scored exactly as if it had arrived in
/// one piece.
pub struct MultiByteCharSetProber {
    family: &'static MbcsFamily,
    coding_sm: CodingStateMachine,
    distribution: DistributionAnalysis,
    context: Option<JapaneseContextAnalysis>,
    state: ProbingState,
    last_char: [u8; 2],
    shortcut_threshold: f32,
    sure_yes: f32,
    sure_no: f32,
    observer: Option<Arc<dyn ProbeObserver>>,
}

impl MultiByteCharSetProber {
    /// # Panics
    /// Panics if the family's transition table is malformed; see
    /// [`MultiByteCharSetProber::try_new`].
    pub fn new(family: &'static MbcsFamily, config: &ProbeConfig) -> Self {
        match Self::try_new(family, config) {
            Ok(prober) => prober,
            Err(e) => panic!("MultiByteCharSetProber: {e}"),
        }
    }

    /// Builds a prober, rejecting a family whose transition table fails
    /// validation.
    pub fn try_new(family: &'static MbcsFamily, config: &ProbeConfig) -> Result<Self, ProbeError> {
        let coding_sm = CodingStateMachine::try_new(family.model)?;
        let context = family
            .context
            .map(|scheme| JapaneseContextAnalysis::new(scheme, &HIRAGANA_CONTEXT, config.context_policy()));
        Ok(Self {
            family,
            coding_sm,
            distribution: DistributionAnalysis::new(family.profile, config.distribution_policy()),
            context,
            state: ProbingState::Detecting,
            last_char: [0; 2],
            shortcut_threshold: config.shortcut_threshold,
            sure_yes: config.sure_yes,
            sure_no: config.sure_no,
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn family(&self) -> &'static MbcsFamily {
        self.family
    }

    pub fn distribution(&self) -> &DistributionAnalysis {
        &self.distribution
    }

    pub fn context(&self) -> Option<&JapaneseContextAnalysis> {
        self.context.as_ref()
    }

    /// The larger of the two statistical scores, ignoring the probing state
    /// and capped at `sure_yes`.
    pub fn raw_confidence(&self) -> f32 {
        let distribution = self.distribution.get_confidence();
        let best = match &self.context {
            Some(context) => distribution.max(context.get_confidence()),
            None => distribution,
        };
        best.min(self.sure_yes)
    }

    /// Context evidence decides when present; distribution evidence otherwise.
    fn got_enough_data(&self) -> bool {
        match &self.context {
            Some(context) => context.got_enough_data(),
            None => self.distribution.got_enough_data(),
        }
    }

    fn settle(&mut self, state: ProbingState, reason: TransitionReason) {
        self.state = state;
        if let Some(observer) = &self.observer {
            observer.on_state_change(&StateEvent {
                charset: self.family.charset_name,
                state,
                reason,
            });
        }
    }
}

impl CharSetProber for MultiByteCharSetProber {
    fn charset_name(&self) -> &'static str {
        self.family.charset_name
    }

    fn language(&self) -> &'static str {
        self.family.language
    }

    fn feed(&mut self, chunk: &[u8]) -> ProbingState {
        if self.state.is_terminal() {
            return self.state;
        }
        let Some(&final_byte) = chunk.last() else { return self.state };

        for (i, &byte) in chunk.iter().enumerate() {
            match self.coding_sm.next_state(byte) {
                MachineState::Error => {
                    self.settle(ProbingState::NotMe, TransitionReason::IllegalSequence { offset: i, byte });
                    break;
                }
                MachineState::ItsMe => {
                    self.settle(ProbingState::FoundIt, TransitionReason::ExclusiveSequence { offset: i });
                    break;
                }
                MachineState::Start => {
                    let char_len = self.coding_sm.get_current_charlen();
                    let pair = if i == 0 {
                        self.last_char[1] = byte;
                        self.last_char
                    } else {
                        [chunk[i - 1], byte]
                    };
                    if let Some(context) = &mut self.context {
                        context.feed(pair, char_len);
                    }
                    self.distribution.feed(pair, char_len);
                }
                MachineState::Pending(_) => {}
            }
        }

        self.last_char[0] = final_byte;

        if self.state == ProbingState::Detecting && self.got_enough_data() {
            let confidence = self.raw_confidence();
            if confidence > self.shortcut_threshold {
                self.settle(ProbingState::FoundIt, TransitionReason::Shortcut { confidence });
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn get_confidence(&self) -> f32 {
        match self.state {
            ProbingState::NotMe => self.sure_no,
            ProbingState::FoundIt => self.sure_yes,
            ProbingState::Detecting => self.raw_confidence(),
        }
    }

    fn reset(&mut self) {
        self.coding_sm.reset();
        self.distribution.reset();
        if let Some(context) = &mut self.context {
            context.reset();
        }
        self.state = ProbingState::Detecting;
        self.last_char = [0; 2];
    }
}

impl fmt::Debug for MultiByteCharSetProber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiByteCharSetProber")
            .field("charset", &self.family.charset_name)
            .field("state", &self.state)
            .field("last_char", &self.last_char)
            .field("total_chars", &self.distribution.total_chars())
            .field("context_pairs", &self.context.as_ref().map(|c| c.total_pairs()))
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{EUC_JP, EUC_KR};

    #[test]
    fn empty_chunk_changes_nothing() {
        let mut prober = MultiByteCharSetProber::new(&EUC_KR, &ProbeConfig::default());
        assert_eq!(prober.feed(&[]), ProbingState::Detecting);
        assert_eq!(prober.get_confidence(), 0.01);
    }

    #[test]
    fn split_character_uses_carry_byte() {
        // の (A4 CE) twice, the second split across chunks.
        let mut whole = MultiByteCharSetProber::new(&EUC_JP, &ProbeConfig::default());
        whole.feed(&[0xA4, 0xCE, 0xA4, 0xCE]);

        let mut split = MultiByteCharSetProber::new(&EUC_JP, &ProbeConfig::default());
        split.feed(&[0xA4, 0xCE, 0xA4]);
        split.feed(&[0xCE]);

        assert_eq!(whole.distribution().total_chars(), 2);
        assert_eq!(split.distribution().total_chars(), 2);
        assert_eq!(split.distribution().freq_chars(), whole.distribution().freq_chars());
    }
}
