use std::sync::Arc;

use charprobe_core::{
    CharSetProber, ProbeConfig, ProbeObserver, ProbingState, StateEvent, TransitionReason,
};
use charprobe_dsa::{CodingStateMachine, MachineState};

use crate::models::UTF8_MODEL;

/// Each well-formed multi-byte sequence halves the odds that the input is
/// something other than UTF-8.
const ONE_CHAR_PROB: f32 = 0.5;
const SATURATION_CHARS: u32 = 6;

/// Structural UTF-8 prober. No statistics: legality plus a count of
/// completed multi-byte characters.
pub struct Utf8Prober {
    coding_sm: CodingStateMachine,
    state: ProbingState,
    num_mb_chars: u32,
    shortcut_threshold: f32,
    sure_yes: f32,
    sure_no: f32,
    observer: Option<Arc<dyn ProbeObserver>>,
}

impl Utf8Prober {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            coding_sm: CodingStateMachine::new(&UTF8_MODEL),
            state: ProbingState::Detecting,
            num_mb_chars: 0,
            shortcut_threshold: config.shortcut_threshold,
            sure_yes: config.sure_yes,
            sure_no: config.sure_no,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn multi_byte_chars(&self) -> u32 {
        self.num_mb_chars
    }

    fn raw_confidence(&self) -> f32 {
        if self.num_mb_chars < SATURATION_CHARS {
            1.0 - self.sure_yes * ONE_CHAR_PROB.powi(self.num_mb_chars as i32)
        } else {
            self.sure_yes
        }
    }

    fn settle(&mut self, state: ProbingState, reason: TransitionReason) {
        self.state = state;
        if let Some(observer) = &self.observer {
            observer.on_state_change(&StateEvent {
                charset: "UTF-8",
                state,
                reason,
            });
        }
    }
}

impl CharSetProber for Utf8Prober {
    fn charset_name(&self) -> &'static str {
        "UTF-8"
    }

    fn language(&self) -> &'static str {
        ""
    }

    fn feed(&mut self, chunk: &[u8]) -> ProbingState {
        if self.state.is_terminal() || chunk.is_empty() {
            return self.state;
        }
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
                MachineState::Start if self.coding_sm.get_current_charlen() >= 2 => {
                    self.num_mb_chars += 1;
                }
                _ => {}
            }
        }

        if self.state == ProbingState::Detecting {
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
        self.state = ProbingState::Detecting;
        self.num_mb_chars = 0;
    }
}
