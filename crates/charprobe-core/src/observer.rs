use crate::prober::ProbingState;

/// Why a prober left `Detecting`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionReason {
    /// The coding state machine hit an illegal byte.
    IllegalSequence { offset: usize, byte: u8 },
    /// The coding state machine saw a sequence exclusive to the encoding.
    ExclusiveSequence { offset: usize },
    /// Enough data with a confidence above the shortcut threshold.
    Shortcut { confidence: f32 },
}

/// A terminal transition reported to a [`ProbeObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateEvent {
    pub charset: &'static str,
    pub state: ProbingState,
    pub reason: TransitionReason,
}

/// Optional diagnostic hook attached to a prober.
///
/// Probers behave identically with or without one.
pub trait ProbeObserver: Send + Sync {
    fn on_state_change(&self, event: &StateEvent);
}

/// Forwards prober events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProbeObserver for TracingObserver {
    fn on_state_change(&self, event: &StateEvent) {
        match event.reason {
            TransitionReason::IllegalSequence { offset, byte } => tracing::debug!(
                "{}: {} on illegal byte {:#04x} at chunk offset {}",
                event.charset,
                event.state,
                byte,
                offset
            ),
            TransitionReason::ExclusiveSequence { offset } => tracing::debug!(
                "{}: {} on exclusive sequence at chunk offset {}",
                event.charset,
                event.state,
                offset
            ),
            TransitionReason::Shortcut { confidence } => tracing::debug!(
                "{}: {} by shortcut (confidence {:.3})",
                event.charset,
                event.state,
                confidence
            ),
        }
    }
}
