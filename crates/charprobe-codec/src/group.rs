use std::sync::Arc;

use charprobe_core::{CharSetProber, ProbeConfig, ProbeObserver, ProbingState};

use crate::family::LEGACY_FAMILIES;
use crate::mbcs::MultiByteCharSetProber;
use crate::utf8::Utf8Prober;

/// Runs every multi-byte prober over the same stream and picks a verdict.
///
/// ## Policy
/// - The first prober (in registration order) to report `FoundIt` wins and
///   stops the group.
/// - Probers reporting `NotMe` are never fed again; when none is left the
///   group itself is `NotMe`.
/// - Otherwise the most confident active prober leads. Ties go to the prober
///   registered first.
pub struct MbcsGroupProber {
    probers: Vec<Box<dyn CharSetProber>>,
    active: Vec<bool>,
    active_num: usize,
    best_guess: Option<usize>,
    state: ProbingState,
    sure_yes: f32,
    sure_no: f32,
}

impl MbcsGroupProber {
    /// UTF-8, Shift_JIS, EUC-JP, GB2312, EUC-KR, Big5, EUC-TW.
    pub fn new(config: &ProbeConfig) -> Self {
        Self::build(config, None)
    }

    /// Same probers, each reporting to `observer`.
    pub fn with_observer(config: &ProbeConfig, observer: Arc<dyn ProbeObserver>) -> Self {
        Self::build(config, Some(observer))
    }

    fn build(config: &ProbeConfig, observer: Option<Arc<dyn ProbeObserver>>) -> Self {
        let mut probers: Vec<Box<dyn CharSetProber>> = Vec::with_capacity(LEGACY_FAMILIES.len() + 1);

        let utf8 = Utf8Prober::new(config);
        let utf8: Box<dyn CharSetProber> = match &observer {
            Some(o) => Box::new(utf8.with_observer(Arc::clone(o))),
            None => Box::new(utf8),
        };
        probers.push(utf8);
        for family in LEGACY_FAMILIES {
            let prober = MultiByteCharSetProber::new(family, config);
            let prober: Box<dyn CharSetProber> = match &observer {
                Some(o) => Box::new(prober.with_observer(Arc::clone(o))),
                None => Box::new(prober),
            };
            probers.push(prober);
        }
        Self::from_probers(probers, config)
    }

    /// A group over caller-supplied probers, kept in the given order.
    pub fn from_probers(probers: Vec<Box<dyn CharSetProber>>, config: &ProbeConfig) -> Self {
        let active_num = probers.len();
        Self {
            active: vec![true; active_num],
            active_num,
            probers,
            best_guess: None,
            state: ProbingState::Detecting,
            sure_yes: config.sure_yes,
            sure_no: config.sure_no,
        }
    }

    pub fn probers(&self) -> &[Box<dyn CharSetProber>] {
        &self.probers
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// The prober currently in the lead, if any is still in the running.
    pub fn best_guess(&self) -> Option<&dyn CharSetProber> {
        self.best_index().map(|i| self.probers[i].as_ref())
    }

    fn best_index(&self) -> Option<usize> {
        match self.state {
            ProbingState::FoundIt => return self.best_guess,
            ProbingState::NotMe => return None,
            ProbingState::Detecting => {}
        }
        let mut best: Option<(usize, f32)> = None;
        for (i, prober) in self.probers.iter().enumerate() {
            if !self.active[i] {
                continue;
            }
            let confidence = prober.get_confidence();
            if best.map_or(true, |(_, top)| confidence > top) {
                best = Some((i, confidence));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl CharSetProber for MbcsGroupProber {
    /// Name of the leading prober; empty while nothing is in the running.
    fn charset_name(&self) -> &'static str {
        self.best_guess().map_or("", |p| p.charset_name())
    }

    fn language(&self) -> &'static str {
        self.best_guess().map_or("", |p| p.language())
    }

    fn feed(&mut self, chunk: &[u8]) -> ProbingState {
        if self.state.is_terminal() {
            return self.state;
        }
        for (i, prober) in self.probers.iter_mut().enumerate() {
            if !self.active[i] {
                continue;
            }
            match prober.feed(chunk) {
                ProbingState::FoundIt => {
                    tracing::debug!("MbcsGroup: {} found", prober.charset_name());
                    self.best_guess = Some(i);
                    self.state = ProbingState::FoundIt;
                    return self.state;
                }
                ProbingState::NotMe => {
                    tracing::debug!("MbcsGroup: {} ruled out", prober.charset_name());
                    self.active[i] = false;
                    self.active_num -= 1;
                    if self.active_num == 0 {
                        self.state = ProbingState::NotMe;
                        return self.state;
                    }
                }
                ProbingState::Detecting => {}
            }
        }
        self.state
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn get_confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => self.sure_yes,
            ProbingState::NotMe => self.sure_no,
            ProbingState::Detecting => self
                .best_index()
                .map_or(self.sure_no, |i| self.probers[i].get_confidence()),
        }
    }

    fn reset(&mut self) {
        for prober in &mut self.probers {
            prober.reset();
        }
        self.active.iter_mut().for_each(|a| *a = true);
        self.active_num = self.probers.len();
        self.best_guess = None;
        self.state = ProbingState::Detecting;
    }
}
