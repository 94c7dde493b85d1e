//! # charprobe
//!
//! Guesses the character encoding of bytes that arrive without a declared
//! charset.
//!
//! ```no_run
//! let verdict = charprobe::detect("こんにちは".as_bytes());
//! assert_eq!(verdict.encoding, Some("UTF-8"));
//! ```
//!
//! For streams, feed a [`Detector`] chunk by chunk and [`Detector::close`]
//! it at end of input.

pub mod bom;

use std::sync::Arc;

use serde::Serialize;

pub use bom::{Bom, BomSniffer, SniffResult};
use charprobe_codec::models::is_neutral_byte;

pub use charprobe_codec::{MbcsFamily, MbcsGroupProber, MultiByteCharSetProber, Utf8Prober};
pub use charprobe_core::{
    CharSetProber, ProbeConfig, ProbeError, ProbeObserver, ProbingState, StateEvent,
    TracingObserver, TransitionReason,
};

/// A verdict on one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Detection {
    /// `None` when no encoding clears the reporting threshold.
    pub encoding: Option<&'static str>,
    pub confidence: f32,
    pub language: Option<&'static str>,
}

impl Detection {
    pub const UNKNOWN: Detection = Detection {
        encoding: None,
        confidence: 0.0,
        language: None,
    };

    fn from_bom(bom: Bom) -> Self {
        Detection {
            encoding: Some(bom.charset_name()),
            confidence: 1.0,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputState {
    PureAscii,
    HighByte,
}

/// Streaming front end over the multi-byte group.
///
/// ## Stages
/// 1. The first bytes are checked for a BOM, which settles the verdict.
/// 2. Input stays "pure ASCII" until a byte >= 0x80 appears. Until then a
///    chunk reaches the probers only if it holds a byte some encoding
///    rejects (ESC, SO, SI).
/// 3. A prober reaching `FoundIt` ends detection early; otherwise
///    [`Detector::close`] reports the leading prober if it clears
///    `minimum_report_threshold`.
pub struct Detector {
    config: ProbeConfig,
    sniffer: Option<BomSniffer>,
    /// Bytes held back while the sniffer still needs data.
    head: Vec<u8>,
    input_state: InputState,
    group: MbcsGroupProber,
    got_data: bool,
    result: Option<Detection>,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    pub fn with_config(config: ProbeConfig) -> Self {
        let group = MbcsGroupProber::new(&config);
        Self::assemble(config, group)
    }

    pub fn with_observer(config: ProbeConfig, observer: Arc<dyn ProbeObserver>) -> Self {
        let group = MbcsGroupProber::with_observer(&config, observer);
        Self::assemble(config, group)
    }

    fn assemble(config: ProbeConfig, group: MbcsGroupProber) -> Self {
        Self {
            config,
            sniffer: Some(BomSniffer::default()),
            head: Vec::with_capacity(4),
            input_state: InputState::PureAscii,
            group,
            got_data: false,
            result: None,
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn group(&self) -> &MbcsGroupProber {
        &self.group
    }

    /// True once a verdict is fixed and further input is ignored.
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        if self.result.is_some() || chunk.is_empty() {
            return;
        }
        self.got_data = true;

        let Some(sniffer) = &mut self.sniffer else {
            self.scan(chunk);
            return;
        };
        match sniffer.feed(chunk) {
            SniffResult::NeedData => self.head.extend_from_slice(chunk),
            SniffResult::Found(bom) => {
                tracing::debug!("Detector: {:?} byte-order mark", bom);
                self.sniffer = None;
                self.result = Some(Detection::from_bom(bom));
            }
            SniffResult::NoBom => {
                self.sniffer = None;
                let mut head = std::mem::take(&mut self.head);
                head.extend_from_slice(chunk);
                self.scan(&head);
            }
        }
    }

    fn scan(&mut self, bytes: &[u8]) {
        if self.input_state == InputState::PureAscii {
            if bytes.iter().any(|&b| b >= 0x80) {
                self.input_state = InputState::HighByte;
            } else if bytes.iter().all(|&b| is_neutral_byte(b)) {
                return;
            }
        }
        if self.group.feed(bytes) == ProbingState::FoundIt {
            self.result = Some(self.group_verdict());
        }
    }

    fn group_verdict(&self) -> Detection {
        let language = self.group.language();
        Detection {
            encoding: Some(self.group.charset_name()),
            confidence: self.group.get_confidence(),
            language: (!language.is_empty()).then_some(language),
        }
    }

    /// Ends the input and returns the verdict. Calling it again returns the
    /// same verdict.
    pub fn close(&mut self) -> Detection {
        if let Some(result) = self.result {
            return result;
        }
        if !self.got_data {
            return Detection::UNKNOWN;
        }
        if let Some(sniffer) = self.sniffer.take() {
            match sniffer.finish() {
                SniffResult::Found(bom) => {
                    let result = Detection::from_bom(bom);
                    self.result = Some(result);
                    return result;
                }
                _ => {
                    let head = std::mem::take(&mut self.head);
                    self.scan(&head);
                    if let Some(result) = self.result {
                        return result;
                    }
                }
            }
        }

        let result = match self.input_state {
            InputState::PureAscii => Detection {
                encoding: Some("ascii"),
                confidence: 1.0,
                language: None,
            },
            InputState::HighByte => {
                let verdict = self.group_verdict();
                if verdict.confidence > self.config.minimum_report_threshold {
                    verdict
                } else {
                    tracing::debug!(
                        "Detector: best guess {:?} at {:.3} is below the reporting threshold",
                        verdict.encoding,
                        verdict.confidence
                    );
                    Detection::UNKNOWN
                }
            }
        };
        tracing::info!(
            "Detector: {} (confidence {:.2})",
            result.encoding.unwrap_or("unknown"),
            result.confidence
        );
        self.result = Some(result);
        result
    }

    /// Forgets all input, keeping the configuration.
    pub fn reset(&mut self) {
        self.sniffer = Some(BomSniffer::default());
        self.head.clear();
        self.input_state = InputState::PureAscii;
        self.group.reset();
        self.got_data = false;
        self.result = None;
    }
}

/// One-shot detection with the default configuration.
pub fn detect(bytes: &[u8]) -> Detection {
    detect_with_config(bytes, ProbeConfig::default())
}

pub fn detect_with_config(bytes: &[u8], config: ProbeConfig) -> Detection {
    let mut detector = Detector::with_config(config);
    detector.feed(bytes);
    detector.close()
}
