use std::path::Path;

use charprobe_dsa::{ContextPolicy, DistributionPolicy};
use serde::Deserialize;

use crate::error::ProbeError;

/// Tuning constants shared by every prober of a detection session.
///
/// Missing keys fall back to [`ProbeConfig::default`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Confidence above which a prober with enough data settles early.
    pub shortcut_threshold: f32,
    /// Confidence cap for statistical scores and the value reported on FOUND_IT.
    pub sure_yes: f32,
    /// Floor reported on NOT_ME or with no evidence.
    pub sure_no: f32,
    pub minimum_frequent_chars: u32,
    pub enough_data_chars: u32,
    pub context_minimum_pairs: u32,
    pub context_enough_pairs: u32,
    pub context_max_pairs: u32,
    /// Below this the detector names no encoding.
    pub minimum_report_threshold: f32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            shortcut_threshold: 0.95,
            sure_yes: 0.99,
            sure_no: 0.01,
            minimum_frequent_chars: 3,
            enough_data_chars: 1024,
            context_minimum_pairs: 4,
            context_enough_pairs: 100,
            context_max_pairs: 1000,
            minimum_report_threshold: 0.20,
        }
    }
}

impl ProbeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ProbeError> {
        let config: ProbeConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProbeError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ProbeError> {
        let unit = |name: &str, v: f32| {
            if v.is_finite() && (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ProbeError::InvalidConfig(format!("{name} must lie in [0, 1], got {v}")))
            }
        };
        unit("shortcut_threshold", self.shortcut_threshold)?;
        unit("sure_yes", self.sure_yes)?;
        unit("sure_no", self.sure_no)?;
        unit("minimum_report_threshold", self.minimum_report_threshold)?;

        if self.sure_no >= self.sure_yes {
            return Err(ProbeError::InvalidConfig(format!(
                "sure_no ({}) must be below sure_yes ({})",
                self.sure_no, self.sure_yes
            )));
        }
        if self.context_minimum_pairs > self.context_enough_pairs
            || self.context_enough_pairs > self.context_max_pairs
        {
            return Err(ProbeError::InvalidConfig(format!(
                "context pair limits must be ordered: {} <= {} <= {}",
                self.context_minimum_pairs, self.context_enough_pairs, self.context_max_pairs
            )));
        }
        Ok(())
    }

    pub fn distribution_policy(&self) -> DistributionPolicy {
        DistributionPolicy {
            sure_yes: self.sure_yes,
            sure_no: self.sure_no,
            minimum_frequent_chars: self.minimum_frequent_chars,
            enough_data_chars: self.enough_data_chars,
        }
    }

    pub fn context_policy(&self) -> ContextPolicy {
        ContextPolicy {
            minimum_pairs: self.context_minimum_pairs,
            enough_pairs: self.context_enough_pairs,
            max_pairs: self.context_max_pairs,
        }
    }
}
