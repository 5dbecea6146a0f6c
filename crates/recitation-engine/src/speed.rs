//! Playback speed steps
//!
//! Speed is a fixed set of steps rather than a free float. The selected
//! step is applied immediately to the active clip and re-applied to every
//! clip started afterwards in the same session, and on resume from pause.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported playback rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecitationSpeed {
    Half,
    ThreeQuarters,
    Normal,
    OneAndQuarter,
    OneAndHalf,
}

impl RecitationSpeed {
    /// All steps in ascending order
    pub const STEPS: [RecitationSpeed; 5] = [
        Self::Half,
        Self::ThreeQuarters,
        Self::Normal,
        Self::OneAndQuarter,
        Self::OneAndHalf,
    ];

    /// Returns the rate multiplier for the audio backend
    pub fn as_f32(&self) -> f32 {
        match self {
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Normal => 1.0,
            Self::OneAndQuarter => 1.25,
            Self::OneAndHalf => 1.5,
        }
    }

    /// Maps a raw rate back to a step, rejecting unsupported values
    pub fn from_f32(rate: f32) -> EngineResult<Self> {
        Self::STEPS
            .iter()
            .copied()
            .find(|step| (step.as_f32() - rate).abs() < f32::EPSILON)
            .ok_or(EngineError::InvalidSpeed(rate))
    }

    /// The next faster step, saturating at the fastest
    pub fn faster(&self) -> Self {
        let idx = Self::STEPS.iter().position(|s| s == self).unwrap_or(2);
        Self::STEPS[(idx + 1).min(Self::STEPS.len() - 1)]
    }

    /// The next slower step, saturating at the slowest
    pub fn slower(&self) -> Self {
        let idx = Self::STEPS.iter().position(|s| s == self).unwrap_or(2);
        Self::STEPS[idx.saturating_sub(1)]
    }
}

impl Default for RecitationSpeed {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for RecitationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f32())
    }
}
