use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignalDirection {
    Long,
    Short,
    #[default]
    None,
}

impl SignalDirection {
    /// Label used in alert messages.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Long => "LONG",
            SignalDirection::Short => "SHORT",
            SignalDirection::None => "NONE",
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, SignalDirection::None)
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output for one poll iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalVerdict {
    pub direction: SignalDirection,
    pub reason: String,
}

impl SignalVerdict {
    pub fn new(direction: SignalDirection, reason: impl Into<String>) -> Self {
        Self {
            direction,
            reason: reason.into(),
        }
    }

    pub fn none(reason: impl Into<String>) -> Self {
        Self::new(SignalDirection::None, reason)
    }
}
