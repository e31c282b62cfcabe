use std::fmt;

/// Transport session state machine.
///
/// State transitions:
/// ```text
/// idle → playing ↔ paused
///   ↓       ↓        ↓
/// recording  →  stop / completion  →  idle
/// ```
///
/// Exactly one session can be active at a time; every transition is driven
/// by a controller operation or an observed hardware completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Idle,
    Playing,
    Paused,
    Recording,
}

impl TransportState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Recording => write!(f, "recording"),
        }
    }
}
