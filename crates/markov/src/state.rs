//! Wet/dry occurrence states of the two-state Markov chain.

/// Two-state precipitation occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WetState {
    /// Depth below the threshold.
    Dry = 0,
    /// Depth at or above the threshold.
    Wet = 1,
}

impl WetState {
    /// Both states in index order.
    pub const ALL: [WetState; 2] = [Self::Dry, Self::Wet];

    /// Classifies a depth: wet iff `depth >= threshold`.
    pub fn classify(depth: f64, threshold: f64) -> Self {
        if depth >= threshold {
            Self::Wet
        } else {
            Self::Dry
        }
    }

    /// Returns the zero-based index of this state.
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the opposite state.
    pub fn flip(self) -> Self {
        match self {
            Self::Dry => Self::Wet,
            Self::Wet => Self::Dry,
        }
    }

    /// Returns `true` for [`WetState::Wet`].
    pub fn is_wet(self) -> bool {
        self == Self::Wet
    }
}

impl std::fmt::Display for WetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dry => f.write_str("dry"),
            Self::Wet => f.write_str("wet"),
        }
    }
}
