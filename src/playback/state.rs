use std::fmt;

/// Where the playback cursor currently is.
///
/// Finishing a script returns the engine to `Idle`; there is no separate
/// finished state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing {
        cursor: usize,
    },
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing { .. })
    }

    /// The step index, or `-1` while idle.
    pub fn cursor(&self) -> isize {
        match self {
            PlaybackState::Idle => -1,
            PlaybackState::Playing { cursor } => *cursor as isize,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "idle"),
            PlaybackState::Playing { cursor } => write!(f, "playing({})", cursor),
        }
    }
}

/// Result of a call to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Playback began at step 0.
    Started,
    /// A run is already in progress; the request was ignored.
    AlreadyPlaying,
    /// The loaded script is empty.
    NoSteps,
}

/// Result of delivering a timer token to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Moved on to the given step.
    Advanced { cursor: usize },
    /// The last step elapsed and the engine is idle again.
    Finished,
    /// The token belongs to a cancelled run or an earlier step and was ignored.
    Stale,
}
