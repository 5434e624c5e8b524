use std::time::Duration;

/// Identifies one scheduled step timer.
///
/// `generation` changes every time playback is reset, so a token issued
/// before a scenario switch can always be told apart from a current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub generation: u64,
    pub cursor: usize,
}

/// Schedules the single in-flight step timer of a playback engine.
///
/// When the delay elapses, the host hands the token back to
/// [`PlaybackEngine::on_timer`](super::PlaybackEngine::on_timer).
pub trait StepTimer {
    fn schedule(&mut self, token: TimerToken, delay: Duration);
    fn cancel(&mut self, token: TimerToken);
}

/// A fake clock for deterministic tests and offline replays.
///
/// Nothing fires on its own; time only moves through [`ManualTimer::pop_due`]
/// (usually via `PlaybackEngine::advance`).
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    now: Duration,
    pending: Vec<(Duration, TimerToken)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the fake clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tokens still waiting to fire, with their deadlines.
    pub fn pending(&self) -> &[(Duration, TimerToken)] {
        &self.pending
    }

    /// Removes and returns the earliest token due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _))| *deadline <= until)
            .min_by_key(|(_, (deadline, _))| *deadline)?;
        let (deadline, token) = self.pending.remove(index);
        self.now = self.now.max(deadline);
        Some(token)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl StepTimer for ManualTimer {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.pending.push((self.now.saturating_add(delay), token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, pending)| *pending != token);
    }
}
