use super::state::{PlaybackState, StartOutcome, TimerOutcome};
use super::timer::{ManualTimer, StepTimer, TimerToken};
use crate::scenario::PlaybackStep;
use std::time::Duration;
use tracing::debug;

/// Steps a cursor through a playback script on a per-step timer.
///
/// At most one timer is in flight. Every reset bumps an internal generation
/// counter, so a timer that fires after the script was replaced or restarted
/// is reported as [`TimerOutcome::Stale`] and changes nothing.
pub struct PlaybackEngine<T: StepTimer> {
    steps: Vec<PlaybackStep>,
    state: PlaybackState,
    generation: u64,
    pending: Option<TimerToken>,
    timer: T,
}

impl<T: StepTimer> PlaybackEngine<T> {
    pub fn new(timer: T) -> Self {
        Self {
            steps: Vec::new(),
            state: PlaybackState::Idle,
            generation: 0,
            pending: None,
            timer,
        }
    }

    /// Replaces the script. Always resets to idle first.
    pub fn load(&mut self, steps: Vec<PlaybackStep>) {
        self.reset();
        self.steps = steps;
    }

    /// Begins playback at step 0.
    ///
    /// Only valid from idle; a start while playing is ignored, not queued.
    pub fn start(&mut self) -> StartOutcome {
        if self.state.is_playing() {
            debug!(state = %self.state, "Ignoring start while playing");
            return StartOutcome::AlreadyPlaying;
        }
        if self.steps.is_empty() {
            return StartOutcome::NoSteps;
        }

        debug!(steps = self.steps.len(), generation = self.generation, "Playback started");
        self.enter_step(0);
        StartOutcome::Started
    }

    /// Handles an elapsed step timer.
    pub fn on_timer(&mut self, token: TimerToken) -> TimerOutcome {
        let current = match self.state {
            PlaybackState::Playing { cursor }
                if self.pending == Some(token)
                    && token.generation == self.generation
                    && token.cursor == cursor =>
            {
                cursor
            }
            _ => {
                debug!(
                    ?token,
                    generation = self.generation,
                    state = %self.state,
                    "Ignoring stale step timer"
                );
                return TimerOutcome::Stale;
            }
        };

        self.pending = None;
        let next = current + 1;
        if next < self.steps.len() {
            self.enter_step(next);
            TimerOutcome::Advanced { cursor: next }
        } else {
            debug!(steps = self.steps.len(), "Playback finished");
            self.reset();
            TimerOutcome::Finished
        }
    }

    /// Forces the engine back to idle and cancels any pending timer.
    pub fn reset(&mut self) {
        if let Some(token) = self.pending.take() {
            self.timer.cancel(token);
        }
        if self.state.is_playing() {
            debug!(state = %self.state, "Playback reset");
        }
        self.state = PlaybackState::Idle;
        self.generation += 1;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// The step index, or `-1` while idle.
    pub fn cursor(&self) -> isize {
        self.state.cursor()
    }

    pub fn steps(&self) -> &[PlaybackStep] {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&PlaybackStep> {
        match self.state {
            PlaybackState::Playing { cursor } => self.steps.get(cursor),
            PlaybackState::Idle => None,
        }
    }

    pub fn active_node_id(&self) -> Option<&str> {
        self.current_step().map(|s| s.active_node_id.as_str())
    }

    pub fn caption(&self) -> Option<&str> {
        self.current_step().map(|s| s.caption.as_str())
    }

    /// Identifies the current run. Bumped by every reset, so two runs of the
    /// same script never share a generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The token of the timer currently in flight, if any.
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn enter_step(&mut self, cursor: usize) {
        let token = TimerToken {
            generation: self.generation,
            cursor,
        };
        let delay = Duration::from_millis(self.steps[cursor].duration_ms);
        self.state = PlaybackState::Playing { cursor };
        self.pending = Some(token);
        self.timer.schedule(token, delay);
        debug!(
            cursor,
            node = %self.steps[cursor].active_node_id,
            delay_ms = self.steps[cursor].duration_ms,
            "Playback step entered"
        );
    }
}

impl PlaybackEngine<ManualTimer> {
    /// Moves the fake clock forward, firing every timer that falls due.
    ///
    /// Returns the outcomes in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerOutcome> {
        let until = self.timer.now().saturating_add(by);
        let mut outcomes = Vec::new();
        while let Some(token) = self.timer.pop_due(until) {
            outcomes.push(self.on_timer(token));
        }
        self.timer.set_now(until);
        outcomes
    }

    /// Runs the script to completion on the fake clock.
    pub fn run_to_end(&mut self) -> Vec<TimerOutcome> {
        let mut outcomes = Vec::new();
        while let Some(step) = self.current_step() {
            let remaining = Duration::from_millis(step.duration_ms);
            outcomes.extend(self.advance(remaining));
        }
        outcomes
    }
}

impl Default for PlaybackEngine<ManualTimer> {
    fn default() -> Self {
        Self::new(ManualTimer::new())
    }
}
