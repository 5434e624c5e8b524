use super::engine::PlaybackEngine;
use super::timer::StepTimer;
use std::fmt::Write;

/// What the engine exposed while sitting on one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Engine generation of the run the step belongs to.
    pub generation: u64,
    pub cursor: usize,
    pub active_node_id: String,
    pub caption: String,
}

/// Records the sequence of steps a playback run passed through.
#[derive(Debug, Clone, Default)]
pub struct PlaybackLog {
    observations: Vec<Observation>,
}

impl PlaybackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the engine's current step. Idle engines and repeated
    /// observations of the same step within one run are ignored.
    pub fn observe<T: StepTimer>(&mut self, engine: &PlaybackEngine<T>) -> bool {
        let Some(step) = engine.current_step() else {
            return false;
        };
        let generation = engine.generation();
        let cursor = engine.cursor() as usize;
        let is_repeat = self
            .observations
            .last()
            .is_some_and(|last| last.generation == generation && last.cursor == cursor);
        if is_repeat {
            return false;
        }
        self.observations.push(Observation {
            generation,
            cursor,
            active_node_id: step.active_node_id.clone(),
            caption: step.caption.clone(),
        });
        true
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }

    /// Formats the run as a numbered, human-readable transcript.
    pub fn transcript(&self) -> String {
        let mut output = String::new();
        for observation in &self.observations {
            // Writing into a String cannot fail.
            let _ = writeln!(
                output,
                "{:02} [{}] {}",
                observation.cursor + 1,
                observation.active_node_id,
                observation.caption
            );
        }
        output
    }
}
