mod engine;
mod log;
mod state;
mod timer;
mod tokio_timer;

pub use engine::PlaybackEngine;
pub use log::{Observation, PlaybackLog};
pub use state::{PlaybackState, StartOutcome, TimerOutcome};
pub use timer::{ManualTimer, StepTimer, TimerToken};
pub use tokio_timer::TokioTimer;
