//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the agentvis crate.
//!
//! # Example
//!
//! ```rust
//! use agentvis::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = ScenarioCatalog::builtin();
//! let scenario = catalog.get("sequential")?;
//!
//! let svg = GraphRenderer::default().render(
//!     &scenario.nodes,
//!     &scenario.edges,
//!     Some("researcher"),
//!     Interaction::Static,
//! );
//! assert!(svg.contains("data-node-id=\"researcher\""));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Scenario model
pub use crate::scenario::{
    ColorTheme, Edge, EdgeKind, IntoScenario, Node, NodeKind, PlaybackStep, Position, Scenario,
    ScenarioCatalog, WorkingCopy,
};

// Rendering
pub use crate::render::{CanvasBounds, GraphRenderer, Interaction, RenderConfig};

// Playback
pub use crate::playback::{
    ManualTimer, PlaybackEngine, PlaybackLog, PlaybackState, StartOutcome, StepTimer,
    TimerOutcome, TokioTimer,
};

// Explorer shell
pub use crate::explorer::{ExplorerController, ExplorerView};

// Advisor
pub use crate::advisor::{Advisor, AdvisorConfig, TextGenerator};

// Error types
pub use crate::error::{AdvisorError, IntegrityIssue, ScenarioError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
