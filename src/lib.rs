//! # Agentvis - Multi-Agent Architecture Explorer
//!
//! **Agentvis** models multi-agent system architectures as annotated node
//! graphs, renders them as SVG and replays scripted walkthroughs one step at
//! a time. An optional advisor forwards free-text questions to a hosted
//! language model.
//!
//! ## Core Workflow
//!
//! 1.  **Pick a Scenario**: The [`ScenarioCatalog`](scenario::ScenarioCatalog) ships four
//!     built-in architectures. Custom ones can be parsed with `Scenario::from_json` or
//!     converted from your own types through the [`IntoScenario`](scenario::IntoScenario) trait.
//! 2.  **Render**: [`GraphRenderer`](render::GraphRenderer) turns nodes, edges and the current
//!     active node into an SVG document.
//! 3.  **Play**: [`PlaybackEngine`](playback::PlaybackEngine) walks the step list, driven by a
//!     [`StepTimer`](playback::StepTimer). Use `TokioTimer` in an async runtime or
//!     `ManualTimer` to step a fake clock.
//! 4.  **Explore**: [`ExplorerController`](explorer::ExplorerController) ties selection,
//!     per-view node positions, playback and rendering together.
//!
//! ## Quick Start
//!
//! ```rust
//! use agentvis::prelude::*;
//! use std::time::Duration;
//!
//! fn main() -> Result<()> {
//!     let mut explorer = ExplorerController::with_manual_clock()?;
//!     explorer.select("rail_hive")?;
//!
//!     assert_eq!(explorer.play(), StartOutcome::Started);
//!     let view = explorer.view();
//!     println!("[{}] {}", view.active_node_id.unwrap_or_default(), view.caption.unwrap_or_default());
//!
//!     // Let the whole walkthrough elapse on the fake clock.
//!     explorer.advance(Duration::from_secs(60));
//!     assert!(!explorer.view().is_playing);
//!
//!     let svg = explorer.render();
//!     assert!(svg.starts_with("<svg"));
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod error;
pub mod explorer;
pub mod playback;
pub mod prelude;
pub mod render;
pub mod scenario;
