use super::panel::{Insight, LogStyle, insights_for};
use crate::error::ScenarioError;
use crate::playback::{
    ManualTimer, PlaybackEngine, StartOutcome, StepTimer, TimerOutcome, TimerToken,
};
use crate::render::{CanvasBounds, GraphRenderer, Interaction, NodeDrag, RenderConfig};
use crate::scenario::builtin::SEQUENTIAL_ID;
use crate::scenario::{Position, Scenario, ScenarioCatalog, WorkingCopy};
use std::time::Duration;
use tracing::debug;

pub const PLAY_LABEL: &str = "Run Simulation";
pub const PLAYING_LABEL: &str = "Simulating...";

/// Snapshot of everything the explorer shell displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerView {
    pub scenario_id: String,
    pub title: String,
    pub description: String,
    pub is_playing: bool,
    pub cursor: isize,
    /// Highlighted node; `None` while idle or if the step names an unknown node.
    pub active_node_id: Option<String>,
    pub caption: Option<String>,
    /// Whether a play control is offered at all.
    pub playable: bool,
    pub play_label: &'static str,
    pub log_style: LogStyle,
    /// Shown in place of the caption while idle.
    pub insights: &'static [Insight],
}

/// Owns the interactive state of one explorer view.
///
/// Selection, the working copy and the playback engine all live here, so
/// independent instances never share state.
pub struct ExplorerController<T: StepTimer> {
    catalog: ScenarioCatalog,
    working: WorkingCopy,
    playback: PlaybackEngine<T>,
    renderer: GraphRenderer,
}

impl<T: StepTimer> ExplorerController<T> {
    /// Creates a controller showing the sequential scenario, or the first
    /// catalog entry if the catalog does not have one.
    pub fn new(catalog: ScenarioCatalog, timer: T) -> Result<Self, ScenarioError> {
        let initial = if catalog.contains(SEQUENTIAL_ID) {
            SEQUENTIAL_ID.to_string()
        } else {
            catalog
                .ids()
                .next()
                .map(str::to_string)
                .ok_or_else(|| ScenarioError::NotFound(SEQUENTIAL_ID.to_string()))?
        };
        let working = catalog.working_copy(&initial)?;
        let mut playback = PlaybackEngine::new(timer);
        playback.load(working.steps().to_vec());

        Ok(Self {
            catalog,
            working,
            playback,
            renderer: GraphRenderer::default(),
        })
    }

    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.renderer = GraphRenderer::new(config);
        self
    }

    /// Switches to another scenario.
    ///
    /// Playback is forced back to idle and its pending timer cancelled. The
    /// working copy is rebuilt from the template, discarding any node moves.
    /// On an unknown id nothing changes.
    pub fn select(&mut self, scenario_id: &str) -> Result<(), ScenarioError> {
        let working = self.catalog.working_copy(scenario_id)?;
        debug!(
            from = %self.working.template_id(),
            to = scenario_id,
            "Scenario selected"
        );
        self.playback.load(working.steps().to_vec());
        self.working = working;
        Ok(())
    }

    pub fn play(&mut self) -> StartOutcome {
        self.playback.start()
    }

    /// Delivers an elapsed step timer.
    pub fn on_timer(&mut self, token: TimerToken) -> TimerOutcome {
        self.playback.on_timer(token)
    }

    /// Stops playback without changing the selection.
    pub fn stop(&mut self) {
        self.playback.reset();
    }

    /// Moves one node of the working copy. The template is untouched.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
        self.working.move_node(node_id, position)
    }

    /// Moves a node to the pointer position inside the given canvas bounds.
    ///
    /// Returns the clamped position, or `None` if the node does not exist.
    pub fn drag_to(
        &mut self,
        node_id: &str,
        pointer_x: f64,
        pointer_y: f64,
        bounds: &CanvasBounds,
    ) -> Option<Position> {
        let working = &mut self.working;
        let mut moved = None;
        let mut drag = NodeDrag::new(|id: &str, position: Position| {
            if working.move_node(id, position) {
                moved = Some(position);
            }
        });
        drag.begin(node_id);
        drag.update(pointer_x, pointer_y, bounds);
        drag.end();
        drop(drag);
        moved
    }

    pub fn selected_id(&self) -> &str {
        self.working.template_id()
    }

    pub fn scenario(&self) -> &Scenario {
        self.working.scenario()
    }

    pub fn working_copy(&self) -> &WorkingCopy {
        &self.working
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackEngine<T> {
        &self.playback
    }

    /// The highlighted node, if playback is on a step whose node exists.
    pub fn active_node_id(&self) -> Option<&str> {
        self.playback
            .active_node_id()
            .filter(|id| self.working.scenario().has_node(id))
    }

    pub fn view(&self) -> ExplorerView {
        let scenario = self.working.scenario();
        let is_playing = self.playback.is_playing();
        let active_node_id = self.active_node_id();
        let active_theme = active_node_id
            .and_then(|id| scenario.node(id))
            .and_then(|node| node.color_theme);

        ExplorerView {
            scenario_id: scenario.id.clone(),
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            is_playing,
            cursor: self.playback.cursor(),
            active_node_id: active_node_id.map(str::to_string),
            caption: self.playback.caption().map(str::to_string),
            playable: scenario.is_playable(),
            play_label: if is_playing {
                PLAYING_LABEL
            } else {
                PLAY_LABEL
            },
            log_style: if is_playing {
                LogStyle::for_theme(active_theme)
            } else {
                LogStyle::idle()
            },
            insights: insights_for(&scenario.id),
        }
    }

    /// Renders the working copy with the current active node. Nodes are
    /// marked draggable.
    pub fn render(&self) -> String {
        self.renderer.render(
            self.working.nodes(),
            self.working.edges(),
            self.active_node_id(),
            Interaction::Draggable,
        )
    }
}

impl ExplorerController<ManualTimer> {
    /// Creates a controller over the built-in catalog driven by a fake clock.
    pub fn with_manual_clock() -> Result<Self, ScenarioError> {
        Self::new(ScenarioCatalog::builtin(), ManualTimer::new())
    }

    /// Moves the fake clock forward, firing due step timers.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerOutcome> {
        self.playback.advance(by)
    }
}
