use super::definition::{Edge, Node, PlaybackStep, Position, Scenario};
use tracing::debug;

/// A per-session, editable copy of a scenario template.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingCopy {
    scenario: Scenario,
}

impl WorkingCopy {
    pub fn from_template(template: &Scenario) -> Self {
        Self {
            scenario: template.clone(),
        }
    }

    pub fn template_id(&self) -> &str {
        &self.scenario.id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn nodes(&self) -> &[Node] {
        &self.scenario.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.scenario.edges
    }

    pub fn steps(&self) -> &[PlaybackStep] {
        self.scenario.steps()
    }

    /// Moves a single node, clamping the position to the canvas.
    ///
    /// Returns `false` if no node has the given id; nothing changes in that case.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
        let Some(node) = self.scenario.nodes.iter_mut().find(|n| n.id == node_id) else {
            return false;
        };
        node.position = position.clamped();
        debug!(
            scenario = %self.scenario.id,
            node = node_id,
            x = node.position.x,
            y = node.position.y,
            "Node moved"
        );
        true
    }
}
