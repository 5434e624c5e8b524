use super::definition::Scenario;
use crate::error::{IntegrityIssue, ScenarioError};
use ahash::AHashSet;
use itertools::Itertools;

impl Scenario {
    /// Collects every integrity problem in the scenario, in a stable order:
    /// duplicate ids first, then positions, edges and finally steps.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues: Vec<IntegrityIssue> = self
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .duplicates()
            .map(|id| IntegrityIssue::DuplicateNodeId(id.to_string()))
            .collect();

        issues.extend(
            self.edges
                .iter()
                .map(|e| e.id.as_str())
                .duplicates()
                .map(|id| IntegrityIssue::DuplicateEdgeId(id.to_string())),
        );

        for node in &self.nodes {
            let position = node.position;
            if !position.x.is_finite() || !position.y.is_finite() || !position.is_on_canvas() {
                issues.push(IntegrityIssue::PositionOutOfRange {
                    node_id: node.id.clone(),
                    x: position.x,
                    y: position.y,
                });
            }
        }

        let node_ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    issues.push(IntegrityIssue::DanglingEdge {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }

        for (step_index, step) in self.steps().iter().enumerate() {
            if !node_ids.contains(step.active_node_id.as_str()) {
                issues.push(IntegrityIssue::DanglingStep {
                    step_index,
                    node_id: step.active_node_id.clone(),
                });
            }
            if step.duration_ms == 0 {
                issues.push(IntegrityIssue::ZeroDuration { step_index });
            }
        }

        issues
    }

    /// Fails with the first integrity problem, if any.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        match self.integrity_issues().into_iter().next() {
            Some(issue) => Err(ScenarioError::Integrity {
                scenario_id: self.id.clone(),
                issue,
            }),
            None => Ok(()),
        }
    }
}
