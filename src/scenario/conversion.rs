use super::definition::Scenario;
use crate::error::ScenarioError;

/// A trait for custom data models that can be converted into an AgentVis `Scenario`.
///
/// Implement this on your own structs to feed diagrams from another format
/// (YAML, a database row, a different JSON layout) into the renderer and the
/// playback engine. The built-in JSON interchange format is handled by
/// [`RawScenario`](super::RawScenario).
///
/// # Example
///
/// ```rust
/// use agentvis::prelude::*;
/// use agentvis::error::ScenarioError;
///
/// struct Pipeline {
///     stages: Vec<String>,
/// }
///
/// impl IntoScenario for Pipeline {
///     fn into_scenario(self) -> std::result::Result<Scenario, ScenarioError> {
///         let count = self.stages.len().max(1) as f64;
///         let nodes: Vec<Node> = self
///             .stages
///             .iter()
///             .enumerate()
///             .map(|(i, name)| {
///                 let x = 10.0 + 80.0 * i as f64 / count;
///                 Node::new(name, NodeKind::Agent, name, x, 50.0)
///             })
///             .collect();
///         let edges = self
///             .stages
///             .windows(2)
///             .enumerate()
///             .map(|(i, pair)| Edge::new(&format!("e{}", i + 1), &pair[0], &pair[1]))
///             .collect();
///
///         Ok(Scenario {
///             id: "pipeline".to_string(),
///             title: "Pipeline".to_string(),
///             description: "Generated from a stage list".to_string(),
///             nodes,
///             edges,
///             steps: None,
///         })
///     }
/// }
///
/// let scenario = Pipeline { stages: vec!["a".into(), "b".into()] }.into_scenario()?;
/// assert_eq!(scenario.edges.len(), 1);
/// # Ok::<(), ScenarioError>(())
/// ```
pub trait IntoScenario {
    /// Consumes the object and converts it into a scenario template.
    fn into_scenario(self) -> Result<Scenario, ScenarioError>;
}

impl IntoScenario for Scenario {
    fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        Ok(self)
    }
}
