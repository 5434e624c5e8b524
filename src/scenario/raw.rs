use super::conversion::IntoScenario;
use super::definition::{
    ColorTheme, DEFAULT_ICON, Edge, EdgeKind, Node, PlaybackStep, Position, Scenario,
};
use crate::error::ScenarioError;
use serde::Deserialize;

/// Node as it appears in the JSON interchange format.
#[derive(Debug, Deserialize, Clone)]
pub struct RawNode {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub label: String,
    #[serde(default, alias = "subLabel")]
    pub sub_label: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, alias = "colorTheme")]
    pub color_theme: Option<String>,
}

/// Edge as it appears in the JSON interchange format.
#[derive(Debug, Deserialize, Clone)]
pub struct RawEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<String>,
    #[serde(default)]
    pub animated: Option<bool>,
}

/// Playback step as it appears in the JSON interchange format.
#[derive(Debug, Deserialize, Clone)]
pub struct RawStep {
    #[serde(alias = "activeNodeId")]
    pub active_node_id: String,
    #[serde(alias = "description")]
    pub caption: String,
    #[serde(alias = "duration", alias = "durationMs")]
    pub duration_ms: u64,
}

/// Complete scenario in the JSON interchange format.
#[derive(Debug, Deserialize, Clone)]
pub struct RawScenario {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
    #[serde(default)]
    pub steps: Option<Vec<RawStep>>,
}

impl IntoScenario for RawScenario {
    fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| -> Result<Node, ScenarioError> {
                Ok(Node {
                    kind: raw.kind.parse()?,
                    color_theme: raw
                        .color_theme
                        .as_deref()
                        .map(str::parse::<ColorTheme>)
                        .transpose()?,
                    icon: raw
                        .icon
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| DEFAULT_ICON.to_string()),
                    id: raw.id,
                    label: raw.label,
                    sub_label: raw.sub_label,
                    position: Position::new(raw.x, raw.y),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|raw| -> Result<Edge, ScenarioError> {
                Ok(Edge {
                    kind: match raw.kind.as_deref() {
                        Some(kind) => kind.parse()?,
                        None => EdgeKind::Default,
                    },
                    animated: raw.animated.unwrap_or(false),
                    id: raw.id,
                    source: raw.source,
                    target: raw.target,
                    label: raw.label,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let steps = self.steps.map(|steps| {
            steps
                .into_iter()
                .map(|raw| PlaybackStep {
                    active_node_id: raw.active_node_id,
                    caption: raw.caption,
                    duration_ms: raw.duration_ms,
                })
                .collect()
        });

        Ok(Scenario {
            id: self.id,
            title: self.title,
            description: self.description,
            nodes,
            edges,
            steps,
        })
    }
}

impl Scenario {
    /// Parses a scenario from the JSON interchange format and validates it.
    ///
    /// Unlike rendering, loading is strict: a scenario with dangling edges or
    /// steps is rejected here so that malformed data never enters a catalog.
    pub fn from_json(json: &str) -> Result<Scenario, ScenarioError> {
        let raw: RawScenario =
            serde_json::from_str(json).map_err(|e| ScenarioError::JsonParseError(e.to_string()))?;
        let scenario = raw.into_scenario()?;
        scenario.validate()?;
        Ok(scenario)
    }
}
