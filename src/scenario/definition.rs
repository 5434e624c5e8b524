use crate::error::ScenarioError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Icon used when a node does not name one.
pub const DEFAULT_ICON: &str = "Circle";

/// The semantic role a node plays in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Agent,
    Tool,
    Router,
    State,
    Termination,
    User,
}

impl FromStr for NodeKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "agent" => Ok(NodeKind::Agent),
            "tool" => Ok(NodeKind::Tool),
            "router" => Ok(NodeKind::Router),
            "state" => Ok(NodeKind::State),
            "termination" => Ok(NodeKind::Termination),
            "user" => Ok(NodeKind::User),
            other => Err(ScenarioError::ConversionError(format!(
                "unknown node kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Agent => "agent",
            NodeKind::Tool => "tool",
            NodeKind::Router => "router",
            NodeKind::State => "state",
            NodeKind::Termination => "termination",
            NodeKind::User => "user",
        };
        write!(f, "{}", name)
    }
}

/// Optional colour override for a node. Takes precedence over the kind colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Red,
    Purple,
    Green,
    Amber,
    Slate,
}

impl FromStr for ColorTheme {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(ColorTheme::Blue),
            "red" => Ok(ColorTheme::Red),
            "purple" => Ok(ColorTheme::Purple),
            "green" => Ok(ColorTheme::Green),
            "amber" => Ok(ColorTheme::Amber),
            "slate" => Ok(ColorTheme::Slate),
            other => Err(ScenarioError::ConversionError(format!(
                "unknown color theme '{}'",
                other
            ))),
        }
    }
}

/// A point on the normalized canvas. Both axes are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the position with both axes clamped to the canvas.
    /// Non-finite coordinates collapse to the nearest edge (NaN goes to 0).
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_percent(self.x),
            y: clamp_percent(self.y),
        }
    }

    pub fn is_on_canvas(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// Midpoint between two positions, used to anchor edge labels.
    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
    #[serde(flatten)]
    pub position: Position,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<ColorTheme>,
}

impl Node {
    /// Creates a node with the default icon and no sub-label or theme.
    pub fn new(id: &str, kind: NodeKind, label: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            kind,
            label: label.to_string(),
            sub_label: None,
            position: Position::new(x, y),
            icon: DEFAULT_ICON.to_string(),
            color_theme: None,
        }
    }

    pub fn with_sub_label(mut self, sub_label: &str) -> Self {
        self.sub_label = Some(sub_label.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.color_theme = Some(theme);
        self
    }
}

/// Semantic kind of an edge. Drives the line styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Default,
    Conditional,
    Feedback,
    State,
}

impl FromStr for EdgeKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(EdgeKind::Default),
            "conditional" => Ok(EdgeKind::Conditional),
            "feedback" => Ok(EdgeKind::Feedback),
            "state" => Ok(EdgeKind::State),
            other => Err(ScenarioError::ConversionError(format!(
                "unknown edge kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::Default => "default",
            EdgeKind::Conditional => "conditional",
            EdgeKind::Feedback => "feedback",
            EdgeKind::State => "state",
        };
        write!(f, "{}", name)
    }
}

/// A directed connection between two nodes of the same scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub animated: bool,
}

impl Edge {
    pub fn new(id: &str, source: &str, target: &str) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            label: None,
            kind: EdgeKind::Default,
            animated: false,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }

    /// Whether this edge touches the given node on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// One entry of a scripted playback: highlight a node and show a caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStep {
    pub active_node_id: String,
    pub caption: String,
    pub duration_ms: u64,
}

impl PlaybackStep {
    pub fn new(active_node_id: &str, caption: &str, duration_ms: u64) -> Self {
        Self {
            active_node_id: active_node_id.to_string(),
            caption: caption.to_string(),
            duration_ms,
        }
    }
}

/// A named, immutable diagram template with its optional playback script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<PlaybackStep>>,
}

impl Scenario {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// The playback script, or an empty slice if the scenario has none.
    pub fn steps(&self) -> &[PlaybackStep] {
        self.steps.as_deref().unwrap_or(&[])
    }

    pub fn is_playable(&self) -> bool {
        !self.steps().is_empty()
    }

    /// Total length of the playback script.
    pub fn total_duration_ms(&self) -> u64 {
        self.steps().iter().map(|s| s.duration_ms).sum()
    }

    /// Serializes the scenario in its canonical camelCase form.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        serde_json::to_string_pretty(self).map_err(|e| ScenarioError::JsonParseError(e.to_string()))
    }
}
