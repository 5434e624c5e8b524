use crate::error::ScenarioError;
use serde::Deserialize;

/// Viewport and sizing options for the SVG renderer.
///
/// Every field has a default, so a partial JSON object such as
/// `{"width": 1280}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Side length of a node shape in pixels.
    pub node_size: f64,
    /// Scale applied to the active node.
    pub active_scale: f64,
    /// Distance between background dots; `0` disables the grid.
    pub grid_spacing: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            node_size: 64.0,
            active_scale: 1.2,
            grid_spacing: 30.0,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(json).map_err(|e| ScenarioError::JsonParseError(e.to_string()))
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Converts a percentage x coordinate into viewport pixels.
    pub fn px_x(&self, percent: f64) -> f64 {
        percent / 100.0 * self.width
    }

    /// Converts a percentage y coordinate into viewport pixels.
    pub fn px_y(&self, percent: f64) -> f64 {
        percent / 100.0 * self.height
    }
}
