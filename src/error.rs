use thiserror::Error;

/// A single data-integrity problem found in a scenario.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityIssue {
    #[error("Node id '{0}' is used more than once")]
    DuplicateNodeId(String),

    #[error("Edge id '{0}' is used more than once")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which does not exist")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Playback step {step_index} activates node '{node_id}', which does not exist")]
    DanglingStep { step_index: usize, node_id: String },

    #[error("Playback step {step_index} has a zero duration")]
    ZeroDuration { step_index: usize },

    #[error("Node '{node_id}' is positioned at ({x}, {y}), outside the 0-100 canvas")]
    PositionOutOfRange { node_id: String, x: f64, y: f64 },
}

/// Errors that can occur while loading, converting or looking up scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("Scenario '{0}' not found in the catalog")]
    NotFound(String),

    #[error("Failed to parse scenario JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid scenario data: {0}")]
    ConversionError(String),

    #[error("Scenario '{scenario_id}' failed integrity check: {issue}")]
    Integrity {
        scenario_id: String,
        issue: IntegrityIssue,
    },
}

/// Errors that can occur while talking to the advisory service.
///
/// These never escape [`crate::advisor::Advisor`]; they are logged and turned
/// into a user-visible reply.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("No API key configured for the advisory service")]
    MissingCredentials,

    #[error("Advisory request failed: {0}")]
    RequestFailed(String),

    #[error("Advisory service answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed advisory response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
