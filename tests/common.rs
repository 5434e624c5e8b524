//! Common test utilities for building scenarios and driving playback.
use agentvis::prelude::*;

/// A small, valid three-node chain with a two-step script.
#[allow(dead_code)]
pub fn create_simple_scenario() -> Scenario {
    Scenario {
        id: "simple".to_string(),
        title: "Simple Chain".to_string(),
        description: "Two agents and a tool.".to_string(),
        nodes: vec![
            Node::new("a", NodeKind::Agent, "Planner", 20.0, 50.0),
            Node::new("b", NodeKind::Agent, "Executor", 50.0, 50.0),
            Node::new("t", NodeKind::Tool, "Search", 80.0, 50.0).with_icon("Search"),
        ],
        edges: vec![
            Edge::new("e1", "a", "b").with_label("Plan"),
            Edge::new("e2", "b", "t").with_kind(EdgeKind::Conditional),
        ],
        steps: Some(vec![
            PlaybackStep::new("a", "Planner drafts a plan.", 1000),
            PlaybackStep::new("b", "Executor calls the tool.", 2000),
        ]),
    }
}

/// A scenario whose second edge and first step point at a node that does not exist.
#[allow(dead_code)]
pub fn create_malformed_scenario() -> Scenario {
    let mut scenario = create_simple_scenario();
    scenario.id = "malformed".to_string();
    scenario.edges.push(Edge::new("e3", "b", "ghost"));
    scenario.steps = Some(vec![
        PlaybackStep::new("ghost", "Nobody home.", 500),
        PlaybackStep::new("a", "Back to the planner.", 500),
    ]);
    scenario
}

/// The simple scenario in the JSON interchange format, using the camelCase
/// field names used by the diagram front end.
#[allow(dead_code)]
pub const SIMPLE_SCENARIO_JSON: &str = r#"{
    "id": "simple",
    "title": "Simple Chain",
    "description": "Two agents and a tool.",
    "nodes": [
        { "id": "a", "type": "agent", "label": "Planner", "x": 20, "y": 50 },
        { "id": "b", "type": "agent", "label": "Executor", "subLabel": "Runs things", "x": 50, "y": 50, "colorTheme": "purple" },
        { "id": "t", "type": "tool", "label": "Search", "x": 80, "y": 50, "icon": "Search" }
    ],
    "edges": [
        { "id": "e1", "source": "a", "target": "b", "label": "Plan" },
        { "id": "e2", "source": "b", "target": "t", "type": "conditional", "animated": true }
    ],
    "steps": [
        { "activeNodeId": "a", "description": "Planner drafts a plan.", "duration": 1000 },
        { "activeNodeId": "b", "description": "Executor calls the tool.", "duration": 2000 }
    ]
}"#;

/// Drives an engine on the fake clock until it goes idle, recording every step.
#[allow(dead_code)]
pub fn record_run(engine: &mut PlaybackEngine<ManualTimer>) -> PlaybackLog {
    let mut log = PlaybackLog::new();
    log.observe(engine);
    while let Some(step) = engine.current_step() {
        let remaining = std::time::Duration::from_millis(step.duration_ms);
        engine.advance(remaining);
        log.observe(engine);
    }
    log
}
