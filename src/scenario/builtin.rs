//! The diagrams shipped with AgentVis.

use super::definition::{ColorTheme, Edge, EdgeKind, Node, NodeKind, PlaybackStep, Scenario};

pub const SEQUENTIAL_ID: &str = "sequential";
pub const HIERARCHICAL_ID: &str = "hierarchical";
pub const RAIL_HIVE_ID: &str = "rail_hive";
pub const FINANCIAL_SWARM_ID: &str = "financial_swarm";

/// Linear chain with a shared context track.
pub fn sequential() -> Scenario {
    Scenario {
        id: SEQUENTIAL_ID.to_string(),
        title: "Sequential Orchestration".to_string(),
        description:
            "The industrial assembly line. Data flows linearly with cumulative context.".to_string(),
        nodes: vec![
            Node::new("user", NodeKind::User, "User", 10.0, 50.0).with_icon("User"),
            Node::new("researcher", NodeKind::Agent, "Researcher", 30.0, 50.0)
                .with_sub_label("Gathers Facts")
                .with_icon("Search"),
            Node::new("drafter", NodeKind::Agent, "Drafter", 50.0, 50.0)
                .with_sub_label("Composes Text")
                .with_icon("PenTool"),
            Node::new("reviewer", NodeKind::Agent, "Reviewer", 70.0, 50.0)
                .with_sub_label("QA Check")
                .with_icon("CheckCircle"),
            Node::new("state", NodeKind::State, "Shared Context Window", 50.0, 80.0)
                .with_icon("Database"),
        ],
        edges: vec![
            Edge::new("e1", "user", "researcher").with_label("Task"),
            Edge::new("e2", "researcher", "drafter").with_label("Facts"),
            Edge::new("e3", "drafter", "reviewer").with_label("Draft"),
            Edge::new("e4", "researcher", "state")
                .with_kind(EdgeKind::State)
                .animated(),
            Edge::new("e5", "drafter", "state")
                .with_kind(EdgeKind::State)
                .animated(),
            Edge::new("e6", "reviewer", "state")
                .with_kind(EdgeKind::State)
                .animated(),
        ],
        steps: None,
    }
}

/// Hub-and-spoke supervisor with three workers.
pub fn hierarchical() -> Scenario {
    let mut edges: Vec<Edge> = ["worker1", "worker2", "worker3"]
        .iter()
        .enumerate()
        .map(|(i, worker)| {
            Edge::new(&format!("e{}", i + 1), "supervisor", worker).with_label("Delegate")
        })
        .collect();
    edges.extend(
        ["worker1", "worker2", "worker3"]
            .iter()
            .enumerate()
            .map(|(i, worker)| {
                Edge::new(&format!("e{}", i + 4), worker, "supervisor")
                    .with_label("Report")
                    .with_kind(EdgeKind::Feedback)
            }),
    );

    Scenario {
        id: HIERARCHICAL_ID.to_string(),
        title: "Hierarchical Supervisor".to_string(),
        description: "Hub-and-spoke topology. A central router manages specialized workers."
            .to_string(),
        nodes: vec![
            Node::new("supervisor", NodeKind::Router, "Supervisor", 50.0, 20.0)
                .with_sub_label("Orchestrator")
                .with_icon("GitMerge"),
            Node::new("worker1", NodeKind::Agent, "Coder", 20.0, 60.0)
                .with_sub_label("Python")
                .with_icon("Code"),
            Node::new("worker2", NodeKind::Agent, "Tester", 50.0, 60.0)
                .with_sub_label("PyTest")
                .with_icon("TestTube"),
            Node::new("worker3", NodeKind::Agent, "Documenter", 80.0, 60.0)
                .with_sub_label("Markdown")
                .with_icon("FileText"),
        ],
        edges,
        steps: None,
    }
}

/// Station overrun incident negotiated by five railway agents.
pub fn rail_hive() -> Scenario {
    Scenario {
        id: RAIL_HIVE_ID.to_string(),
        title: "Adhesion War Room".to_string(),
        description: "Station Overrun Incident: High-speed multi-agent negotiation to resolve a critical safety failure.".to_string(),
        nodes: vec![
            Node::new("copilot", NodeKind::Agent, "Co-Pilot", 15.0, 30.0)
                .with_sub_label("Driver Agent")
                .with_icon("Navigation")
                .with_theme(ColorTheme::Blue),
            Node::new("guardian", NodeKind::Agent, "Guardian", 85.0, 30.0)
                .with_sub_label("Signalling (Safety)")
                .with_icon("ShieldAlert")
                .with_theme(ColorTheme::Red),
            Node::new("strategist", NodeKind::Agent, "Strategist", 50.0, 50.0)
                .with_sub_label("Control (Logic)")
                .with_icon("Brain")
                .with_theme(ColorTheme::Purple),
            Node::new("doctor", NodeKind::Agent, "Doctor", 20.0, 80.0)
                .with_sub_label("Maintenance (Asset)")
                .with_icon("Stethoscope")
                .with_theme(ColorTheme::Green),
            Node::new("fixer", NodeKind::Agent, "Fixer", 80.0, 80.0)
                .with_sub_label("Infrastructure")
                .with_icon("Hammer")
                .with_theme(ColorTheme::Amber),
            Node::new("train_1b24", NodeKind::Tool, "Train 1B24", 10.0, 10.0)
                .with_sub_label("Telemetry")
                .with_icon("Train")
                .with_theme(ColorTheme::Slate),
            Node::new("human_dash", NodeKind::User, "Human Controller", 50.0, 90.0)
                .with_sub_label("Approval")
                .with_icon("UserCheck")
                .with_theme(ColorTheme::Slate),
        ],
        edges: vec![
            // Detection
            Edge::new("e1", "train_1b24", "copilot").with_label("WSP Alert (L5)"),
            Edge::new("e2", "copilot", "guardian")
                .with_label("SEVERE SLIP")
                .animated(),
            // Conflict
            Edge::new("e3", "doctor", "strategist")
                .with_label("Block 1B24")
                .with_kind(EdgeKind::Feedback),
            Edge::new("e4", "strategist", "doctor").with_label("Argue Delay"),
            // Solution
            Edge::new("e5", "strategist", "guardian")
                .with_label("Validate Route")
                .with_kind(EdgeKind::Conditional),
            Edge::new("e6", "guardian", "strategist")
                .with_label("Safety Confirmed")
                .with_kind(EdgeKind::Feedback),
            // Fix
            Edge::new("e7", "fixer", "train_1b24").with_label("Track Status"),
            Edge::new("e8", "strategist", "human_dash")
                .with_label("Final Recommendation")
                .animated(),
        ],
        steps: Some(vec![
            PlaybackStep::new(
                "copilot",
                "[CO-PILOT] ⚠️ CRITICAL SLIP DETECTED. Train 1B24. Location: Oakwood Station. Status: Overshot 40m. Action: Alerting Guardian immediately.",
                4000,
            ),
            PlaybackStep::new(
                "guardian",
                "[GUARDIAN] Alert Received. Threat Analysis: Train 2L12 approaching. Action: Interlocking Override -> Signal OW102 set to RED. Warning 2L12.",
                4000,
            ),
            PlaybackStep::new(
                "doctor",
                "[DOCTOR] Analyzing Telemetry... Sanders empty. 40mm Wheel Flat detected. Diagnosis: Train cannot exceed 40mph. REJECTING return journey.",
                5000,
            ),
            PlaybackStep::new(
                "strategist",
                "[STRATEGIST] Conflict: 800 passengers on board. Stopping 1B24 kills the Fast Line. Cost: £85k. Proposal: Run to destination?",
                4000,
            ),
            PlaybackStep::new(
                "doctor",
                "[DOCTOR] REJECTED. Risk of bearing failure. Counter-proposal: Run Empty Coaching Stock (ECS) to depot at 40mph?",
                4000,
            ),
            PlaybackStep::new(
                "strategist",
                "[STRATEGIST] Optimizing... Solution Found: Offload at Oakwood. Divert 1B24 to Slow Line. 2L12 makes rescue stop.",
                5000,
            ),
            PlaybackStep::new(
                "guardian",
                "[GUARDIAN] Validating Route... Path available on Slow Line. Signal OW104 set for crossing. Safety Validation: CONFIRMED.",
                3000,
            ),
            PlaybackStep::new(
                "fixer",
                "[FIXER] Heatmap Updated: Oakwood is a Black Zone. RHTT 'Jelly' re-routed. ETA 22 mins. Speed Restriction generated.",
                4000,
            ),
            PlaybackStep::new(
                "human_dash",
                "SYSTEM RECOMMENDATION: Terminate 1B24. Move to Slow Line. Rescue with 2L12. [APPROVE] [MODIFY] [REJECT]",
                6000,
            ),
        ]),
    }
}

/// Hybrid hierarchical swarm with parallel analysts and shared state.
///
/// Present in the catalog but not offered by the explorer's selector.
pub fn financial_swarm() -> Scenario {
    Scenario {
        id: FINANCIAL_SWARM_ID.to_string(),
        title: "Financial Analysis Swarm".to_string(),
        description: "A hybrid hierarchical pattern with parallel execution and shared state."
            .to_string(),
        nodes: vec![
            Node::new("mgr", NodeKind::Router, "Manager", 50.0, 10.0)
                .with_sub_label("Orchestration")
                .with_icon("Briefcase"),
            Node::new("fund", NodeKind::Agent, "Fundamental", 20.0, 40.0)
                .with_sub_label("Reads 10Ks")
                .with_icon("BookOpen"),
            Node::new("tech", NodeKind::Agent, "Technical", 50.0, 40.0)
                .with_sub_label("Chart Analysis")
                .with_icon("TrendingUp"),
            Node::new("sent", NodeKind::Agent, "Sentiment", 80.0, 40.0)
                .with_sub_label("News Scraper")
                .with_icon("Newspaper"),
            Node::new("state", NodeKind::State, "Shared Financial Context", 50.0, 70.0)
                .with_icon("Database"),
            Node::new("writer", NodeKind::Agent, "Writer", 50.0, 90.0)
                .with_sub_label("PDF Gen")
                .with_icon("FileCheck"),
            Node::new("t_fund", NodeKind::Tool, "SEC API", 10.0, 30.0).with_icon("Server"),
            Node::new("t_tech", NodeKind::Tool, "AlphaVantage", 60.0, 30.0).with_icon("Activity"),
        ],
        edges: vec![
            Edge::new("e1", "mgr", "fund").with_label("Analyze").animated(),
            Edge::new("e2", "mgr", "tech").with_label("Analyze").animated(),
            Edge::new("e3", "mgr", "sent").with_label("Analyze").animated(),
            Edge::new("e4", "fund", "state").with_kind(EdgeKind::State),
            Edge::new("e5", "tech", "state").with_kind(EdgeKind::State),
            Edge::new("e6", "sent", "state").with_kind(EdgeKind::State),
            Edge::new("e7", "fund", "t_fund"),
            Edge::new("e8", "tech", "t_tech"),
            Edge::new("e9", "state", "writer").with_label("Aggregated Data"),
            Edge::new("e10", "mgr", "writer").with_label("Compile"),
        ],
        steps: Some(vec![
            PlaybackStep::new("mgr", "Manager receives request for AAPL analysis.", 1000),
            PlaybackStep::new("fund", "Fundamental Analyst pulling SEC filings...", 2000),
            PlaybackStep::new("tech", "Technical Analyst checking moving averages...", 2000),
            PlaybackStep::new("sent", "Sentiment Analyst scanning news headlines...", 2000),
            PlaybackStep::new("state", "All agents updating Shared Financial Context.", 1000),
            PlaybackStep::new("writer", "Writer synthesizing report from context.", 2000),
        ]),
    }
}
