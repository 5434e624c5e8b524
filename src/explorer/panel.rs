use crate::scenario::ColorTheme;
use crate::scenario::builtin::{HIERARCHICAL_ID, RAIL_HIVE_ID, SEQUENTIAL_ID};

/// One bullet of the "Architectural Insights" panel shown while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub topic: &'static str,
    pub accent: ColorTheme,
    pub text: &'static str,
}

const SEQUENTIAL_INSIGHTS: &[Insight] = &[
    Insight {
        topic: "Context Handoff",
        accent: ColorTheme::Blue,
        text: "Edges carry the full history.",
    },
    Insight {
        topic: "Shared State",
        accent: ColorTheme::Green,
        text: "The parallel track maintains truth.",
    },
];

const HIERARCHICAL_INSIGHTS: &[Insight] = &[
    Insight {
        topic: "Supervisor Bottleneck",
        accent: ColorTheme::Amber,
        text: "Central node handles all token traffic.",
    },
    Insight {
        topic: "Separation of Concerns",
        accent: ColorTheme::Slate,
        text: "Workers do not communicate directly.",
    },
];

const RAIL_HIVE_INSIGHTS: &[Insight] = &[
    Insight {
        topic: "Conflict Resolution",
        accent: ColorTheme::Green,
        text: "Observe the Doctor (Green) vs Strategist (Purple) negotiation loop.",
    },
    Insight {
        topic: "Safety Gates",
        accent: ColorTheme::Red,
        text: "The Guardian (Red) must validate the Strategist's proposal before execution.",
    },
    Insight {
        topic: "Human-in-the-loop",
        accent: ColorTheme::Blue,
        text: "The system proposes, the human approves.",
    },
];

/// Static insight text keyed by scenario id. Unknown ids have none.
pub fn insights_for(scenario_id: &str) -> &'static [Insight] {
    match scenario_id {
        SEQUENTIAL_ID => SEQUENTIAL_INSIGHTS,
        HIERARCHICAL_ID => HIERARCHICAL_INSIGHTS,
        RAIL_HIVE_ID => RAIL_HIVE_INSIGHTS,
        _ => &[],
    }
}

/// An entry in the scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorEntry {
    pub scenario_id: &'static str,
    pub name: &'static str,
    pub badge: &'static str,
    pub blurb: &'static str,
    pub accent: ColorTheme,
}

const SELECTOR: &[SelectorEntry] = &[
    SelectorEntry {
        scenario_id: SEQUENTIAL_ID,
        name: "Sequential Chain",
        badge: "Basic",
        blurb: "Linear data flow with cumulative context. Fragile to error propagation.",
        accent: ColorTheme::Blue,
    },
    SelectorEntry {
        scenario_id: HIERARCHICAL_ID,
        name: "Hierarchical Supervisor",
        badge: "Hub & Spoke",
        blurb: "Central orchestrator manages delegation. Reduces P2P complexity but creates a bottleneck.",
        accent: ColorTheme::Blue,
    },
    SelectorEntry {
        scenario_id: RAIL_HIVE_ID,
        name: "Adhesion War Room",
        badge: "MAS Demo",
        blurb: "Station Overrun Incident. 5 Agents negotiate a solution in real-time.",
        accent: ColorTheme::Green,
    },
];

/// The scenarios offered to the user, in display order.
///
/// `financial_swarm` lives in the catalog but is deliberately not listed.
pub fn selector_entries() -> &'static [SelectorEntry] {
    SELECTOR
}

/// Accent colours of the live log panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStyle {
    pub border: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub indicator: &'static str,
}

impl LogStyle {
    /// Panel colours for the active node's theme. Anything without a
    /// dedicated accent, including no theme at all, uses blue.
    pub fn for_theme(theme: Option<ColorTheme>) -> Self {
        match theme {
            Some(ColorTheme::Red) => Self {
                border: "#ef4444",
                text: "#f87171",
                background: "#7f1d1d",
                indicator: "#ef4444",
            },
            Some(ColorTheme::Purple) => Self {
                border: "#a855f7",
                text: "#c084fc",
                background: "#581c87",
                indicator: "#a855f7",
            },
            Some(ColorTheme::Green) => Self {
                border: "#10b981",
                text: "#34d399",
                background: "#064e3b",
                indicator: "#10b981",
            },
            Some(ColorTheme::Amber) => Self {
                border: "#f59e0b",
                text: "#fbbf24",
                background: "#78350f",
                indicator: "#f59e0b",
            },
            Some(ColorTheme::Blue) | Some(ColorTheme::Slate) | None => Self::idle(),
        }
    }

    /// The neutral blue style.
    pub fn idle() -> Self {
        Self {
            border: "#3b82f6",
            text: "#60a5fa",
            background: "#020617",
            indicator: "#3b82f6",
        }
    }
}
