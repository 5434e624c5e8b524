use crate::scenario::{ColorTheme, EdgeKind, Node, NodeKind};

const EDGE_STROKE: &str = "#475569";
const EDGE_STROKE_ACTIVE: &str = "#3b82f6";
const DASH_PATTERN: &str = "5,5";

/// Arrow marker drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Arrow,
    ArrowActive,
}

impl Marker {
    pub fn id(&self) -> &'static str {
        match self {
            Marker::Arrow => "arrowhead",
            Marker::ArrowActive => "arrowhead-active",
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Marker::Arrow => "#64748b",
            Marker::ArrowActive => EDGE_STROKE_ACTIVE,
        }
    }

    /// Marker box as `(width, height)`. The active arrow is drawn larger.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Marker::Arrow => (10.0, 7.0),
            Marker::ArrowActive => (14.0, 10.0),
        }
    }
}

/// Stroke attributes for one edge line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub dash: Option<&'static str>,
    pub opacity: f64,
    pub marker: Marker,
}

/// Line styling as a pure function of edge kind and highlight state.
pub fn line_style(kind: EdgeKind, highlighted: bool) -> LineStyle {
    let stroke_width = if highlighted {
        3.0
    } else if kind == EdgeKind::State {
        4.0
    } else {
        2.0
    };

    LineStyle {
        stroke: if highlighted {
            EDGE_STROKE_ACTIVE
        } else {
            EDGE_STROKE
        },
        stroke_width,
        dash: match kind {
            EdgeKind::Conditional | EdgeKind::Feedback => Some(DASH_PATTERN),
            EdgeKind::Default | EdgeKind::State => None,
        },
        opacity: if kind == EdgeKind::State { 0.3 } else { 1.0 },
        marker: if highlighted {
            Marker::ArrowActive
        } else {
            Marker::Arrow
        },
    }
}

/// Fill, border and text colours for a node shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePalette {
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub border: &'static str,
    pub text: &'static str,
}

impl NodePalette {
    /// Theme colours win over kind colours.
    pub fn for_node(node: &Node) -> Self {
        match node.color_theme {
            Some(theme) => Self::for_theme(theme),
            None => Self::for_kind(node.kind),
        }
    }

    pub fn for_theme(theme: ColorTheme) -> Self {
        let (fill, border, text) = match theme {
            ColorTheme::Blue => ("#1e3a8a", "#3b82f6", "#dbeafe"),
            ColorTheme::Red => ("#7f1d1d", "#ef4444", "#fee2e2"),
            ColorTheme::Purple => ("#581c87", "#a855f7", "#f3e8ff"),
            ColorTheme::Green => ("#064e3b", "#10b981", "#d1fae5"),
            ColorTheme::Amber => ("#78350f", "#f59e0b", "#fef3c7"),
            ColorTheme::Slate => ("#1e293b", "#64748b", "#e2e8f0"),
        };
        Self {
            fill,
            fill_opacity: 0.8,
            border,
            text,
        }
    }

    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Agent => Self::translucent("#1e3a8a", "#3b82f6", "#bfdbfe"),
            NodeKind::Tool => Self::translucent("#064e3b", "#10b981", "#a7f3d0"),
            NodeKind::Router => Self::translucent("#78350f", "#f59e0b", "#fde68a"),
            NodeKind::User => Self::translucent("#581c87", "#a855f7", "#e9d5ff"),
            NodeKind::State => Self {
                fill: "#1e293b",
                fill_opacity: 1.0,
                border: "#475569",
                text: "#94a3b8",
            },
            NodeKind::Termination => Self {
                fill: "#334155",
                fill_opacity: 1.0,
                border: "#64748b",
                text: "#e2e8f0",
            },
        }
    }

    fn translucent(fill: &'static str, border: &'static str, text: &'static str) -> Self {
        Self {
            fill,
            fill_opacity: 0.5,
            border,
            text,
        }
    }
}
