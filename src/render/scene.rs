use super::icon::Glyph;
use super::style::{LineStyle, NodePalette, line_style};
use crate::scenario::{Edge, EdgeKind, Node, Position};
use ahash::AHashMap;
use tracing::debug;

/// An edge with both endpoints resolved to canvas positions.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape<'a> {
    pub edge: &'a Edge,
    pub from: Position,
    pub to: Position,
    pub highlighted: bool,
    pub style: LineStyle,
    /// Anchor for the label, halfway along the line.
    pub label_anchor: Position,
}

impl EdgeShape<'_> {
    pub fn kind(&self) -> EdgeKind {
        self.edge.kind
    }
}

/// A node ready to be painted.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape<'a> {
    pub node: &'a Node,
    pub glyph: Glyph,
    pub palette: NodePalette,
    pub active: bool,
}

/// Everything the SVG writer needs, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    pub edges: Vec<EdgeShape<'a>>,
    pub nodes: Vec<NodeShape<'a>>,
    /// Ids of edges dropped because an endpoint does not exist.
    pub skipped_edges: Vec<&'a str>,
}

impl Scene<'_> {
    /// Node ids in the order they are painted; the last one is on top.
    pub fn paint_order(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.node.id.as_str()).collect()
    }

    pub fn active_node(&self) -> Option<&NodeShape<'_>> {
        self.nodes.iter().find(|n| n.active)
    }
}

/// Resolves a node/edge set into a paintable scene.
///
/// Edges whose source or target cannot be found are skipped; the rest of the
/// scene is unaffected. The active node keeps its relative order among the
/// others but is moved to the end so it paints above everything else.
pub fn layout<'a>(nodes: &'a [Node], edges: &'a [Edge], active_node_id: Option<&str>) -> Scene<'a> {
    let by_id: AHashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut edge_shapes = Vec::with_capacity(edges.len());
    let mut skipped_edges = Vec::new();
    for edge in edges {
        let (Some(source), Some(target)) = (
            by_id.get(edge.source.as_str()),
            by_id.get(edge.target.as_str()),
        ) else {
            debug!(
                edge = %edge.id,
                source = %edge.source,
                target = %edge.target,
                "Skipping edge with missing endpoint"
            );
            skipped_edges.push(edge.id.as_str());
            continue;
        };

        let highlighted = active_node_id.is_some_and(|id| edge.touches(id));
        edge_shapes.push(EdgeShape {
            edge,
            from: source.position,
            to: target.position,
            highlighted,
            style: line_style(edge.kind, highlighted),
            label_anchor: source.position.midpoint(&target.position),
        });
    }

    let (mut node_shapes, active): (Vec<_>, Vec<_>) = nodes
        .iter()
        .map(|node| {
            let active = active_node_id == Some(node.id.as_str());
            NodeShape {
                node,
                glyph: Glyph::lookup(&node.icon),
                palette: NodePalette::for_node(node),
                active,
            }
        })
        .partition(|shape| !shape.active);
    node_shapes.extend(active);

    Scene {
        edges: edge_shapes,
        nodes: node_shapes,
        skipped_edges,
    }
}
