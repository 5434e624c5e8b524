use super::config::RenderConfig;
use super::scene::{EdgeShape, NodeShape, Scene, layout};
use super::style::Marker;
use crate::scenario::{Edge, Node};
use std::fmt::{self, Write};

const CANVAS_BACKGROUND: &str = "#020617";
const GRID_DOT: &str = "#475569";
const LABEL_TEXT: &str = "#cbd5e1";
const LABEL_TEXT_ACTIVE: &str = "#ffffff";
const SUB_LABEL_TEXT: &str = "#94a3b8";

/// Whether the rendered nodes accept pointer dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Static,
    Draggable,
}

/// Draws node/edge sets as standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct GraphRenderer {
    config: RenderConfig,
}

impl GraphRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the graph with `active_node_id` highlighted.
    ///
    /// The output depends only on the inputs and the configuration, so
    /// rendering the same state twice yields identical documents.
    pub fn render(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        active_node_id: Option<&str>,
        interaction: Interaction,
    ) -> String {
        let scene = layout(nodes, edges, active_node_id);
        SvgDocument {
            scene: &scene,
            config: &self.config,
            interaction,
        }
        .to_string()
    }
}

struct SvgDocument<'s, 'a> {
    scene: &'s Scene<'a>,
    config: &'s RenderConfig,
    interaction: Interaction,
}

impl fmt::Display for SvgDocument<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = num(self.config.width);
        let height = num(self.config.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="graph-canvas" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        self.write_defs(f)?;
        writeln!(
            f,
            r#"<rect class="background" width="100%" height="100%" fill="{CANVAS_BACKGROUND}"/>"#
        )?;
        if self.config.grid_spacing > 0.0 {
            writeln!(
                f,
                r#"<rect class="grid" width="100%" height="100%" fill="url(#grid)"/>"#
            )?;
        }

        writeln!(f, r#"<g class="edges">"#)?;
        for shape in &self.scene.edges {
            self.write_edge(f, shape)?;
        }
        writeln!(f, "</g>")?;

        writeln!(f, r#"<g class="nodes">"#)?;
        for shape in &self.scene.nodes {
            self.write_node(f, shape)?;
        }
        writeln!(f, "</g>")?;
        writeln!(f, "</svg>")
    }
}

impl SvgDocument<'_, '_> {
    fn write_defs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<defs>")?;
        if self.config.grid_spacing > 0.0 {
            let spacing = num(self.config.grid_spacing);
            writeln!(
                f,
                r#"<pattern id="grid" width="{spacing}" height="{spacing}" patternUnits="userSpaceOnUse"><circle cx="1" cy="1" r="1" fill="{GRID_DOT}" fill-opacity="0.2"/></pattern>"#
            )?;
        }
        for marker in [Marker::Arrow, Marker::ArrowActive] {
            let (w, h) = marker.size();
            // Pulled back so the tip stops at the node border rather than its centre.
            let ref_x = num(self.config.node_size / 2.0 - 4.0 + w);
            writeln!(
                f,
                r#"<marker id="{}" markerWidth="{}" markerHeight="{}" refX="{}" refY="{}" orient="auto"><polygon points="0 0, {} {}, 0 {}" fill="{}"/></marker>"#,
                marker.id(),
                num(w),
                num(h),
                ref_x,
                num(h / 2.0),
                num(w),
                num(h / 2.0),
                num(h),
                marker.fill(),
            )?;
        }
        writeln!(f, "</defs>")
    }

    fn write_edge(&self, f: &mut fmt::Formatter<'_>, shape: &EdgeShape<'_>) -> fmt::Result {
        let mut class = String::from("edge");
        if shape.highlighted {
            class.push_str(" highlighted");
        }
        if shape.edge.animated {
            class.push_str(" animated");
        }
        writeln!(
            f,
            r#"<g class="{}" data-edge-id="{}" data-kind="{}">"#,
            class,
            escape(&shape.edge.id),
            shape.kind()
        )?;

        let style = &shape.style;
        let mut line = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            num(self.config.px_x(shape.from.x)),
            num(self.config.px_y(shape.from.y)),
            num(self.config.px_x(shape.to.x)),
            num(self.config.px_y(shape.to.y)),
            style.stroke,
            num(style.stroke_width),
        );
        if let Some(dash) = style.dash {
            write!(line, r#" stroke-dasharray="{}""#, dash)?;
        }
        if style.opacity < 1.0 {
            write!(line, r#" stroke-opacity="{}""#, num(style.opacity))?;
        }
        writeln!(f, r#"{} marker-end="url(#{})"/>"#, line, style.marker.id())?;

        if let Some(label) = &shape.edge.label {
            let (fill, weight) = if shape.highlighted {
                (LABEL_TEXT_ACTIVE, "bold")
            } else {
                (SUB_LABEL_TEXT, "normal")
            };
            writeln!(
                f,
                r#"<text class="edge-label" x="{}" y="{}" text-anchor="middle" font-size="10" font-weight="{}" fill="{}">{}</text>"#,
                num(self.config.px_x(shape.label_anchor.x)),
                num(self.config.px_y(shape.label_anchor.y)),
                weight,
                fill,
                escape(label),
            )?;
        }
        writeln!(f, "</g>")
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, shape: &NodeShape<'_>) -> fmt::Result {
        let node = shape.node;
        let mut class = String::from("node");
        if shape.active {
            class.push_str(" active");
        }
        if self.interaction == Interaction::Draggable {
            class.push_str(" draggable");
        }

        let mut transform = format!(
            "translate({} {})",
            num(self.config.px_x(node.position.x)),
            num(self.config.px_y(node.position.y))
        );
        if shape.active {
            write!(transform, " scale({})", num(self.config.active_scale))?;
        }
        writeln!(
            f,
            r#"<g class="{}" data-node-id="{}" data-kind="{}" transform="{}">"#,
            class,
            escape(&node.id),
            node.kind,
            transform
        )?;

        let size = self.config.node_size;
        let half = size / 2.0;
        let palette = &shape.palette;
        writeln!(
            f,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"/>"#,
            num(-half),
            num(-half),
            num(size),
            num(size),
            num(size / 4.0),
            palette.fill,
            num(palette.fill_opacity),
            palette.border,
            if shape.active { 4 } else { 2 },
        )?;
        writeln!(
            f,
            r#"<text class="glyph" data-icon="{}" text-anchor="middle" dominant-baseline="central" font-size="{}" fill="{}">{}</text>"#,
            shape.glyph.name(),
            num(half),
            palette.text,
            shape.glyph.symbol(),
        )?;

        let label_y = half + 20.0;
        writeln!(
            f,
            r#"<text class="label" y="{}" text-anchor="middle" font-size="14" font-weight="bold" fill="{}">{}</text>"#,
            num(label_y),
            if shape.active {
                LABEL_TEXT_ACTIVE
            } else {
                LABEL_TEXT
            },
            escape(&node.label),
        )?;
        if let Some(sub_label) = &node.sub_label {
            writeln!(
                f,
                r#"<text class="sub-label" y="{}" text-anchor="middle" font-size="11" fill="{}">{}</text>"#,
                num(label_y + 16.0),
                SUB_LABEL_TEXT,
                escape(sub_label),
            )?;
        }
        writeln!(f, "</g>")
    }
}

/// Formats a coordinate without a trailing `.0` for whole numbers.
fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Escapes text for use in SVG attributes and character data.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
