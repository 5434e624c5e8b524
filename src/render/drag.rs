use crate::scenario::Position;

/// On-screen rectangle of the canvas, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts a pointer position into clamped canvas percentages.
    ///
    /// A degenerate (zero-sized) canvas maps every pointer to the origin.
    pub fn to_percent(&self, pointer_x: f64, pointer_y: f64) -> Position {
        let x = if self.width > 0.0 {
            (pointer_x - self.left) / self.width * 100.0
        } else {
            0.0
        };
        let y = if self.height > 0.0 {
            (pointer_y - self.top) / self.height * 100.0
        } else {
            0.0
        };
        Position::new(x, y).clamped()
    }
}

/// Tracks a pointer drag and reports node moves through a callback.
///
/// The callback receives the dragged node id and its new percentage
/// position. Only the node picked up by [`NodeDrag::begin`] is ever reported.
pub struct NodeDrag<F>
where
    F: FnMut(&str, Position),
{
    on_node_move: F,
    dragging: Option<String>,
}

impl<F> NodeDrag<F>
where
    F: FnMut(&str, Position),
{
    pub fn new(on_node_move: F) -> Self {
        Self {
            on_node_move,
            dragging: None,
        }
    }

    /// Picks up a node. Any drag already in progress is dropped.
    pub fn begin(&mut self, node_id: &str) {
        self.dragging = Some(node_id.to_string());
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Reports the pointer position. Returns the new node position, or `None`
    /// if no drag is in progress.
    pub fn update(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        bounds: &CanvasBounds,
    ) -> Option<Position> {
        let node_id = self.dragging.as_deref()?;
        let position = bounds.to_percent(pointer_x, pointer_y);
        (self.on_node_move)(node_id, position);
        Some(position)
    }

    /// Releases the node.
    pub fn end(&mut self) -> Option<String> {
        self.dragging.take()
    }
}
