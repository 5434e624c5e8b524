pub mod config;
pub mod drag;
pub mod icon;
pub mod outline;
pub mod scene;
pub mod style;
pub mod svg;

pub use config::RenderConfig;
pub use drag::{CanvasBounds, NodeDrag};
pub use icon::Glyph;
pub use outline::outline;
pub use scene::{EdgeShape, NodeShape, Scene, layout};
pub use style::{LineStyle, Marker, NodePalette, line_style};
pub use svg::{GraphRenderer, Interaction};
