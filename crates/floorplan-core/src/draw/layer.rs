//! Layer-based rendering output.
//!
//! Drawables emit SVG nodes tagged with a [`RenderLayer`]. When the output is
//! flattened with [`LayeredOutput::render`], nodes are emitted bottom to top by
//! layer, keeping insertion order within a layer.
//!
//! # Example
//!
//! ```
//! # use floorplan_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Path, Rectangle};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Opening, Box::new(Path::new()));
//! output.add_to_layer(RenderLayer::Wall, Box::new(Rectangle::new()));
//!
//! let nodes = output.render();
//! assert!(nodes[0].to_string().starts_with("<rect"));
//! assert!(nodes[1].to_string().starts_with("<path"));
//! ```

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Floor boundary outlines
    Floor,
    /// Room fill rectangles
    Room,
    /// Wall rectangles
    Wall,
    /// Door arcs and window panes drawn over walls
    Opening,
    /// Room names, labels and sizes
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Floor => "floor",
            Self::Room => "room",
            Self::Wall => "wall",
            Self::Opening => "opening",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another output, keeping their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Counts the nodes on one layer.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Flattens the output into nodes ordered by layer, consuming it.
    ///
    /// The sort is stable: nodes on the same layer keep the order in which
    /// they were added.
    pub fn render(mut self) -> Vec<SvgNode> {
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items.into_iter().map(|(_, node)| node).collect()
    }
}
