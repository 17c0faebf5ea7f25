use crate::IntSize;

/// Capabilities a flow element must expose to take part in a state flow.
///
/// Implementations must return stable values for the duration of one
/// measure/layout/draw cycle.
pub trait Node {
    /// This element shares a collapsed, half-width divider with its
    /// neighbour instead of a full gap.
    fn is_child(&self) -> bool;
    /// The gap after this element is split because the following element
    /// is a child node.
    fn is_next_child(&self) -> bool;
    /// Status label painted relative to the element's bottom edge.
    fn state(&self) -> &str;
    /// Description label painted relative to the element's top edge.
    fn content(&self) -> &str;
    /// Only image-like nodes get their labels and trailing divider painted.
    fn is_image_like(&self) -> bool {
        false
    }
}

/// Image-backed flow node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeImage {
    pub drawable_size: IntSize,
    pub state: String,
    pub child: bool,
    pub next_child: bool,
    pub content_description: Option<String>,
}

impl NodeImage {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            drawable_size: IntSize::new(width, height),
            ..Default::default()
        }
    }
    pub fn with_state(mut self, s: impl Into<String>) -> Self {
        self.state = s.into();
        self
    }
    pub fn content_description(mut self, s: impl Into<String>) -> Self {
        self.content_description = Some(s.into());
        self
    }
    pub fn child(mut self, v: bool) -> Self {
        self.child = v;
        self
    }
    pub fn next_child(mut self, v: bool) -> Self {
        self.next_child = v;
        self
    }
}

impl Node for NodeImage {
    fn is_child(&self) -> bool {
        self.child
    }

    fn is_next_child(&self) -> bool {
        self.next_child
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn content(&self) -> &str {
        self.content_description.as_deref().unwrap_or("")
    }

    fn is_image_like(&self) -> bool {
        true
    }
}
