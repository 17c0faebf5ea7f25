use std::borrow::Cow;
use std::fmt;

use crate::{Bounds, Insets, IntSize, Node, NodeImage};

/// A rectangular host view placed inside a flow container.
///
/// `bounds` and `measured` belong to the container: they are rewritten on
/// every measure/layout pass and carry no meaning between frames.
pub struct Element {
    type_name: Cow<'static, str>,
    pub intrinsic: IntSize,
    pub margins: Insets,
    node: Option<Box<dyn Node>>,
    pub bounds: Bounds,
    pub measured: IntSize,
}

impl Element {
    /// Wraps a node; the error-facing type name is the last path segment of `N`.
    pub fn node<N: Node + 'static>(node: N, intrinsic: IntSize) -> Self {
        Self {
            type_name: Cow::Borrowed(simple_type_name::<N>()),
            intrinsic,
            margins: Insets::ZERO,
            node: Some(Box::new(node)),
            bounds: Bounds::default(),
            measured: IntSize::ZERO,
        }
    }

    /// A host view that does not expose the node capabilities.
    pub fn plain(type_name: impl Into<Cow<'static, str>>, intrinsic: IntSize) -> Self {
        Self {
            type_name: type_name.into(),
            intrinsic,
            margins: Insets::ZERO,
            node: None,
            bounds: Bounds::default(),
            measured: IntSize::ZERO,
        }
    }

    pub fn margins(mut self, m: Insets) -> Self {
        self.margins = m;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn as_node(&self) -> Option<&dyn Node> {
        self.node.as_deref()
    }

    pub fn is_image_like(&self) -> bool {
        self.node.as_deref().is_some_and(Node::is_image_like)
    }
}

impl From<NodeImage> for Element {
    fn from(img: NodeImage) -> Self {
        let size = img.drawable_size;
        Element::node(img, size)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("type_name", &self.type_name)
            .field("intrinsic", &self.intrinsic)
            .field("margins", &self.margins)
            .field("node", &self.node.as_ref().map(|_| "<node>"))
            .field("bounds", &self.bounds)
            .finish()
    }
}

fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Strip generic arguments before taking the last path segment.
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
