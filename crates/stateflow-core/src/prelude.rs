pub use crate::color::Color;
pub use crate::config::{Divider, FlowConfig, FlowMetrics, LayoutDirection, ShowDividers};
pub use crate::element::Element;
pub use crate::error::{FlowError, Result};
pub use crate::geometry::{Bounds, Insets, IntSize, Rect, Vec2};
pub use crate::measure::{ApproxTextMeasurer, Constraints, MeasureSpec, TextMeasurer};
pub use crate::node::{Node, NodeImage};
pub use crate::paint::Paint;
pub use crate::scene::{Scene, SceneNode};
