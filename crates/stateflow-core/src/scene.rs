#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Color, Paint, Rect, Vec2};

/// Renderable scene: an ordered list of draw commands.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    /// Single-line text; `origin.y` is the baseline.
    Text {
        origin: Vec2,
        text: String,
        paint: Paint,
    },
}

impl Scene {
    pub fn texts(&self) -> impl Iterator<Item = (&Vec2, &str)> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { origin, text, .. } => Some((origin, text.as_str())),
            _ => None,
        })
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = &Rect> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }
}
