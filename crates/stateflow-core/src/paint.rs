#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// Text paint used for the flow labels.
///
/// Built once when a container is constructed and never mutated by the
/// measure/layout/draw phases.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paint {
    pub color: Color,
    pub text_size: f32,
    /// Synthetic emboldening; glyphs are not swapped for a bold face.
    pub fake_bold: bool,
    pub stroke_width: f32,
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            text_size: 14.0,
            fake_bold: false,
            stroke_width: 0.0,
            anti_alias: false,
        }
    }
}

impl Paint {
    /// Bold anti-aliased label paint whose stroke matches the text size.
    pub fn label(color: Color, text_size: f32) -> Self {
        Self {
            color,
            text_size,
            fake_bold: true,
            stroke_width: text_size,
            anti_alias: true,
        }
    }
}
