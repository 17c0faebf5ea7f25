//! Construction-time configuration for a state-flow container.
//!
//! Everything here is read once when the container is built. The
//! measure/layout/draw phases never write back into a `FlowConfig`.
//!
//! ```rust
//! use stateflow_core::*;
//!
//! let config = FlowConfig::default()
//!     .state_color(Color::from_hex("#3B82F6"))
//!     .divider(Divider::new(10, Color::LIGHT_GRAY))
//!     .divider_padding(4);
//!
//! // Content color follows the state color unless set explicitly.
//! assert_eq!(config.content_color(), Color::from_hex("#3B82F6"));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Color, Insets};

pub const DEFAULT_STATE_TEXT_SIZE: f32 = 18.0;
pub const DEFAULT_CONTENT_TEXT_SIZE: f32 = 14.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Divider graphic drawn between adjacent nodes as a filled rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Divider {
    pub intrinsic_width: i32,
    pub color: Color,
}

impl Divider {
    pub fn new(intrinsic_width: i32, color: Color) -> Self {
        Self {
            intrinsic_width,
            color,
        }
    }
}

/// Empirical placement constants.
///
/// The label baselines are proportional to the child's edges rather than
/// derived from font metrics; they look right at the default text sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowMetrics {
    /// Multiples of the label extent height reserved under an at-most
    /// height constraint.
    pub label_height_factor: i32,
    pub state_baseline_factor: f32,
    pub content_baseline_factor: f32,
}

impl Default for FlowMetrics {
    fn default() -> Self {
        Self {
            label_height_factor: 3,
            state_baseline_factor: 1.3,
            content_baseline_factor: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlowConfig {
    pub state_color: Color,
    /// `None` means "same as `state_color`".
    pub content_color: Option<Color>,
    pub state_text_size: f32,
    pub content_text_size: f32,
    pub divider: Option<Divider>,
    pub divider_padding: i32,
    pub padding: Insets,
    pub direction: LayoutDirection,
    pub metrics: FlowMetrics,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            state_color: Color::BLACK,
            content_color: None,
            state_text_size: DEFAULT_STATE_TEXT_SIZE,
            content_text_size: DEFAULT_CONTENT_TEXT_SIZE,
            divider: None,
            divider_padding: 0,
            padding: Insets::ZERO,
            direction: LayoutDirection::Ltr,
            metrics: FlowMetrics::default(),
        }
    }
}

impl FlowConfig {
    pub fn content_color(&self) -> Color {
        self.content_color.unwrap_or(self.state_color)
    }

    pub fn state_color(mut self, c: Color) -> Self {
        self.state_color = c;
        self
    }
    pub fn with_content_color(mut self, c: Color) -> Self {
        self.content_color = Some(c);
        self
    }
    pub fn state_text_size(mut self, px: f32) -> Self {
        self.state_text_size = px;
        self
    }
    pub fn content_text_size(mut self, px: f32) -> Self {
        self.content_text_size = px;
        self
    }
    pub fn divider(mut self, d: Divider) -> Self {
        self.divider = Some(d);
        self
    }
    pub fn divider_padding(mut self, px: i32) -> Self {
        self.divider_padding = px;
        self
    }
    pub fn padding(mut self, p: Insets) -> Self {
        self.padding = p;
        self
    }
    pub fn direction(mut self, d: LayoutDirection) -> Self {
        self.direction = d;
        self
    }
    pub fn metrics(mut self, m: FlowMetrics) -> Self {
        self.metrics = m;
        self
    }
}

bitflags::bitflags! {
    /// Where a linear container places its divider graphic.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShowDividers: u8 {
        const BEGINNING = 1;
        const MIDDLE = 1 << 1;
        const END = 1 << 2;
    }
}

impl ShowDividers {
    /// Whether a divider precedes the child at `index` of `count` children.
    /// `index == count` asks about the trailing divider.
    pub fn has_divider_before(self, index: usize, count: usize) -> bool {
        if index == count {
            self.contains(ShowDividers::END)
        } else if index == 0 {
            self.contains(ShowDividers::BEGINNING)
        } else {
            self.contains(ShowDividers::MIDDLE)
        }
    }
}
