use crate::{Bounds, Paint};

/// How much room the parent offers along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    Exactly(i32),
    AtMost(i32),
    Unspecified,
}

impl MeasureSpec {
    /// Resolves a desired content size against this constraint.
    pub fn resolve(self, content: i32) -> i32 {
        match self {
            MeasureSpec::Exactly(n) => n,
            MeasureSpec::AtMost(n) => content.min(n),
            MeasureSpec::Unspecified => content,
        }
    }

    pub fn is_at_most(self) -> bool {
        matches!(self, MeasureSpec::AtMost(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
}

impl Constraints {
    pub fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }
}

/// Text bounds query used for label placement.
///
/// Returned bounds are relative to the drawing origin, with the baseline at
/// `y = 0` (so `top` is usually negative).
pub trait TextMeasurer {
    fn text_bounds(&self, text: &str, paint: &Paint) -> Bounds;
}

/// Font-free estimate: every char advances `0.6 x text_size`, and the
/// ink box is one text size tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn text_bounds(&self, text: &str, paint: &Paint) -> Bounds {
        if text.is_empty() {
            return Bounds::default();
        }
        let w = (text.chars().count() as f32 * paint.text_size * 0.6).round() as i32;
        let h = paint.text_size.round() as i32;
        Bounds::new(0, -h, w, 0)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn text_bounds(&self, text: &str, paint: &Paint) -> Bounds {
        (**self).text_bounds(text, paint)
    }
}
