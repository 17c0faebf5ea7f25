//! The state-flow container.
//!
//! A host render loop drives a [`StateFlowLayout`] through
//! `attach` once, then `measure -> layout -> draw` for every frame:
//!
//! ```rust
//! use stateflow_core::*;
//! use stateflow_ui::StateFlowLayout;
//!
//! let config = FlowConfig::default().divider(Divider::new(10, Color::LIGHT_GRAY));
//! let mut flow = StateFlowLayout::new(config, ApproxTextMeasurer).with_children(vec![
//!     NodeImage::new(40, 40).with_state("s1").content_description("A").into(),
//!     NodeImage::new(40, 40).with_state("s2").content_description("B").into(),
//! ]);
//!
//! flow.attach()?;
//! flow.measure(Constraints::new(MeasureSpec::Exactly(300), MeasureSpec::AtMost(200)))?;
//! flow.layout()?;
//! let scene = flow.draw()?;
//! assert_eq!(scene.filled_rects().count(), 1);
//! # Ok::<(), FlowError>(())
//! ```

use stateflow_core::{
    Bounds, Color, Constraints, Divider, Element, FlowConfig, FlowError, IntSize, LayoutDirection,
    Paint, Result, Scene, SceneNode, ShowDividers, TextMeasurer, Vec2,
};

use crate::linear::{self, Gravity, RowSpec};

/// Fixed string measured once to estimate label height before any real
/// label has been measured.
pub const TAG: &str = "StateFlowLayout";

pub struct StateFlowLayout<M> {
    config: FlowConfig,
    measurer: M,
    children: Vec<Element>,
    state_paint: Paint,
    content_paint: Paint,
    label_extent: Bounds,
    divider: Option<Divider>,
    show_dividers: ShowDividers,
    gravity: Gravity,
    divider_width: i32,
    show_divider_middle: bool,
    attached: bool,
    measured: Option<IntSize>,
}

impl<M: TextMeasurer> StateFlowLayout<M> {
    pub fn new(config: FlowConfig, measurer: M) -> Self {
        let state_paint = Paint::label(config.state_color, config.state_text_size);
        let content_paint = Paint::label(config.content_color(), config.content_text_size);
        let label_extent = measurer.text_bounds(TAG, &content_paint);
        Self {
            divider: config.divider,
            config,
            measurer,
            children: Vec::new(),
            state_paint,
            content_paint,
            label_extent,
            show_dividers: ShowDividers::empty(),
            gravity: Gravity::Start,
            divider_width: 0,
            show_divider_middle: false,
            attached: false,
            measured: None,
        }
    }

    /// Replaces every child. The container detaches, so the new children
    /// are validated by the next `attach`.
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self.attached = false;
        self.measured = None;
        self
    }

    /// Adds a child at the end of the row. Once attached, the child must
    /// already expose the node capabilities.
    pub fn add_view(&mut self, child: Element) -> Result<()> {
        if self.attached && child.as_node().is_none() {
            return Err(FlowError::NotANode {
                type_name: child.type_name().to_owned(),
            });
        }
        self.children.push(child);
        self.measured = None;
        Ok(())
    }

    pub fn remove_view_at(&mut self, index: usize) -> Option<Element> {
        if index >= self.children.len() {
            return None;
        }
        self.measured = None;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Element> {
        self.children
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn state_paint(&self) -> &Paint {
        &self.state_paint
    }

    pub fn content_paint(&self) -> &Paint {
        &self.content_paint
    }

    /// Bounds of [`TAG`] under the content paint.
    pub fn label_extent(&self) -> Bounds {
        self.label_extent
    }

    pub fn divider(&self) -> Option<&Divider> {
        self.divider.as_ref()
    }

    pub fn set_divider(&mut self, divider: Option<Divider>) {
        self.divider = divider;
    }

    pub fn show_dividers(&self) -> ShowDividers {
        self.show_dividers
    }

    pub fn set_show_dividers(&mut self, show: ShowDividers) {
        self.show_dividers = show;
    }

    pub fn divider_width(&self) -> i32 {
        self.divider_width
    }

    pub fn show_divider_middle(&self) -> bool {
        self.show_divider_middle
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn measured_size(&self) -> Option<IntSize> {
        self.measured
    }

    /// Validates the container and its children, then fixes gravity and
    /// divider placement. Nothing is modified when validation fails.
    pub fn attach(&mut self) -> Result<()> {
        if self.config.direction != LayoutDirection::Ltr {
            log::warn!("refusing to attach state flow: {:?}", self.config.direction);
            return Err(FlowError::UnsupportedDirection(self.config.direction));
        }
        if let Some(bad) = self.children.iter().find(|c| c.as_node().is_none()) {
            log::warn!("refusing to attach state flow: {} is not a node", bad.type_name());
            return Err(FlowError::NotANode {
                type_name: bad.type_name().to_owned(),
            });
        }
        self.gravity = Gravity::Center;
        self.show_dividers = ShowDividers::MIDDLE;
        self.attached = true;
        Ok(())
    }

    fn base_gaps(&self) -> Vec<i32> {
        let n = self.children.len();
        let base = self.divider.map_or(0, |d| d.intrinsic_width);
        (0..=n)
            .map(|i| {
                if self.show_dividers.has_divider_before(i, n) {
                    base
                } else {
                    0
                }
            })
            .collect()
    }

    pub fn measure(&mut self, constraints: Constraints) -> Result<IntSize> {
        if !self.attached {
            return Err(FlowError::NotAttached);
        }
        let gaps = self.base_gaps();
        let spec = RowSpec {
            padding: self.config.padding,
            gaps: &gaps,
            gravity: self.gravity,
        };
        let content = linear::measure_row(&self.children, &spec)?;
        for c in &mut self.children {
            c.measured = c.intrinsic;
        }

        let mut size = IntSize::new(
            constraints.width.resolve(content.width),
            constraints.height.resolve(content.height),
        );
        if constraints.height.is_at_most() {
            size.height += self.label_extent.height() * self.config.metrics.label_height_factor;
        }

        self.show_divider_middle = self.show_dividers == ShowDividers::MIDDLE;
        if let Some(d) = self.divider
            && self.show_divider_middle
        {
            self.divider_width = d.intrinsic_width;
        }

        log::debug!(
            "measure: content {}x{} -> {}x{} (divider {})",
            content.width,
            content.height,
            size.width,
            size.height,
            self.divider_width
        );
        self.measured = Some(size);
        Ok(size)
    }

    pub fn layout(&mut self) -> Result<()> {
        if !self.attached {
            return Err(FlowError::NotAttached);
        }
        let size = self.measured.ok_or(FlowError::NotMeasured)?;
        if let Some(bad) = self.children.iter().find(|c| c.as_node().is_none()) {
            return Err(FlowError::NotANode {
                type_name: bad.type_name().to_owned(),
            });
        }
        let gaps = self.base_gaps();
        let spec = RowSpec {
            padding: self.config.padding,
            gaps: &gaps,
            gravity: self.gravity,
        };
        let boxes = linear::place_row(&self.children, &spec, size)?;
        for (c, b) in self.children.iter_mut().zip(boxes) {
            c.bounds = b;
        }

        if !self.show_divider_middle {
            return Ok(());
        }
        let n = self.children.len();
        let half = self.divider_width / 2;
        let mut child_node_count = 0;
        for (i, c) in self.children.iter_mut().enumerate() {
            if !self.show_dividers.has_divider_before(i, n) {
                continue;
            }
            let is_child = c.as_node().is_some_and(|n| n.is_child());
            if is_child && i != 0 {
                child_node_count += 1;
            }
            let shift = if is_child {
                half * child_node_count
            } else {
                half * (child_node_count + 1)
            };
            log::debug!("layout: child {i} shifted left by {shift}");
            c.bounds = c.bounds.offset_x(-shift);
        }
        Ok(())
    }

    pub fn draw(&self) -> Result<Scene> {
        let mut scene = Scene {
            clear_color: Color::TRANSPARENT,
            nodes: Vec::new(),
        };
        self.draw_into(&mut scene)?;
        Ok(scene)
    }

    pub fn draw_into(&self, scene: &mut Scene) -> Result<()> {
        if !self.attached {
            return Err(FlowError::NotAttached);
        }
        let height = self.measured.ok_or(FlowError::NotMeasured)?.height;
        let metrics = self.config.metrics;
        let last = self.children.len().saturating_sub(1);

        for (i, child) in self.children.iter().enumerate() {
            let Some(node) = child.as_node() else {
                continue;
            };
            if !node.is_image_like() {
                continue;
            }

            let state = node.state();
            if !state.is_empty() {
                let text_w = self.measurer.text_bounds(state, &self.state_paint).width();
                scene.nodes.push(SceneNode::Text {
                    origin: Vec2 {
                        x: label_x(child, text_w) as f32,
                        y: child.bounds.bottom as f32 * metrics.state_baseline_factor,
                    },
                    text: state.to_owned(),
                    paint: self.state_paint,
                });
            }

            let content = node.content();
            if !content.is_empty() {
                let text_w = self.measurer.text_bounds(content, &self.content_paint).width();
                scene.nodes.push(SceneNode::Text {
                    origin: Vec2 {
                        x: label_x(child, text_w) as f32,
                        y: child.bounds.top as f32 * metrics.content_baseline_factor,
                    },
                    text: content.to_owned(),
                    paint: self.content_paint,
                });
            }

            let Some(divider) = self.divider else {
                continue;
            };
            if !self.show_divider_middle || i == last {
                continue;
            }
            let anchor = match self.config.direction {
                // Unreachable through attach(), which rejects RTL.
                LayoutDirection::Rtl => {
                    child.bounds.left - child.margins.left - self.config.divider_padding
                }
                LayoutDirection::Ltr => child.bounds.right + child.margins.right,
            };
            let width = if node.is_child() || node.is_next_child() {
                self.divider_width / 2
            } else {
                self.divider_width
            };
            let top = self.config.padding.top + self.config.divider_padding;
            let bottom = height - self.config.padding.bottom - self.config.divider_padding;
            let rect = Bounds::new(anchor, top, anchor + width, bottom).to_rect();
            log::trace!("draw: divider after child {i} at {rect:?}");
            scene.nodes.push(SceneNode::Rect {
                rect,
                color: divider.color,
                radius: 0.0,
            });
        }
        Ok(())
    }
}

/// Left edge that centers a label of `text_width` over the child's measured
/// width.
pub fn label_x(child: &Element, text_width: i32) -> i32 {
    child.bounds.left - (text_width - child.measured.width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use stateflow_core::{Insets, MeasureSpec, Node, NodeImage, Rect};

    /// Ten pixels per char, ten pixels tall.
    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn text_bounds(&self, text: &str, _paint: &Paint) -> Bounds {
            Bounds::new(0, -10, 10 * text.chars().count() as i32, 0)
        }
    }

    struct Step {
        child: bool,
    }

    impl Node for Step {
        fn is_child(&self) -> bool {
            self.child
        }
        fn is_next_child(&self) -> bool {
            false
        }
        fn state(&self) -> &str {
            "step"
        }
        fn content(&self) -> &str {
            "desc"
        }
    }

    fn constraints() -> Constraints {
        Constraints::new(MeasureSpec::Exactly(300), MeasureSpec::AtMost(200))
    }

    fn three_nodes() -> Vec<Element> {
        [("s1", "A"), ("s2", "B"), ("s3", "C")]
            .into_iter()
            .map(|(s, c)| {
                NodeImage::new(40, 40)
                    .with_state(s)
                    .content_description(c)
                    .into()
            })
            .collect()
    }

    fn divided() -> FlowConfig {
        FlowConfig::default().divider(Divider::new(10, Color::LIGHT_GRAY))
    }

    fn run(flow: &mut StateFlowLayout<FixedMeasurer>) -> Scene {
        flow.attach().unwrap();
        flow.measure(constraints()).unwrap();
        flow.layout().unwrap();
        flow.draw().unwrap()
    }

    #[test]
    fn test_three_plain_nodes_with_divider() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        let scene = run(&mut flow);

        assert_eq!(flow.measured_size(), Some(IntSize::new(300, 70)));
        assert_eq!(flow.divider_width(), 10);
        let lefts: Vec<i32> = flow.children().iter().map(|c| c.bounds.left).collect();
        // base 80/130/180, then the two divided children move left by 5
        assert_eq!(lefts, vec![80, 125, 175]);
        for c in flow.children() {
            assert_eq!(c.bounds.width(), 40);
            assert_eq!(c.bounds.top, 15);
        }

        let rects: Vec<Rect> = scene.filled_rects().copied().collect();
        assert_eq!(
            rects,
            vec![
                Rect { x: 120.0, y: 0.0, w: 10.0, h: 70.0 },
                Rect { x: 165.0, y: 0.0, w: 10.0, h: 70.0 },
            ]
        );
        assert_eq!(scene.nodes.len(), 8);
    }

    #[test]
    fn test_label_positions() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        let scene = run(&mut flow);
        let texts: Vec<(Vec2, &str)> = scene.texts().map(|(o, t)| (*o, t)).collect();

        let (state_origin, state) = texts[0];
        assert_eq!(state, "s1");
        assert_eq!(state_origin.x, 90.0);
        assert!((state_origin.y - 55.0 * 1.3).abs() < 1e-3);

        let (content_origin, content) = texts[1];
        assert_eq!(content, "A");
        assert_eq!(content_origin.x, 95.0);
        assert!((content_origin.y - 12.0).abs() < 1e-3);

        // shifted child keeps its label centered over the new box
        let (s2_origin, _) = texts[2];
        assert_eq!(s2_origin.x, 135.0);
    }

    #[test]
    fn test_label_x_is_idempotent() {
        let mut el: Element = NodeImage::new(40, 40).into();
        el.bounds = Bounds::new(125, 15, 165, 55);
        el.measured = IntSize::new(40, 40);
        let first = label_x(&el, 55);
        assert_eq!(first, label_x(&el, 55));
        assert_eq!(first, 118);
    }

    #[test]
    fn test_no_middle_dividers_keeps_base_layout() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        flow.attach().unwrap();
        flow.set_show_dividers(ShowDividers::all());
        let size = flow.measure(constraints()).unwrap();
        flow.layout().unwrap();
        assert!(!flow.show_divider_middle());

        let spec = RowSpec {
            padding: Insets::ZERO,
            gaps: &[10, 10, 10, 10],
            gravity: Gravity::Center,
        };
        let base = linear::place_row(flow.children(), &spec, size).unwrap();
        let got: Vec<Bounds> = flow.children().iter().map(|c| c.bounds).collect();
        assert_eq!(got, base);
        assert_eq!(flow.draw().unwrap().filled_rects().count(), 0);
    }

    #[test]
    fn test_child_counter_compounds_shift() {
        let kids: Vec<Element> = [false, true, true, false, true]
            .into_iter()
            .map(|child| Element::node(Step { child }, IntSize::new(20, 20)))
            .collect();
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(kids);
        flow.attach().unwrap();
        let size = flow.measure(constraints()).unwrap();

        let spec = RowSpec {
            padding: Insets::ZERO,
            gaps: &[0, 10, 10, 10, 10, 0],
            gravity: Gravity::Center,
        };
        let base = linear::place_row(flow.children(), &spec, size).unwrap();
        flow.layout().unwrap();

        let shifts: Vec<i32> = flow
            .children()
            .iter()
            .zip(&base)
            .map(|(c, b)| b.left - c.bounds.left)
            .collect();
        assert_eq!(shifts, vec![0, 5, 10, 15, 15]);
        assert!(shifts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_height_inflation_is_fixed() {
        for n in [0usize, 1, 5] {
            let kids = (0..n).map(|_| NodeImage::new(30, 30).into()).collect();
            let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(kids);
            flow.attach().unwrap();
            let size = flow
                .measure(Constraints::new(MeasureSpec::Unspecified, MeasureSpec::AtMost(500)))
                .unwrap();
            let content = if n == 0 { 0 } else { 30 };
            assert_eq!(size.height, content + 3 * flow.label_extent().height());
        }
    }

    #[test]
    fn test_exact_height_is_not_inflated() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        flow.attach().unwrap();
        let size = flow
            .measure(Constraints::new(MeasureSpec::Exactly(300), MeasureSpec::Exactly(64)))
            .unwrap();
        assert_eq!(size, IntSize::new(300, 64));
    }

    #[test]
    fn test_rtl_rejected_before_any_phase() {
        let config = divided().direction(LayoutDirection::Rtl);
        let mut flow = StateFlowLayout::new(config, FixedMeasurer).with_children(three_nodes());
        assert!(matches!(
            flow.attach(),
            Err(FlowError::UnsupportedDirection(LayoutDirection::Rtl))
        ));
        assert!(!flow.is_attached());
        assert!(matches!(flow.measure(constraints()), Err(FlowError::NotAttached)));
        assert!(matches!(flow.layout(), Err(FlowError::NotAttached)));
        assert!(matches!(flow.draw(), Err(FlowError::NotAttached)));
        assert_eq!(flow.measured_size(), None);
    }

    #[test]
    fn test_non_node_child_is_named() {
        let mut kids = three_nodes();
        kids.insert(1, Element::plain("TextView", IntSize::new(50, 20)));
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(kids);
        let err = flow.attach().unwrap_err();
        assert!(matches!(&err, FlowError::NotANode { type_name } if type_name == "TextView"));
        assert!(err.to_string().contains("TextView"));
    }

    #[test]
    fn test_add_view_after_attach_validates() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        flow.attach().unwrap();
        assert!(flow.add_view(Element::plain("Button", IntSize::new(10, 10))).is_err());
        assert!(flow.add_view(NodeImage::new(10, 10).into()).is_ok());
        assert_eq!(flow.children().len(), 4);
        // structure changed, so the old measurement is gone
        assert!(matches!(flow.layout(), Err(FlowError::NotMeasured)));

        assert!(flow.remove_view_at(9).is_none());
        assert!(flow.remove_view_at(0).is_some());
        assert_eq!(flow.children().len(), 3);
    }

    #[test]
    fn test_replacing_children_detaches() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer)
            .with_children(vec![NodeImage::new(40, 40).into()]);
        flow.attach().unwrap();
        flow.measure(constraints()).unwrap();

        let mut flow = flow.with_children(vec![
            NodeImage::new(40, 40).into(),
            NodeImage::new(40, 40).into(),
            Element::plain("TextView", IntSize::new(40, 40)),
        ]);
        assert!(!flow.is_attached());
        assert_eq!(flow.measured_size(), None);
        assert!(matches!(flow.measure(constraints()), Err(FlowError::NotAttached)));
        assert!(matches!(flow.layout(), Err(FlowError::NotAttached)));
        assert!(matches!(
            flow.attach(),
            Err(FlowError::NotANode { type_name }) if type_name == "TextView"
        ));
        assert!(flow.children().iter().all(|c| c.bounds == Bounds::default()));
    }

    #[test]
    fn test_without_divider_nothing_moves() {
        let mut flow =
            StateFlowLayout::new(FlowConfig::default(), FixedMeasurer).with_children(three_nodes());
        let scene = run(&mut flow);
        assert_eq!(flow.divider_width(), 0);
        let lefts: Vec<i32> = flow.children().iter().map(|c| c.bounds.left).collect();
        assert_eq!(lefts, vec![90, 130, 170]);
        assert_eq!(scene.filled_rects().count(), 0);
        assert_eq!(scene.texts().count(), 6);
    }

    #[test]
    fn test_divider_width_survives_mode_change() {
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(three_nodes());
        flow.attach().unwrap();
        flow.measure(constraints()).unwrap();
        assert_eq!(flow.divider_width(), 10);

        flow.set_show_dividers(ShowDividers::empty());
        flow.set_divider(None);
        flow.measure(constraints()).unwrap();
        assert!(!flow.show_divider_middle());
        assert_eq!(flow.divider_width(), 10);
    }

    #[test]
    fn test_half_width_around_child_nodes() {
        let kids: Vec<Element> = vec![
            NodeImage::new(40, 40).next_child(true).into(),
            NodeImage::new(40, 40).child(true).into(),
            NodeImage::new(40, 40).into(),
        ];
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(kids);
        let scene = run(&mut flow);
        let widths: Vec<f32> = scene.filled_rects().map(|r| r.w).collect();
        assert_eq!(widths, vec![5.0, 5.0]);
    }

    #[test]
    fn test_divider_padding_and_container_padding() {
        let config = divided().divider_padding(4).padding(Insets::symmetric(0, 6));
        let mut flow = StateFlowLayout::new(config, FixedMeasurer).with_children(three_nodes());
        let scene = run(&mut flow);
        let size = flow.measured_size().unwrap();
        for r in scene.filled_rects() {
            assert_eq!(r.y, 10.0);
            assert_eq!(r.y + r.h, (size.height - 10) as f32);
        }
    }

    #[test]
    fn test_non_image_nodes_are_not_painted() {
        let kids: Vec<Element> = (0..2)
            .map(|_| Element::node(Step { child: false }, IntSize::new(20, 20)))
            .collect();
        let mut flow = StateFlowLayout::new(divided(), FixedMeasurer).with_children(kids);
        let scene = run(&mut flow);
        assert!(scene.nodes.is_empty());
    }

    #[test]
    fn test_paints_follow_config() {
        let config = FlowConfig::default()
            .state_color(Color::from_hex("#3B82F6"))
            .content_text_size(12.0);
        let flow: StateFlowLayout<FixedMeasurer> = StateFlowLayout::new(config, FixedMeasurer);
        assert_eq!(flow.state_paint().color, Color::from_hex("#3B82F6"));
        assert_eq!(flow.content_paint().color, Color::from_hex("#3B82F6"));
        assert_eq!(flow.state_paint().stroke_width, 18.0);
        assert_eq!(flow.content_paint().text_size, 12.0);
        assert_eq!(flow.label_extent().height(), 10);
    }
}
