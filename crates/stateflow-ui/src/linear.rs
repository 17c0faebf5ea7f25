//! Base horizontal linear layout, computed with taffy.
//!
//! Children are placed contiguously in a single row at their intrinsic
//! size. Divider gaps are modelled as extra leading margin on the child that
//! follows the divider (and extra trailing padding for an end divider), so
//! taffy sees exactly the space a linear container with dividers reserves.
//! Under centre gravity each child's margin box is centred on the cross
//! axis, so unequal top/bottom margins move the child by half their
//! difference.

use stateflow_core::{Bounds, Element, FlowError, Insets, IntSize, Result};
use taffy::prelude::{AvailableSpace, NodeId, Style, TaffyTree, length};
use taffy::style::{AlignItems, Display, FlexDirection, JustifyContent};

/// Content alignment inside the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gravity {
    #[default]
    Start,
    Center,
}

/// Per-row inputs shared by measurement and placement.
#[derive(Clone, Copy, Debug)]
pub struct RowSpec<'a> {
    pub padding: Insets,
    /// Divider gap before each child; one extra trailing entry for the end
    /// divider. Shorter slices are treated as zero-filled.
    pub gaps: &'a [i32],
    pub gravity: Gravity,
}

impl RowSpec<'_> {
    fn gap(&self, i: usize) -> i32 {
        self.gaps.get(i).copied().unwrap_or(0)
    }
}

fn taffy_err(e: taffy::TaffyError) -> FlowError {
    FlowError::Layout(e.to_string())
}

fn build_row(
    t: &mut TaffyTree<()>,
    children: &[Element],
    spec: &RowSpec<'_>,
    size: Option<IntSize>,
) -> Result<(NodeId, Vec<NodeId>)> {
    let mut kids = Vec::with_capacity(children.len());
    for (i, c) in children.iter().enumerate() {
        let m = c.margins;
        let style = Style {
            size: taffy::geometry::Size {
                width: length(c.intrinsic.width as f32),
                height: length(c.intrinsic.height as f32),
            },
            margin: taffy::geometry::Rect {
                left: length((m.left + spec.gap(i)) as f32),
                right: length(m.right as f32),
                top: length(m.top as f32),
                bottom: length(m.bottom as f32),
            },
            flex_shrink: 0.0,
            ..Default::default()
        };
        kids.push(t.new_leaf(style).map_err(taffy_err)?);
    }

    let p = spec.padding;
    let mut root = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        padding: taffy::geometry::Rect {
            left: length(p.left as f32),
            right: length((p.right + spec.gap(children.len())) as f32),
            top: length(p.top as f32),
            bottom: length(p.bottom as f32),
        },
        ..Default::default()
    };
    if spec.gravity == Gravity::Center {
        root.justify_content = Some(JustifyContent::Center);
        root.align_items = Some(AlignItems::Center);
    } else {
        root.justify_content = Some(JustifyContent::FlexStart);
        root.align_items = Some(AlignItems::FlexStart);
    }
    if let Some(s) = size {
        root.size = taffy::geometry::Size {
            width: length(s.width as f32),
            height: length(s.height as f32),
        };
    }
    let root = t.new_with_children(root, &kids).map_err(taffy_err)?;
    Ok((root, kids))
}

fn max_content() -> taffy::geometry::Size<AvailableSpace> {
    taffy::geometry::Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    }
}

/// Intrinsic size of the row: padding, children, margins and divider gaps.
pub fn measure_row(children: &[Element], spec: &RowSpec<'_>) -> Result<IntSize> {
    let mut t: TaffyTree<()> = TaffyTree::new();
    t.disable_rounding();
    let (root, _) = build_row(&mut t, children, spec, None)?;
    t.compute_layout(root, max_content()).map_err(taffy_err)?;
    let l = t.layout(root).map_err(taffy_err)?;
    Ok(IntSize::new(
        l.size.width.ceil() as i32,
        l.size.height.ceil() as i32,
    ))
}

/// Places children inside a row of exactly `size`; returns one box per child.
pub fn place_row(children: &[Element], spec: &RowSpec<'_>, size: IntSize) -> Result<Vec<Bounds>> {
    let mut t: TaffyTree<()> = TaffyTree::new();
    t.disable_rounding();
    let (root, kids) = build_row(&mut t, children, spec, Some(size))?;
    t.compute_layout(root, max_content()).map_err(taffy_err)?;

    let mut out = Vec::with_capacity(kids.len());
    for (node, c) in kids.into_iter().zip(children) {
        let l = t.layout(node).map_err(taffy_err)?;
        out.push(Bounds::from_origin_size(
            l.location.x as i32,
            l.location.y as i32,
            c.intrinsic,
        ));
    }
    Ok(out)
}
