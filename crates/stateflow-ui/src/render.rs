use smallvec::SmallVec;
use stateflow_core::{
    Bounds, Constraints, Element, FlowConfig, IntSize, Rect, Result, Scene, TextMeasurer,
};

use crate::StateFlowLayout;

/// Output of one full attach/measure/layout/draw cycle.
#[derive(Clone, Debug)]
pub struct Frame {
    pub size: IntSize,
    /// Final child boxes, divider shifts applied.
    pub positions: Vec<Bounds>,
    pub dividers: SmallVec<[Rect; 8]>,
    pub scene: Scene,
}

/// Runs every phase on a fresh container and hands back the elements
/// together with the frame, so the host can keep them for the next frame.
pub fn render_with<M: TextMeasurer>(
    elements: Vec<Element>,
    config: &FlowConfig,
    constraints: Constraints,
    measurer: M,
) -> (Vec<Element>, Result<Frame>) {
    let mut flow = StateFlowLayout::new(config.clone(), measurer).with_children(elements);
    let frame = run(&mut flow, constraints);
    (flow.into_children(), frame)
}

/// Pure rendering entry point: elements and constraints in, frame out.
pub fn render<M: TextMeasurer>(
    elements: Vec<Element>,
    config: &FlowConfig,
    constraints: Constraints,
    measurer: M,
) -> Result<Frame> {
    render_with(elements, config, constraints, measurer).1
}

fn run<M: TextMeasurer>(flow: &mut StateFlowLayout<M>, constraints: Constraints) -> Result<Frame> {
    flow.attach()?;
    let size = flow.measure(constraints)?;
    flow.layout()?;
    let scene = flow.draw()?;
    Ok(Frame {
        size,
        positions: flow.children().iter().map(|c| c.bounds).collect(),
        dividers: scene.filled_rects().copied().collect(),
        scene,
    })
}
