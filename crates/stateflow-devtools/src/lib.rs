use web_time::Instant;

use stateflow_core::{Color, Rect, Scene, SceneNode};
use stateflow_ui::Frame;

pub struct Hud {
    pub inspector_enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            metrics: None,
        }
    }
    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn overlay(&mut self, frame: &Frame, scene: &mut Scene) {
        self.frame_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }

        for b in &frame.positions {
            scene.nodes.push(SceneNode::Border {
                rect: b.to_rect(),
                color: Color::from_hex("#44AAFF"),
                width: 1.0,
                radius: 0.0,
            });
        }
        for r in &frame.dividers {
            scene.nodes.push(SceneNode::Border {
                rect: *r,
                color: Color::from_hex("#FF8844"),
                width: 1.0,
                radius: 0.0,
            });
        }

        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
            format!("size: {}x{}", frame.size.width, frame.size.height),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("measure+layout: {:.2} ms", m.layout_ms));
            lines.push(format!("nodes: {}", m.scene_nodes));
        }
        let text = lines.join("  |  ");
        scene.nodes.push(SceneNode::Text {
            origin: stateflow_core::Vec2 { x: 8.0, y: 20.0 },
            text,
            paint: stateflow_core::Paint {
                color: Color::from_hex("#AAAAAA"),
                text_size: 14.0,
                ..Default::default()
            },
        });
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub layout_ms: f32,
    pub scene_nodes: usize,
}

pub struct Inspector {
    pub hud: Hud,
}
impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    /// Times `render`, then appends the overlay to the produced frame's
    /// scene when the inspector is on.
    pub fn frame<E>(&mut self, render: impl FnOnce() -> Result<Frame, E>) -> Result<Frame, E> {
        let start = Instant::now();
        let mut frame = render()?;
        let layout_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.hud.metrics = Some(Metrics {
            layout_ms,
            scene_nodes: frame.scene.nodes.len(),
        });
        log::debug!("frame rendered in {layout_ms:.2} ms");
        if self.hud.inspector_enabled {
            let mut scene = std::mem::take(&mut frame.scene);
            self.hud.overlay(&frame, &mut scene);
            frame.scene = scene;
        }
        Ok(frame)
    }
}

/// Rects outlined by the overlay, in push order.
pub fn outlined(scene: &Scene) -> Vec<Rect> {
    scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Border { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect()
}
