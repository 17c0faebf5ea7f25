use stateflow_core::prelude::*;
use stateflow_devtools::Inspector;
use stateflow_text::CosmicTextMeasurer;

fn order_flow() -> Vec<Element> {
    vec![
        NodeImage::new(48, 48)
            .with_state("done")
            .content_description("Ordered")
            .into(),
        NodeImage::new(48, 48)
            .with_state("done")
            .content_description("Paid")
            .next_child(true)
            .into(),
        NodeImage::new(32, 32)
            .with_state("packing")
            .content_description("Picked")
            .child(true)
            .into(),
        NodeImage::new(48, 48)
            .with_state("todo")
            .content_description("Shipped")
            .into(),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = FlowConfig::default()
        .state_color(Color::from_hex("#3B82F6"))
        .with_content_color(Color::from_hex("#222222"))
        .divider(Divider::new(12, Color::LIGHT_GRAY))
        .divider_padding(6)
        .padding(Insets::symmetric(8, 4));
    let constraints = Constraints::new(MeasureSpec::Exactly(480), MeasureSpec::AtMost(240));

    let mut inspector = Inspector::new();
    if std::env::args().any(|a| a == "--inspect") {
        inspector.hud.toggle_inspector();
    }

    let frame = inspector.frame(|| {
        stateflow_ui::render(order_flow(), &config, constraints, CosmicTextMeasurer)
    })?;

    log::info!("flow size {}x{}", frame.size.width, frame.size.height);
    for (i, b) in frame.positions.iter().enumerate() {
        log::info!("node {i}: {b:?}");
    }
    for r in &frame.dividers {
        log::info!("divider: {r:?}");
    }

    if std::env::args().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&frame.scene)?);
    }
    Ok(())
}
