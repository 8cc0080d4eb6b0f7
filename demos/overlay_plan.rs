use std::path::PathBuf;

use vidmark::{ApproxTextMeasure, MediaSize, RenderRequest, plan_frame};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/render_request.json")
    });
    let req = RenderRequest::from_path(&path)?;
    let frame = MediaSize::new(1280, 720)?;
    let measure = ApproxTextMeasure::default();

    let fps = 2.0;
    for i in 0..24 {
        let t = f64::from(i) / fps;
        let plan = plan_frame(&req.annotations, frame, t, &measure);
        if plan.items.is_empty() {
            continue;
        }
        let labels: Vec<_> = plan
            .items
            .iter()
            .filter_map(|d| d.label.as_ref().map(|l| l.text.as_str()))
            .collect();
        println!("t={t:>5.1}s  {} active  {labels:?}", plan.items.len());
    }
    Ok(())
}
