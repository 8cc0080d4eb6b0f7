use std::time::Duration;

use vidmark::{
    ClickOutcome, DecodedMetadata, EditorConfig, EditorSession, InMemoryEngine, LabelStyle,
    MarkerKind, Point, PreviewHandle, Rect, RenderRequest, RenderResponse, RenderService, Size,
    VidmarkResult,
};

struct PrintRender;

impl RenderService for PrintRender {
    fn render(&mut self, req: &RenderRequest) -> VidmarkResult<RenderResponse> {
        println!(
            "{}",
            serde_json::to_string_pretty(req).map_err(anyhow::Error::from)?
        );
        Ok(RenderResponse {
            url: format!("/outputs/render_{}", req.filename),
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut cfg = EditorConfig::default();
    cfg.defaults.marker_kind = MarkerKind::Pin;
    cfg.defaults.label_style = LabelStyle::Callout;

    let mut session = EditorSession::new(cfg, InMemoryEngine::new())?;
    session.select_media(
        "walkthrough.mp4",
        Some(PreviewHandle::new("blob:walkthrough", |url| {
            eprintln!("released {url}")
        })),
    );
    session.container_resized(Size::new(960.0, 720.0));
    session.metadata_loaded(DecodedMetadata {
        duration: Some(30.0),
        width: Some(1920),
        height: Some(1080),
        fps: Some(30.0),
    });

    let track = Rect::new(0.0, 0.0, 960.0, 40.0);
    for (x, t_px) in [(200.0, 96.0), (480.0, 320.0), (760.0, 640.0)] {
        session.timeline_press(t_px, track);
        session.timeline_release();
        match session.click(Point::new(x, 360.0), 1_718_000_000_000)? {
            ClickOutcome::Placed(id) => {
                eprintln!("placed {id} at t={}", session.current_time_sec());
            }
            other => eprintln!("click ignored: {other:?}"),
        }
    }

    session.seek(11.0);
    for ann in session.active_annotations() {
        eprintln!("active at 11s: {} ({})", ann.id, ann.text);
    }
    for (id, clip) in session.clip_layouts() {
        eprintln!(
            "clip {id}: left {:.1}% width {:.1}%",
            clip.left_pct, clip.width_pct
        );
    }
    let ctx = session.label_context(Duration::ZERO);
    eprintln!("hovering: {}", ctx.hovering);

    let resp = session.export(&mut PrintRender, true)?;
    eprintln!("render url: {}", resp.url);

    session.close_media();
    Ok(())
}
