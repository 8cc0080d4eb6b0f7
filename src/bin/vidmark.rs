use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vidmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the annotations active at a time.
    Active(ActiveArgs),
    /// Print timeline clip placement and ruler ticks.
    Layout(LayoutArgs),
    /// Print the overlay draw plan for one frame.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct ActiveArgs {
    /// Input render-request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback time in seconds.
    #[arg(long)]
    time: f64,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input render-request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Media duration in seconds.
    #[arg(long, default_value_t = 100.0)]
    duration: f64,

    /// Number of ruler ticks.
    #[arg(long, default_value_t = 40)]
    ticks: u32,

    /// Label every n-th tick.
    #[arg(long, default_value_t = 4)]
    label_every: u32,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input render-request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame time in seconds.
    #[arg(long)]
    time: f64,

    /// Frame width in pixels.
    #[arg(long)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long)]
    height: u32,

    /// Font file (TTF/OTF) for sizing label boxes; a fixed-advance estimate is used otherwise.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    duration_sec: f64,
    clips: Vec<ClipEntry>,
    ruler: Vec<vidmark::RulerTick>,
}

#[derive(serde::Serialize)]
struct ClipEntry {
    id: vidmark::AnnotationId,
    #[serde(flatten)]
    layout: vidmark::ClipLayout,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Active(args) => cmd_active(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn cmd_active(args: ActiveArgs) -> anyhow::Result<()> {
    let req = vidmark::RenderRequest::from_path(&args.in_path)?;
    let active = vidmark::active_at(args.time, &req.annotations);
    emit(&active, args.out.as_ref())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let req = vidmark::RenderRequest::from_path(&args.in_path)?;
    if !(args.duration.is_finite() && args.duration > 0.0) {
        anyhow::bail!("--duration must be > 0, got {}", args.duration);
    }
    let clips = req
        .annotations
        .iter()
        .filter_map(|a| {
            vidmark::layout(a, args.duration).map(|layout| ClipEntry { id: a.id, layout })
        })
        .collect();
    let report = LayoutReport {
        duration_sec: args.duration,
        clips,
        ruler: vidmark::ruler(args.duration, args.ticks, args.label_every),
    };
    emit(&report, args.out.as_ref())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let req = vidmark::RenderRequest::from_path(&args.in_path)?;
    let frame = vidmark::MediaSize::new(args.width, args.height)?;
    let measure: Box<dyn vidmark::TextMeasure> = match &args.font {
        Some(path) => Box::new(vidmark::FontTextMeasure::from_path(path)?),
        None => Box::new(vidmark::ApproxTextMeasure::default()),
    };
    let plan = vidmark::plan_frame(&req.annotations, frame, args.time, measure.as_ref());
    emit(&plan, args.out.as_ref())
}

fn emit<T: serde::Serialize>(value: &T, out: Option<&PathBuf>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}
