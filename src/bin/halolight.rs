use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "halolight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
    /// Render an 80x80 preview PNG.
    Thumbnail(ThumbnailArgs),
    /// Print the default parameters as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Parameter JSON. Missing fields take defaults; omit for all defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Clamp every parameter into its documented range before rendering.
    #[arg(long, default_value_t = false)]
    clamp: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    params: ParamsArgs,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Animation clock in seconds. Omit for the static frame.
    #[arg(long)]
    time: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    params: ParamsArgs,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames, starting at frame 0.
    #[arg(long)]
    frames: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix for frames.
    #[arg(long, default_value = "halo")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct ThumbnailArgs {
    #[command(flatten)]
    params: ParamsArgs,

    /// Animation clock in seconds.
    #[arg(long)]
    time: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Thumbnail(args) => cmd_thumbnail(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn load_params(args: &ParamsArgs) -> anyhow::Result<halolight::HaloParams> {
    let params = match &args.params {
        Some(path) => halolight::HaloParams::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        None => halolight::HaloParams::default(),
    };
    Ok(if args.clamp { params.clamped() } else { params })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let params = load_params(&args.params)?;
    let canvas = halolight::Canvas {
        width: args.width,
        height: args.height,
    };
    let frame = halolight::render_frame(&params, canvas, args.time)?;

    ensure_parent(&args.out)?;
    halolight::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let params = load_params(&args.params)?;
    let canvas = halolight::Canvas {
        width: args.width,
        height: args.height,
    };
    let fps = halolight::Fps::new(args.fps, 1)?;
    let range =
        halolight::FrameRange::new(halolight::FrameIndex(0), halolight::FrameIndex(args.frames))?;

    let mut sink = halolight::PngSequenceSink::new(&args.out_dir, args.prefix.as_str());
    let stats = halolight::render_sequence(&params, canvas, fps, range, &mut sink)
        .with_context(|| format!("render sequence into '{}'", args.out_dir.display()))?;

    eprintln!(
        "wrote {} frames to {} ({} reused)",
        stats.frames_rendered,
        args.out_dir.display(),
        stats.frames_reused
    );
    Ok(())
}

fn cmd_thumbnail(args: ThumbnailArgs) -> anyhow::Result<()> {
    let params = load_params(&args.params)?;
    let frame = halolight::render_thumbnail(&params, args.time)?;

    ensure_parent(&args.out)?;
    halolight::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    println!("{}", halolight::HaloParams::default().to_json_pretty()?);
    Ok(())
}
