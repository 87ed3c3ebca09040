use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use spritehost::{FrameRGBA, HostReply, HostSettings, Script, Session};

#[derive(Parser, Debug)]
#[command(name = "spritehost", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a script and write every presented canvas frame as a PNG.
    Replay(ReplayArgs),
    /// Replay a script and write the final frame of one canvas.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settings JSON used when the script carries none.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Directory receiving `canvas-{id}-frame-{n}.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Canvas id.
    #[arg(long)]
    canvas: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &ScriptArgs) -> anyhow::Result<(Script, Session)> {
    let script = Script::from_json_file(&args.in_path)?;
    let fallback = match &args.settings {
        Some(path) => HostSettings::from_json_file(path)?,
        None => HostSettings::default(),
    }
    .with_env_overrides();
    let session = Session::for_script(&script, fallback)?;
    Ok((script, session))
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let (script, mut session) = load(&args.script)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0usize;
    session.run_with(&script, |ctx, outcome| {
        if let Ok(HostReply::Redrawn { canvas, frame }) = outcome.result {
            let path = args
                .out_dir
                .join(format!("canvas-{canvas}-frame-{frame}.png"));
            write_png(&path, &ctx.canvas(canvas)?.surface().readback())?;
            written += 1;
        }
        Ok(())
    })?;

    for failure in session.failures() {
        if let Err(msg) = &failure.result {
            eprintln!("call {} ({}) failed: {msg}", failure.index, failure.call);
        }
    }
    for event in session.events() {
        eprintln!("event {}", serde_json::to_string(&event)?);
    }
    eprintln!(
        "replayed {} calls ({} failed), wrote {written} frames to {}",
        session.outcomes().len(),
        session.failures().count(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (script, mut session) = load(&args.script)?;
    session.run(&script);

    let ctx = session.context();
    let canvas = ctx.canvas(args.canvas)?;
    if canvas.surface().frame_id() == 0 {
        anyhow::bail!("canvas {} was never redrawn", args.canvas);
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &canvas.surface().readback())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> spritehost::HostResult<()> {
    let straight = frame.to_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
