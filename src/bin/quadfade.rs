use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "quadfade", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Degrade an image file into an animated GIF.
    Degrade(DegradeArgs),
    /// Print the per-frame split depth for an image size.
    Schedule(ScheduleArgs),
}

#[derive(Parser, Debug)]
struct DegradeArgs {
    /// Input image (GIF frames are kept; other formats are treated as a still).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Options JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the depth ceiling derived from the long edge.
    #[arg(long)]
    split_max: Option<u32>,

    /// Frames to synthesize from a still.
    #[arg(long)]
    synth_frames: Option<usize>,

    /// Delay (ms) for synthesized frames.
    #[arg(long)]
    synth_delay: Option<u32>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,

    /// Frame count after synthesis.
    #[arg(long, default_value_t = quadfade::DEFAULT_SYNTH_FRAMES)]
    frames: usize,

    /// Override the depth ceiling derived from the long edge.
    #[arg(long)]
    split_max: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Degrade(args) => cmd_degrade(args),
        Command::Schedule(args) => cmd_schedule(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_options(args: &DegradeArgs) -> anyhow::Result<quadfade::DegradeOptions> {
    let mut opts = match &args.config {
        Some(path) => quadfade::DegradeOptions::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => quadfade::DegradeOptions::default(),
    };

    if args.split_max.is_some() {
        opts.split_max = args.split_max;
    }
    if let Some(n) = args.synth_frames {
        opts.synth_frames = n;
    }
    if let Some(d) = args.synth_delay {
        opts.synth_delay = d;
    }
    if args.parallel {
        opts.threading.parallel = true;
    }
    if args.threads.is_some() {
        opts.threading.threads = args.threads;
    }
    opts.validate()?;
    Ok(opts)
}

fn cmd_degrade(args: DegradeArgs) -> anyhow::Result<()> {
    let opts = load_options(&args)?;

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let image = quadfade::decode_image(&bytes)
        .with_context(|| format!("decode input '{}'", args.in_path.display()))?;

    let (image, stats) = quadfade::degrade_with_stats(image, &opts)?;
    write_gif(&args.out, &image)?;

    eprintln!(
        "wrote {} ({} frames, max depth {})",
        args.out.display(),
        stats.frames_total,
        stats.max_depth
    );
    Ok(())
}

fn write_gif(path: &Path, image: &quadfade::Image) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    quadfade::encode_gif(image, &mut w)
        .with_context(|| format!("write gif '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("flush gif '{}'", path.display()))?;
    Ok(())
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let schedule = match args.split_max {
        Some(split_max) => quadfade::DepthSchedule::with_split_max(split_max, args.frames),
        None => quadfade::DepthSchedule::new(
            quadfade::Dimensions::new(args.width, args.height),
            args.frames,
        ),
    };

    println!("split_max {}", schedule.split_max());
    for (i, depth) in schedule.depths().into_iter().enumerate() {
        println!("{i} {depth}");
    }
    Ok(())
}
