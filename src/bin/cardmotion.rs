use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use cardmotion::{
    Ease, LoadConfig, Playback, PlaybackMode, PlaybackOpts, TemplateLoader, TemplateRegistry,
    interpolate_frame,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cardmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered template ids and names.
    List(CatalogArgs),
    /// Print one template as JSON.
    Show(ShowArgs),
    /// Print the interpolated frame at one progress value.
    Sample(SampleArgs),
    /// Print evenly spaced frames over a playback pass, one JSON object per line.
    Frames(FramesArgs),
    /// Validate a JSON template catalog.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Extra JSON catalog merged over the built-in templates.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Template id.
    #[arg(long)]
    template: String,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Template id.
    #[arg(long)]
    template: String,

    /// Template progress, nominally in [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Playback mode forwarded with the load request.
    #[arg(long, value_enum, default_value_t = ModeChoice::Cinematic)]
    mode: ModeChoice,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Template id.
    #[arg(long)]
    template: String,

    /// Number of frames to emit.
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// Playback duration in seconds.
    #[arg(long, default_value_t = 4.0)]
    duration: f64,

    /// Easing applied to playback progress (linear, in-quad, out-cubic, ...).
    #[arg(long, default_value = "linear")]
    ease: Ease,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// JSON catalog to validate.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeChoice {
    Cinematic,
    Studio,
    Preview,
}

impl From<ModeChoice> for PlaybackMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Cinematic => PlaybackMode::Cinematic,
            ModeChoice::Studio => PlaybackMode::Studio,
            ModeChoice::Preview => PlaybackMode::Preview,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Show(args) => cmd_show(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn load_registry(args: &CatalogArgs) -> anyhow::Result<TemplateRegistry> {
    let mut b = TemplateRegistry::builder();
    b.register_builtin()?;
    if let Some(path) = &args.catalog {
        b.extend_from_path(path)
            .with_context(|| format!("load catalog '{}'", path.display()))?;
    }
    Ok(b.build())
}

fn cmd_list(args: CatalogArgs) -> anyhow::Result<()> {
    let reg = load_registry(&args)?;
    let mut out = std::io::stdout().lock();
    for t in reg.iter() {
        writeln!(out, "{}\t{}\t{} keyframes", t.id, t.name, t.keyframes.len())?;
    }
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let reg = load_registry(&args.catalog)?;
    let t = reg
        .get(&args.template)
        .with_context(|| format!("unknown template '{}'", args.template))?;
    println!("{}", serde_json::to_string_pretty(t)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let reg = load_registry(&args.catalog)?;
    let loader = TemplateLoader::new(&reg);
    let cfg = LoadConfig::new(args.template.clone(), args.mode.into());
    let t = loader
        .load(&cfg)
        .with_context(|| format!("unknown template '{}'", args.template))?;
    let frame = interpolate_frame(&t.keyframes, args.progress);
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let reg = load_registry(&args.catalog)?;
    let t = reg
        .get(&args.template)
        .with_context(|| format!("unknown template '{}'", args.template))?;
    let playback = Playback::new(
        t,
        PlaybackOpts {
            duration_secs: args.duration,
            ease: args.ease,
        },
    )?;

    let mut out = std::io::stdout().lock();
    for frame in playback.frames(args.count) {
        serde_json::to_writer(&mut out, &frame)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let reg = TemplateRegistry::from_path(&args.in_path)
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    eprintln!("ok: {} templates in {}", reg.len(), args.in_path.display());
    Ok(())
}
