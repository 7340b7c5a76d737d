use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use challenger_carousel::{Carousel, CarouselConfig, Deck, Evaluator, FocusTracker, SnapTween};

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Evaluate the event carousel at given scroll offsets")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every card and backdrop at one scroll offset.
    Frame(FrameArgs),
    /// Scroll through a range and report each focused-card change.
    ///
    /// The card focused at `--from` is the starting state, not a change.
    Sweep(SweepArgs),
    /// Compute where a released scroll settles.
    Snap(SnapArgs),
    /// List deck cards, optionally filtered by title or place.
    Deck(DeckArgs),
}

#[derive(Args, Debug)]
struct Inputs {
    /// Carousel config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deck JSON (built-in event deck when omitted).
    #[arg(long)]
    deck: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Horizontal scroll offset.
    #[arg(long, allow_hyphen_values = true)]
    offset: f64,

    /// Print single-line JSON instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    inputs: Inputs,

    #[arg(long, allow_hyphen_values = true)]
    from: f64,

    #[arg(long, allow_hyphen_values = true)]
    to: f64,

    /// Number of intervals; `ticks + 1` offsets are sampled.
    #[arg(long, default_value_t = 60)]
    ticks: u32,
}

#[derive(Args, Debug)]
struct SnapArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Offset at release.
    #[arg(long, allow_hyphen_values = true)]
    offset: f64,

    /// Also report the snap tween's offset this many milliseconds after release.
    #[arg(long)]
    at_ms: Option<u64>,
}

#[derive(Args, Debug)]
struct DeckArgs {
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Case-insensitive substring of a title or place.
    #[arg(long, default_value = "")]
    filter: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Snap(args) => cmd_snap(args),
        Command::Deck(args) => cmd_deck(args),
    }
}

fn load(inputs: &Inputs) -> anyhow::Result<(CarouselConfig, Deck)> {
    let config = match &inputs.config {
        Some(path) => CarouselConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => CarouselConfig::default(),
    };
    let deck = load_deck(inputs.deck.as_deref())?;
    Ok((config, deck))
}

fn load_deck(path: Option<&Path>) -> anyhow::Result<Deck> {
    Ok(match path {
        Some(path) => {
            Deck::from_path(path).with_context(|| format!("load deck '{}'", path.display()))?
        }
        None => Deck::builtin().context("load built-in deck")?,
    })
}

fn finite(name: &str, v: f64) -> anyhow::Result<f64> {
    anyhow::ensure!(v.is_finite(), "--{name} must be a finite number");
    Ok(v)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (config, deck) = load(&args.inputs)?;
    let offset = finite("offset", args.offset)?;
    let frame = Evaluator::eval_frame(&deck, &config, offset)?;

    let mut out = io::stdout().lock();
    if args.compact {
        serde_json::to_writer(&mut out, &frame)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &frame)?;
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct SweepEvent<'a> {
    tick: u32,
    offset: f64,
    from: Option<usize>,
    to: Option<usize>,
    card_id: Option<&'a str>,
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let (config, deck) = load(&args.inputs)?;
    let from = finite("from", args.from)?;
    let to = finite("to", args.to)?;

    let carousel = Carousel::new(&config, deck.len());
    let mut tracker = FocusTracker::new(carousel.focused_index(from));
    let ticks = args.ticks.max(1);

    let mut out = io::stdout().lock();
    let mut changes = 0usize;
    for tick in 1..=ticks {
        let t = f64::from(tick) / f64::from(ticks);
        let offset = carousel.extent().clamp(from + (to - from) * t);
        let Some(change) = tracker.apply(carousel.focused_index(offset)) else {
            continue;
        };
        changes += 1;
        let event = SweepEvent {
            tick,
            offset,
            from: change.from,
            to: change.to,
            card_id: change.to.and_then(|i| deck.get(i)).map(|c| c.id.as_str()),
        };
        serde_json::to_writer(&mut out, &event)?;
        writeln!(out)?;
    }

    tracing::info!(ticks, changes, "sweep finished");
    Ok(())
}

#[derive(Serialize)]
struct SnapReport {
    release_offset: f64,
    index: usize,
    target_offset: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    at_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tween_offset: Option<f64>,
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    let (config, deck) = load(&args.inputs)?;
    let carousel = Carousel::new(&config, deck.len());

    let release = carousel.extent().clamp(finite("offset", args.offset)?);
    let (index, target) = carousel
        .extent()
        .snap_target(release)
        .context("deck has no cards to snap to")?;

    let tween = SnapTween::from_config(release, target, 0, &config.snap);
    let report = SnapReport {
        release_offset: release,
        index,
        target_offset: target,
        at_ms: args.at_ms,
        tween_offset: args.at_ms.map(|ms| tween.sample(ms)),
    };

    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct DeckEntry<'a> {
    index: usize,
    id: &'a str,
    title: &'a str,
    place: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<&'a str>,
}

fn cmd_deck(args: DeckArgs) -> anyhow::Result<()> {
    let deck = load_deck(args.deck.as_deref())?;
    let entries: Vec<DeckEntry<'_>> = deck
        .filter(&args.filter)
        .into_iter()
        .map(|(index, card)| DeckEntry {
            index,
            id: &card.id,
            title: &card.title,
            place: &card.place,
            badge: card.badge.as_deref(),
        })
        .collect();

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &entries)?;
    writeln!(out)?;
    Ok(())
}
