use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use folio::{
    AnimationRange, BlogIndex, CommandRegistry, FolioConfig, Progress, StaggerOrchestrator,
    StaticContentSource,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List palette commands as JSON, optionally filtered.
    Commands(CommandsArgs),
    /// Print stagger windows and sampled reveal styles as JSON.
    Stagger(StaggerArgs),
    /// Map one progress value through an input/output range.
    Map(MapArgs),
    /// Fetch, filter and normalize blog posts, printed as JSON.
    Posts(PostsArgs),
}

#[derive(Parser, Debug)]
struct CommandsArgs {
    /// Case-insensitive filter over labels and ids.
    #[arg(long, default_value = "")]
    query: String,

    /// Site configuration JSON (for external links).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StaggerArgs {
    /// Number of items in the group.
    #[arg(long)]
    items: usize,

    /// Fraction of the parent range each item occupies, in (0, 1].
    #[arg(long, default_value_t = folio::animation::stagger::DEFAULT_OVERLAP)]
    overlap: f64,

    /// Number of progress steps to sample between 0 and 1.
    #[arg(long, default_value_t = 4)]
    steps: u32,

    /// Vertical travel of each item in px.
    #[arg(long, default_value_t = 40.0)]
    distance: f64,
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Comma-separated, strictly increasing input stops.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    input: Vec<f64>,

    /// Comma-separated output stops, one per input stop.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    output: Vec<f64>,

    /// Progress to map.
    #[arg(long, allow_hyphen_values = true)]
    at: f64,
}

#[derive(Parser, Debug)]
struct PostsArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content endpoint base URL (overrides config and environment).
    #[arg(long, requires = "table")]
    endpoint: Option<String>,

    /// Content table id (overrides config and environment).
    #[arg(long, requires = "endpoint")]
    table: Option<String>,

    /// Read rows from a local JSON file instead of the network.
    #[arg(long, conflicts_with_all = ["endpoint", "table"])]
    rows: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Commands(args) => cmd_commands(args),
        Command::Stagger(args) => cmd_stagger(args),
        Command::Map(args) => cmd_map(args),
        Command::Posts(args) => cmd_posts(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FolioConfig> {
    let mut config = match path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => FolioConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    println!("{text}");
    Ok(())
}

fn cmd_commands(args: CommandsArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let registry = CommandRegistry::standard(&config.site.links);
    print_json(&registry.filter(&args.query))
}

#[derive(serde::Serialize)]
struct StaggerSample {
    progress: f64,
    frames: Vec<folio::StyleFrame>,
}

fn cmd_stagger(args: StaggerArgs) -> anyhow::Result<()> {
    let steps = args.steps.max(1);
    let group = StaggerOrchestrator::fade_up(
        args.items,
        args.overlap,
        args.distance,
        folio::SpringConfig::default(),
    )
    .context("build stagger group")?;

    let samples: Vec<StaggerSample> = (0..=steps)
        .map(|step| {
            let progress = Progress::new(f64::from(step) / f64::from(steps));
            StaggerSample {
                progress: progress.get(),
                frames: (0..group.len())
                    .filter_map(|i| group.target(i, progress))
                    .collect(),
            }
        })
        .collect();

    print_json(&serde_json::json!({
        "slices": group.slices().collect::<Vec<_>>(),
        "samples": samples,
    }))
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let range = AnimationRange::new(args.input, args.output).context("build animation range")?;
    println!("{}", range.map(args.at));
    Ok(())
}

fn cmd_posts(args: PostsArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let (Some(endpoint), Some(table)) = (args.endpoint, args.table) {
        config.content.endpoint = endpoint;
        config.content.table_id = table;
    }

    let index = if let Some(path) = &args.rows {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read rows '{}'", path.display()))?;
        let source = StaticContentSource::from_json(&text)
            .with_context(|| format!("parse rows '{}'", path.display()))?;
        BlogIndex::load(&source)
    } else {
        remote_index(&config)?
    };
    print_json(&index.posts)
}

#[cfg(feature = "http")]
fn remote_index(config: &FolioConfig) -> anyhow::Result<BlogIndex> {
    if !config.content.is_configured() {
        tracing::warn!("no content endpoint configured, showing no posts");
        return Ok(BlogIndex::default());
    }
    let source = folio::HttpContentSource::new(
        &config.content.endpoint,
        &config.content.table_id,
        config.content.timeout(),
    )
    .context("create content client")?;
    Ok(BlogIndex::load(&source))
}

#[cfg(not(feature = "http"))]
fn remote_index(_config: &FolioConfig) -> anyhow::Result<BlogIndex> {
    tracing::warn!("built without the `http` feature, showing no posts");
    Ok(BlogIndex::default())
}
