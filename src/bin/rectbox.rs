use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rectbox", version)]
struct Cli {
    /// Log resolution decisions (DEBUG level) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse, evaluate and resolve a document; report the first error.
    Check(CheckArgs),
    /// Print the laid-out page as JSON.
    Resolve(ResolveArgs),
    /// Render the page as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Layout configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file used to measure bodies (monospace metrics when omitted).
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<rectbox::LayoutConfig> {
    match path {
        Some(p) => rectbox::LayoutConfig::load(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(rectbox::LayoutConfig::default()),
    }
}

fn read_source(path: &Path) -> anyhow::Result<rectbox::Source> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read document '{}'", path.display()))?;
    Ok(rectbox::Source::new(text))
}

/// Compile `source`, turning span-carrying errors into `file:line:col` diagnostics.
fn compile(
    path: &Path,
    source: &rectbox::Source,
    config: &rectbox::LayoutConfig,
    measure: &dyn rectbox::Measure,
) -> anyhow::Result<rectbox::Page> {
    rectbox::compile(source.text(), config, measure).map_err(|err| match err.span() {
        Some(span) => {
            let (line, col) = source.line_col(span.start);
            let snippet = source.get(span).unwrap_or_default();
            anyhow::anyhow!("{}:{line}:{col}: {err}\n  | {snippet}", path.display())
        }
        None => anyhow::Error::new(err),
    })
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let source = read_source(&args.in_path)?;
    let measure = rectbox::MonoMeasure::new(config.text_size_pt);
    let page = compile(&args.in_path, &source, &config, &measure)?;
    eprintln!("ok: {} boxes", page.boxes.len());
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let source = read_source(&args.in_path)?;
    let measure = rectbox::MonoMeasure::new(config.text_size_pt);
    let page = compile(&args.in_path, &source, &config, &measure)?;
    let json = serde_json::to_string_pretty(&page).context("serialize page")?;
    println!("{json}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let source = read_source(&args.in_path)?;

    let measure: Box<dyn rectbox::Measure> = match &args.font {
        Some(font) => {
            let bytes =
                std::fs::read(font).with_context(|| format!("read font '{}'", font.display()))?;
            let m = rectbox::FontMeasure::from_font_bytes(bytes, config.text_size_pt as f32)?;
            tracing::debug!(family = m.family(), "measuring with font");
            Box::new(m)
        }
        None => Box::new(rectbox::MonoMeasure::new(config.text_size_pt)),
    };

    let page = compile(&args.in_path, &source, &config, measure.as_ref())?;
    let frame = rectbox::render_page(&page, &config)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
