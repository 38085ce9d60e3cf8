mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pinpoint_core::{ConfigLoader, EngineConfig, SelectorEngine};
use pinpoint_dom::{Document, NodeId};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pinpoint", version, about = "Synthesize unique CSS selectors for page objects")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (defaults to ./pinpoint.yaml, then ~/.pinpoint/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize selectors for every element matched by a CSS query
    Select {
        /// Markup file, or '-' for stdin
        file: PathBuf,
        /// CSS query picking the target elements
        #[arg(long)]
        target: String,
        #[arg(long)]
        json: bool,
    },
    /// Synthesize a selector for every element in the document
    Scan {
        /// Markup file, or '-' for stdin
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show what each strategy makes of the first target
    Explain {
        /// Markup file, or '-' for stdin
        file: PathBuf,
        #[arg(long)]
        target: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let engine: SelectorEngine<Document> = SelectorEngine::new(&config);

    match args.command {
        Command::Select { file, target, json } => {
            let doc = load_document(&file)?;
            let targets = find_targets(&doc, &target)?;
            let results: Vec<_> = targets
                .into_iter()
                .map(|node| (node, engine.synthesize(&doc, node)))
                .collect();
            print!("{}", output::render_syntheses(&doc, &results, json)?);
        }
        Command::Scan { file, json } => {
            let doc = load_document(&file)?;
            let results: Vec<_> = doc
                .elements()
                .into_iter()
                .map(|node| (node, engine.synthesize(&doc, node)))
                .collect();
            print!("{}", output::render_syntheses(&doc, &results, json)?);
        }
        Command::Explain { file, target } => {
            let doc = load_document(&file)?;
            let node = find_targets(&doc, &target)?
                .into_iter()
                .next()
                .with_context(|| format!("No element matches '{}'", target))?;
            print!("{}", output::render_reports(&engine.explain(&doc, node)));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => ConfigLoader::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => ConfigLoader::load_default().context("Failed to load default config"),
    }
}

fn load_document(file: &Path) -> Result<Document> {
    let markup = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markup from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let doc = Document::parse(&markup)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    tracing::info!("Parsed {} elements from {}", doc.elements().len(), file.display());
    Ok(doc)
}

fn find_targets(doc: &Document, target: &str) -> Result<Vec<NodeId>> {
    let targets = doc
        .query_selector_all(target)
        .with_context(|| format!("Bad target query '{}'", target))?;
    if targets.is_empty() {
        tracing::warn!("Target query '{}' matched nothing", target);
    }
    Ok(targets)
}
