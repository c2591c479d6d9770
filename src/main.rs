use anyhow::Result;
use clap::Parser;
use conceptmap::completion::CompletionClient;
use conceptmap::extract::{discover_files, ExtractorRegistry};
use conceptmap::graph::Orientation;
use conceptmap::normalize::normalize;
use conceptmap::{compile_graph, match_propositions, parse_propositions};
use conceptmap::{serialize_propositions, Config, KnowledgeBase};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "conceptmap")]
#[command(about = "Compile study material into a styled concept-map graph")]
struct Args {
    /// Input files or directories (txt, md)
    paths: Vec<PathBuf>,

    /// Inline text to analyze (combined with file content)
    #[arg(short, long)]
    text: Option<String>,

    /// Graph orientation: retrato/portrait or paisagem/landscape
    #[arg(long)]
    orientation: Option<String>,

    /// Graphviz layout engine (dot, neato, fdp, sfdp, twopi, circo)
    #[arg(long)]
    engine: Option<String>,

    /// Output path for the DOT document (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit the compiled graph structure as JSON instead of DOT
    #[arg(long)]
    json: bool,

    /// Also render an image next to the DOT output (png, svg or pdf)
    #[arg(long)]
    render: Option<String>,

    /// Generate propositions with the AI collaborator instead of the
    /// offline knowledge base matcher (requires [completion] enabled)
    #[arg(long)]
    ai: bool,

    /// Study objectives passed to the AI collaborator
    #[arg(long, default_value = "")]
    objectives: String,

    /// Bibliographic references passed to the AI collaborator
    #[arg(long, default_value = "")]
    references: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let content = gather_content(&args)?;
    if content.trim().is_empty() {
        anyhow::bail!("No input: pass --text and/or file or directory paths");
    }

    // Proposition source: AI collaborator or the offline matcher
    let propositions = if args.ai {
        generate_ai_propositions(&config, &args, &content).await?
    } else {
        generate_offline_propositions(&config, &content)?
    };

    let triples = parse_propositions(&propositions);
    log::info!("Parsed {} proposition(s)", triples.len());

    let orientation: Orientation = match &args.orientation {
        Some(value) => value
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.orientation(),
    };
    let engine = args
        .engine
        .clone()
        .unwrap_or_else(|| config.render.engine.clone());

    let graph = compile_graph(&triples, orientation, Some(engine.clone()));
    log::info!(
        "Compiled graph: {} cluster(s), {} node(s), {} edge(s)",
        graph.clusters.len(),
        graph.node_count(),
        graph.edge_count()
    );

    let document = if args.json {
        serde_json::to_string_pretty(&graph)?
    } else {
        graph.to_dot()
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &document)?;
            log::info!("Graph written to {}", path.display());
        }
        None => {
            println!("{}", document);
        }
    }

    if let Some(format) = &args.render {
        // The renderer always consumes DOT, whatever the text artifact was
        render_image(&graph.to_dot(), format, &engine, args.out.as_deref())?;
    }

    Ok(())
}

/// Assemble analysis content from inline text and extracted files.
fn gather_content(args: &Args) -> Result<String> {
    let registry = ExtractorRegistry::new();
    let mut content = String::new();

    if let Some(text) = &args.text {
        content.push_str(text);
        content.push('\n');
    }

    for input in &args.paths {
        for file in discover_files(input)? {
            log::info!("Extracting text from {}", file.display());
            let extracted = registry.extract_file(&file);
            if !extracted.is_empty() {
                content.push_str(&extracted);
                content.push('\n');
            }
        }
    }

    Ok(content)
}

/// Offline path: normalize, match against the knowledge base.
fn generate_offline_propositions(config: &Config, content: &str) -> Result<String> {
    let kb = match &config.conceptmap.kb_path {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };

    let outcome = match_propositions(&normalize(content), &kb);
    if !outcome.matched {
        log::warn!("No known terms detected in the input; emitting the full knowledge base as an example map");
    }

    Ok(serialize_propositions(&outcome.triples))
}

/// AI path: send the material to the completion collaborator.
async fn generate_ai_propositions(config: &Config, args: &Args, content: &str) -> Result<String> {
    if !config.completion.enabled {
        anyhow::bail!(
            "--ai requires [completion] enabled = true in config.toml (and {} set)",
            config.completion.api_key_env
        );
    }

    let api_key = std::env::var(&config.completion.api_key_env).map_err(|_| {
        anyhow::anyhow!(
            "Environment variable {} not set. Set it in your .env file or as an environment variable.",
            config.completion.api_key_env
        )
    })?;

    let client = CompletionClient::new(
        config.completion.endpoint.clone(),
        api_key,
        config.completion.model.clone(),
        config.completion.timeout_secs,
        config.completion.temperature,
        config.completion.max_tokens,
    );

    let reply = client
        .generate_propositions(
            &args.objectives,
            &args.references,
            content,
            config.completion.max_retries,
        )
        .await?;

    Ok(reply)
}

/// Render the DOT to an image next to the DOT output, degrading to a
/// hint when Graphviz is not installed.
fn render_image(
    dot: &str,
    format: &str,
    engine: &str,
    out: Option<&std::path::Path>,
) -> Result<()> {
    if !conceptmap::render::engine_available() {
        log::warn!(
            "Skipping {} render: Graphviz not installed. The DOT document was still produced; install Graphviz to enable image export.",
            format
        );
        return Ok(());
    }

    let bytes = conceptmap::render::render(dot, format, engine)?;
    let image_path = match out {
        Some(path) => path.with_extension(format),
        None => PathBuf::from(format!("conceptmap.{}", format)),
    };
    std::fs::write(&image_path, bytes)?;
    log::info!("Rendered {} to {}", format, image_path.display());

    Ok(())
}
