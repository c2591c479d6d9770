use anyhow::Result;
use clap::Parser;
use conceptmap::extract::{discover_files, ExtractorRegistry};
use conceptmap::normalize::normalize;
use conceptmap::{match_propositions, serialize_propositions, Config, KnowledgeBase};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propositions")]
#[command(about = "Emit the offline proposition listing for given input")]
struct Args {
    /// Input files or directories (txt, md)
    paths: Vec<PathBuf>,

    /// Inline text to analyze (combined with file content)
    #[arg(short, long)]
    text: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = Config::load()?;

    let registry = ExtractorRegistry::new();
    let mut content = String::new();

    if let Some(text) = &args.text {
        content.push_str(text);
        content.push('\n');
    }

    for input in &args.paths {
        for file in discover_files(input)? {
            let extracted = registry.extract_file(&file);
            if !extracted.is_empty() {
                content.push_str(&extracted);
                content.push('\n');
            }
        }
    }

    if content.trim().is_empty() {
        anyhow::bail!("No input: pass --text and/or file or directory paths");
    }

    let kb = match &config.conceptmap.kb_path {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };

    let outcome = match_propositions(&normalize(&content), &kb);
    if !outcome.matched {
        log::warn!("No known terms detected in the input; emitting the full knowledge base");
    }

    println!("{}", serialize_propositions(&outcome.triples));

    Ok(())
}
