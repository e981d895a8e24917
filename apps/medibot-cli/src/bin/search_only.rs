use clap::Parser;
use medibot_cli::{init_tracing, load_assistant, resolve_top_k};
use medibot_core::config::{Config, SearchMode};
use medibot_hybrid::gate;
use medibot_nlp::intent::intent_scores;

/// Print ranked matches, entities and intent for a query without gating.
#[derive(Parser)]
#[command(name = "medibot-search-only", version)]
struct Args {
    query: String,

    /// Number of matches to show; overrides `search.top_k`.
    #[arg(long)]
    top_k: Option<usize>,

    /// Ranker to use (`tfidf` or `keyword`); overrides `search.mode`.
    #[arg(long)]
    mode: Option<SearchMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);
    let top_k = resolve_top_k(args.top_k, settings.search.top_k)?;

    let mode = args.mode.unwrap_or(settings.search.mode);
    let assistant = load_assistant(&config, mode, top_k).await?;
    println!("🔍 medibot-search-only\n==================");
    println!("Query: {}", args.query);
    println!("Mode: {}  Documents: {}", mode, assistant.documents().len());

    let analysis = assistant.analyze(&args.query);
    println!("\n🔍 Found {} matches", analysis.matches.len());
    for (i, m) in analysis.matches.iter().enumerate() {
        println!("  {}. score={:.4}  index={}  name={}", i + 1, m.similarity, m.index, m.document.name);
    }

    println!("\n🏷️ Entities:");
    for (category, terms) in analysis.entities.iter() {
        let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
        println!("  {}: {}", category, terms.join(", "));
    }

    println!("\n🎯 Intent: {} (confidence {:.2})", analysis.intent.intent, analysis.intent.confidence);
    for (intent, score) in intent_scores(&args.query) {
        println!("  {}: {}", intent, score);
    }

    if !analysis.matches.is_empty() {
        let c = analysis.confidence()?;
        let threshold = gate::threshold(analysis.intent.intent);
        println!("\n📊 Confidence: {:.2} (threshold {:.2})", c, threshold);
    }
    Ok(())
}
