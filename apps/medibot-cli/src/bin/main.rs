use std::io::{self, BufRead, Write};

use clap::Parser;
use medibot_cli::{init_tracing, load_assistant, resolve_top_k};
use medibot_core::config::{Config, SearchMode};
use medibot_hybrid::{error_response, Assistant};
use tracing::{error, warn};

const GREETING: &str = "Hello! I'm MEDIBOT, your medical information assistant. I can help answer questions about \
medical conditions, symptoms, and treatments based on my medical database.\n\
⚠️ Disclaimer: This chatbot is for educational purposes only and not a substitute for professional medical \
diagnosis or treatment.";

/// Answer medical questions from the local condition dataset.
#[derive(Parser)]
#[command(name = "medibot", version)]
struct Cli {
    /// Question to answer. Starts an interactive session when omitted.
    query: Option<String>,

    /// Print responses as JSON.
    #[arg(long)]
    json: bool,

    /// Ranker to use (`tfidf` or `keyword`); overrides `search.mode`.
    #[arg(long)]
    mode: Option<SearchMode>,

    /// Number of matches to consider; overrides `search.top_k`.
    #[arg(long)]
    top_k: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);

    let top_k = resolve_top_k(cli.top_k, settings.search.top_k)?;
    if !settings.fallback.use_local_only {
        warn!("no remote responder is available; answering locally");
    }
    let mode = cli.mode.unwrap_or(settings.search.mode);
    let assistant = load_assistant(&config, mode, top_k).await?;
    let show_errors = settings.fallback.show_errors;

    match cli.query {
        Some(query) => answer(&assistant, &query, cli.json, show_errors),
        None => interactive(&assistant, cli.json, show_errors)?,
    }
    Ok(())
}

fn answer(assistant: &Assistant, query: &str, json: bool, show_errors: bool) {
    match assistant.respond(query) {
        Ok(None) => {}
        Ok(Some(response)) if json => match serde_json::to_string_pretty(&response) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error encoding response: {}", e),
        },
        Ok(Some(response)) => println!("{}\n", response),
        Err(e) => {
            error!(error = %e, "failed to answer query");
            let detail = e.to_string();
            println!("{}\n", error_response(show_errors.then_some(detail.as_str())));
        }
    }
}

fn interactive(assistant: &Assistant, json: bool, show_errors: bool) -> anyhow::Result<()> {
    println!("{}\n", GREETING);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("You: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => println!("{}\n", GREETING),
            query => answer(assistant, query, json, show_errors),
        }
    }
    Ok(())
}
