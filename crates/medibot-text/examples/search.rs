use std::env;
use std::path::PathBuf;

use medibot_core::dataset::parse_dataset;
use medibot_text::{rank, VectorSpace};

// Rank the bundled dataset against a query and print the TF-IDF matches.
// Usage:
//   cargo run -p medibot-text --example search -- "your query" \
//     [--data ../../data/medical_data.json] [--limit 3]

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: cargo run -p medibot-text --example search -- <query> [--data FILE] [--limit N]");
        std::process::exit(1);
    }
    let mut query = String::new();
    let mut data_file: Option<PathBuf> = None;
    let mut limit: usize = 3;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                if i + 1 >= args.len() { eprintln!("--data requires a path"); std::process::exit(2); }
                data_file = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "--limit" => {
                if i + 1 >= args.len() { eprintln!("--limit requires a number"); std::process::exit(2); }
                limit = args[i + 1].parse().unwrap_or(limit);
                i += 2; continue;
            }
            other => {
                if !query.is_empty() { query.push(' '); }
                query.push_str(other);
            }
        }
        i += 1;
    }

    let data_file = data_file.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/medical_data.json")
    });
    let documents = parse_dataset(&std::fs::read_to_string(&data_file)?)?;
    let space = VectorSpace::build(&documents);
    println!("Indexed {} documents, vocabulary {} terms", space.len(), space.vocabulary_size());

    let matches = rank(&space, &query, &documents, limit);
    if matches.is_empty() { println!("No match above the relevance floor for {:?}", query); }
    for (n, m) in matches.iter().enumerate() {
        println!("  {}. {:<28} similarity={:.4}", n + 1, m.document.name, m.similarity);
    }
    Ok(())
}
