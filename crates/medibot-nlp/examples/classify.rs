use medibot_nlp::{classify_intent, extract_entities};

// Print the intent and medical entities detected in a query.
// Usage: cargo run -p medibot-nlp --example classify -- "what causes chest pain"

fn main() {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let intent = classify_intent(&query);
    println!("intent={} confidence={:.1}", intent.intent, intent.confidence);
    for (category, terms) in extract_entities(&query).iter() {
        println!("  {:<12} {:?}", category.as_str(), terms);
    }
}
