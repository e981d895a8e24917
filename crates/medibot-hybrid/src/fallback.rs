use medibot_core::traits::FallbackResponder;
use tracing::debug;

/// Local responder for queries the collection cannot answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedFallback;

impl FallbackResponder for CannedFallback {
    fn respond(&self, query: &str) -> anyhow::Result<String> {
        debug!(query, "answering from canned fallback");
        Ok(format!(
            "I don't have enough data in my medical records to answer this question about \"{}\".\n\
             💡 Suggestion: Try naming specific symptoms or conditions, or consult medical databases.\n\
             ⚠️ For medical concerns, please consult with a healthcare professional.",
            query
        ))
    }
}

/// Apology shown when answering a query fails. `detail` is appended only when set.
pub fn error_response(detail: Option<&str>) -> String {
    let mut out = String::from("❌ Sorry, I encountered an error while processing your request.\n");
    if let Some(detail) = detail {
        out.push_str("Details: ");
        out.push_str(detail);
        out.push('\n');
    }
    out.push_str("⚠️ Please try again or consult with a healthcare professional.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_quotes_the_query() {
        let text = CannedFallback.respond("what is xyzzy").unwrap();
        assert!(text.contains("about \"what is xyzzy\""));
        assert!(text.ends_with("please consult with a healthcare professional."));
    }

    #[test]
    fn error_detail_is_optional() {
        assert!(!error_response(None).contains("Details"));
        assert!(error_response(Some("boom")).contains("Details: boom"));
    }
}
