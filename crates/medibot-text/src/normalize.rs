//! Tokenizer, stop-word filter and suffix stemmer shared by indexing and querying.

/// Function words dropped before stemming.
pub const STOP_WORDS: &[&str] = &[
	"the", "is", "at", "which", "on", "and", "a", "to", "are", "as", "was", "with", "for", "by", "an", "be", "or", "in",
	"that", "have", "it", "not", "of", "you", "he", "she", "they", "we", "i", "me", "my", "your", "his", "her", "their", "our",
];

/// Checked in order; the first suffix that fits wins.
pub const SUFFIXES: &[&str] = &["ing", "ed", "er", "est", "ly", "ion", "tion", "ness", "ment"];

const MIN_TOKEN_LEN: usize = 3;
const MIN_STEM_LEN: usize = 3;

/// Lowercase, strip non-word characters, split, filter and stem `text`.
///
/// Word characters are ASCII letters, digits and `_`; anything else (including
/// non-ASCII letters) separates tokens.
pub fn normalize(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() { c } else { ' ' })
		.collect();
	cleaned
		.split_whitespace()
		.filter(|word| word.len() >= MIN_TOKEN_LEN && !is_stop_word(word))
		.map(stem_word)
		// "forest" stems to "for"
		.filter(|stem| !is_stop_word(stem))
		.collect()
}

pub fn is_stop_word(word: &str) -> bool {
	STOP_WORDS.contains(&word)
}

/// Strip the first matching suffix from [`SUFFIXES`] if at least three
/// characters remain; otherwise return the word unchanged.
pub fn stem_word(word: &str) -> String {
	for suffix in SUFFIXES {
		if word.len() >= suffix.len() + MIN_STEM_LEN {
			if let Some(stem) = word.strip_suffix(suffix) {
				return stem.to_string();
			}
		}
	}
	word.to_string()
}
