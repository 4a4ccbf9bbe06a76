//! Word-level tokenization of raw document text.
//!
//! The tokenizer scans the input a character at a time.  Runs of ASCII
//! alphanumerics plus apostrophe, underscore, and hyphen form word tokens and
//! are emitted lowercased; every other non-whitespace character becomes a
//! single-character token of its own.  Whitespace only terminates runs and is
//! never emitted.

/// Returns `true` for characters that extend a word token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\'' | '_' | '-')
}

/// Splits the given text into its ordered token sequence.
///
/// Duplicates are retained and emission order follows the source text.  Any
/// input is accepted; the empty string yields an empty vector.
///
/// ```
/// use sentibayes::tokenize;
///
/// let tokens = tokenize("Don't stop!");
/// assert_eq!(tokens, vec!["don't", "stop", "!"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for c in text.chars() {
        if is_word_char(c) {
            word.push(c);
        } else {
            if !word.is_empty() {
                tokens.push(word.to_lowercase());
                word.clear();
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word.to_lowercase());
    }
    tokens
}
