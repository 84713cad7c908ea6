/// One estimated error per this many words.
const WORDS_PER_ERROR: usize = 100;
/// Estimates above this trigger the grammar warning.
const WARNING_THRESHOLD: usize = 3;

pub const GRAMMAR_WARNING: &str = "There are some grammatical errors in your resume.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarReport {
    pub message: Option<&'static str>,
    pub error_count: usize,
}

/// Word-count heuristic: `error_count = words / 100`. No actual grammar checking is done.
pub fn analyze_grammar(text: &str) -> GrammarReport {
    let error_count = count_words(text) / WORDS_PER_ERROR;
    let message = (error_count > WARNING_THRESHOLD).then_some(GRAMMAR_WARNING);
    GrammarReport {
        message,
        error_count,
    }
}

/// Splits on Unicode whitespace plus the ASCII separators U+001C..=U+001F,
/// which PDF text extraction can emit between words.
fn count_words(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .filter(|word| !word.is_empty())
        .count()
}
