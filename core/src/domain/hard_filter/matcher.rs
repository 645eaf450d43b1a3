use regex::{Regex, RegexBuilder};

/// Case-insensitive whole-word matcher for a single term.
///
/// `tea` matches `"iced tea"` but not `"steak"`; multi-word terms match as a
/// phrase delimited by word boundaries.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    pub fn new(term: &str) -> Option<Self> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return None;
        }

        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&term)))
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(Self { term, pattern })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

pub fn matches_whole_word(text: &str, term: &str) -> bool {
    TermMatcher::new(term).is_some_and(|m| m.is_match(text))
}
