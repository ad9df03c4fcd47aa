//! Offline feedback engine for young English writers.
//!
//! [`analyze`] runs a single deterministic pass over a piece of text and
//! returns a [`FeedbackResponse`] with grammar, vocabulary, structure and
//! praise findings. [`to_items`] flattens that response for display.
//!
//! ```
//! let feedback = writing_coach::analyze("I am go to school");
//! assert!(feedback.grammar.iter().any(|g| g.contains("\"I go\"")));
//! assert_eq!(feedback.praise.len(), 1);
//! ```

use std::collections::HashSet;

use log::{debug, trace};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod items;
pub mod messages;
pub mod remote;
pub mod rules;

pub use error::RemoteError;
pub use items::{to_items, FeedbackItem, ItemKind, Span};
pub use messages::{Affirmation, Praise, PraiseCriteria};
pub use remote::{FeedbackSource, RemoteFeedback, RemoteReply};
pub use rules::{GrammarRule, Misspelling, RuleSet, StructuralCheck, VocabularyRule};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Categorized findings for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub grammar: Vec<String>,
    pub vocabulary: Vec<String>,
    pub structure: Vec<String>,
    pub praise: Vec<String>,
}

impl FeedbackResponse {
    /// True when no category holds a finding.
    pub fn is_empty(&self) -> bool {
        self.finding_count() == 0
    }

    pub fn finding_count(&self) -> usize {
        self.grammar.len() + self.vocabulary.len() + self.structure.len() + self.praise.len()
    }

    pub fn to_items(&self) -> Vec<FeedbackItem> {
        to_items(self)
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub(crate) run_on_min_chars: usize,
    pub(crate) no_terminator_min_chars: usize,
    pub(crate) short_text_max_words: usize,
    pub(crate) long_text_max_words: usize,
    pub(crate) connective_min_sentences: usize,
    pub(crate) connective_words: &'static [&'static str],
    pub(crate) low_variety_min_words: usize,
    pub(crate) low_variety_ratio: f64,
    pub(crate) praise_long_text_chars: usize,
    pub(crate) praise_multi_sentence_segments: usize,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    run_on_min_chars: 300,
    no_terminator_min_chars: 50,
    short_text_max_words: 15,
    long_text_max_words: 100,
    connective_min_sentences: 3,
    connective_words: &["first", "second", "finally"],
    low_variety_min_words: 30,
    low_variety_ratio: 0.6,
    praise_long_text_chars: 100,
    praise_multi_sentence_segments: 3,
};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static LOWERCASE_AFTER_TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+[a-z]").unwrap());

static SHOUTING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{3,}").unwrap());

// ---------------------------------------------------------------------------
// Text profile
// ---------------------------------------------------------------------------

pub(crate) fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Measurements shared by the structural checks and the praise selector.
pub struct TextProfile<'a> {
    pub text: &'a str,
    pub lowercase: String,
    /// Length in chars, not bytes.
    pub char_count: usize,
    /// Words split on single spaces; consecutive spaces yield empty words.
    pub words: Vec<&'a str>,
    /// Non-blank segments between `.`, `!` and `?`.
    pub sentence_count: usize,
    /// Every segment between terminators, blank ones included.
    pub segment_count: usize,
    pub question_marks: usize,
}

impl<'a> TextProfile<'a> {
    pub fn new(text: &'a str) -> Self {
        let segments: Vec<&str> = text.split(is_terminator).collect();
        Self {
            text,
            lowercase: text.to_lowercase(),
            char_count: text.chars().count(),
            words: text.split(' ').collect(),
            sentence_count: segments.iter().filter(|s| !s.trim().is_empty()).count(),
            segment_count: segments.len(),
            question_marks: text.matches('?').count(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Distinct lowercased words over total words.
    pub fn lexical_variety(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let distinct: HashSet<String> = self.words.iter().map(|w| w.to_lowercase()).collect();
        distinct.len() as f64 / self.words.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Supplementary grammar checks
// ---------------------------------------------------------------------------

fn check_mechanics(text: &str, rules: &RuleSet) -> Vec<String> {
    let mut out = Vec::new();

    if !text.chars().last().is_some_and(is_terminator) {
        out.push(
            "Finish your sentence with a period (.), an exclamation mark (!) or a question mark (?)."
                .to_string(),
        );
    }

    if text.chars().next().is_some_and(char::is_lowercase) {
        out.push("A sentence always starts with a capital letter!".to_string());
    }

    if LOWERCASE_AFTER_TERMINATOR_RE.is_match(text) {
        out.push(
            "After a period, exclamation mark or question mark, start the next sentence with a capital letter!"
                .to_string(),
        );
    }

    if let Some(m) = SHOUTING_RE.find(text) {
        out.push(format!(
            "\"{}\" uses a lot of capital letters in a row. Save capitals for the start of sentences and names!",
            m.as_str()
        ));
    }

    for entry in rules.misspellings_in(text) {
        trace!("misspelling `{}` found", entry.wrong);
        out.push(entry.finding());
    }

    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze text with the standard rule tables and the thread-local RNG.
pub fn analyze(text: &str) -> FeedbackResponse {
    analyze_with(text, RuleSet::standard(), &mut rand::rng())
}

/// Analyze text against `rules`, drawing random picks from `rng`.
///
/// Empty or whitespace-only text yields an empty response. Otherwise
/// `praise` holds exactly one entry, and when no other finding fired each
/// of grammar, vocabulary and structure receives its fixed affirmation.
pub fn analyze_with<R: Rng>(text: &str, rules: &RuleSet, rng: &mut R) -> FeedbackResponse {
    let mut feedback = FeedbackResponse::default();

    if text.trim().is_empty() {
        debug!("skipping analysis of blank text");
        return feedback;
    }

    let profile = TextProfile::new(text);

    // 1. Grammar rules
    feedback.grammar.extend(rules.match_grammar(text));
    // 2. Vocabulary rules
    feedback.vocabulary.extend(rules.match_vocabulary(text, rng));
    // 3. Structure
    feedback.structure.extend(rules.match_structure(&profile));
    // 4. Capitalization, punctuation, spelling
    feedback.grammar.extend(check_mechanics(text, rules));

    // 5. Praise
    let criteria =
        PraiseCriteria::from_analysis(&profile, &feedback.grammar, &feedback.vocabulary);
    let praise = criteria.select(rng);
    feedback.praise.push(praise.as_str().to_string());

    // 6. Affirm when nothing else fired
    if feedback.grammar.is_empty()
        && feedback.vocabulary.is_empty()
        && feedback.structure.is_empty()
    {
        let categories = [
            &mut feedback.grammar,
            &mut feedback.vocabulary,
            &mut feedback.structure,
        ];
        for (category, affirmation) in categories.into_iter().zip(Affirmation::ALL) {
            category.push(affirmation.as_str().to_string());
        }
    }

    debug!(
        "analyzed {} chars: {} grammar, {} vocabulary, {} structure, praise {:?}",
        profile.char_count,
        feedback.grammar.len(),
        feedback.vocabulary.len(),
        feedback.structure.len(),
        praise
    );

    feedback
}
