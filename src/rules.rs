//! Rule tables and the matchers that apply them.

use log::trace;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::{is_terminator, TextProfile, HP};

// ---------------------------------------------------------------------------
// Rule records
// ---------------------------------------------------------------------------

/// A word-pattern grammar rule with a single correction.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    pub name: &'static str,
    pattern: Regex,
    pub suggestion: &'static str,
    pub explanation: &'static str,
}

impl GrammarRule {
    fn new(phrase: &'static str, suggestion: &'static str, explanation: &'static str) -> Self {
        Self {
            name: phrase,
            pattern: word_pattern(phrase),
            suggestion,
            explanation,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn finding(&self) -> String {
        format!("{} Try \"{}\" instead!", self.explanation, self.suggestion)
    }
}

/// A plain word with livelier alternatives.
#[derive(Debug, Clone)]
pub struct VocabularyRule {
    pub word: &'static str,
    pattern: Regex,
    pub suggestions: &'static [&'static str],
    pub explanation: &'static str,
}

impl VocabularyRule {
    fn new(
        word: &'static str,
        suggestions: &'static [&'static str],
        explanation: &'static str,
    ) -> Self {
        Self {
            word,
            pattern: word_pattern(word),
            suggestions,
            explanation,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn finding<R: Rng>(&self, rng: &mut R) -> String {
        let choice = self.suggestions[rng.random_range(0..self.suggestions.len())];
        format!("{} How about a word like \"{choice}\"?", self.explanation)
    }
}

/// A whole-text heuristic about organization.
pub struct StructuralCheck {
    pub name: &'static str,
    predicate: fn(&TextProfile<'_>) -> bool,
    pub suggestion: &'static str,
    pub explanation: &'static str,
}

impl StructuralCheck {
    pub fn applies(&self, profile: &TextProfile<'_>) -> bool {
        (self.predicate)(profile)
    }
}

impl std::fmt::Debug for StructuralCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuralCheck")
            .field("name", &self.name)
            .field("suggestion", &self.suggestion)
            .finish_non_exhaustive()
    }
}

/// A commonly misspelled word and its correct spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misspelling {
    pub wrong: &'static str,
    pub right: &'static str,
}

impl Misspelling {
    pub fn finding(&self) -> String {
        format!(
            "\"{}\" is spelled \"{}\". This one is tricky, so watch out for it!",
            self.wrong, self.right
        )
    }
}

fn word_pattern(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap()
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

const APOSTROPHE: &str = "Short forms like this need an apostrophe (')!";

fn grammar_table() -> Vec<GrammarRule> {
    vec![
        GrammarRule::new(
            "i am go",
            "I go",
            "\"am\" and \"go\" can't be used together. Use \"I go\" or \"I am going\"!",
        ),
        GrammarRule::new(
            "i like very much",
            "I like it very much",
            "\"very much\" usually comes at the end of the sentence.",
        ),
        GrammarRule::new("he are", "he is", "With \"he\", we use \"is\"!"),
        GrammarRule::new("she are", "she is", "With \"she\", we use \"is\"!"),
        GrammarRule::new("it are", "it is", "With \"it\", we use \"is\"!"),
        GrammarRule::new("they is", "they are", "With \"they\", we use \"are\"!"),
        GrammarRule::new("we is", "we are", "With \"we\", we use \"are\"!"),
        GrammarRule::new("i is", "I am", "With \"I\", we use \"am\"!"),
        GrammarRule::new(
            "he don't",
            "he doesn't",
            "With \"he\", we say \"doesn't\" instead of \"don't\"!",
        ),
        GrammarRule::new(
            "she don't",
            "she doesn't",
            "With \"she\", we say \"doesn't\" instead of \"don't\"!",
        ),
        GrammarRule::new("dont", "don't", APOSTROPHE),
        GrammarRule::new("cant", "can't", APOSTROPHE),
        GrammarRule::new("didnt", "didn't", APOSTROPHE),
        GrammarRule::new("doesnt", "doesn't", APOSTROPHE),
        GrammarRule::new("isnt", "isn't", APOSTROPHE),
        GrammarRule::new(
            "more better",
            "better",
            "\"better\" already means \"more good\", so \"more\" is not needed.",
        ),
    ]
}

fn vocabulary_table() -> Vec<VocabularyRule> {
    vec![
        VocabularyRule::new(
            "good",
            &["great", "excellent", "wonderful", "amazing", "fantastic"],
            "Instead of \"good\", try a more exciting word!",
        ),
        VocabularyRule::new(
            "big",
            &["huge", "enormous", "gigantic", "massive"],
            "Instead of \"big\", try a stronger word!",
        ),
        VocabularyRule::new(
            "nice",
            &["lovely", "brilliant", "awesome", "delightful"],
            "Instead of \"nice\", try a livelier word!",
        ),
        VocabularyRule::new(
            "fun",
            &["exciting", "enjoyable", "thrilling", "entertaining"],
            "Instead of \"fun\", try a more specific word!",
        ),
        VocabularyRule::new(
            "bad",
            &["terrible", "awful", "dreadful", "horrible"],
            "Instead of \"bad\", try a word that shows how bad it was!",
        ),
        VocabularyRule::new(
            "small",
            &["tiny", "little", "miniature", "petite"],
            "Instead of \"small\", try a more colorful word!",
        ),
    ]
}

fn structural_table() -> Vec<StructuralCheck> {
    vec![
        StructuralCheck {
            name: "long_run_on",
            predicate: |p| p.char_count > HP.run_on_min_chars && !p.text.contains('\n'),
            suggestion: "Your writing is getting long! How about splitting it into paragraphs by topic?",
            explanation: "Long writing is easier to read when it is split into paragraphs.",
        },
        StructuralCheck {
            name: "no_terminator",
            predicate: |p| {
                !p.text.contains(is_terminator) && p.char_count > HP.no_terminator_min_chars
            },
            suggestion: "Use periods (.), exclamation marks (!) or question marks (?) to split your sentences!",
            explanation: "Sentences that end clearly are easier to follow.",
        },
        StructuralCheck {
            name: "too_short",
            predicate: |p| p.word_count() < HP.short_text_max_words,
            suggestion: "Can you tell us more? Try adding some details!",
            explanation: "Adding more details makes your writing more interesting.",
        },
        StructuralCheck {
            name: "too_long",
            predicate: |p| p.word_count() > HP.long_text_max_words,
            suggestion: "You wrote a lot, great job! Try to make your most important points stand out.",
            explanation: "Readers remember the key points best when they are easy to spot.",
        },
        StructuralCheck {
            name: "missing_connectives",
            predicate: |p| {
                p.sentence_count >= HP.connective_min_sentences
                    && !HP.connective_words.iter().any(|w| p.lowercase.contains(*w))
            },
            suggestion: "Try linking words like \"first\", \"second\" and \"finally\" to connect your ideas!",
            explanation: "Linking words help readers follow the order of your ideas.",
        },
        StructuralCheck {
            name: "question_heavy",
            predicate: |p| p.question_marks as f64 > p.sentence_count as f64 / 2.0,
            suggestion: "You asked lots of questions! Try answering some of them too.",
            explanation: "Answers share what you think, not just what you wonder.",
        },
        StructuralCheck {
            name: "low_variety",
            predicate: |p| {
                p.word_count() > HP.low_variety_min_words
                    && p.lexical_variety() < HP.low_variety_ratio
            },
            suggestion: "Some words appear again and again. Try using different words to say the same thing!",
            explanation: "Different words keep your writing fresh.",
        },
    ]
}

const MISSPELLINGS: &[Misspelling] = &[
    Misspelling { wrong: "recieve", right: "receive" },
    Misspelling { wrong: "definately", right: "definitely" },
    Misspelling { wrong: "seperate", right: "separate" },
    Misspelling { wrong: "occured", right: "occurred" },
    Misspelling { wrong: "neccessary", right: "necessary" },
    Misspelling { wrong: "untill", right: "until" },
    Misspelling { wrong: "wierd", right: "weird" },
    Misspelling { wrong: "beleive", right: "believe" },
    Misspelling { wrong: "freind", right: "friend" },
    Misspelling { wrong: "becuase", right: "because" },
    Misspelling { wrong: "tommorow", right: "tomorrow" },
];

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

static STANDARD: Lazy<RuleSet> = Lazy::new(RuleSet::new);

/// The ordered rule tables for every feedback category.
#[derive(Debug)]
pub struct RuleSet {
    grammar: Vec<GrammarRule>,
    vocabulary: Vec<VocabularyRule>,
    structural: Vec<StructuralCheck>,
    misspellings: Vec<Misspelling>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// Build the standard tables. Prefer [`RuleSet::standard`] unless a
    /// separate instance is needed.
    pub fn new() -> Self {
        Self {
            grammar: grammar_table(),
            vocabulary: vocabulary_table(),
            structural: structural_table(),
            misspellings: MISSPELLINGS.to_vec(),
        }
    }

    /// The process-wide tables, built on first use.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn grammar(&self) -> &[GrammarRule] {
        &self.grammar
    }

    pub fn vocabulary(&self) -> &[VocabularyRule] {
        &self.vocabulary
    }

    pub fn structural(&self) -> &[StructuralCheck] {
        &self.structural
    }

    pub fn misspellings(&self) -> &[Misspelling] {
        &self.misspellings
    }

    pub fn structural_check(&self, name: &str) -> Option<&StructuralCheck> {
        self.structural.iter().find(|c| c.name == name)
    }

    /// One finding per grammar rule that matches anywhere, in table order.
    pub fn match_grammar(&self, text: &str) -> Vec<String> {
        self.grammar
            .iter()
            .filter(|rule| rule.is_match(text))
            .inspect(|rule| trace!("grammar rule `{}` matched", rule.name))
            .map(GrammarRule::finding)
            .collect()
    }

    /// One finding per vocabulary rule that matches, each with a random pick
    /// from its suggestions.
    pub fn match_vocabulary<R: Rng>(&self, text: &str, rng: &mut R) -> Vec<String> {
        let mut out = Vec::new();
        for rule in &self.vocabulary {
            if rule.is_match(text) {
                trace!("vocabulary rule `{}` matched", rule.word);
                out.push(rule.finding(rng));
            }
        }
        out
    }

    /// Suggestions from every structural check that applies.
    pub fn match_structure(&self, profile: &TextProfile<'_>) -> Vec<String> {
        self.structural
            .iter()
            .filter(|check| check.applies(profile))
            .inspect(|check| trace!("structural check `{}` applies", check.name))
            .map(|check| check.suggestion.to_string())
            .collect()
    }

    /// Watch-list entries whose misspelling appears in `text`, ignoring case.
    pub fn misspellings_in<'s>(&'s self, text: &str) -> impl Iterator<Item = &'s Misspelling> {
        let lowercase = text.to_lowercase();
        self.misspellings
            .iter()
            .filter(move |m| lowercase.contains(m.wrong))
    }
}
