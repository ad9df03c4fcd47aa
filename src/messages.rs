//! Fixed praise and affirmation messages.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{TextProfile, HP};

/// Encouragement attached to every analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Praise {
    /// Clean grammar in a longer piece of writing
    Polished,
    /// At least one vocabulary suggestion fired
    VocabularyExplorer,
    /// Several sentences
    SentenceVariety,
    HardWork,
    WellBuiltSentences,
    BraveWriter,
    GrowingSkills,
    GreatEffort,
    ExpressingIdeas,
}

impl Praise {
    /// Generic pool used when none of the tiered criteria are met.
    pub const ENCOURAGEMENT: [Praise; 6] = [
        Praise::HardWork,
        Praise::WellBuiltSentences,
        Praise::BraveWriter,
        Praise::GrowingSkills,
        Praise::GreatEffort,
        Praise::ExpressingIdeas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Praise::Polished => {
                "Amazing work! Your grammar is spot on and you wrote a lot. You are a real writer! 🏆"
            }
            Praise::VocabularyExplorer => {
                "You are trying out lots of different words. Keep exploring new vocabulary! 📚"
            }
            Praise::SentenceVariety => {
                "You wrote many sentences, and that makes your story easy to follow! ✍️"
            }
            Praise::HardWork => {
                "Great job! Writing in English isn't easy, and you worked really hard! 🌟"
            }
            Praise::WellBuiltSentences => {
                "Wow! You built your sentences well. Keep practicing and you'll get even better! 💪"
            }
            Praise::BraveWriter => "It's awesome that you are taking on English writing! 👏",
            Praise::GrowingSkills => {
                "Your skills are growing every day! Keep going with confidence! ✨"
            }
            Praise::GreatEffort => "The effort you put into your writing is amazing! 🎉",
            Praise::ExpressingIdeas => "You did a great job sharing your own ideas in English! 📝",
        }
    }

    pub fn is_encouragement(self) -> bool {
        Self::ENCOURAGEMENT.contains(&self)
    }
}

impl fmt::Display for Praise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed positive message for a category with no findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affirmation {
    Grammar,
    Vocabulary,
    Structure,
}

impl Affirmation {
    pub const ALL: [Affirmation; 3] = [
        Affirmation::Grammar,
        Affirmation::Vocabulary,
        Affirmation::Structure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Affirmation::Grammar => "Your grammar is really good! 👍",
            Affirmation::Vocabulary => "You chose your words wonderfully! 📖",
            Affirmation::Structure => "Your writing is nicely organized! 🏗️",
        }
    }
}

impl fmt::Display for Affirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the praise selector looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PraiseCriteria {
    pub grammar_clean: bool,
    pub vocabulary_engaged: bool,
    pub long_text: bool,
    pub multi_sentence: bool,
}

impl PraiseCriteria {
    pub fn from_analysis(profile: &TextProfile<'_>, grammar: &[String], vocabulary: &[String]) -> Self {
        Self {
            grammar_clean: grammar.is_empty(),
            vocabulary_engaged: !vocabulary.is_empty(),
            long_text: profile.char_count > HP.praise_long_text_chars,
            multi_sentence: profile.segment_count > HP.praise_multi_sentence_segments,
        }
    }

    /// First matching tier wins; otherwise a random pick from
    /// [`Praise::ENCOURAGEMENT`].
    pub fn select<R: Rng>(&self, rng: &mut R) -> Praise {
        if self.grammar_clean && self.long_text {
            Praise::Polished
        } else if self.vocabulary_engaged {
            Praise::VocabularyExplorer
        } else if self.multi_sentence {
            Praise::SentenceVariety
        } else {
            Praise::ENCOURAGEMENT[rng.random_range(0..Praise::ENCOURAGEMENT.len())]
        }
    }
}
