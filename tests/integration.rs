use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use writing_coach::{
    analyze, analyze_with, to_items, Affirmation, FeedbackItem, FeedbackResponse, ItemKind,
    Praise, PraiseCriteria, RuleSet, Span,
};

// Clean on every check: 17 words, one sentence, under 100 chars.
const CLEAN: &str =
    "My family visited the quiet lake near our house last weekend and we watched the ducks swim.";

fn structure_suggestion(name: &str) -> &'static str {
    RuleSet::standard()
        .structural_check(name)
        .unwrap_or_else(|| panic!("missing structural check {name}"))
        .suggestion
}

fn quoted_choice(finding: &str) -> &str {
    finding
        .split("like \"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
}

#[test]
fn blank_text_returns_empty_response() {
    for text in ["", "   ", "\n\t "] {
        let result = analyze(text);
        assert_eq!(result, FeedbackResponse::default());
        assert!(result.is_empty());
    }
}

#[test]
fn clean_text_gets_affirmations() {
    let result = analyze(CLEAN);
    assert_eq!(result.grammar, vec![Affirmation::Grammar.as_str().to_string()]);
    assert_eq!(
        result.vocabulary,
        vec![Affirmation::Vocabulary.as_str().to_string()]
    );
    assert_eq!(
        result.structure,
        vec![Affirmation::Structure.as_str().to_string()]
    );
    assert_eq!(result.praise.len(), 1);
    assert!(Praise::ENCOURAGEMENT
        .iter()
        .any(|p| p.as_str() == result.praise[0]));
}

#[test]
fn detects_i_am_go() {
    let result = analyze("I am go to school");
    assert!(
        result.grammar.iter().any(|g| g.contains("\"I go\"")),
        "grammar: {:?}",
        result.grammar
    );
}

#[test]
fn detects_he_are() {
    let result = analyze("he are happy");
    assert!(result.grammar.iter().any(|g| g.contains("\"he is\"")));
}

#[test]
fn grammar_rules_are_case_insensitive() {
    let result = analyze("They Is at the park.");
    assert!(result.grammar.iter().any(|g| g.contains("\"they are\"")));
}

#[test]
fn contraction_rule_respects_word_boundaries() {
    let result = analyze("I cannot come to the party today.");
    assert!(!result.grammar.iter().any(|g| g.contains("\"can't\"")));

    let result = analyze("I cant come to the party today.");
    assert!(result.grammar.iter().any(|g| g.contains("\"can't\"")));
}

#[test]
fn grammar_findings_follow_table_order() {
    let result = analyze("she are sad and I dont know why.");
    let she = result.grammar.iter().position(|g| g.contains("\"she is\""));
    let dont = result.grammar.iter().position(|g| g.contains("\"don't\""));
    assert!(she.is_some() && dont.is_some());
    assert!(she < dont);
}

#[test]
fn good_suggests_from_candidate_list() {
    let good = RuleSet::standard()
        .vocabulary()
        .iter()
        .find(|r| r.word == "good")
        .unwrap();
    for _ in 0..20 {
        let result = analyze("good food");
        assert_eq!(result.vocabulary.len(), 1);
        let choice = quoted_choice(&result.vocabulary[0]);
        assert!(good.suggestions.contains(&choice), "unexpected pick {choice}");
    }
}

#[test]
fn vocabulary_rule_does_not_fire_inside_words() {
    let result = analyze("The goodness of the bigger funnel.");
    assert!(!result
        .vocabulary
        .iter()
        .any(|v| v.contains("Instead of")));
}

#[test]
fn seeded_rng_is_reproducible() {
    let text = "It was a good day with a big cake and nice friends";
    let a = analyze_with(text, RuleSet::standard(), &mut StdRng::seed_from_u64(7));
    let b = analyze_with(text, RuleSet::standard(), &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.vocabulary.len(), 3);
}

#[test]
fn long_run_on_needs_no_line_break() {
    let base = "We walked to the park and played on the swings. ".repeat(10);
    let text = &base[..350];
    let run_on = structure_suggestion("long_run_on");

    let result = analyze(text);
    assert!(result.structure.iter().any(|s| s == run_on));

    let mut with_break = text.to_string();
    with_break.replace_range(100..101, "\n");
    let result = analyze(&with_break);
    assert!(!result.structure.iter().any(|s| s == run_on));
}

#[test]
fn missing_terminators_in_long_text() {
    let text = "we went to the zoo and saw lions and tigers and bears and a giraffe";
    let result = analyze(text);
    assert!(result
        .structure
        .contains(&structure_suggestion("no_terminator").to_string()));
}

#[test]
fn short_text_asks_for_more() {
    let result = analyze("I like cats.");
    assert!(result
        .structure
        .contains(&structure_suggestion("too_short").to_string()));
}

#[test]
fn very_long_text_asks_for_key_points() {
    let text = format!(
        "{}\n{}",
        "My dog runs in the garden every morning. ".repeat(8),
        "My cat sleeps on the warm sofa all day. ".repeat(8)
    );
    let result = analyze(&text);
    assert!(result
        .structure
        .contains(&structure_suggestion("too_long").to_string()));
}

#[test]
fn connective_words_suppress_suggestion() {
    let connectives = structure_suggestion("missing_connectives").to_string();

    let result = analyze("I woke up. I ate toast. I went to school.");
    assert!(result.structure.contains(&connectives));

    let result = analyze("First, I woke up. Then I ate toast. Finally, I went to school.");
    assert!(!result.structure.contains(&connectives));
}

#[test]
fn question_heavy_text() {
    let result = analyze("Why is the sky blue? Why is grass green? I wonder.");
    assert!(result
        .structure
        .contains(&structure_suggestion("question_heavy").to_string()));
}

#[test]
fn repeated_words_lower_variety() {
    let text = "the cat and the dog and the cat and the dog ".repeat(4);
    let result = analyze(&text);
    assert!(result
        .structure
        .contains(&structure_suggestion("low_variety").to_string()));
}

#[test]
fn mechanics_checks() {
    let result = analyze("my cat is sleepy. she likes the SOFA");
    assert!(result.grammar.iter().any(|g| g.contains("capital letter!")));
    assert!(result.grammar.iter().any(|g| g.contains("start the next sentence")));
    assert!(result.grammar.iter().any(|g| g.contains("\"SOFA\"")));
    assert!(result.grammar.iter().any(|g| g.starts_with("Finish your sentence")));
}

#[test]
fn leading_digit_is_not_a_capital_error() {
    let result = analyze("3 ducks swam in the pond near the old bridge today.");
    assert!(!result
        .grammar
        .iter()
        .any(|g| g == "A sentence always starts with a capital letter!"));
}

#[test]
fn misspellings_name_their_correction() {
    let result = analyze("I will Recieve a letter from my freind.");
    assert!(result.grammar.iter().any(|g| g.contains("\"receive\"")));
    assert!(result.grammar.iter().any(|g| g.contains("\"friend\"")));
}

#[test]
fn every_misspelling_is_distinct() {
    let table = RuleSet::standard().misspellings();
    for (i, m) in table.iter().enumerate() {
        assert_ne!(m.wrong, m.right);
        assert!(table[i + 1..].iter().all(|other| other.wrong != m.wrong));
    }
}

#[test]
fn praise_prefers_polished_for_clean_long_text() {
    let text = "My family visited the quiet lake near our house last weekend. \
                We watched the ducks swim across the water for a long time.";
    let result = analyze(text);
    assert_eq!(result.praise, vec![Praise::Polished.as_str().to_string()]);
}

#[test]
fn praise_for_vocabulary_attempts() {
    let result = analyze("The movie was good and I liked it.");
    assert_eq!(
        result.praise,
        vec![Praise::VocabularyExplorer.as_str().to_string()]
    );
}

#[test]
fn praise_for_many_sentences() {
    let result = analyze("i like cats. I like dogs. I like birds. I like fish.");
    assert_eq!(
        result.praise,
        vec![Praise::SentenceVariety.as_str().to_string()]
    );
}

#[test]
fn praise_criteria_priority() {
    let mut rng = StdRng::seed_from_u64(1);
    let all = PraiseCriteria {
        grammar_clean: true,
        vocabulary_engaged: true,
        long_text: true,
        multi_sentence: true,
    };
    assert_eq!(all.select(&mut rng), Praise::Polished);

    let no_length = PraiseCriteria {
        long_text: false,
        ..all
    };
    assert_eq!(no_length.select(&mut rng), Praise::VocabularyExplorer);

    let sentences_only = PraiseCriteria {
        multi_sentence: true,
        ..PraiseCriteria::default()
    };
    assert_eq!(sentences_only.select(&mut rng), Praise::SentenceVariety);

    assert!(PraiseCriteria::default().select(&mut rng).is_encouragement());
}

#[test]
fn unicode_text_is_handled() {
    let result = analyze("안녕하세요. 저는 학생입니다! 🌟");
    assert_eq!(result.praise.len(), 1);
    assert!(result.grammar.iter().any(|g| g.starts_with("Finish your sentence")));
}

#[test]
fn repeated_analysis_is_stable() {
    let text = "he are my friend and we play good games after school";
    let a = analyze(text);
    let b = analyze(text);
    assert_eq!(a.grammar, b.grammar);
    assert_eq!(a.structure, b.structure);
    assert_eq!(a.vocabulary.len(), b.vocabulary.len());
    assert_eq!(a.praise.len(), b.praise.len());
}

#[test]
fn items_preserve_category_order() {
    let response = FeedbackResponse {
        grammar: vec!["g1".into(), "g2".into()],
        vocabulary: vec!["v1".into()],
        structure: vec!["s1".into(), "s2".into(), "s3".into()],
        praise: vec!["p1".into()],
    };
    let items = to_items(&response);
    assert_eq!(items.len(), 7);

    let kinds: Vec<ItemKind> = items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::Grammar,
            ItemKind::Grammar,
            ItemKind::Vocabulary,
            ItemKind::Structure,
            ItemKind::Structure,
            ItemKind::Structure,
            ItemKind::Expression,
        ]
    );
    assert!(items.iter().all(|i| i.original_text.is_empty()));
    assert!(items.iter().all(|i| i.suggestion == i.explanation));
    assert_eq!(items[6].suggestion, "p1");
}

#[test]
fn analysis_items_match_finding_count() {
    let result = analyze("i am go to the big park. she are happy");
    assert_eq!(result.to_items().len(), result.finding_count());
}

#[test]
fn item_json_uses_display_field_names() {
    let item = FeedbackItem::from_finding(ItemKind::Expression, "Well done!");
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["type"], "expression");
    assert_eq!(json["originalText"], "");
    assert!(json.get("position").is_none());
}

#[test]
fn apply_replaces_original_span() {
    let offline = FeedbackItem::from_finding(ItemKind::Grammar, "Try \"I go\" instead!");
    assert_eq!(offline.apply("I am go to school"), None);

    let item = FeedbackItem {
        kind: ItemKind::Grammar,
        original_text: "I am go".into(),
        suggestion: "I go".into(),
        explanation: "\"am\" and \"go\" can't be used together.".into(),
        position: Some(Span { start: 0, end: 7 }),
    };
    assert_eq!(
        item.apply("I am go to school. I am go home.").as_deref(),
        Some("I go to school. I am go home.")
    );
    assert_eq!(item.apply("Nothing to fix."), None);
}
