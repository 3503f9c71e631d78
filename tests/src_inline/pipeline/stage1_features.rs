use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_tokenize_keeps_contractions_and_drops_mixed_tokens() {
    let tokens = tokenize("I'm SO happy, don't you think? 3rd place_x");
    assert_eq!(tokens, vec!["i'm", "so", "happy", "don't", "you", "think"]);
}

#[test]
fn test_tokenize_normalizes_curly_apostrophes() {
    assert_eq!(tokenize("I\u{2019}m here"), vec!["i'm", "here"]);
}

#[test]
fn test_count_sentences() {
    assert_eq!(count_sentences("Hello there. How are you? Great!"), 3);
    assert_eq!(count_sentences("no punctuation at all"), 1);
    assert_eq!(count_sentences(""), 1);
    assert_eq!(count_sentences("Wait... what?!"), 2);
    assert_eq!(count_sentences("It costs 3.5 dollars."), 1);
}

#[test]
fn test_extract_features_empty_text_is_all_zero() {
    assert_eq!(extract_features(""), LinguisticFeatures::default());
    assert_eq!(extract_features("   \n "), LinguisticFeatures::default());
    assert_eq!(extract_features("123 456"), LinguisticFeatures::default());
}

#[test]
fn test_extract_features_counts_and_ratios() {
    let f = extract_features("We love parties! We always have fun with our friends.");
    assert_eq!(f.word_count, 10);
    assert_eq!(f.sentence_count, 2);
    assert_eq!(f.unique_word_count, 9);
    assert_eq!(f.exclamation_count, 1);
    assert_eq!(f.positive_emotion_count, 2);
    assert_eq!(f.social_reference_count, 2);
    assert_eq!(f.first_person_plural_count, 3);
    assert_eq!(f.assertive_count, 1);
    assert!(approx(f.positive_emotion_ratio, 0.2));
    assert!(approx(f.first_person_plural_ratio, 0.3));
    assert!(approx(f.exclamation_ratio, 0.5));
    assert!(approx(f.avg_sentence_length, 5.0));
    assert!(approx(f.lexical_diversity, 0.9));
}

#[test]
fn test_hedge_phrases_add_to_hedging_count() {
    let f = extract_features("I think maybe.");
    assert_eq!(f.hedge_phrase_count, 1);
    assert_eq!(f.hedging_count, 2);
    assert!(approx(f.hedging_ratio, 0.6667));
}

#[test]
fn test_extract_features_multi_skips_blank_turns() {
    let multi = extract_features_multi(&["Hi there.", "   ", "We met."]);
    assert_eq!(multi, extract_features("Hi there. We met."));
}

#[test]
fn test_scoring_vector_lookup() {
    let f = extract_features("Friends are great.");
    assert_eq!(f.scoring_vector().len(), 12);
    assert_eq!(f.feature_value("word_count"), Some(3.0));
    assert_eq!(f.feature_value("nonexistent"), None);
}

#[test]
fn test_aggregate_turn_features_averages() {
    let a = extract_features("one two");
    let b = extract_features("one two three four");
    let agg = aggregate_turn_features(&[a, b]);
    let word_count = agg.iter().find(|(n, _)| *n == "word_count").map(|(_, v)| *v);
    assert_eq!(word_count, Some(3.0));
    assert!(aggregate_turn_features(&[]).is_empty());
}
