use serde::{Deserialize, Serialize};

use crate::lexicon::{self, PhraseCategory, WordCategory};
use crate::model::thresholds::round_to;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinguisticFeatures {
    pub word_count: u32,
    pub sentence_count: u32,
    pub unique_word_count: u32,

    pub exclamation_count: u32,
    pub question_count: u32,

    pub positive_emotion_count: u32,
    pub negative_emotion_count: u32,
    pub social_reference_count: u32,
    pub first_person_singular_count: u32,
    pub first_person_plural_count: u32,
    pub assertive_count: u32,
    pub hedging_count: u32,
    pub excitement_count: u32,

    pub hedge_phrase_count: u32,
    pub assertive_phrase_count: u32,

    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub lexical_diversity: f64,

    pub positive_emotion_ratio: f64,
    pub negative_emotion_ratio: f64,
    pub social_reference_ratio: f64,
    pub first_person_singular_ratio: f64,
    pub first_person_plural_ratio: f64,
    pub assertive_ratio: f64,
    pub hedging_ratio: f64,
    pub excitement_ratio: f64,
    pub exclamation_ratio: f64,
    pub question_ratio: f64,
}

impl LinguisticFeatures {
    pub fn scoring_vector(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("positive_emotion_ratio", self.positive_emotion_ratio),
            ("negative_emotion_ratio", self.negative_emotion_ratio),
            ("social_reference_ratio", self.social_reference_ratio),
            (
                "first_person_singular_ratio",
                self.first_person_singular_ratio,
            ),
            ("first_person_plural_ratio", self.first_person_plural_ratio),
            ("assertive_ratio", self.assertive_ratio),
            ("hedging_ratio", self.hedging_ratio),
            ("excitement_ratio", self.excitement_ratio),
            ("exclamation_ratio", self.exclamation_ratio),
            ("avg_sentence_length", self.avg_sentence_length),
            ("lexical_diversity", self.lexical_diversity),
            ("word_count", self.word_count as f64),
        ]
    }

    pub fn feature_value(&self, name: &str) -> Option<f64> {
        self.scoring_vector()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

pub fn extract_features(text: &str) -> LinguisticFeatures {
    if text.trim().is_empty() {
        return LinguisticFeatures::default();
    }

    let words = tokenize(text);
    let word_count = words.len() as u32;
    if word_count == 0 {
        return LinguisticFeatures::default();
    }

    let sentence_count = count_sentences(text);
    let unique_word_count = {
        let mut unique = words.iter().map(String::as_str).collect::<Vec<_>>();
        unique.sort_unstable();
        unique.dedup();
        unique.len() as u32
    };

    let exclamation_count = text.matches('!').count() as u32;
    let question_count = text.matches('?').count() as u32;

    let positive_emotion_count = lexicon::count_matches(&words, WordCategory::PositiveEmotion);
    let negative_emotion_count = lexicon::count_matches(&words, WordCategory::NegativeEmotion);
    let social_reference_count = lexicon::count_matches(&words, WordCategory::SocialReference);
    let first_person_singular_count =
        lexicon::count_matches(&words, WordCategory::FirstPersonSingular);
    let first_person_plural_count =
        lexicon::count_matches(&words, WordCategory::FirstPersonPlural);
    let assertive_words = lexicon::count_matches(&words, WordCategory::Assertive);
    let hedging_words = lexicon::count_matches(&words, WordCategory::Hedging);
    let excitement_count = lexicon::count_matches(&words, WordCategory::Excitement);

    let hedge_phrase_count = lexicon::count_phrase_matches(text, PhraseCategory::Hedge);
    let assertive_phrase_count = lexicon::count_phrase_matches(text, PhraseCategory::Assertive);

    let hedging_count = hedging_words + hedge_phrase_count;
    let assertive_count = assertive_words + assertive_phrase_count;

    let letters: usize = words
        .iter()
        .map(|w| w.chars().filter(|&c| c != '\'').count())
        .sum();
    let n = word_count as f64;
    let sentences = sentence_count as f64;
    let ratio = |count: u32| round_to(count as f64 / n, 4);

    LinguisticFeatures {
        word_count,
        sentence_count,
        unique_word_count,
        exclamation_count,
        question_count,
        positive_emotion_count,
        negative_emotion_count,
        social_reference_count,
        first_person_singular_count,
        first_person_plural_count,
        assertive_count,
        hedging_count,
        excitement_count,
        hedge_phrase_count,
        assertive_phrase_count,
        avg_word_length: round_to(letters as f64 / n, 3),
        avg_sentence_length: round_to(n / sentences, 2),
        lexical_diversity: round_to(unique_word_count as f64 / n, 3),
        positive_emotion_ratio: ratio(positive_emotion_count),
        negative_emotion_ratio: ratio(negative_emotion_count),
        social_reference_ratio: ratio(social_reference_count),
        first_person_singular_ratio: ratio(first_person_singular_count),
        first_person_plural_ratio: ratio(first_person_plural_count),
        assertive_ratio: ratio(assertive_count),
        hedging_ratio: ratio(hedging_count),
        excitement_ratio: ratio(excitement_count),
        exclamation_ratio: round_to(exclamation_count as f64 / sentences, 4),
        question_ratio: round_to(question_count as f64 / sentences, 4),
    }
}

/// Features of the concatenated transcript, skipping blank turns.
pub fn extract_features_multi<S: AsRef<str>>(turns: &[S]) -> LinguisticFeatures {
    let combined = turns
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    extract_features(&combined)
}

/// Mean of each scoring feature across turns.
pub fn aggregate_turn_features(turn_features: &[LinguisticFeatures]) -> Vec<(&'static str, f64)> {
    if turn_features.is_empty() {
        return Vec::new();
    }
    let n = turn_features.len() as f64;
    let mut sums = turn_features[0]
        .scoring_vector()
        .into_iter()
        .map(|(name, _)| (name, 0.0))
        .collect::<Vec<_>>();
    for features in turn_features {
        for (slot, (_, value)) in sums.iter_mut().zip(features.scoring_vector()) {
            slot.1 += value;
        }
    }
    sums.into_iter()
        .map(|(name, sum)| (name, round_to(sum / n, 4)))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            other => other,
        })
        .collect()
}

/// Lowercase ASCII words, keeping a single internal apostrophe
/// (`don't`, `i'm`). Words fused with digits or non-ASCII letters are
/// dropped entirely.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars = normalize_quotes(text)
        .to_lowercase()
        .chars()
        .collect::<Vec<_>>();
    let len = chars.len();
    let mut tokens = Vec::new();

    let mut i = 0usize;
    while i < len {
        let at_boundary = i == 0 || !is_word_char(chars[i - 1]);
        if !chars[i].is_ascii_lowercase() || !at_boundary {
            i += 1;
            continue;
        }

        let mut end = i;
        while end < len && chars[end].is_ascii_lowercase() {
            end += 1;
        }

        let mut matched = None;
        if end + 1 < len && chars[end] == '\'' && chars[end + 1].is_ascii_lowercase() {
            let mut j = end + 1;
            while j < len && chars[j].is_ascii_lowercase() {
                j += 1;
            }
            if j == len || !is_word_char(chars[j]) {
                matched = Some(j);
            }
        }
        if matched.is_none() && (end == len || !is_word_char(chars[end])) {
            matched = Some(end);
        }

        match matched {
            Some(stop) => {
                tokens.push(chars[i..stop].iter().collect());
                i = stop;
            }
            None => i = end,
        }
    }

    tokens
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Sentences split on runs of `.`, `!`, `?` followed by whitespace or the
/// end of text. Never less than one.
pub fn count_sentences(text: &str) -> u32 {
    let chars = text.trim().chars().collect::<Vec<_>>();
    let len = chars.len();
    let mut count = 0u32;
    let mut has_content = false;

    let mut i = 0usize;
    while i < len {
        if is_terminal(chars[i]) {
            let mut j = i;
            while j < len && is_terminal(chars[j]) {
                j += 1;
            }
            if j == len || chars[j].is_whitespace() {
                if has_content {
                    count += 1;
                }
                has_content = false;
                i = if j == len { j } else { j + 1 };
            } else {
                has_content = true;
                i = j;
            }
            continue;
        }
        if !chars[i].is_whitespace() {
            has_content = true;
        }
        i += 1;
    }
    if has_content {
        count += 1;
    }
    count.max(1)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_features.rs"]
mod tests;
