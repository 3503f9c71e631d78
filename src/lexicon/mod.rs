use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub mod defs;

pub use defs::{PhraseCategory, WordCategory};

use defs::{builtin_phrase_lists, builtin_word_lists};

static WORD_SETS: LazyLock<HashMap<WordCategory, HashSet<&'static str>>> = LazyLock::new(|| {
    builtin_word_lists()
        .iter()
        .map(|def| (def.category, def.words.iter().copied().collect()))
        .collect()
});

pub fn contains(category: WordCategory, word: &str) -> bool {
    WORD_SETS
        .get(&category)
        .is_some_and(|set| set.contains(word))
}

pub fn count_matches(words: &[String], category: WordCategory) -> u32 {
    words.iter().filter(|w| contains(category, w)).count() as u32
}

pub fn phrases(category: PhraseCategory) -> &'static [&'static str] {
    builtin_phrase_lists()
        .iter()
        .find(|def| def.category == category)
        .map(|def| def.phrases)
        .unwrap_or(&[])
}

/// Non-overlapping occurrences of every phrase in `category` within `text`.
pub fn count_phrase_matches(text: &str, category: PhraseCategory) -> u32 {
    let lower = text.to_lowercase();
    phrases(category)
        .iter()
        .map(|phrase| lower.matches(phrase).count() as u32)
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/lexicon/tests.rs"]
mod tests;
