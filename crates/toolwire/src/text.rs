//! Text statistics.

use std::collections::HashMap;

use crate::types::{round2, TextStats};

/// Count characters, words, and sentences in `text`.
///
/// Words are whitespace-separated; sentences are non-blank segments between
/// periods. Ties for the most common word go to the word seen first.
pub fn analyze_text(text: &str) -> TextStats {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = text.split('.').filter(|s| !s.trim().is_empty()).count();

    let average_word_length = if words.is_empty() {
        0.0
    } else {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        round2(total as f64 / words.len() as f64)
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut most_common: Option<(&str, usize)> = None;
    for word in &words {
        let count = counts[word];
        if most_common.map_or(true, |(_, best)| count > best) {
            most_common = Some((word, count));
        }
    }

    TextStats {
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|c| *c != ' ').count(),
        word_count: words.len(),
        sentence_count,
        average_word_length,
        most_common_word: most_common.map(|(w, _)| w.to_string()),
    }
}
