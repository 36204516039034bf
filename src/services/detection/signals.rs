// Statistical Signals
// Three independent AI-likeness signals (predictability, rhythm variance,
// vocabulary diversity) with their 0-100 normalizers.

use crate::services::text_processor::{split_sentences, word_count};
use std::collections::{HashMap, HashSet};

/// Bigram-entropy perplexity proxy over a token sequence.
/// Lower values mean more predictable local word sequences (more AI-like).
/// Fewer than 2 tokens yields 0.
pub fn calculate_perplexity(words: &[String]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(&str, &str), usize> = HashMap::new();
    for pair in words.windows(2) {
        *bigrams.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
    }
    let total = (words.len() - 1) as f64;

    let entropy: f64 = bigrams
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    2f64.powf(entropy)
}

/// Burstiness of sentence lengths: `(sigma - mu) / (sigma + mu)` with
/// population standard deviation. 0 when there are fewer than 2 sentences
/// or the denominator vanishes. Low burstiness means unusually uniform
/// sentence lengths (more AI-like).
pub fn calculate_burstiness(text: &str) -> f64 {
    let lengths: Vec<f64> = split_sentences(text)
        .iter()
        .map(|s| word_count(s.trim()) as f64)
        .collect();

    if lengths.len() < 2 {
        return 0.0;
    }

    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance =
        lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev + mean == 0.0 {
        return 0.0;
    }

    (std_dev - mean) / (std_dev + mean)
}

/// Type-token ratio: unique words / total words. 0 when there are no tokens.
pub fn calculate_diversity(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(|w| w.as_str()).collect();
    unique.len() as f64 / words.len() as f64
}

// Normalizers map raw metric -> 0-100 AI-likeness. All three are inverted
// piecewise-linear clamps; flat-region edges are inclusive.

/// Perplexity >= 100 reads as human (0), <= 20 as AI (100).
pub fn normalize_perplexity(perplexity: f64) -> f64 {
    if perplexity >= 100.0 {
        return 0.0;
    }
    if perplexity <= 20.0 {
        return 100.0;
    }
    100.0 - ((perplexity - 20.0) / (100.0 - 20.0) * 100.0)
}

/// Burstiness >= 0.5 reads as human (0), <= 0.2 as AI (100).
pub fn normalize_burstiness(burstiness: f64) -> f64 {
    if burstiness >= 0.5 {
        return 0.0;
    }
    if burstiness <= 0.2 {
        return 100.0;
    }
    100.0 - ((burstiness - 0.2) / (0.5 - 0.2) * 100.0)
}

/// TTR >= 0.6 reads as human (0), <= 0.4 as AI (100).
pub fn normalize_diversity(diversity: f64) -> f64 {
    if diversity >= 0.6 {
        return 0.0;
    }
    if diversity <= 0.4 {
        return 100.0;
    }
    100.0 - ((diversity - 0.4) / (0.6 - 0.4) * 100.0)
}
