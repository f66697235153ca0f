//! TF-IDF text relevance model.
//!
//! Builds a term-weight vector space over an ordered set of documents and
//! scores documents against each other with cosine similarity. The model is
//! rebuilt from scratch on every call; nothing is cached between requests.
//!
//! # Weighting
//!
//! - terms are lowercased alphanumeric runs of at least two characters,
//!   minus a fixed English stop-word list
//! - the vocabulary keeps the [`MAX_VOCABULARY`] terms with the highest
//!   document frequency, ties broken by lexicographic term order
//! - `weight(t, d) = tf(t, d) * (ln((1 + N) / (1 + df(t))) + 1)`
//! - every document vector is L2-normalized, so cosine similarity is a
//!   plain dot product; an all-stop-word document stays the zero vector

use std::collections::{BTreeMap, HashMap, HashSet};

/// Upper bound on the number of distinct terms kept in the vocabulary.
pub const MAX_VOCABULARY: usize = 5000;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "are", "around", "as", "at", "be", "became", "because", "become",
    "been", "before", "being", "below", "between", "both", "but", "by", "can", "cannot",
    "could", "did", "do", "does", "doing", "done", "down", "during", "each", "either", "else",
    "enough", "etc", "even", "ever", "every", "few", "for", "from", "further", "get", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "least",
    "less", "made", "many", "may", "me", "might", "more", "most", "much", "must", "my",
    "myself", "neither", "never", "no", "nor", "not", "nothing", "now", "of", "off", "often",
    "on", "once", "one", "only", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "per", "perhaps", "rather", "same", "see", "seem",
    "seems", "several", "she", "should", "since", "so", "some", "something", "still", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "therefore", "these", "they", "this", "those", "though", "through", "thus", "to", "too",
    "toward", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "where", "whether", "which", "while", "who", "whoever", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Shortest token, in characters, that counts as a term.
const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercase terms, dropping stop words and single
/// characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    tokenize_with(text, &stop)
}

fn tokenize_with(text: &str, stop: &HashSet<&str>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !stop.contains(t))
        .map(String::from)
        .collect()
}

/// Keep the `cap` terms with the highest document frequency, breaking ties
/// lexicographically. Returned terms are sorted lexicographically.
fn select_vocabulary(document_frequency: &HashMap<String, usize>, cap: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, usize)> =
        document_frequency.iter().map(|(t, df)| (t, *df)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(cap);

    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.clone()).collect();
    vocabulary.sort();
    vocabulary
}

/// Sparse unit vector: `(term index, weight)` pairs sorted by term index.
type SparseVector = Vec<(usize, f64)>;

fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// A fitted TF-IDF vector space over one document set.
#[derive(Debug, Clone)]
pub struct TextRelevanceModel {
    vocabulary: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl TextRelevanceModel {
    /// Fit the model over `documents`.
    ///
    /// Returns `None` when there is no relevance signal at all: no
    /// documents, or no document contributes a single vocabulary term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Option<Self> {
        Self::fit_with_cap(documents, MAX_VOCABULARY)
    }

    fn fit_with_cap<S: AsRef<str>>(documents: &[S], cap: usize) -> Option<Self> {
        if documents.is_empty() {
            return None;
        }

        let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize_with(d.as_ref(), &stop))
            .collect();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                *document_frequency.entry(term.clone()).or_default() += 1;
            }
        }
        if document_frequency.is_empty() {
            return None;
        }

        let vocabulary = select_vocabulary(&document_frequency, cap);
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|t| {
                let df = document_frequency[t] as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
                for term in tokens {
                    if let Some(&i) = index.get(term.as_str()) {
                        *counts.entry(i).or_default() += 1.0;
                    }
                }
                let weighted: SparseVector =
                    counts.into_iter().map(|(i, tf)| (i, tf * idf[i])).collect();
                let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm == 0.0 {
                    weighted
                } else {
                    weighted.into_iter().map(|(i, w)| (i, w / norm)).collect()
                }
            })
            .collect();

        Some(Self { vocabulary, vectors })
    }

    /// Number of documents the model was fitted on.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Whether the document at `index` has no vocabulary terms.
    pub fn is_zero(&self, index: usize) -> bool {
        self.vectors.get(index).map_or(true, |v| v.is_empty())
    }

    /// Cosine similarity between two documents; 0 for zero vectors or
    /// out-of-range indices.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(va), Some(vb)) => dot(va, vb),
            _ => 0.0,
        }
    }

    /// Similarity of every other document against `focus`, in document
    /// order. Empty when `focus` is out of range.
    pub fn similarities(&self, focus: usize) -> Vec<(usize, f64)> {
        if focus >= self.vectors.len() {
            return vec![];
        }
        (0..self.vectors.len())
            .filter(|&i| i != focus)
            .map(|i| (i, self.similarity(focus, i)))
            .collect()
    }

    /// Normalized term weights of one document, in vocabulary order.
    pub fn term_weights(&self, index: usize) -> Vec<(&str, f64)> {
        self.vectors
            .get(index)
            .map(|v| {
                v.iter()
                    .map(|(i, w)| (self.vocabulary[*i].as_str(), *w))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The `n` highest-weighted terms of one document, heaviest first with
    /// ties broken by term.
    pub fn top_terms(&self, index: usize, n: usize) -> Vec<(String, f64)> {
        let mut weights = self.term_weights(index);
        weights.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        weights
            .into_iter()
            .take(n)
            .map(|(t, w)| (t.to_string(), w))
            .collect()
    }
}

/// Score every document except `focus_index` against the focus document.
///
/// Returns `(document index, similarity)` pairs in document order. An empty
/// result means there is no relevance signal, not an error.
pub fn similarities<S: AsRef<str>>(documents: &[S], focus_index: usize) -> Vec<(usize, f64)> {
    TextRelevanceModel::fit(documents)
        .map(|m| m.similarities(focus_index))
        .unwrap_or_default()
}
