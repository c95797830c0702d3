//! Tokenization and stopword filtering

use std::collections::HashSet;

use serde::Serialize;

use dreamgraph_core::TokenizerConfig;

/// Both token views of one normalized dream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokens {
    /// Every maximal `[a-z]+` run, in input order
    pub full: Vec<String>,
    /// `full` without stopwords, order preserved
    pub filtered: Vec<String>,
}

/// Splits normalized text into words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            stopwords: config.stopwords.iter().cloned().collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Anything that is not a lowercase ASCII letter is a separator
    pub fn tokenize(&self, normalized: &str) -> Tokens {
        let full: Vec<String> = normalized
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        let filtered = full
            .iter()
            .filter(|word| !self.is_stopword(word))
            .cloned()
            .collect();

        Tokens { full, filtered }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}
