//! Text normalization
//!
//! Lowercases the dream and expands configured contractions. Contractions
//! match whole words only (ASCII word boundaries), so `i'm` inside `hi'm`
//! is left alone.

use regex::{NoExpand, Regex};

use dreamgraph_core::{Contraction, DreamError, NormalizerConfig, Result};

/// Compiled contraction rules
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<(Regex, String)>,
}

impl Normalizer {
    /// Compile the configured contractions
    pub fn new(config: &NormalizerConfig) -> Result<Self> {
        let rules = config
            .contractions
            .iter()
            .map(compile_rule)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Lowercase and expand contractions. Never fails.
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_lowercase();

        for (regex, expansion) in &self.rules {
            if regex.is_match(&normalized) {
                normalized = regex
                    .replace_all(&normalized, NoExpand(expansion.as_str()))
                    .into_owned();
            }
        }

        normalized
    }
}

impl Default for Normalizer {
    /// Default contractions; a rule that fails to compile is skipped
    fn default() -> Self {
        let rules = NormalizerConfig::default()
            .contractions
            .iter()
            .filter_map(|contraction| match compile_rule(contraction) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("Skipping contraction rule: {}", e);
                    None
                }
            })
            .collect();

        Self { rules }
    }
}

fn compile_rule(contraction: &Contraction) -> Result<(Regex, String)> {
    let pattern = format!(
        r"(?-u:\b){}(?-u:\b)",
        regex::escape(&contraction.from.to_lowercase())
    );

    let regex = Regex::new(&pattern)
        .map_err(|e| DreamError::InvalidPattern(format!("{}: {e}", contraction.from)))?;

    Ok((regex, contraction.to.clone()))
}
