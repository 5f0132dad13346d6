use std::path::Path;

use rand::Rng;

use crate::error::WordSourceError;

/// Candidate target words, normalized to uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Load a newline-delimited word list from disk.
    ///
    /// Blank lines are ignored. Lines that are not made of letters only are
    /// skipped with a warning.
    pub fn load(path: &Path) -> Result<Self, WordSourceError> {
        let content = std::fs::read_to_string(path).map_err(|e| WordSourceError::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let source = Self::from_words(content.lines())?;
        tracing::info!("Loaded {} words from {}", source.len(), path.display());
        Ok(source)
    }

    /// Build a source from in-memory words, with the same normalization as
    /// [`WordSource::load`].
    pub fn from_words<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for raw in words {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            match normalize(raw) {
                Some(word) => normalized.push(word),
                None => tracing::warn!("Skipping word list entry '{}': not letters only", raw),
            }
        }

        if normalized.is_empty() {
            return Err(WordSourceError::Empty);
        }
        Ok(WordSource { words: normalized })
    }

    /// Pick a word uniformly at random.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<String, WordSourceError> {
        if self.words.is_empty() {
            return Err(WordSourceError::Empty);
        }
        let idx = rng.random_range(0..self.words.len());
        Ok(self.words[idx].clone())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trim and uppercase a word, or `None` if it is empty or has non-letters.
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_uppercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(word)
}
