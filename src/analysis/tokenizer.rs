use unicode_segmentation::UnicodeSegmentation;
use crate::core::types::{Page, Word};

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Word>;

    fn name(&self) -> &str;
}

/// Standard Unicode tokenizer
#[derive(Debug, Clone)]
pub struct StandardTokenizer {
    pub lowercase: bool,
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        // Words are kept verbatim unless lowercasing is asked for
        StandardTokenizer {
            lowercase: false,
            max_token_length: 255,
        }
    }
}

impl StandardTokenizer {
    pub fn lowercasing() -> Self {
        StandardTokenizer {
            lowercase: true,
            ..Default::default()
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Word> {
        // Length limit applies to the emitted word; lowercasing can grow it
        text.unicode_words()
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|word| word.len() <= self.max_token_length)
            .collect()
    }

    fn name(&self) -> &str {
        "standard"
    }
}

impl Page {
    /// Split raw page text into words with `tokenizer`.
    pub fn from_text(text: &str, tokenizer: &dyn Tokenizer) -> Self {
        let words = tokenizer.tokenize(text);
        tracing::trace!(tokenizer = tokenizer.name(), words = words.len(), "tokenized page text");
        Page::new(words)
    }
}

