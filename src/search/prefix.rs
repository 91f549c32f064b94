use fst::{IntoStreamer, Map, MapBuilder, Streamer};
use crate::core::error::Result;

/// FST over an index vocabulary for prefix lookups
pub struct PrefixIndex {
    /// Word → number of pages containing it
    fst: Map<Vec<u8>>,

    /// Minimum prefix length to prevent dumping the whole vocabulary
    min_prefix_len: usize,
}

impl PrefixIndex {
    /// Build from words in ascending byte order, each given once.
    pub fn build<'a, I>(words: I, min_prefix_len: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut builder = MapBuilder::memory();

        for (word, page_count) in words {
            builder.insert(word.as_bytes(), page_count as u64)?;
        }

        Ok(PrefixIndex {
            fst: builder.into_map(),
            min_prefix_len,
        })
    }

    pub fn len(&self) -> usize {
        self.fst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fst.is_empty()
    }

    /// Number of pages the word occurs on, if it is in the vocabulary
    pub fn page_count(&self, word: &str) -> Option<usize> {
        self.fst.get(word.as_bytes()).map(|count| count as usize)
    }

    /// All words starting with `prefix`, ascending
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        if prefix.len() < self.min_prefix_len {
            return vec![];
        }

        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();

        while let Some((word_bytes, _count)) = stream.next() {
            if !word_bytes.starts_with(prefix_bytes) {
                break;
            }

            // Keys come from `&str`, so this never fails in practice
            if let Ok(word) = String::from_utf8(word_bytes.to_vec()) {
                results.push(word);
            }
        }

        results
    }
}
