use std::collections::BTreeMap;
use std::fmt;
use bincode::Options;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Serialize, Deserialize};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Book, PageNumber, Word};
use crate::index::page_set::PageSet;
use crate::search::prefix::PrefixIndex;

/// Book index: word → pages it occurs on.
/// Words are kept in ascending byte order and never map to an empty set.
/// Decoding goes through `from_json`/`from_bytes`, which check both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BookIndex {
    postings: BTreeMap<Word, PageSet>,
}

/// Builds a [`BookIndex`] with a given page numbering
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: Config,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        IndexBuilder { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn build(&self, book: &Book) -> BookIndex {
        let mut postings: BTreeMap<Word, PageSet> = BTreeMap::new();
        let mut indexed_pages = 0usize;

        for (number, page) in book.numbered(self.config.first_page_number) {
            for word in page.words() {
                // Set semantics: repeats on the same page collapse
                match postings.get_mut(word) {
                    Some(pages) => {
                        pages.insert(number);
                    }
                    None => {
                        postings.entry(word.clone()).or_default().insert(number);
                    }
                }
            }
            indexed_pages += 1;
        }

        if indexed_pages < book.len() {
            tracing::warn!(
                skipped = book.len() - indexed_pages,
                first_page_number = self.config.first_page_number,
                "page numbers exhausted, trailing pages not indexed"
            );
        }

        tracing::debug!(pages = indexed_pages, words = postings.len(), "built book index");

        BookIndex { postings }
    }
}

/// Index a book with default numbering (first page is 1).
pub fn make_index(book: &Book) -> BookIndex {
    IndexBuilder::default().build(book)
}

impl BookIndex {
    pub fn new() -> Self {
        BookIndex {
            postings: BTreeMap::new(),
        }
    }

    /// Pages containing `word`, or `None` if it never occurs
    pub fn pages(&self, word: &str) -> Option<&PageSet> {
        self.postings.get(word)
    }

    pub fn contains(&self, word: &str, page: PageNumber) -> bool {
        self.pages(word).is_some_and(|pages| pages.contains(page))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageSet)> {
        self.postings.iter().map(|(word, pages)| (word.as_str(), pages))
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Pages containing every one of `words`.
    /// No words, or any word missing from the index, gives an empty set.
    pub fn pages_with_all<I, S>(&self, words: I) -> PageSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words.into_iter();
        let Some(first) = words.next() else {
            return PageSet::new();
        };
        let Some(mut result) = self.pages(first.as_ref()).cloned() else {
            return PageSet::new();
        };

        for word in words {
            match self.pages(word.as_ref()) {
                Some(pages) => result = result.intersect(pages),
                None => return PageSet::new(),
            }
            if result.is_empty() {
                break;
            }
        }

        result
    }

    /// Pages containing at least one of `words`
    pub fn pages_with_any<I, S>(&self, words: I) -> PageSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter_map(|word| self.pages(word.as_ref()))
            .fold(PageSet::new(), |acc, pages| acc.union(pages))
    }

    /// Freeze the vocabulary into an FST for prefix lookups
    pub fn prefix_index(&self, config: &Config) -> Result<PrefixIndex> {
        PrefixIndex::build(
            self.postings.iter().map(|(word, pages)| (word.as_str(), pages.len())),
            config.min_prefix_len,
        )
    }

    /// Words starting with `prefix`, ascending.
    /// Builds a fresh FST over the whole vocabulary on every call; for repeated
    /// lookups build one with [`BookIndex::prefix_index`] and query that.
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.prefix_index(&Config::default())?.search_prefix(prefix))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let Entries(entries) = serde_json::from_str(json)?;
        let index = BookIndex::from_entries(entries)?;
        tracing::debug!(words = index.len(), "decoded book index from json");
        Ok(index)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode_options().serialize(self)?)
    }

    /// Trailing bytes after the encoded index are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Entries(entries) = bincode_options().deserialize(bytes)?;
        let index = BookIndex::from_entries(entries)?;
        tracing::debug!(words = index.len(), bytes = bytes.len(), "decoded book index from bytes");
        Ok(index)
    }

    fn from_entries(entries: Vec<(Word, PageSet)>) -> Result<Self> {
        let mut postings = BTreeMap::new();

        for (word, pages) in entries {
            if pages.is_empty() {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Word '{}' has no pages", word),
                ));
            }
            if postings.contains_key(&word) {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Word '{}' appears more than once", word),
                ));
            }
            postings.insert(word, pages);
        }

        Ok(BookIndex { postings })
    }
}

/// Same layout as `bincode::serialize`, but decoding fails on trailing bytes
fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Encoded map entries in input order, before validation
struct Entries(Vec<(Word, PageSet)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of word to page numbers")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Entries, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Length prefixes are untrusted input
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0).min(1024));
                while let Some(entry) = access.next_entry::<Word, PageSet>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'a> IntoIterator for &'a BookIndex {
    type Item = (&'a Word, &'a PageSet);
    type IntoIter = std::collections::btree_map::Iter<'a, Word, PageSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}

/// One `word: pages` line per word, words and pages ascending
impl fmt::Display for BookIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (word, pages)) in self.postings.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", word, pages)?;
        }
        Ok(())
    }
}
