use serde::{Serialize, Deserialize};
use crate::core::config::Config;

/// Word token. Stored verbatim, no case folding or punctuation stripping.
pub type Word = String;

/// Page number as assigned by position in a [`Book`].
pub type PageNumber = u32;

/// Ordered sequence of words, duplicates kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    words: Vec<Word>,
}

impl Page {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Word>,
    {
        Page {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl<S: Into<Word>> FromIterator<S> for Page {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Page::new(iter)
    }
}

/// Ordered sequence of pages. Page order is page number order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        Book {
            pages: pages.into_iter().collect(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by its number under the given config's numbering.
    pub fn page(&self, number: PageNumber, config: &Config) -> Option<&Page> {
        let position = number.checked_sub(config.first_page_number)?;
        self.pages.get(position as usize)
    }

    /// Pages paired with their numbers, counting up from `first`.
    /// Stops early if numbers would overflow `PageNumber`.
    pub fn numbered(&self, first: PageNumber) -> impl Iterator<Item = (PageNumber, &Page)> {
        (first..=PageNumber::MAX).zip(self.pages.iter())
    }
}

impl FromIterator<Page> for Book {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Book::new(iter)
    }
}

pub fn make_page<I, S>(words: I) -> Page
where
    I: IntoIterator<Item = S>,
    S: Into<Word>,
{
    Page::new(words)
}

pub fn make_book(pages: impl IntoIterator<Item = Page>) -> Book {
    Book::new(pages)
}
