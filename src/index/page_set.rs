use std::fmt;
use roaring::RoaringBitmap;
use serde::{Serialize, Deserialize};
use crate::core::types::PageNumber;

/// Set of page numbers a word occurs on.
/// Backed by a roaring bitmap, so inserting a page twice is a no-op and
/// iteration is always ascending.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PageNumber>", into = "Vec<PageNumber>")]
pub struct PageSet(RoaringBitmap);

impl PageSet {
    pub fn new() -> Self {
        PageSet(RoaringBitmap::new())
    }

    /// Returns `false` if the page was already present
    pub fn insert(&mut self, page: PageNumber) -> bool {
        self.0.insert(page)
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.0.contains(page)
    }

    pub fn len(&self) -> usize {
        self.0.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<PageNumber> {
        self.0.min()
    }

    pub fn last(&self) -> Option<PageNumber> {
        self.0.max()
    }

    pub fn iter(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<PageNumber> {
        self.0.iter().collect()
    }

    pub fn intersect(&self, other: &PageSet) -> PageSet {
        PageSet(&self.0 & &other.0)
    }

    pub fn union(&self, other: &PageSet) -> PageSet {
        PageSet(&self.0 | &other.0)
    }
}

impl FromIterator<PageNumber> for PageSet {
    fn from_iter<I: IntoIterator<Item = PageNumber>>(iter: I) -> Self {
        PageSet(iter.into_iter().collect())
    }
}

impl From<Vec<PageNumber>> for PageSet {
    fn from(pages: Vec<PageNumber>) -> Self {
        pages.into_iter().collect()
    }
}

impl From<PageSet> for Vec<PageNumber> {
    fn from(set: PageSet) -> Self {
        set.to_vec()
    }
}

impl fmt::Debug for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `1, 2, 3`
impl fmt::Display for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}
