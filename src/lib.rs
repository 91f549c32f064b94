pub mod core;
pub mod analysis;
pub mod index;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                          BOOKDEX DATA FLOW                               │
└──────────────────────────────────────────────────────────────────────────┘

  raw text ──(analysis::tokenizer)──┐
                                    ▼
  words ───────(make_page)────────► Page { words: Vec<Word> }
                                    │
  pages ───────(make_book)────────► Book { pages: Vec<Page> }
                                    │   page number = first_page_number + position
                                    ▼
                  (make_index / IndexBuilder::build)
                                    │
                                    ▼
                    BookIndex { postings: BTreeMap<Word, PageSet> }
                      │          │            │              │
                      │          │            │              └─ Display: "word: 1, 2, 3"
                      │          │            └─ to_json / to_bytes (serde_json, bincode)
                      │          └─ pages_with_all / pages_with_any (roaring bitmaps)
                      └─ prefix_index → search::prefix::PrefixIndex (fst)
*/
