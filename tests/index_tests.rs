//! Integration tests for building and querying a book index.

use Bookdex::core::config::Config;
use Bookdex::core::error::ErrorKind;
use Bookdex::core::types::{make_book, make_page, Book, Page};
use Bookdex::index::inverted::{make_index, BookIndex, IndexBuilder};
use Bookdex::index::page_set::PageSet;
use Bookdex::search::prefix::PrefixIndex;
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn book() -> Book {
    let p1 = make_page(["A", "A", "B", "C"]);
    let p2 = make_page(["A", "C", "D", "A"]);
    let p3 = make_page(["A", "B", "D"]);
    make_book([p1, p2, p3])
}

fn pages(numbers: &[u32]) -> Vec<u32> {
    numbers.to_vec()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_make_page_keeps_order_and_duplicates() {
    let page = make_page(["b", "a", "b"]);
    assert_eq!(page.words(), &["b", "a", "b"]);
    assert_eq!(page.len(), 3);
    assert!(page.contains("a"));
    assert!(!page.contains("c"));
}

#[test]
fn test_make_book_keeps_page_order() {
    let book = make_book([make_page(["x"]), make_page(["y"])]);
    assert_eq!(book.len(), 2);
    assert_eq!(book.pages()[0].words(), &["x"]);
    assert_eq!(book.pages()[1].words(), &["y"]);
}

#[rstest]
fn test_book_page_lookup_uses_numbering(book: Book) {
    let one_based = Config::default();
    assert_eq!(book.page(1, &one_based).map(Page::len), Some(4));
    assert!(book.page(0, &one_based).is_none());
    assert!(book.page(4, &one_based).is_none());

    let zero_based = Config {
        first_page_number: 0,
        ..Config::default()
    };
    assert_eq!(book.page(0, &zero_based).map(Page::len), Some(4));
}

// =============================================================================
// Index construction
// =============================================================================

#[rstest]
#[case("A", pages(&[1, 2, 3]))]
#[case("B", pages(&[1, 3]))]
#[case("C", pages(&[1, 2]))]
#[case("D", pages(&[2, 3]))]
fn test_index_scenario(book: Book, #[case] word: &str, #[case] expected: Vec<u32>) {
    let index = make_index(&book);
    assert_eq!(index.pages(word).map(PageSet::to_vec), Some(expected));
}

#[rstest]
fn test_index_has_only_seen_words(book: Book) {
    let index = make_index(&book);
    assert_eq!(index.words().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
    assert!(index.pages("E").is_none());
}

#[rstest]
fn test_zero_based_numbering(book: Book) {
    let config = Config {
        first_page_number: 0,
        ..Config::default()
    };
    let index = IndexBuilder::new(config).build(&book);
    assert_eq!(index.pages("A").map(PageSet::to_vec), Some(vec![0, 1, 2]));
    assert_eq!(index.pages("D").map(PageSet::to_vec), Some(vec![1, 2]));
}

#[rstest]
fn test_duplicates_collapse_per_page(book: Book) {
    let index = make_index(&book);
    // "A" appears twice on pages 1 and 2
    assert_eq!(index.pages("A").map(PageSet::len), Some(3));
}

#[rstest]
fn test_build_is_idempotent(book: Book) {
    assert_eq!(make_index(&book), make_index(&book));
}

#[test]
fn test_empty_book_gives_empty_index() {
    let index = make_index(&make_book(Vec::<Page>::new()));
    assert!(index.is_empty());
    assert_eq!(index.to_string(), "");
}

#[test]
fn test_empty_pages_still_take_a_number() {
    let book = make_book([make_page(Vec::<String>::new()), make_page(["w"])]);
    let index = make_index(&book);
    assert_eq!(index.len(), 1);
    assert_eq!(index.pages("w").map(PageSet::to_vec), Some(vec![2]));
}

#[test]
fn test_words_are_not_normalized() {
    let index = make_index(&make_book([make_page(["Word", "word", "word."])]));
    assert_eq!(index.len(), 3);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case("A", 1, true)]
#[case("B", 2, false)]
#[case("D", 3, true)]
#[case("Z", 1, false)]
fn test_contains(book: Book, #[case] word: &str, #[case] page: u32, #[case] expected: bool) {
    assert_eq!(make_index(&book).contains(word, page), expected);
}

#[rstest]
#[case(vec!["A", "B"], pages(&[1, 3]))]
#[case(vec!["B", "C"], pages(&[1]))]
#[case(vec!["C", "B", "D"], pages(&[]))]
#[case(vec!["A", "missing"], pages(&[]))]
#[case(vec![], pages(&[]))]
fn test_pages_with_all(book: Book, #[case] words: Vec<&str>, #[case] expected: Vec<u32>) {
    assert_eq!(make_index(&book).pages_with_all(words).to_vec(), expected);
}

#[rstest]
#[case(vec!["B", "C"], pages(&[1, 2, 3]))]
#[case(vec!["C", "missing"], pages(&[1, 2]))]
#[case(vec!["missing"], pages(&[]))]
fn test_pages_with_any(book: Book, #[case] words: Vec<&str>, #[case] expected: Vec<u32>) {
    assert_eq!(make_index(&book).pages_with_any(words).to_vec(), expected);
}

#[test]
fn test_words_with_prefix() {
    let book = make_book([
        make_page(["rust", "ruby", "go"]),
        make_page(["rustacean", "python", "rust"]),
    ]);
    let index = make_index(&book);

    assert_eq!(
        index.words_with_prefix("rus").unwrap(),
        vec!["rust".to_string(), "rustacean".to_string()]
    );
    assert_eq!(index.words_with_prefix("r").unwrap().len(), 3);
    assert!(index.words_with_prefix("java").unwrap().is_empty());
    assert!(index.words_with_prefix("").unwrap().is_empty());
}

#[rstest]
fn test_prefix_index_respects_min_len(book: Book) {
    let config = Config {
        min_prefix_len: 2,
        ..Config::default()
    };
    let prefix = make_index(&book).prefix_index(&config).unwrap();

    assert_eq!(prefix.len(), 4);
    assert!(prefix.search_prefix("A").is_empty());
    assert_eq!(prefix.page_count("A"), Some(3));
    assert_eq!(prefix.page_count("B"), Some(2));
    assert_eq!(prefix.page_count("Z"), None);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn test_display(book: Book) {
    let rendered = make_index(&book).to_string();
    assert_eq!(rendered, "A: 1, 2, 3\nB: 1, 3\nC: 1, 2\nD: 2, 3");
}

#[test]
fn test_page_set_display() {
    let set: PageSet = vec![3, 1, 2, 1].into();
    assert_eq!(set.to_string(), "1, 2, 3");
    assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    assert_eq!(set.first(), Some(1));
    assert_eq!(set.last(), Some(3));
}

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
fn test_json_form(book: Book) {
    let index = make_index(&book);
    let json = index.to_json().unwrap();
    assert_eq!(json, r#"{"A":[1,2,3],"B":[1,3],"C":[1,2],"D":[2,3]}"#);
    assert_eq!(BookIndex::from_json(&json).unwrap(), index);
}

#[rstest]
fn test_binary_form(book: Book) {
    let index = make_index(&book);
    let bytes = index.to_bytes().unwrap();
    assert_eq!(BookIndex::from_bytes(&bytes).unwrap(), index);
}

#[test]
fn test_from_json_rejects_empty_page_list() {
    let err = BookIndex::from_json(r#"{"A":[1],"B":[]}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn test_from_json_rejects_garbage() {
    let err = BookIndex::from_json("not json").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[test]
fn test_from_bytes_rejects_truncated_input() {
    let index = make_index(&make_book([make_page(["alpha", "beta"])]));
    let bytes = index.to_bytes().unwrap();
    let err = BookIndex::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[test]
fn test_from_bytes_rejects_trailing_bytes() {
    let index = make_index(&make_book([make_page(["a"])]));
    let mut bytes = index.to_bytes().unwrap();
    bytes.extend_from_slice(b"garbage");
    let err = BookIndex::from_bytes(&bytes).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[test]
fn test_from_json_rejects_repeated_word() {
    let err = BookIndex::from_json(r#"{"a":[1],"a":[2]}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn test_binary_form_matches_plain_bincode_layout() {
    let index = make_index(&make_book([make_page(["a", "b"]), make_page(["b"])]));
    let plain = bincode::serialize(&index).unwrap();
    assert_eq!(index.to_bytes().unwrap(), plain);
    assert_eq!(BookIndex::from_bytes(&plain).unwrap(), index);
}

// =============================================================================
// Prefix index
// =============================================================================

#[rstest]
fn test_prefix_index_answers_repeated_lookups(book: Book) {
    let index = make_index(&book);
    let prefix = index.prefix_index(&Config::default()).unwrap();

    for word in ["A", "B", "C", "D", "E"] {
        assert_eq!(prefix.search_prefix(word), index.words_with_prefix(word).unwrap());
    }
}

#[rstest]
#[case(vec![("b", 1), ("a", 1)])]
#[case(vec![("a", 1), ("a", 2)])]
fn test_prefix_index_rejects_unsorted_or_repeated_words(#[case] words: Vec<(&str, usize)>) {
    let err = PrefixIndex::build(words, 1).err().unwrap();
    assert_eq!(err.kind, ErrorKind::Internal);
}
