/// Bookdex demo
///
/// Builds the three-page book from the library's reference scenario,
/// prints its index, then shows the query and encoding helpers.
/// Set `RUST_LOG=debug` to see build logs.

use Bookdex::analysis::tokenizer::StandardTokenizer;
use Bookdex::core::types::{make_book, make_page, Page};
use Bookdex::index::inverted::make_index;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Step 1: prepare book
    let p1 = make_page(["A", "A", "B", "C"]);
    let p2 = make_page(["A", "C", "D", "A"]);
    let p3 = make_page(["A", "B", "D"]);
    let book = make_book([p1, p2, p3]);

    // Step 2: calculate index
    let index = make_index(&book);
    println!("Index:\n{}\n", index);

    // Step 3: queries
    println!("Pages with A and B: {}", index.pages_with_all(["A", "B"]));
    println!("Pages with C or D:  {}", index.pages_with_any(["C", "D"]));
    println!("JSON: {}\n", index.to_json()?);

    // Step 4: pages from raw text
    let tokenizer = StandardTokenizer::lowercasing();
    let prose = make_book([
        Page::from_text("Rust is a systems language.", &tokenizer),
        Page::from_text("Rustaceans write Rust.", &tokenizer),
    ]);
    let prose_index = make_index(&prose);
    println!("Prose index:\n{}\n", prose_index);
    println!("Words starting with 'rust': {:?}", prose_index.words_with_prefix("rust")?);

    Ok(())
}
