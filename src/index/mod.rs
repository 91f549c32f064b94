pub mod inverted;
pub mod page_set;
