pub mod console;
pub mod document;

pub use console::format_text;
pub use document::{build_block, splice, update_document, END_TAG, START_TAG};
