pub mod document;
pub mod extractor;
pub mod walker;

pub use extractor::DefaultExtractor;
