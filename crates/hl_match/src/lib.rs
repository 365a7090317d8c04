pub mod index;
pub mod mapping;
pub mod matcher;
pub mod payload;

pub use index::TextIndex;
pub use mapping::{create_mapping, group_mapping, map_document};
