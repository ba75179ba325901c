pub mod content_file;
pub mod front_matter;
pub mod loader;
pub mod parse_error;
pub mod source;

pub use content_file::RawDocument;
pub use loader::{load_all, LoadOptions, LoadReport};
pub use parse_error::ParseError;
pub use source::{ContentSource, MemorySource, SourceBatch};
