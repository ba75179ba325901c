use crate::content::{ParseError, RawDocument};

/// Documents read from a source, plus the ones it could not read.
#[derive(Debug, Default)]
pub struct SourceBatch {
    pub documents: Vec<RawDocument>,
    pub failures: Vec<ParseError>,
}

/// Where the raw documents come from.
///
/// A source is read exactly once per [`ContentStore`](crate::content_store::ContentStore).
/// Failing as a whole (`Err`) leaves the store empty; per-document read
/// problems go into [`SourceBatch::failures`].
pub trait ContentSource: Send + Sync {
    fn read_documents(&self) -> Result<SourceBatch, ParseError>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

/// Documents already held in memory.
pub struct MemorySource {
    documents: Vec<RawDocument>,
}

impl MemorySource {
    pub fn new(documents: Vec<RawDocument>) -> Self {
        MemorySource { documents }
    }
}

impl ContentSource for MemorySource {
    fn read_documents(&self) -> Result<SourceBatch, ParseError> {
        Ok(SourceBatch {
            documents: self.documents.clone(),
            failures: vec![],
        })
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}
