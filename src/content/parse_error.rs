use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Problem found while ingesting a single document.
///
/// None of these abort a load. Some only degrade the post to its defaults,
/// the others drop the document; see [`ParseError::is_skipped`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed header block in {}: {reason}", .path.display())]
    MalformedHeader { path: PathBuf, reason: String },

    #[error("invalid date '{value}' in {}", .path.display())]
    InvalidDate { path: PathBuf, value: String },

    #[error("could not derive a slug from {}", .path.display())]
    MissingSlug { path: PathBuf },

    #[error("duplicate slug '{slug}' in {}, already defined by {}", .path.display(), .first.display())]
    DuplicateSlug { slug: String, path: PathBuf, first: PathBuf },

    #[error("could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("content source {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub fn path(&self) -> &Path {
        match self {
            ParseError::MalformedHeader { path, .. }
            | ParseError::InvalidDate { path, .. }
            | ParseError::MissingSlug { path }
            | ParseError::DuplicateSlug { path, .. }
            | ParseError::Unreadable { path, .. }
            | ParseError::SourceUnavailable { path, .. } => path,
        }
    }

    /// True when the document did not make it into the collection.
    pub fn is_skipped(&self) -> bool {
        !matches!(self, ParseError::MalformedHeader { .. } | ParseError::InvalidDate { .. })
    }
}
