use std::sync::OnceLock;

use spdlog::{error, info, warn};

use crate::content::{load_all, ContentSource, LoadOptions, MemorySource, ParseError, RawDocument};
use crate::post::Post;

/// Owns the post collection for the lifetime of the process.
///
/// The source is read and parsed on first access, exactly once, even when
/// the first accesses race on several threads. The snapshot is sorted by
/// date, most recent first, with ties kept in source order; everything in
/// [`crate::query`] relies on that order.
pub struct ContentStore {
    source: Box<dyn ContentSource>,
    options: LoadOptions,
    snapshot: OnceLock<Snapshot>,
}

struct Snapshot {
    posts: Vec<Post>,
    diagnostics: Vec<ParseError>,
}

impl ContentStore {
    pub fn new(source: impl ContentSource + 'static, options: LoadOptions) -> Self {
        ContentStore {
            source: Box::new(source),
            options,
            snapshot: OnceLock::new(),
        }
    }

    pub fn from_documents(documents: Vec<RawDocument>, options: LoadOptions) -> Self {
        Self::new(MemorySource::new(documents), options)
    }

    pub fn get_all(&self) -> &[Post] {
        &self.snapshot().posts
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.get_all().iter().find(|post| post.slug == slug)
    }

    /// Everything skipped or degraded while loading.
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.snapshot().diagnostics
    }

    fn snapshot(&self) -> &Snapshot {
        self.snapshot.get_or_init(|| self.ingest())
    }

    fn ingest(&self) -> Snapshot {
        info!("Loading posts from {}", self.source.describe());

        let batch = match self.source.read_documents() {
            Ok(batch) => batch,
            Err(err) => {
                error!("Could not load any post: {}", err);
                return Snapshot {
                    posts: vec![],
                    diagnostics: vec![err],
                };
            }
        };

        for failure in batch.failures.iter() {
            warn!("Skipping document: {}", failure);
        }

        let report = load_all(batch.documents, &self.options);
        let mut posts = report.posts;
        // Stable, so posts sharing a date keep their source order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let mut diagnostics = batch.failures;
        diagnostics.extend(report.diagnostics);

        info!("Loaded {} posts, {} diagnostics", posts.len(), diagnostics.len());
        Snapshot { posts, diagnostics }
    }
}
