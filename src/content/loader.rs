use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use spdlog::{debug, warn};

use crate::content::front_matter::{split_front_matter, FrontMatter};
use crate::content::{ParseError, RawDocument};
use crate::post::Post;
use crate::text_utils::{excerpt, parse_date, read_time};

pub const WORDS_PER_MINUTE: u32 = 200;
pub const EXCERPT_CHARS: usize = 140;

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Date given to posts without a usable `date`.
    pub today: NaiveDate,
    pub words_per_minute: u32,
    pub excerpt_chars: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            today: Utc::now().date_naive(),
            words_per_minute: WORDS_PER_MINUTE,
            excerpt_chars: EXCERPT_CHARS,
        }
    }
}

/// Outcome of a load: the posts, in input order, and what went wrong on the way.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub posts: Vec<Post>,
    pub diagnostics: Vec<ParseError>,
}

/// Parses every document into a [`Post`].
///
/// One bad document never fails the batch. Documents without a slug, or
/// whose slug was already taken by an earlier document, are skipped. A
/// malformed header or date only degrades the post to its defaults. Every
/// case is logged and recorded in [`LoadReport::diagnostics`].
pub fn load_all(documents: Vec<RawDocument>, options: &LoadOptions) -> LoadReport {
    let mut report = LoadReport {
        posts: Vec::with_capacity(documents.len()),
        diagnostics: vec![],
    };
    // slug -> first file defining it
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for document in documents {
        let Some(slug) = document.slug() else {
            report.push_diagnostic(ParseError::MissingSlug { path: document.path });
            continue;
        };

        if let Some(first) = seen.get(&slug) {
            report.push_diagnostic(ParseError::DuplicateSlug {
                slug,
                path: document.path,
                first: first.clone(),
            });
            continue;
        }

        seen.insert(slug.clone(), document.path.clone());
        let post = build_post(slug, &document, options, &mut report);
        debug!("Loaded {}: {}", document.path.display(), post);
        report.posts.push(post);
    }

    report
}

fn build_post(slug: String, document: &RawDocument, options: &LoadOptions, report: &mut LoadReport) -> Post {
    let (header, body) = split_front_matter(&document.text);

    let front_matter = match header.map(FrontMatter::parse) {
        None => FrontMatter::default(),
        Some(Ok(front_matter)) => front_matter,
        Some(Err(reason)) => {
            report.push_diagnostic(ParseError::MalformedHeader {
                path: document.path.clone(),
                reason,
            });
            FrontMatter::default()
        }
    };

    let date = match front_matter.date {
        None => options.today,
        Some(value) => match parse_date(&value) {
            Ok(date) => date,
            Err(_) => {
                report.push_diagnostic(ParseError::InvalidDate {
                    path: document.path.clone(),
                    value,
                });
                options.today
            }
        },
    };

    Post {
        title: front_matter.title.unwrap_or_else(|| slug.clone()),
        excerpt: front_matter.excerpt.unwrap_or_else(|| excerpt(body, options.excerpt_chars)),
        read_time: read_time(body, options.words_per_minute),
        content: body.to_string(),
        tags: front_matter.tags,
        cover_image: front_matter.cover_image,
        date,
        slug,
    }
}

impl LoadReport {
    fn push_diagnostic(&mut self, err: ParseError) {
        if err.is_skipped() {
            warn!("Skipping document: {}", err);
        } else {
            warn!("Using defaults: {}", err);
        }
        self.diagnostics.push(err);
    }

    pub fn skipped_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_skipped()).count()
    }
}
