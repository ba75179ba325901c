use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;

/// A normalized post, as handed to the rendering layer.
///
/// Posts are built once by the loader and only ever lent out by the
/// [`ContentStore`](crate::content_store::ContentStore) afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub read_time: u32,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, read_time={}, tags=[{}]\ntitle={}\nexcerpt={}",
               self.slug,
               self.date,
               self.read_time,
               self.tags.join(", "),
               self.title,
               self.excerpt,
        )
    }
}
