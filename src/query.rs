//! Read-only queries over the store snapshot.
//!
//! Every function keeps the order of its input. Given the snapshot (newest
//! first), results come out newest first without sorting again.

use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;

use crate::post::Post;
use crate::text_utils::year_label;

pub const RELATED_LIMIT: usize = 3;
pub const LATEST_COUNT: usize = 3;

/// Posts of a single calendar year.
#[derive(Debug, PartialEq)]
pub struct YearGroup<'a> {
    pub year: i32,
    /// e.g. `2024年`
    pub label: String,
    pub posts: Vec<&'a Post>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStats {
    pub post_count: usize,
    pub tag_count: usize,
    pub year_count: usize,
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Posts whose title, excerpt or one of the tags contains `term`, ignoring
/// case, and that carry `tag` when one is given.
///
/// An empty `term` matches every post; an empty `tag` is the same as no tag.
/// The tag filter is an exact, case sensitive match.
pub fn search<'a>(posts: &'a [Post], term: &str, tag: Option<&str>) -> Vec<&'a Post> {
    let term = term.to_lowercase();
    let tag = tag.filter(|t| !t.is_empty());

    posts.iter()
        .filter(|post| {
            contains_ci(&post.title, &term)
                || contains_ci(&post.excerpt, &term)
                || post.tags.iter().any(|t| contains_ci(t, &term))
        })
        .filter(|post| match tag {
            None => true,
            Some(tag) => post.has_tag(tag),
        })
        .collect()
}

/// Groups posts by the year of their date, years in order of first appearance.
pub fn group_by_year<'a>(posts: &[&'a Post]) -> Vec<YearGroup<'a>> {
    let mut groups: Vec<YearGroup<'a>> = vec![];
    // year -> index in groups
    let mut index: HashMap<i32, usize> = HashMap::new();

    for &post in posts {
        let year = post.date.year();
        let pos = *index.entry(year).or_insert_with(|| {
            groups.push(YearGroup {
                year,
                label: year_label(&post.date),
                posts: vec![],
            });
            groups.len() - 1
        });
        groups[pos].posts.push(post);
    }

    groups
}

/// Every tag in use, sorted and without repetition.
pub fn all_tags<'a, I>(posts: I) -> Vec<String>
where
    I: IntoIterator<Item=&'a Post>,
{
    let tags: BTreeSet<&str> = posts.into_iter()
        .flat_map(|post| post.tags.iter().map(String::as_str))
        .collect();
    tags.into_iter().map(str::to_string).collect()
}

/// Tags with the number of posts using them, most used first.
pub fn tag_counts<'a, I>(posts: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item=&'a Post>,
{
    let mut tag_map: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in post.tags.iter() {
            *tag_map.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tag_list: Vec<(String, usize)> = tag_map.into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    tag_list.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
    tag_list
}

/// Other posts sharing at least one tag with `post`, newest first, at most `limit`.
///
/// No scoring: overlap is enough and recency breaks ties.
pub fn related_posts<'a>(posts: &'a [Post], post: &Post, limit: usize) -> Vec<&'a Post> {
    posts.iter()
        .filter(|other| other.slug != post.slug && other.shares_tag_with(post))
        .take(limit)
        .collect()
}

/// The `count` most recent posts.
pub fn latest(posts: &[Post], count: usize) -> &[Post] {
    &posts[..count.min(posts.len())]
}

pub fn listing_stats(posts: &[&Post]) -> ListingStats {
    ListingStats {
        post_count: posts.len(),
        tag_count: all_tags(posts.iter().copied()).len(),
        year_count: group_by_year(posts).len(),
    }
}
