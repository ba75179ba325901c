use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio::config::Config;
use folio::content_store::ContentStore;
use folio::paginator::Paginator;
use folio::post::Post;
use folio::query::{group_by_year, latest, listing_stats, related_posts, search, tag_counts};
use folio::text_utils::{full_date_label, month_day_label};

use crate::ListArgs;

fn write_summary(out: &mut impl Write, post: &Post) -> io::Result<()> {
    writeln!(out, "  {}  {}  ({} min)", month_day_label(&post.date), post.title, post.read_time)?;
    writeln!(out, "      /posts/{}", post.slug)?;
    if !post.tags.is_empty() {
        writeln!(out, "      [{}]", post.tags.join(", "))?;
    }
    Ok(())
}

pub fn list_cmd(out: &mut impl Write, store: &ContentStore, config: &Config, args: ListArgs) -> io::Result<()> {
    let term = args.search.as_deref().unwrap_or("");
    let found = search(store.get_all(), term, args.tag.as_deref());

    if found.is_empty() {
        return writeln!(out, "No matching posts");
    }

    let paginator = Paginator::new(&found, config.defaults.page_size);
    let cur_page = paginator.resolve_page(args.page);
    let page = paginator.get_page_or_first(cur_page);

    for group in group_by_year(page) {
        writeln!(out, "{} ({})", group.label, group.posts.len())?;
        for post in group.posts {
            write_summary(out, post)?;
        }
        writeln!(out)?;
    }

    let stats = listing_stats(&found);
    writeln!(out, "{} posts, {} tags, {} years. Page {} of {}",
             stats.post_count, stats.tag_count, stats.year_count,
             cur_page, paginator.page_count())
}

pub fn latest_cmd(out: &mut impl Write, store: &ContentStore, config: &Config) -> io::Result<()> {
    for post in latest(store.get_all(), config.defaults.latest_count) {
        write_summary(out, post)?;
    }
    Ok(())
}

pub fn show_cmd(out: &mut impl Write, store: &ContentStore, config: &Config, slug: &str) -> io::Result<()> {
    let Some(post) = store.get_by_slug(slug) else {
        return writeln!(out, "Post not found: {}", slug);
    };

    writeln!(out, "# {}", post.title)?;
    writeln!(out, "{} · {} min read", full_date_label(&post.date), post.read_time)?;
    if !post.tags.is_empty() {
        writeln!(out, "Tags: {}", post.tags.join(", "))?;
    }
    if let Some(ref cover) = post.cover_image {
        writeln!(out, "Cover: {}", cover)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", post.content)?;

    let related = related_posts(store.get_all(), post, config.defaults.related_limit);
    if !related.is_empty() {
        writeln!(out, "Related posts")?;
        for post in related {
            write_summary(out, post)?;
        }
    }
    Ok(())
}

pub fn tags_cmd(out: &mut impl Write, store: &ContentStore) -> io::Result<()> {
    for (tag, count) in tag_counts(store.get_all()) {
        writeln!(out, "{:>4}  {}", count, tag)?;
    }
    Ok(())
}

pub fn export_cmd(out: &mut impl Write, store: &ContentStore, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(store.get_all())?;
    match output {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("Error writing {}", path.display()))?,
        None => writeln!(out, "{}", json)?,
    }
    Ok(())
}

pub fn report_diagnostics(store: &ContentStore) {
    let diagnostics = store.diagnostics();
    if diagnostics.is_empty() {
        return;
    }

    let skipped = diagnostics.iter().filter(|d| d.is_skipped()).count();
    eprintln!("{} documents skipped, {} loaded with defaults. See the log for details.",
              skipped, diagnostics.len() - skipped);
}

#[cfg(test)]
mod tests {
    use folio::config::read_config_str;
    use folio::content::{LoadOptions, RawDocument};

    use super::*;

    fn store() -> ContentStore {
        let documents = vec![
            RawDocument::new("posts/typescript.md", "---\ntitle: TypeScript tips\ndate: 2024-01-10\ntags: [TypeScript, web]\n---\nTypes"),
            RawDocument::new("posts/react.md", "---\ntitle: React hooks\ndate: 2024-05-01\ntags: [React, web]\n---\nHooks"),
            RawDocument::new("posts/rust.md", "---\ntitle: Rust ownership\ndate: 2023-12-01\ntags: [Rust]\n---\nBorrowing"),
        ];
        ContentStore::from_documents(documents, LoadOptions::default())
    }

    fn config() -> Config {
        read_config_str("[paths]\ncontent_dir = \"posts\"\n\n[defaults]\npage_size = 2\n").unwrap()
    }

    fn run<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = vec![];
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn list_args(page: usize) -> ListArgs {
        ListArgs { search: None, tag: None, page }
    }

    #[test]
    fn test_show_missing_post() {
        let output = run(|out| show_cmd(out, &store(), &config(), "nope"));
        assert_eq!(output, "Post not found: nope\n");
    }

    #[test]
    fn test_show_with_related() {
        let output = run(|out| show_cmd(out, &store(), &config(), "react"));
        assert!(output.starts_with("# React hooks\n2024年05月01日 · 1 min read\nTags: React, web\n"));
        assert!(output.contains("Related posts\n"));
        assert!(output.contains("/posts/typescript"));
        assert!(!output.contains("/posts/rust"));
    }

    #[test]
    fn test_list_out_of_range_page_falls_back_to_first() {
        let store = store();
        let config = config();
        let first = run(|out| list_cmd(out, &store, &config, list_args(1)));
        let fallback = run(|out| list_cmd(out, &store, &config, list_args(9)));
        let zero = run(|out| list_cmd(out, &store, &config, list_args(0)));

        assert_eq!(fallback, first);
        assert_eq!(zero, first);
        assert!(first.starts_with("2024年 (2)\n"));
        assert!(first.ends_with("3 posts, 4 tags, 2 years. Page 1 of 2\n"));
    }

    #[test]
    fn test_list_second_page() {
        let output = run(|out| list_cmd(out, &store(), &config(), list_args(2)));
        assert!(output.starts_with("2023年 (1)\n"));
        assert!(output.contains("Rust ownership"));
        assert!(output.ends_with("Page 2 of 2\n"));
    }

    #[test]
    fn test_list_filters() {
        let args = ListArgs { search: Some("typescript".to_string()), tag: None, page: 1 };
        let output = run(|out| list_cmd(out, &store(), &config(), args));
        assert!(output.contains("TypeScript tips"));
        assert!(!output.contains("React hooks"));

        let args = ListArgs { search: None, tag: Some("Go".to_string()), page: 1 };
        let output = run(|out| list_cmd(out, &store(), &config(), args));
        assert_eq!(output, "No matching posts\n");
    }

    #[test]
    fn test_tags_counts() {
        let output = run(|out| tags_cmd(out, &store()));
        assert_eq!(output.lines().next(), Some("   2  web"));
    }
}
