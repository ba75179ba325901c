use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use folio::config::Config;
use folio::content_store::ContentStore;
use folio::text_utils::slugify;

use crate::NewArgs;

#[derive(Serialize)]
struct NewHeader<'a> {
    title: &'a str,
    date: String,
    tags: &'a [String],
}

fn render_document(title: &str, tags: &[String], date: &NaiveDate) -> Result<String> {
    let header = serde_yaml::to_string(&NewHeader {
        title,
        date: date.format("%Y-%m-%d").to_string(),
        tags,
    })?;

    let mut buf = String::new();
    buf.push_str("---\n");
    buf.push_str(&header);
    buf.push_str("---\n\n");
    buf.push_str("This is a body example\n");
    buf.push_str("Please remove it and replace with your content\n");
    Ok(buf)
}

pub fn new_post_cmd(store: &ContentStore, config: &Config, args: NewArgs) -> Result<()> {
    let slug = slugify(&args.title);
    if slug.is_empty() {
        bail!("Could not derive a file name from the title '{}'", args.title);
    }
    if let Some(existing) = store.get_by_slug(&slug) {
        bail!("A post with slug '{}' already exists: {}", slug, existing.title);
    }

    let tags: Vec<String> = args.tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    let text = render_document(&args.title, &tags, &Utc::now().date_naive())?;

    let content_dir = &config.paths.content_dir;
    create_dir_all(content_dir)
        .with_context(|| format!("Error creating {}", content_dir.display()))?;

    let post_path = content_dir.join(format!("{}.md", slug));
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&post_path)
        .with_context(|| format!("Error creating {}", post_path.display()))?;
    file.write_all(text.as_bytes())?;

    println!("Created {}", post_path.display());
    Ok(())
}
