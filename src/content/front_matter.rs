use serde_yaml::{Mapping, Value};

const HEADER_DELIMITER: &str = "---";
const HEADER_END: &str = "...";

/// Metadata read from a document header block.
///
/// Only the keys below are interpreted. Values are coerced rather than
/// rejected: scalars become strings, a `tags` value that is not a list
/// becomes an empty list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
}

/// Example of a document with a header block
/// ```text
/// ---
/// title: What I learned after 20+ years of software development
/// date: 2022-04-02
/// tags: [career, engineering]
/// ---
///
/// How to be a great software engineer?
/// ```
///
/// Returns the header text (without delimiters) and the body. The header
/// must open on the very first line and be closed by `---` or `...`,
/// otherwise the whole text is body. Blank lines between the closing
/// delimiter and the body are dropped.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let buf = text.strip_prefix('\u{feff}').unwrap_or(text);

    let (first, rest) = split_line(buf);
    if first.trim_end_matches('\r') != HEADER_DELIMITER {
        return (None, text);
    }

    let header_start = rest;
    let mut remaining = rest;
    while !remaining.is_empty() {
        let (line, next) = split_line(remaining);
        let marker = line.trim_end();
        if marker == HEADER_DELIMITER || marker == HEADER_END {
            let header = &header_start[..header_start.len() - remaining.len()];
            return (Some(header), skip_blank_lines(next));
        }
        remaining = next;
    }

    // Never closed, so it was not a header after all
    (None, text)
}

/// Blank lines right after the closing delimiter belong to the header.
fn skip_blank_lines(mut buf: &str) -> &str {
    loop {
        let (line, next) = split_line(buf);
        if buf.is_empty() || !line.trim().is_empty() {
            return buf;
        }
        buf = next;
    }
}

fn split_line(buf: &str) -> (&str, &str) {
    match buf.find('\n') {
        Some(pos) => (&buf[..pos], &buf[pos + 1..]),
        None => (buf, ""),
    }
}

impl FrontMatter {
    /// Parses a header block. An empty header is valid and yields empty
    /// metadata; invalid YAML or a header that is not a mapping is an error.
    pub fn parse(header: &str) -> Result<FrontMatter, String> {
        let value: Value = serde_yaml::from_str(header).map_err(|e| e.to_string())?;
        match value {
            Value::Null => Ok(FrontMatter::default()),
            Value::Mapping(mapping) => Ok(Self::from_mapping(&mapping)),
            other => Err(format!("expected key/value pairs, found {}", value_kind(&other))),
        }
    }

    fn from_mapping(mapping: &Mapping) -> FrontMatter {
        let scalar = |key: &str| mapping.get(key).and_then(scalar_to_string);
        let non_empty = |key: &str| scalar(key).filter(|s| !s.is_empty());

        FrontMatter {
            title: scalar("title"),
            date: scalar("date"),
            tags: mapping.get("tags").map(extract_tags).unwrap_or_default(),
            excerpt: scalar("excerpt"),
            cover_image: non_empty("coverImage").or_else(|| non_empty("cover")),
        }
    }
}

fn extract_tags(value: &Value) -> Vec<String> {
    match untag(value) {
        Value::Sequence(items) => items.iter()
            .filter_map(scalar_to_string)
            .collect(),
        _ => vec![],
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        _ => value,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match untag(value) {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
