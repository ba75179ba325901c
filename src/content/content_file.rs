use std::{fs, io};
use std::path::{Path, PathBuf};

/// A document as read from the content source, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub path: PathBuf,
    pub text: String,
}

impl RawDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> RawDocument {
        RawDocument {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn from_file(file_path: PathBuf) -> io::Result<RawDocument> {
        let text = fs::read_to_string(&file_path)?;

        Ok(RawDocument {
            path: file_path,
            text,
        })
    }

    /// File name without directory and without its last extension.
    ///
    /// `posts/2024/hello.world.md` gives `hello.world`. Names with nothing
    /// before the extension (`.md`) and non UTF-8 names have no slug.
    pub fn slug(&self) -> Option<String> {
        slug_from_path(&self.path)
    }
}

fn slug_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    };

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_path() {
        let slug = |p: &str| RawDocument::new(p, "").slug();
        assert_eq!(slug("content/posts/hello.md"), Some("hello".to_string()));
        assert_eq!(slug("content/posts/2024/deep/nested.md"), Some("nested".to_string()));
        assert_eq!(slug("hello.world.md"), Some("hello.world".to_string()));
        assert_eq!(slug("README"), Some("README".to_string()));
        assert_eq!(slug("posts/.md"), None);
        assert_eq!(slug(""), None);
    }

    #[test]
    fn test_from_file() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("first.md");
        fs::write(&file_path, "---\ntitle: First\n---\nBody")?;

        let doc = RawDocument::from_file(file_path.clone())?;
        assert_eq!(doc.path, file_path);
        assert_eq!(doc.text, "---\ntitle: First\n---\nBody");
        assert_eq!(doc.slug(), Some("first".to_string()));
        Ok(())
    }

    #[test]
    fn test_from_missing_file() {
        let res = RawDocument::from_file(PathBuf::from("does/not/exist.md"));
        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
