use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spdlog::debug;
use walkdir::WalkDir;

use crate::content::{ContentSource, ParseError, RawDocument, SourceBatch};

/// Content directory holding the post documents, nested folders included.
pub struct PostList {
    pub root_dir: PathBuf,
    pub extensions: Vec<String>,
}

impl PostList {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        PostList {
            root_dir: root_dir.into(),
            extensions: vec!["md".to_string()],
        }
    }

    /// Post files under `root_dir`, sorted by name at every level so that
    /// loading order is stable between runs.
    pub fn retrieve_files(&self) -> io::Result<(Vec<PathBuf>, Vec<ParseError>)> {
        let metadata = fs::metadata(&self.root_dir)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(ErrorKind::InvalidInput, "Content path is not a directory"));
        }

        let mut posts = vec![];
        let mut failures = vec![];
        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.has_post_extension(entry.path()) {
                        posts.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| self.root_dir.clone());
                    failures.push(ParseError::Unreadable { path, source: err.into() });
                }
            }
        }

        Ok((posts, failures))
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }
}

impl ContentSource for PostList {
    fn read_documents(&self) -> Result<SourceBatch, ParseError> {
        let (files, mut failures) = self.retrieve_files().map_err(|source| ParseError::SourceUnavailable {
            path: self.root_dir.clone(),
            source,
        })?;

        let mut documents = Vec::with_capacity(files.len());
        for file_path in files {
            debug!("Reading {}", file_path.display());
            match RawDocument::from_file(file_path.clone()) {
                Ok(document) => documents.push(document),
                Err(source) => failures.push(ParseError::Unreadable { path: file_path, source }),
            }
        }

        Ok(SourceBatch { documents, failures })
    }

    fn describe(&self) -> String {
        self.root_dir.display().to_string()
    }
}
