use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::content::LoadOptions;
use crate::content::loader::{EXCERPT_CHARS, WORDS_PER_MINUTE};
use crate::post_list::PostList;
use crate::query::{LATEST_COUNT, RELATED_LIMIT};

#[derive(Deserialize)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub words_per_minute: u32,
    pub excerpt_chars: usize,
    pub related_limit: usize,
    pub latest_count: usize,
    pub page_size: usize,
    pub extensions: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            words_per_minute: WORDS_PER_MINUTE,
            excerpt_chars: EXCERPT_CHARS,
            related_limit: RELATED_LIMIT,
            latest_count: LATEST_COUNT,
            page_size: 10,
            extensions: vec!["md".to_string()],
        }
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    /// Loader settings, with today's date for undated posts.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            words_per_minute: self.defaults.words_per_minute,
            excerpt_chars: self.defaults.excerpt_chars,
            ..LoadOptions::default()
        }
    }

    pub fn post_list(&self) -> PostList {
        PostList {
            root_dir: self.paths.content_dir.clone(),
            extensions: self.defaults.extensions.clone(),
        }
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };
    if !str_path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .and_then(Path::to_str)
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not find the executable directory"))?;
    Ok(PathBuf::from(str_path.replace("${exe_dir}", exe_dir)))
}

pub fn read_config_str(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    read_config_str(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = read_config_str(r#"
[paths]
content_dir = "content/posts"
"#).unwrap();

        assert_eq!(cfg.paths.content_dir, PathBuf::from("content/posts"));
        assert_eq!(cfg.defaults.words_per_minute, 200);
        assert_eq!(cfg.defaults.excerpt_chars, 140);
        assert_eq!(cfg.defaults.related_limit, 3);
        assert_eq!(cfg.defaults.latest_count, 3);
        assert_eq!(cfg.defaults.extensions, ["md"]);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let cfg = read_config_str(r#"
[paths]
content_dir = "posts"

[defaults]
words_per_minute = 250
page_size = 5
extensions = ["md", "markdown"]

[log]
level = "Debug"
log_to_console = false
location = "/tmp/folio/folio.log"
"#).unwrap();

        assert_eq!(cfg.defaults.words_per_minute, 250);
        assert_eq!(cfg.defaults.excerpt_chars, 140);
        assert_eq!(cfg.defaults.page_size, 5);

        let log = cfg.log.as_ref().unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(!log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/folio/folio.log")));

        let opts = cfg.load_options();
        assert_eq!(opts.words_per_minute, 250);
        assert_eq!(cfg.post_list().extensions, ["md", "markdown"]);
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = read_config_str("[paths]\ncontent_dir = \"${exe_dir}/posts\"\n").unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.content_dir, exe_dir.join("posts"));
    }

    #[test]
    fn test_invalid_config() {
        let err = read_config_str("[paths]\n").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = read_config(Path::new("does/not/exist.toml")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
