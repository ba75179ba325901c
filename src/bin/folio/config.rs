use std::env;
use std::path::PathBuf;

use folio::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(PathBuf::from));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("folio"));

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Err("Could not find folio configuration".to_string()),
        Some(x) => x,
    };

    eprintln!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("folio").join("log").join("folio.log"));
        }
        if let Some(ref location) = log.location {
            eprintln!("Log enabled. Files will be written in {}", location.display());
        }
        config.log = Some(log);
    }

    Ok(config)
}
