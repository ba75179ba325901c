use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use spdlog::{info, warn};

use folio::content_store::ContentStore;
use folio::logger::configure_logger;

use crate::config::open_config;

mod commands;
mod config;
mod new_post;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts grouped by year, optionally filtered
    List(ListArgs),
    /// The most recent posts
    Latest,
    /// Show a post and the posts related to it
    Show {
        slug: String,
    },
    /// Every tag with the number of posts using it
    Tags,
    /// Write all posts as JSON
    Export {
        /// Output file. Writes to stdout when missing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a new post in the content directory
    New(NewArgs),
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    /// Only posts with this text in the title, excerpt or tags
    #[arg(short, long)]
    search: Option<String>,

    /// Only posts with this exact tag
    #[arg(short, long)]
    tag: Option<String>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

#[derive(ClapArgs, Debug)]
struct NewArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Comma separated tags
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = open_config(config_path)
        .map_err(|err| anyhow!("{}\nPlease run folio --help", err))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting folio =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    let store = ContentStore::new(config.post_list(), config.load_options());

    let mut out = io::stdout().lock();
    match args.command {
        Command::List(list_args) => commands::list_cmd(&mut out, &store, &config, list_args)?,
        Command::Latest => commands::latest_cmd(&mut out, &store, &config)?,
        Command::Show { slug } => commands::show_cmd(&mut out, &store, &config, &slug)?,
        Command::Tags => commands::tags_cmd(&mut out, &store)?,
        Command::Export { output } => commands::export_cmd(&mut out, &store, output)?,
        Command::New(new_args) => new_post::new_post_cmd(&store, &config, new_args)?,
    };
    out.flush()?;

    commands::report_diagnostics(&store);
    Ok(())
}
