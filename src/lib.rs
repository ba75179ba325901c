pub mod config;
pub mod logger;
pub mod content;
pub mod content_store;
pub mod post;
pub mod post_list;
pub mod query;
pub mod paginator;
pub mod text_utils;
#[cfg(test)]
mod test_data;
