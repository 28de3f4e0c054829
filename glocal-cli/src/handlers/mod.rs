//! Command handlers for the Glocal CLI

pub mod config;
pub mod search;
pub mod trending;

pub use config::handle_config_command;
pub use search::handle_search_command;
pub use trending::handle_trending_command;
