pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use commands::Cli;
pub use context::GlocalCliContext;
pub use output::{
    CliColors, format_error, format_info, format_pattern, format_warning,
    output_error_json, print_config, print_insights, print_search_page, print_search_scores,
    print_trending_list,
};
pub use utils::{load_json, parse_content_type, parse_period, parse_sort_by, query_location};
