//! Search command handlers

use crate::commands::SearchCommands;
use crate::context::GlocalCliContext;
use crate::output::*;
use crate::utils::{load_json, parse_content_type, parse_sort_by, query_location};
use colored::Colorize;
use glocal::models::{SearchQuery, SearchResult, SearchScore};
use glocal::search::generate_search_suggestions;
use serde_json::json;

pub async fn handle_search_command(
    cmd: SearchCommands,
    ctx: &GlocalCliContext,
    output_format: &str,
) -> glocal::Result<()> {
    let search = ctx.glocal.search();

    match cmd {
        SearchCommands::Rank(args) => {
            let results: Vec<SearchResult> = load_json(&args.file).await?;

            let query = SearchQuery {
                query: args.query,
                content_type: args
                    .content_type
                    .as_deref()
                    .map(parse_content_type)
                    .transpose()?,
                location: query_location(&args.location)?,
                category: None,
                sort_by: parse_sort_by(&args.sort)?,
                page: args.page,
                limit: args.limit.unwrap_or(search.config().default_page_size),
            };

            let page = search.search(results, &query);

            if output_format == "json" {
                print_json(&page);
            } else {
                print_search_page(&page);
            }
        }

        SearchCommands::Score(args) => {
            let results: Vec<SearchResult> = load_json(&args.file).await?;

            let mut query = SearchQuery::new(args.query);
            query.location = query_location(&args.location)?;

            let mut results: Vec<SearchResult> = match &args.id {
                Some(id) => results.into_iter().filter(|r| &r.id == id).collect(),
                None => results,
            };
            if results.is_empty()
                && let Some(id) = &args.id
            {
                return Err(glocal::GlocalError::InvalidInput(format!(
                    "No result with ID '{}'",
                    id
                )));
            }

            search.annotate_distances(&mut results, &query);

            let scores: Vec<(SearchResult, SearchScore)> = results
                .into_iter()
                .map(|result| {
                    let score = search.calculate_relevance_score(&result, &query);
                    (result, score)
                })
                .collect();

            if output_format == "json" {
                let rows: Vec<_> = scores
                    .iter()
                    .map(|(result, score)| json!({ "id": result.id, "score": score }))
                    .collect();
                print_json(&rows);
            } else {
                print_search_scores(&scores);
            }
        }

        SearchCommands::Suggest(args) => {
            let limit = args.limit.unwrap_or(search.config().suggestion_limit);
            let suggestions = generate_search_suggestions(&args.query, &args.history, limit);

            if output_format == "json" {
                print_json(&suggestions);
            } else if suggestions.is_empty() {
                println!("{}", format_info("No suggestions."));
            } else {
                for suggestion in &suggestions {
                    println!("{}", suggestion);
                }
            }
        }

        SearchCommands::Distance(args) => {
            let km = search.calculate_distance(args.lat1, args.lon1, args.lat2, args.lon2);

            if output_format == "json" {
                print_json(&json!({ "distanceKm": km }));
            } else {
                println!("{} km", format!("{:.2}", km).bold());
            }
        }
    }

    Ok(())
}
