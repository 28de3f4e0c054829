//! Trending command handlers

use crate::commands::TrendingCommands;
use crate::context::GlocalCliContext;
use crate::output::*;
use crate::utils::{load_json, parse_period};
use colored::Colorize;
use glocal::models::{EngagementSample, TrendingContent};
use glocal::trending::{calculate_trending_momentum, calculate_trending_velocity};
use serde_json::json;

pub async fn handle_trending_command(
    cmd: TrendingCommands,
    ctx: &GlocalCliContext,
    output_format: &str,
) -> glocal::Result<()> {
    let trending = ctx.glocal.trending();

    match cmd {
        TrendingCommands::Rank(args) => {
            let content: Vec<TrendingContent> = load_json(&args.file).await?;
            let period = match args.period.as_deref() {
                Some(period) => parse_period(period)?,
                None => ctx.glocal.default_period(),
            };

            let content = match args.min_quality {
                Some(min) => trending.filter_by_quality(content, Some(min)),
                None => content,
            };

            let mut ranked = trending.rank_trending_content_with_metrics(content, period);
            if let Some(limit) = args.limit {
                ranked.truncate(limit);
            }

            if output_format == "json" {
                let rows: Vec<_> = ranked
                    .iter()
                    .map(|(content, metrics)| json!({ "content": content, "metrics": metrics }))
                    .collect();
                print_json(&json!({ "period": period, "results": rows }));
            } else {
                println!(
                    "{}",
                    format_info(&format!("Trending this {}:", period))
                );
                println!();
                print_trending_list(&ranked);
            }
        }

        TrendingCommands::Pattern(args) => {
            let content: Vec<TrendingContent> = load_json(&args.file).await?;

            if output_format == "json" {
                let rows: Vec<_> = content
                    .iter()
                    .map(|c| {
                        json!({
                            "id": c.id,
                            "velocity": c.engagement.velocity,
                            "pattern": trending.detect_trending_pattern(c),
                        })
                    })
                    .collect();
                print_json(&rows);
            } else {
                for c in &content {
                    println!(
                        "{:<12} {:<10} {:>8.2}/h  {}",
                        c.id.color(CliColors::accent()),
                        format_pattern(trending.detect_trending_pattern(c)),
                        c.engagement.velocity,
                        c.title
                    );
                }
            }
        }

        TrendingCommands::Insights(args) => {
            let content: Vec<TrendingContent> = load_json(&args.file).await?;

            if output_format == "json" {
                let rows: Vec<_> = content
                    .iter()
                    .map(|c| json!({ "id": c.id, "insights": trending.get_trending_insights(c) }))
                    .collect();
                print_json(&rows);
            } else {
                for (i, c) in content.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print_insights(c, &trending.get_trending_insights(c));
                }
            }
        }

        TrendingCommands::Velocity(args) => {
            let history: Vec<EngagementSample> = load_json(&args.file).await?;
            let velocity = calculate_trending_velocity(&history);
            let momentum = calculate_trending_momentum(&history);

            if output_format == "json" {
                print_json(&json!({
                    "samples": history.len(),
                    "velocity": velocity,
                    "momentum": momentum,
                }));
            } else {
                if history.len() < 2 {
                    println!(
                        "{}",
                        format_warning("At least two samples are needed to measure velocity")
                    );
                }
                println!("Velocity: {}/h", format!("{:.2}", velocity).bold());
                println!("Momentum: {}", format!("{:+.2}", momentum).bold());
            }
        }
    }

    Ok(())
}
