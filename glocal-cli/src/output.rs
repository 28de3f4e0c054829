use colored::*;
use glocal::GlocalError;
use glocal::config::GlocalConfig;
use glocal::models::{
    ContentType, SearchPage, SearchResult, SearchScore, TrendPattern, TrendingContent,
    TrendingInsights, TrendingMetrics,
};
use serde::Serialize;
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }
}

fn error_code(error: &GlocalError) -> &'static str {
    match error {
        GlocalError::Configuration(_) => "CONFIGURATION_ERROR",
        GlocalError::Logging(_) => "LOGGING_ERROR",
        GlocalError::InvalidInput(_) => "INVALID_INPUT",
        GlocalError::Serialization(_) => "SERIALIZATION_ERROR",
        GlocalError::Io(_) => "IO_ERROR",
    }
}

/// Output a GlocalError, as structured JSON in json mode
pub fn output_error_json(error: &GlocalError, output_format: &str) {
    if output_format == "json" {
        let error_response = json!({
            "error": true,
            "code": error_code(error),
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

/// Pretty-print any serializable value
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_pattern(pattern: TrendPattern) -> ColoredString {
    match pattern {
        TrendPattern::Rising => "rising".color(CliColors::success()).bold(),
        TrendPattern::Stable => "stable".color(CliColors::info()),
        TrendPattern::Declining => "declining".color(CliColors::muted()),
    }
}

fn format_content_type(content_type: ContentType) -> ColoredString {
    match content_type {
        ContentType::Event => "event".color(CliColors::accent()),
        ContentType::Artist => "artist".color(CliColors::warning()),
        ContentType::Post | ContentType::Group => {
            content_type.to_string().color(CliColors::info())
        }
    }
}

/// Shorten to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{:.1}{}", v, unit))
        .unwrap_or_else(|| "-".to_string())
}

pub fn print_search_page(page: &SearchPage) {
    if page.results.is_empty() {
        println!("{}", format_info("No results found."));
        return;
    }

    println!(
        "{}",
        format_info(&format!(
            "Showing {} of {} results (page {})",
            page.results.len(),
            page.total,
            page.page
        ))
    );
    println!();

    println!(
        "{:<12} {:<8} {:>9} {:>10} {}",
        "ID".color(CliColors::muted()).bold(),
        "Type".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Distance".color(CliColors::muted()).bold(),
        "Title".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(80).color(CliColors::muted()));

    for result in &page.results {
        print_search_row(result);
    }

    if page.has_more {
        println!();
        println!(
            "{}",
            format!("More results available: --page {}", page.page + 1).color(CliColors::muted())
        );
    }
}

fn print_search_row(result: &SearchResult) {
    println!(
        "{:<12} {:<8} {:>9} {:>10} {}",
        truncate(&result.id, 12).color(CliColors::accent()),
        format_content_type(result.content_type),
        format_optional(result.relevance_score, ""),
        format_optional(result.distance, " km"),
        truncate(&result.title, 40).color(CliColors::primary())
    );
}

pub fn print_search_scores(scores: &[(SearchResult, SearchScore)]) {
    if scores.is_empty() {
        println!("{}", format_info("No results to score."));
        return;
    }

    println!(
        "{:<12} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7}  {}",
        "ID".color(CliColors::muted()).bold(),
        "Text".color(CliColors::muted()).bold(),
        "Loc".color(CliColors::muted()).bold(),
        "Cat".color(CliColors::muted()).bold(),
        "Eng".color(CliColors::muted()).bold(),
        "Fresh".color(CliColors::muted()).bold(),
        "Total".color(CliColors::muted()).bold(),
        "Title".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(80).color(CliColors::muted()));

    for (result, score) in scores {
        println!(
            "{:<12} {:>6.1} {:>6.1} {:>6.1} {:>6.2} {:>6.1} {:>7}  {}",
            truncate(&result.id, 12).color(CliColors::accent()),
            score.text_relevance,
            score.location_relevance,
            score.category_relevance,
            score.engagement_score,
            score.freshness_score,
            format!("{:.2}", score.total_score).bold(),
            truncate(&result.title, 30)
        );
    }
}

pub fn print_trending_list(ranked: &[(TrendingContent, TrendingMetrics)]) {
    if ranked.is_empty() {
        println!("{}", format_info("No trending content."));
        return;
    }

    println!(
        "{:>3} {:<12} {:<14} {:>7} {:>6} {:>6} {:>6}  {}",
        "#".color(CliColors::muted()).bold(),
        "ID".color(CliColors::muted()).bold(),
        "Category".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Eng".color(CliColors::muted()).bold(),
        "Vel".color(CliColors::muted()).bold(),
        "Qual".color(CliColors::muted()).bold(),
        "Title".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(80).color(CliColors::muted()));

    for (rank, (content, metrics)) in ranked.iter().enumerate() {
        println!(
            "{:>3} {:<12} {:<14} {:>7} {:>6.1} {:>6.1} {:>6.1}  {}",
            rank + 1,
            truncate(&content.id, 12).color(CliColors::accent()),
            truncate(&content.category, 14),
            format!("{:.2}", metrics.total_score).bold(),
            metrics.engagement_score,
            metrics.velocity_score,
            metrics.quality_score,
            truncate(&content.title, 30).color(CliColors::primary())
        );
    }
}

pub fn print_insights(content: &TrendingContent, insights: &TrendingInsights) {
    println!(
        "{} {} ({})",
        content.title.color(CliColors::primary()).bold(),
        format_pattern(insights.pattern),
        insights.momentum.color(CliColors::muted())
    );
    println!("  {}", insights.prediction);
    for recommendation in &insights.recommendations {
        println!("  {} {}", "•".color(CliColors::accent()), recommendation);
    }
}

pub fn print_config(config: &GlocalConfig) {
    let weights = &config.search.weights;
    println!("{}", "Search".bold());
    println!(
        "  weights            text {:.2}, location {:.2}, category {:.2}, engagement {:.2}, freshness {:.2}",
        weights.text, weights.location, weights.category, weights.engagement, weights.freshness
    );
    println!("  suggestion_limit   {}", config.search.suggestion_limit);
    println!("  default_page_size  {}", config.search.default_page_size);

    let trending = &config.trending;
    println!("{}", "Trending".bold());
    println!("  default_period     {}", trending.default_period);
    println!("  decay_rate         {}", trending.decay_rate);
    println!("  min_quality_score  {}", trending.min_quality_score);
    println!(
        "  thresholds         rising > {}, stable > {}",
        trending.rising_velocity, trending.stable_velocity
    );

    let logging = &config.logging;
    println!("{}", "Logging".bold());
    println!("  level              {}", logging.level);
    println!("  format             {:?}", logging.format);
    match &logging.file {
        Some(path) => println!("  file               {}", path.display()),
        None => println!("  file               {}", "-".color(CliColors::muted())),
    }
    println!("  stdout             {}", logging.stdout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Café au lait festival", 10), "Café au...");
        assert_eq!(truncate("🎷🎷🎷🎷🎷", 4), "🎷...");
    }

    #[test]
    fn test_error_codes_cover_every_variant() {
        let cases = [
            (GlocalError::Configuration("bad".into()), "CONFIGURATION_ERROR"),
            (
                GlocalError::Logging(glocal::logging::LogError::IoError(std::io::Error::other(
                    "closed",
                ))),
                "LOGGING_ERROR",
            ),
            (GlocalError::InvalidInput("bad".into()), "INVALID_INPUT"),
            (
                GlocalError::Serialization(
                    serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
                ),
                "SERIALIZATION_ERROR",
            ),
            (
                GlocalError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
                "IO_ERROR",
            ),
        ];
        for (error, code) in &cases {
            assert_eq!(error_code(error), *code);
        }
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, " km"), "-");
        assert_eq!(format_optional(Some(3.14159), " km"), "3.1 km");
    }
}
