//! Markdown rendering of a comparative report for terminal output.

use chrono::Utc;
use newslens_analysis::ComparativeReport;

/// Render `report` as a markdown document.
#[must_use]
pub(crate) fn render_text(report: &ComparativeReport) -> String {
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let mut lines = vec![
        format!("# News Report: {}", report.company),
        String::new(),
        format!("**Generated**: {now}"),
        format!("**Articles**: {}", report.articles.len()),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    if !report.articles.is_empty() {
        lines.push("| # | Title | Sentiment | Topics |".to_string());
        lines.push("|---|-------|-----------|--------|".to_string());
        for (idx, article) in report.articles.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                idx + 1,
                escape_cell(&article.title),
                article.sentiment,
                article.topics.join(", ")
            ));
        }
        lines.push(String::new());
    }

    if let Some(score) = &report.comparative_sentiment_score {
        lines.push("## Sentiment Distribution".to_string());
        lines.push(String::new());
        for (sentiment, count) in &score.sentiment_distribution {
            lines.push(format!("- {sentiment}: {count}"));
        }
        lines.push(String::new());

        if !score.coverage_differences.is_empty() {
            lines.push("## Coverage Differences".to_string());
            lines.push(String::new());
            for difference in &score.coverage_differences {
                lines.push(format!("- {}", difference.comparison));
                lines.push(format!("  {}", difference.impact));
            }
            lines.push(String::new());
        }

        let overlap = &score.topic_overlap;
        lines.push("## Topic Overlap".to_string());
        lines.push(String::new());
        let common = if overlap.common_topics.is_empty() {
            "none".to_string()
        } else {
            overlap.common_topics.join(", ")
        };
        lines.push(format!("- Common: {common}"));
        for (ordinal, topics) in &overlap.unique_topics {
            lines.push(format!("- Article {ordinal} only: {}", topics.join(", ")));
        }
        lines.push(String::new());
    }

    lines.push(format!("**Verdict**: {}", report.final_sentiment_analysis));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
