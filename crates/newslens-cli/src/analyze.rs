//! `analyze` and `fetch` command handlers.

use std::path::Path;

use anyhow::Context;
use newslens_analysis::{
    Analyzer, ArticleSource, BingNewsSource, ComparativeReport, JsonFileSource,
};
use newslens_core::{AppConfig, TaxonomyOrigin};

use crate::render::render_text;
use crate::OutputFormat;

/// Build the analyzer from the configured taxonomy file, or the built-in
/// taxonomy when the file does not exist.
///
/// # Errors
///
/// Returns an error if the taxonomy file exists but is invalid.
pub(crate) fn build_analyzer(config: &AppConfig) -> anyhow::Result<Analyzer> {
    let (taxonomy, origin) = newslens_core::load_taxonomy_or_builtin(&config.taxonomy_path)?;
    if origin == TaxonomyOrigin::Builtin {
        tracing::warn!(
            path = %config.taxonomy_path.display(),
            "taxonomy file not found; using built-in taxonomy"
        );
    }
    Ok(Analyzer::new(&taxonomy)?)
}

/// Build and print a comparative report for `company`.
///
/// With `input`, articles come from that JSON file and a read failure is an
/// error. Without it, articles come from the news feed, and a feed failure
/// produces the empty-batch report.
///
/// # Errors
///
/// Returns an error if the company is blank, the taxonomy is invalid, or the
/// input file cannot be read.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    company: &str,
    input: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let company = company.trim();
    anyhow::ensure!(!company.is_empty(), "company name must not be blank");

    let analyzer = build_analyzer(config)?;

    let report = if let Some(path) = input {
        let articles = JsonFileSource::from_config(path, config)
            .fetch_articles(company)
            .await
            .with_context(|| format!("loading articles from {}", path.display()))?;
        analyzer.analyze_articles(company, articles)
    } else {
        let source = BingNewsSource::from_config(config)?;
        analyzer.analyze_company(&source, company).await
    };

    print_report(&report, format)
}

fn print_report(report: &ComparativeReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}

/// Print the raw articles the feed returns for `company` as JSON.
///
/// # Errors
///
/// Returns an error if the company is blank or the feed request fails.
pub(crate) async fn run_fetch(config: &AppConfig, company: &str) -> anyhow::Result<()> {
    let company = company.trim();
    anyhow::ensure!(!company.is_empty(), "company name must not be blank");

    let source = BingNewsSource::from_config(config)?;
    let articles = source
        .fetch_articles(company)
        .await
        .with_context(|| format!("fetching news for '{company}'"))?;

    if articles.is_empty() {
        println!("no articles found for '{company}'");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&articles)?);
    Ok(())
}
