//! `taxonomy check` command handler.

use std::path::Path;

use anyhow::Context;

/// Load and validate the taxonomy at `path`, printing a short summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub(crate) fn run_taxonomy_check(path: &Path) -> anyhow::Result<()> {
    let taxonomy = newslens_core::load_taxonomy(path)
        .with_context(|| format!("checking taxonomy {}", path.display()))?;

    let keyword_count: usize = taxonomy
        .topics
        .categories
        .iter()
        .map(|c| c.keywords.len())
        .sum();

    println!("taxonomy ok: {}", path.display());
    println!(
        "{:<22}{} / {}",
        "thresholds (+/-)",
        taxonomy.sentiment.positive_threshold,
        taxonomy.sentiment.negative_threshold
    );
    println!(
        "{:<22}{}",
        "negative cues",
        taxonomy.sentiment.negative_cues.len()
    );
    println!(
        "{:<22}{} ({keyword_count} keywords)",
        "categories",
        taxonomy.topics.categories.len()
    );
    println!(
        "{:<22}{}",
        "boilerplate terms",
        taxonomy.topics.boilerplate_terms.len()
    );

    Ok(())
}
