//! RSS item extraction and text cleanup.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::AnalysisError;
use crate::types::RawArticle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Other,
}

/// Parse the `<item>` elements of an RSS document into raw articles.
///
/// Titles keep their text as published, with whitespace collapsed.
/// Descriptions are stripped of markup and cut to `summary_max_chars`
/// characters. A field that is absent or blank comes back as `None`.
/// Stops after `max_items` items.
///
/// # Errors
///
/// Returns [`AnalysisError::Xml`] if the document is not well-formed.
pub fn parse_rss_items(
    xml: &str,
    max_items: usize,
    summary_max_chars: usize,
) -> Result<Vec<RawArticle>, AnalysisError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut in_item = false;
    let mut field = Field::Other;
    let mut title = String::new();
    let mut description = String::new();

    if max_items == 0 {
        return Ok(articles);
    }

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    field = Field::Other;
                    title.clear();
                    description.clear();
                }
                b"title" if in_item => field = Field::Title,
                b"description" if in_item => field = Field::Description,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" if in_item => {
                    in_item = false;
                    articles.push(RawArticle {
                        title: non_blank(collapse_whitespace(&title)),
                        summary: clean_summary(&description, summary_max_chars),
                    });
                    if articles.len() >= max_items {
                        break;
                    }
                }
                b"title" | b"description" => field = Field::Other,
                _ => {}
            },
            Ok(Event::Text(e)) if in_item => {
                let text = e.unescape().unwrap_or_default();
                append(field, &text, &mut title, &mut description);
            }
            Ok(Event::CData(e)) if in_item => {
                let text = String::from_utf8_lossy(e.as_ref());
                append(field, &text, &mut title, &mut description);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AnalysisError::Xml(e)),
            _ => {}
        }
    }

    Ok(articles)
}

fn append(field: Field, text: &str, title: &mut String, description: &mut String) {
    let target = match field {
        Field::Title => title,
        Field::Description => description,
        Field::Other => return,
    };
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

fn non_blank(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Markup-free summary cut to `max_chars`, or `None` when nothing is left.
pub(crate) fn clean_summary(raw: &str, max_chars: usize) -> Option<String> {
    non_blank(truncate_chars(&strip_html(raw), max_chars))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip HTML tags from a string and normalize whitespace.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    collapse_whitespace(&out)
}

/// The first `max_chars` characters of `text`, never splitting a character.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].trim_end().to_string(),
        None => text.to_string(),
    }
}
