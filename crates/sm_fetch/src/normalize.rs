use scraper::Html;
use serde::Deserialize;
use sm_core::text::{collapse_whitespace, normalize_display};
use sm_core::types::UNKNOWN_DATE;
use sm_core::Article;

/// One record of the NewsAPI `articles` array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Turn a raw record into an Article, or drop it.
///
/// Records need a link and at least one of title/summary with visible text.
/// A missing description falls back to the title; an empty one stays empty.
pub fn normalize_article(raw: RawArticle) -> Option<Article> {
    let link = raw.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())?;
    let title = raw.title.as_deref().map(normalize_display).unwrap_or_default();
    let summary = match raw.description.as_deref() {
        Some(description) => normalize_display(&strip_html(description)),
        None => title.clone(),
    };

    if title.trim().is_empty() && summary.trim().is_empty() {
        return None;
    }

    let source = raw
        .source
        .and_then(|s| s.name)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Unknown".to_string());
    let published_date = raw
        .published_at
        .filter(|d| !d.trim().is_empty())
        .map(|d| normalize_display(&d))
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    Some(Article::new(title, summary, link, source).with_published_date(published_date))
}

/// Descriptions sometimes carry markup or entities; keep only the text.
pub(crate) fn strip_html(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return fragment.to_string();
    }
    let document = Html::parse_fragment(fragment);
    let text = document.root_element().text().collect::<String>();
    collapse_whitespace(&text)
}
