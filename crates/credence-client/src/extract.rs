//! Main-text and title extraction from HTML.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::fetcher::FetchedArticle;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").expect("valid selector"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("valid selector"));

/// Extract the article body and `<title>` from a page.
///
/// The body is the paragraphs of the first `<article>` element when it has
/// any, otherwise every paragraph in the document. Whitespace is collapsed
/// and paragraphs are joined with single spaces. A missing or blank title
/// yields `None`.
#[must_use]
pub fn extract_article(html: &str) -> FetchedArticle {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|t| collapse(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty());

    let from_article = document
        .select(&ARTICLE)
        .next()
        .map(|article| paragraphs(article.select(&PARAGRAPH)))
        .filter(|p| !p.is_empty());

    let body = from_article.unwrap_or_else(|| paragraphs(document.select(&PARAGRAPH)));

    FetchedArticle {
        text: body.join(" "),
        title,
    }
}

fn paragraphs<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
    elements
        .map(|p| collapse(&p.text().collect::<String>()))
        .filter(|p| !p.is_empty())
        .collect()
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
