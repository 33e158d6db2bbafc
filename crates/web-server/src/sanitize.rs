//! Neutralizes markup in article text before it is sent to a client.

use core_types::Article;
use std::borrow::Cow;

/// Escapes the markup delimiters `<` and `>` so embedded tags render as text.
///
/// Every other character, `&` included, is kept as is. The output never contains
/// a delimiter, so sanitizing twice gives the same result as sanitizing once.
/// Returns a borrowed reference when there is nothing to escape.
pub fn sanitize_text(input: &str) -> Cow<'_, str> {
    if !input.contains(['<', '>']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Sanitizes the free-text fields of an outbound article.
/// `id`, `style`, `date_published` and `author` pass through untouched.
pub fn sanitize_article(mut article: Article) -> Article {
    if let Cow::Owned(title) = sanitize_text(&article.title) {
        article.title = title;
    }
    if let Cow::Owned(content) = sanitize_text(&article.content) {
        article.content = content;
    }
    article
}
