//! Display-title inference for HTML documents.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid h1 regex"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Derives a display title for a document.
///
/// Sources are tried in order and the first one present wins:
/// 1. the first `<title>` element, tags stripped and trimmed, even when the
///    result is empty;
/// 2. the first `<h1>` element, tags and `#` markers stripped and trimmed;
/// 3. the file stem of `filename` with `-` and `_` replaced by spaces.
///
/// Matching is a permissive case-insensitive text scan; unclosed tags simply
/// fall through to the next source. Entities are not decoded.
pub fn extract_title(content: &str, filename: &str) -> String {
    if let Some(inner) = first_capture(&TITLE_RE, content) {
        return strip_tags(inner).trim().to_string();
    }

    if let Some(inner) = first_capture(&H1_RE, content) {
        return strip_tags(inner).replace('#', "").trim().to_string();
    }

    title_from_filename(filename)
}

/// Converts `my-cool_post.html` into `my cool post`.
pub fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map_or_else(|| filename.to_string(), |stem| stem.to_string_lossy().to_string());

    stem.replace(['-', '_'], " ")
}

fn first_capture<'a>(pattern: &Regex, content: &'a str) -> Option<&'a str> {
    pattern
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
}

fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}
