//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Renders markdown (article bodies from the box office) as HTML.
///
/// Usage in templates: `{{ article.body|markdown|safe }}`
#[askama::filter_fn]
pub fn markdown(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let source = value.to_string();
    Ok(comrak::markdown_to_html(
        &source,
        &comrak::Options::default(),
    ))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_markdown_renders_emphasis() {
        let html = comrak::markdown_to_html("*encore*", &comrak::Options::default());
        assert!(html.contains("<em>encore</em>"));
    }

    #[test]
    fn test_markdown_escapes_raw_html() {
        // Comrak's default options do not pass raw HTML through.
        let html = comrak::markdown_to_html("<script>alert(1)</script>", &comrak::Options::default());
        assert!(!html.contains("<script>"));
    }
}
