//! Handlebars-based template rendering.
//!
//! A template is arbitrary text with a `{{content}}` placeholder. The only
//! values that can be bound are [`RawHtml`], HTML that has already been
//! produced by the Markdown renderer, so the renderer inserts values
//! verbatim instead of escaping them.

use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeMap;

/// Name of the placeholder the document body is bound to
pub const CONTENT_KEY: &str = "content";

/// A string that is already valid, escaped HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawHtml(String);

impl RawHtml {
    /// Mark `html` as pre-escaped
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

}

impl From<String> for RawHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

/// Values available to a template during rendering
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: BTreeMap<String, RawHtml>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with only the document body bound to `content`
    pub fn with_content(html: RawHtml) -> Self {
        let mut context = Self::new();
        context.insert(CONTENT_KEY, html);
        context
    }

    fn insert(&mut self, key: impl Into<String>, value: RawHtml) {
        self.values.insert(key.into(), value);
    }
}

/// Template renderer using Handlebars in non-strict mode, so unknown
/// variables render empty.
///
/// Escaping is switched off for the whole engine. This is sound only
/// because [`render`](Self::render) accepts nothing but a
/// [`TemplateContext`], and a `TemplateContext` can only hold [`RawHtml`].
/// Any new way of binding plain strings must escape them itself.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        // every bound value is RawHtml
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given context; values are
    /// inserted verbatim
    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, handlebars::RenderError> {
        self.hbs.render_template(template, context)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(html: &str) -> TemplateContext {
        TemplateContext::with_content(RawHtml::new(html))
    }

    #[test]
    fn test_content_is_not_escaped() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("<body>{{content}}</body>", &body("<h1>Hi</h1>\n"))
            .unwrap();
        assert_eq!(out, "<body><h1>Hi</h1>\n</body>");
    }

    #[test]
    fn test_triple_stash_and_whitespace() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("<main>{{{ content }}}</main>", &body("<p>a &amp; b</p>"))
            .unwrap();
        assert_eq!(out, "<main><p>a &amp; b</p></main>");
    }

    #[test]
    fn test_unknown_variables_render_empty() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("<title>{{title}}</title>{{content}}", &body("<p>x</p>"))
            .unwrap();
        assert_eq!(out, "<title></title><p>x</p>");
    }

    #[test]
    fn test_template_without_placeholder() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render("<p>static</p>", &body("<p>x</p>")).unwrap();
        assert_eq!(out, "<p>static</p>");
    }

    #[test]
    fn test_malformed_template_fails() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.render("{{#if content}}open", &body("x")).is_err());
        assert!(renderer.render("{{content", &body("x")).is_err());
    }

    #[test]
    fn test_raw_html_from_string() {
        assert_eq!(RawHtml::from("<b>x</b>".to_string()), RawHtml::new("<b>x</b>"));
    }

    #[test]
    fn test_raw_values_are_never_escaped() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render(
                "{{content}}|{{{content}}}",
                &body("<a href=\"x?a=1&b=2\">'q'</a>"),
            )
            .unwrap();
        assert_eq!(
            out,
            "<a href=\"x?a=1&b=2\">'q'</a>|<a href=\"x?a=1&b=2\">'q'</a>"
        );
    }
}
