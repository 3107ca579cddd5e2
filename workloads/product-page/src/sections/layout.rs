//! Document shell around the page sections.

use crate::sections::escape_html;

/// Head content for the document.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline styles.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document shell: head, a header bar with the cart counter, and a mount point.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub cart_count: usize,
}

impl Shell {
    pub fn new(head: HeadContent, cart_count: usize) -> Self {
        Self { head, cart_count }
    }

    /// Wrap rendered sections into a full HTML document.
    pub fn render(&self, sections: &[String]) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!(
            r#"<header class="nav-bar">
    <div class="cart" data-cart-count="{count}">Cart({count})</div>
</header>
<div id="app">
"#,
            count = self.cart_count
        ));
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

/// Styles for the product page.
pub const PDP_STYLES: &str = r#"
body { font-family: tahoma, sans-serif; color: #282828; margin: 0; }
.nav-bar { background: linear-gradient(-90deg, #84cf6a, #16c0b0); height: 60px; margin-bottom: 15px; }
.cart { margin-right: 25px; float: right; border: 1px solid #d8d8d8; padding: 5px 20px; }
.product { display: flex; flex-flow: wrap; padding: 1rem; }
.product-image { width: 80%; flex-basis: 500px; }
.product-image img { border: 1px solid #d8d8d8; width: 70%; margin: 40px; box-shadow: 0 .5px 1px #d8d8d8; }
.product-info { margin-top: 10px; width: 50%; }
.product-title { display: flex; align-items: center; gap: 1rem; }
.sale-badge { color: red; }
.line-through { text-decoration: line-through; }
.color-box { width: 40px; height: 40px; margin-top: 5px; display: inline-block; }
.color-box--active { outline: 2px solid #282828; }
.sizes-wrapper { display: flex; gap: 0.5rem; margin: 1rem 0; }
button { margin-top: 30px; border: none; background-color: #1e95ea; color: white; height: 40px; width: 120px; font-size: 14px; }
button[disabled] { background-color: #d8d8d8; }
.review-tabs { padding: 16px; }
.tab { margin-right: 16px; cursor: pointer; }
.active-tab { color: #16c0b0; text-decoration: underline; }
.reviews-view { border-top: 1px solid #eee; margin-top: 16px; }
.review-form { width: 400px; padding: 20px; margin: 40px; border: 1px solid #d8d8d8; }
.form-errors { color: #cc0c39; }
input, textarea, select { width: 100%; height: 25px; margin-bottom: 20px; }
textarea { height: 60px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("Socks & more")
            .with_meta("viewport", "width=device-width")
            .with_style("body {}");
        let html = head.render();
        assert!(html.contains("<title>Socks &amp; more</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width">"#));
        assert!(html.contains("<style>body {}</style>"));
    }

    #[test]
    fn test_shell_wraps_sections_in_order() {
        let shell = Shell::new(HeadContent::new("PDP"), 2);
        let html = shell.render(&["<p>one</p>".to_string(), "<p>two</p>".to_string()]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Cart(2)"));
        let one = html.find("<p>one</p>").unwrap();
        let two = html.find("<p>two</p>").unwrap();
        assert!(one < two);
        assert!(html.trim_end().ends_with("</html>"));
    }
}
