//! Footer paragraph model and its HTML form

/// Classes shared by every version paragraph
pub const PARAGRAPH_CLASS: &str = "text-gray-500 text-sm mt-1 text-center md:text-left";
pub const SUCCESS_CLASS: &str = "text-green-500";
pub const WARNING_CLASS: &str = "text-amber-500";
pub const BADGE_CLASS: &str = "inline-flex items-center bg-red-600 text-white text-xs px-2 py-0.5 rounded-md ml-1 cursor-pointer animate-pulse font-medium";

const BOLT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-3 w-3 mr-1" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" /></svg>"#;

/// Inline content of a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Span { class: String, text: String },
    /// Clickable badge opening `href` in a new browsing context
    Badge { class: String, text: String, href: String },
}

/// A paragraph inserted into the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub class: String,
    pub children: Vec<Node>,
    /// Tooltip carrying diagnostic detail
    pub title: Option<String>,
}

impl Element {
    pub fn paragraph(class: &str) -> Self {
        Self {
            class: class.to_string(),
            children: Vec::new(),
            title: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn span(mut self, class: &str, text: impl Into<String>) -> Self {
        self.children.push(Node::Span {
            class: class.to_string(),
            text: text.into(),
        });
        self
    }

    pub fn badge(mut self, class: &str, text: impl Into<String>, href: &str) -> Self {
        self.children.push(Node::Badge {
            class: class.to_string(),
            text: text.into(),
            href: href.to_string(),
        });
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the first badge link, if any
    pub fn badge_href(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            Node::Badge { href, .. } => Some(href.as_str()),
            _ => None,
        })
    }

    /// Visible text with markup stripped
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|node| match node {
                Node::Text(text) | Node::Span { text, .. } | Node::Badge { text, .. } => {
                    text.as_str()
                }
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<p class="{}""#, escape(&self.class));
        if let Some(title) = &self.title {
            html.push_str(&format!(r#" title="{}""#, escape(title)));
        }
        html.push('>');

        for node in &self.children {
            match node {
                Node::Text(text) => html.push_str(&escape(text)),
                Node::Span { class, text } => html.push_str(&format!(
                    r#"<span class="{}">{}</span>"#,
                    escape(class),
                    escape(text)
                )),
                Node::Badge { class, text, href } => html.push_str(&format!(
                    r#"<a class="{}" href="{}" target="_blank" rel="noopener">{}{}</a>"#,
                    escape(class),
                    escape(href),
                    BOLT_ICON,
                    escape(text)
                )),
            }
        }

        html.push_str("</p>");
        html
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
