//! Render target abstraction and the in-memory footer document

use crate::render::element::Element;

/// Place a version paragraph can be put into
///
/// Insertion methods hand the element back when the target lacks the
/// corresponding location, so the caller can try another one.
pub trait RenderTarget {
    /// Insert directly after the existing footer text element
    fn insert_after(&mut self, element: Element) -> Result<(), Element>;

    /// Append into the fallback footer container
    fn append_child(&mut self, element: Element) -> Result<(), Element>;

    /// Returns true if a style block with `id` is already registered
    fn has_style(&self, id: &str) -> bool;

    /// Register a style block
    fn add_style(&mut self, id: &str, css: &str);
}

/// Footer kept in memory and serialised as an HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterDocument {
    anchor: Option<String>,
    has_container: bool,
    inserted: Vec<Element>,
    appended: Vec<Element>,
    styles: Vec<(String, String)>,
}

impl FooterDocument {
    /// Footer whose existing text paragraph (given as HTML) is the insertion anchor
    pub fn with_anchor(anchor_html: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor_html.into()),
            has_container: true,
            ..Self::default()
        }
    }

    /// Footer with only the fallback container
    pub fn with_container() -> Self {
        Self {
            has_container: true,
            ..Self::default()
        }
    }

    /// Footer offering no insertion point at all
    pub fn detached() -> Self {
        Self::default()
    }

    /// Elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.inserted.iter().chain(self.appended.iter())
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for (id, css) in &self.styles {
            html.push_str(&format!("<style id=\"{id}\">{css}</style>\n"));
        }

        html.push_str("<footer class=\"footer\">\n<div class=\"container\">\n<div>\n");
        if let Some(anchor) = &self.anchor {
            html.push_str(anchor);
            html.push('\n');
            for element in &self.inserted {
                html.push_str(&element.to_html());
                html.push('\n');
            }
        }
        for element in &self.appended {
            html.push_str(&element.to_html());
            html.push('\n');
        }
        html.push_str("</div>\n</div>\n</footer>\n");

        html
    }
}

impl RenderTarget for FooterDocument {
    fn insert_after(&mut self, element: Element) -> Result<(), Element> {
        if self.anchor.is_none() {
            return Err(element);
        }
        // Each insertion lands immediately after the anchor
        self.inserted.insert(0, element);
        Ok(())
    }

    fn append_child(&mut self, element: Element) -> Result<(), Element> {
        if !self.has_container {
            return Err(element);
        }
        self.appended.push(element);
        Ok(())
    }

    fn has_style(&self, id: &str) -> bool {
        self.styles.iter().any(|(existing, _)| existing == id)
    }

    fn add_style(&mut self, id: &str, css: &str) {
        self.styles.push((id.to_string(), css.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_after_places_newest_element_next_to_anchor() {
        let mut footer = FooterDocument::with_anchor("<p>© Example</p>");

        footer.insert_after(Element::paragraph("a").text("first")).unwrap();
        footer.insert_after(Element::paragraph("b").text("second")).unwrap();

        let texts: Vec<String> = footer.elements().map(Element::text_content).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn insert_after_returns_element_without_anchor() {
        let mut footer = FooterDocument::with_container();
        let element = Element::paragraph("a").text("x");

        assert_eq!(footer.insert_after(element.clone()), Err(element));
    }

    #[test]
    fn detached_footer_rejects_every_insertion() {
        let mut footer = FooterDocument::detached();
        let element = Element::paragraph("a");

        assert!(footer.insert_after(element.clone()).is_err());
        assert!(footer.append_child(element).is_err());
        assert_eq!(footer.elements().count(), 0);
    }

    #[test]
    fn to_html_emits_styles_then_footer() {
        let mut footer = FooterDocument::with_anchor("<p>© Example</p>");
        footer.add_style("pulse", "@keyframes pulse {}");
        footer.insert_after(Element::paragraph("v").text("Version: 1.0.0")).unwrap();

        assert_eq!(
            footer.to_html(),
            "<style id=\"pulse\">@keyframes pulse {}</style>\n\
             <footer class=\"footer\">\n<div class=\"container\">\n<div>\n\
             <p>© Example</p>\n\
             <p class=\"v\">Version: 1.0.0</p>\n\
             </div>\n</div>\n</footer>\n"
        );
    }
}
