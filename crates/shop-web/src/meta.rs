//! Page title and meta tags.
//!
//! Pages describe themselves with a [`PageMeta`]; [`MetaTags`] merges it
//! over the site defaults and writes the result to a [`HeadSink`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filters::html_escape;

/// Site-wide defaults for every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Shopfront".to_string(),
            description: "Browse the catalog and fill your cart.".to_string(),
            image: String::new(),
            url: "http://localhost:4200".to_string(),
        }
    }
}

/// Per-page overrides. Unset fields fall back to [`SiteMeta`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Destination for title and meta tag writes.
pub trait HeadSink {
    fn set_title(&self, title: &str);

    /// Insert the tag, or replace the content of the tag with this name.
    fn update_tag(&self, name: &str, content: &str);
}

#[derive(Debug, Default)]
struct HeadState {
    title: Option<String>,
    tags: Vec<(String, String)>,
}

/// In-memory document head. Clones share the same head.
#[derive(Debug, Clone, Default)]
pub struct DocumentHead {
    state: Rc<RefCell<HeadState>>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }

    /// Content of the tag named `name`.
    pub fn tag(&self, name: &str) -> Option<String> {
        self.state
            .borrow()
            .tags
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.clone())
    }

    pub fn tag_count(&self) -> usize {
        self.state.borrow().tags.len()
    }

    /// Render the head contents to HTML.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        let mut html = String::new();

        if let Some(title) = &state.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &state.tags {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        html
    }
}

impl HeadSink for DocumentHead {
    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = Some(title.to_string());
    }

    fn update_tag(&self, name: &str, content: &str) {
        let mut state = self.state.borrow_mut();
        match state.tags.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = content.to_string(),
            None => state.tags.push((name.to_string(), content.to_string())),
        }
    }
}

/// Writes page metadata to the document head.
#[derive(Clone)]
pub struct MetaTags {
    sink: Rc<dyn HeadSink>,
    site: SiteMeta,
}

impl MetaTags {
    pub fn new(sink: Rc<dyn HeadSink>, site: SiteMeta) -> Self {
        Self { sink, site }
    }

    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    /// Set the title and the six standard tags for `page`.
    pub fn update_meta_tags(&self, page: PageMeta) {
        let title = page.title.unwrap_or_else(|| self.site.name.clone());
        let description = page
            .description
            .unwrap_or_else(|| self.site.description.clone());
        let image = page.image.unwrap_or_else(|| self.site.image.clone());
        let url = page.url.unwrap_or_else(|| self.site.url.clone());
        debug!(%title, %url, "updating meta tags");

        self.sink.set_title(&title);
        for (name, content) in [
            ("title", &title),
            ("description", &description),
            ("og:title", &title),
            ("og:description", &description),
            ("og:image", &image),
            ("og:url", &url),
        ] {
            self.sink.update_tag(name, content);
        }
    }
}

impl fmt::Debug for MetaTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaTags")
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        titles: RefCell<Vec<String>>,
        tags: RefCell<Vec<(String, String)>>,
    }

    impl HeadSink for RecordingSink {
        fn set_title(&self, title: &str) {
            self.titles.borrow_mut().push(title.to_string());
        }

        fn update_tag(&self, name: &str, content: &str) {
            self.tags
                .borrow_mut()
                .push((name.to_string(), content.to_string()));
        }
    }

    fn tag(name: &str, content: &str) -> (String, String) {
        (name.to_string(), content.to_string())
    }

    #[test]
    fn test_update_meta_tags_calls() {
        let sink = Rc::new(RecordingSink::default());
        let meta = MetaTags::new(sink.clone(), SiteMeta::default());

        meta.update_meta_tags(
            PageMeta::new()
                .title("Test Title")
                .description("Test Description")
                .image("test-image.jpg")
                .url("https://example.com"),
        );

        assert_eq!(*sink.titles.borrow(), vec!["Test Title".to_string()]);
        let tags = sink.tags.borrow();
        assert_eq!(tags.len(), 6);
        assert!(tags.contains(&tag("title", "Test Title")));
        assert!(tags.contains(&tag("description", "Test Description")));
        assert!(tags.contains(&tag("og:image", "test-image.jpg")));
        assert!(tags.contains(&tag("og:url", "https://example.com")));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let head = DocumentHead::new();
        let site = SiteMeta {
            name: "Store".into(),
            description: "Everything".into(),
            image: "logo.png".into(),
            url: "https://store.test".into(),
        };
        let meta = MetaTags::new(Rc::new(head.clone()), site);

        meta.update_meta_tags(PageMeta::new().title("Shoes"));

        assert_eq!(head.title().as_deref(), Some("Shoes"));
        assert_eq!(head.tag("og:title").as_deref(), Some("Shoes"));
        assert_eq!(head.tag("description").as_deref(), Some("Everything"));
        assert_eq!(head.tag("og:image").as_deref(), Some("logo.png"));
        assert_eq!(head.tag("og:url").as_deref(), Some("https://store.test"));
    }

    #[test]
    fn test_document_head_replaces_tags() {
        let head = DocumentHead::new();
        let meta = MetaTags::new(Rc::new(head.clone()), SiteMeta::default());

        meta.update_meta_tags(PageMeta::new().title("First"));
        meta.update_meta_tags(PageMeta::new().title("Second"));

        assert_eq!(head.tag_count(), 6);
        assert_eq!(head.tag("title").as_deref(), Some("Second"));
    }

    #[test]
    fn test_document_head_render() {
        let head = DocumentHead::new();
        head.set_title("A & B");
        head.update_tag("description", "\"quoted\"");

        let html = head.render();

        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<meta name="description" content="&quot;quoted&quot;">"#));
    }
}
