//! HTML ingestion
//!
//! Loads producer-emitted leaderboard HTML into the mutable document
//! model. The html5ever-backed parser normalizes the markup on the way
//! in (implicit `tbody` insertion, lowercased tags), so the engines can
//! rely on a well-formed tree even for hand-written pages.

use scraper::{ElementRef, Html};

use crate::document::{Document, NodeId};

impl Document {
    /// Parse an HTML document into a fresh surface tree.
    pub fn parse_html(html: &str) -> Document {
        let parsed = Html::parse_document(html);
        let mut doc = Document::new();
        let root = doc.root();
        for (name, value) in parsed.root_element().value().attrs() {
            import_attr(&mut doc, root, name, value);
        }
        import_children(&mut doc, root, parsed.root_element());
        tracing::debug!(nodes = doc.descendants(root).len(), "parsed html document");
        doc
    }
}

fn import_children(doc: &mut Document, parent: NodeId, el: ElementRef<'_>) {
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let id = doc.create_element(child_el.value().name());
            for (name, value) in child_el.value().attrs() {
                import_attr(doc, id, name, value);
            }
            doc.adopt(parent, id);
            import_children(doc, id, child_el);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                doc.append_text(parent, trimmed);
            }
        }
    }
}

fn import_attr(doc: &mut Document, id: NodeId, name: &str, value: &str) {
    if name == "class" {
        for class in value.split_whitespace() {
            doc.add_class(id, class);
        }
    } else {
        doc.set_attr(id, name, value);
    }
}
