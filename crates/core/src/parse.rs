//! HTML parsing into an XPath-queryable document tree.
//!
//! Markup is tokenized by html5ever (through `scraper`), which never rejects
//! input and repairs broken structure the way browsers do. The resulting
//! element/text tree is then mirrored into an `sxd_document` package so the
//! extractors can address nodes with XPath 1.0 expressions.
//!
//! # Example
//!
//! ```rust
//! use shelfwise_core::{Document, XPathEvaluator};
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1 id="profileNameTopHeading">Jane Doe</h1>
//!             <div id="shelves"><a>Read (42)</a>
//!         </body>
//! "#;
//!
//! let doc = Document::parse(html);
//! let evaluator = XPathEvaluator::new();
//! let name = evaluator.first_string(&doc, "//*[@id='profileNameTopHeading']").unwrap();
//! assert_eq!(name.as_deref(), Some("Jane Doe"));
//! ```

use scraper::{ElementRef, Html, Node};
use sxd_document::{Package, dom};
use sxd_xpath::nodeset;

use crate::XPathEvaluator;

/// A parsed HTML document.
///
/// Built once from raw markup and then only read. Comments, doctypes and
/// processing instructions are dropped; elements, attributes and text nodes
/// keep their document order.
pub struct Document {
    package: Package,
}

impl Document {
    /// Parses HTML leniently. Malformed markup is repaired, never rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfwise_core::Document;
    ///
    /// let doc = Document::parse("<p>unclosed <b>tags");
    /// assert_eq!(doc.text_content(), "unclosed tags");
    /// ```
    pub fn parse(html: &str) -> Self {
        let source = Html::parse_document(html);
        let package = Package::new();

        {
            let doc = package.as_document();
            let root = mirror_element(&doc, source.root_element());
            doc.root().append_child(root);
        }

        Self { package }
    }

    /// Borrow the underlying `sxd_document` tree for XPath evaluation.
    pub fn as_sxd(&self) -> dom::Document<'_> {
        self.package.as_document()
    }

    /// Gets all text content from the document, in document order.
    pub fn text_content(&self) -> String {
        let doc = self.as_sxd();
        nodeset::Node::from(doc.root()).string_value()
    }

    /// Gets the trimmed content of the `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        XPathEvaluator::new()
            .first_string(self, "//title")
            .ok()
            .flatten()
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
    }
}

/// Copies `source` and its element/text descendants into `doc`.
fn mirror_element<'d>(doc: &dom::Document<'d>, source: ElementRef<'_>) -> dom::Element<'d> {
    let value = source.value();
    let element = doc.create_element(value.name());

    for (name, attr_value) in value.attrs() {
        element.set_attribute_value(name, attr_value);
    }

    for child in source.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            element.append_child(mirror_element(doc, child_element));
        } else if let Node::Text(text) = child.value() {
            element.append_child(doc.create_text(text));
        }
    }

    element
}
