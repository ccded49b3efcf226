use sxd_xpath::{Context, Factory, Value, XPath};

use crate::error::{Result, ShelfwiseError};
use crate::parse::Document;

/// XPath 1.0 evaluator over parsed [`Document`]s.
pub struct XPathEvaluator {
    factory: Factory,
}

impl XPathEvaluator {
    /// Create a new XPath evaluator
    pub fn new() -> Self {
        Self { factory: Factory::new() }
    }

    /// Compile an expression, rejecting syntax errors and empty input
    pub fn compile(&self, xpath: &str) -> Result<XPath> {
        self.factory
            .build(xpath)
            .map_err(|e| ShelfwiseError::InvalidXPath { xpath: xpath.to_string(), reason: e.to_string() })?
            .ok_or_else(|| ShelfwiseError::InvalidXPath {
                xpath: xpath.to_string(),
                reason: "empty expression".to_string(),
            })
    }

    /// Evaluate an expression and return the string value of the first node in
    /// document order, or the result itself for string expressions
    pub fn first_string(&self, doc: &Document, xpath: &str) -> Result<Option<String>> {
        let compiled = self.compile(xpath)?;
        let sxd = doc.as_sxd();

        let context = Context::new();
        match compiled.evaluate(&context, sxd.root())? {
            Value::String(s) => Ok(Some(s)),
            Value::Nodeset(nodeset) => Ok(nodeset.document_order().into_iter().next().map(|node| node.string_value())),
            Value::Boolean(_) => Ok(None),
            Value::Number(_) => Ok(None),
        }
    }

    /// Evaluate an expression and return the string value of every matching
    /// node, in document order
    pub fn all_strings(&self, doc: &Document, xpath: &str) -> Result<Vec<String>> {
        let compiled = self.compile(xpath)?;
        let sxd = doc.as_sxd();

        let context = Context::new();
        match compiled.evaluate(&context, sxd.root())? {
            Value::Nodeset(nodeset) => Ok(nodeset.document_order().iter().map(|node| node.string_value()).collect()),
            _ => Ok(Vec::new()),
        }
    }
}

impl Default for XPathEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
