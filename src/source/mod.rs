//! Markup-independent view of a table.
//!
//! Extractors only see [`TableSource`], so the same mapping code runs against
//! a parsed HTML document or a fixture built by hand.

use std::collections::HashMap;

mod html;

pub use self::html::HtmlTable;

/// An element inside a table cell (or the cell itself).
///
/// `text` is the concatenated text of the element and all its descendants;
/// `children` holds element children only, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    pub tag: String,
    pub text: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<CellView>,
}

impl CellView {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set the text of this element. Parents built afterwards include it in their text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element, extending this element's text with the child's.
    pub fn with_child(mut self, child: CellView) -> Self {
        self.text.push_str(&child.text);
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Follow a chain of child indices, e.g. `[0, 0, 0]` for the first
    /// child's first child's first child.
    pub fn descend(&self, path: &[usize]) -> Result<&CellView, DescendError> {
        let mut node = self;
        for (depth, &index) in path.iter().enumerate() {
            node = node.children.get(index).ok_or(DescendError {
                depth,
                index,
                available: node.children.len(),
            })?;
        }
        Ok(node)
    }
}

/// Where a [`CellView::descend`] walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescendError {
    pub depth: usize,
    pub index: usize,
    pub available: usize,
}

impl std::fmt::Display for DescendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected child #{} at depth {} but found {} children",
            self.index, self.depth, self.available
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn new(cells: Vec<CellView>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells.get(index)
    }

    /// A header row is made of `th` cells only.
    pub fn is_header(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|cell| cell.tag == "th")
    }
}

pub trait TableSource {
    /// Text of the table's first child element (a caption or heading row group).
    fn heading(&self) -> Option<String>;

    /// Body rows in document order, header rows included.
    fn rows(&self) -> Vec<RowView>;
}

/// A table assembled in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    pub heading: Option<String>,
    pub rows: Vec<RowView>,
}

impl TableSource for StaticTable {
    fn heading(&self) -> Option<String> {
        self.heading.clone()
    }

    fn rows(&self) -> Vec<RowView> {
        self.rows.clone()
    }
}
