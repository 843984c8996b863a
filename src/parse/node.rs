use scraper::{ElementRef, Html};

use super::text::element_text;
use crate::static_selector;

/// A menu page row, classified once so the extractor never looks at class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Category(String),
    Dish(String),
    Other,
}

impl MenuNode {
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    pub fn dish(name: impl Into<String>) -> Self {
        Self::Dish(name.into())
    }

    /// Category rows carry the `category` class. Any other row is a dish if it
    /// holds a link, and unrecognised otherwise.
    pub fn from_html_element(element: ElementRef<'_>) -> Self {
        static_selector!(CELL_SELECTOR <- "td");
        static_selector!(LINK_SELECTOR <- "a");
        if element.value().classes().any(|class| class == "category") {
            let label = element.select(&CELL_SELECTOR).next().unwrap_or(element);
            Self::Category(element_text(label))
        } else if let Some(link) = element.select(&LINK_SELECTOR).next() {
            Self::Dish(element_text(link))
        } else {
            Self::Other
        }
    }
}

/// Sibling sequences of a menu page, in document order.
///
/// Only parents holding at least one category row are kept; each run lists
/// that parent's element children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    runs: Vec<Vec<MenuNode>>,
}

impl MenuTree {
    pub const fn new(runs: Vec<Vec<MenuNode>>) -> Self {
        Self { runs }
    }

    pub fn from_html(document: &Html) -> Self {
        Self::from_html_element(document.root_element())
    }

    pub fn from_html_element(element: ElementRef<'_>) -> Self {
        static_selector!(CATEGORY_SELECTOR <- ".category");
        let mut seen = Vec::new();
        let mut runs = Vec::new();
        for category in element.select(&CATEGORY_SELECTOR) {
            let Some(parent) = category.parent() else {
                continue;
            };
            if seen.contains(&parent.id()) {
                continue;
            }
            seen.push(parent.id());
            let run: Vec<MenuNode> = parent
                .children()
                .filter_map(ElementRef::wrap)
                .map(MenuNode::from_html_element)
                .collect();
            log::trace!("classified {} rows under one parent", run.len());
            runs.push(run);
        }
        Self { runs }
    }

    pub fn runs(&self) -> &[Vec<MenuNode>] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Vec::is_empty)
    }
}

impl From<Vec<MenuNode>> for MenuTree {
    fn from(run: Vec<MenuNode>) -> Self {
        Self::new(vec![run])
    }
}
