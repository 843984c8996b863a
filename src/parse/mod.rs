mod error;
mod extract;
mod menu;
mod node;
mod static_selector;
mod text;

pub use error::Error;
pub use extract::extract;
pub use menu::Menu;
pub use node::{MenuNode, MenuTree};

/// Parses a menu page and groups its dishes by category.
pub fn menu_from_page(page: &str) -> Result<Menu, Error> {
    let document = scraper::Html::parse_document(page);
    let tree = MenuTree::from_html(&document);
    log::debug!("menu page has {} category run(s)", tree.runs().len());
    extract(&tree)
}
