use super::{
    error::{Error, Result},
    menu::Menu,
    node::{MenuNode, MenuTree},
};

/// Groups every dish under the closest category row before it.
///
/// Rows ahead of a run's first category belong to nothing and are skipped.
/// A row inside a category that is not a dish fails the whole page.
pub fn extract(tree: &MenuTree) -> Result<Menu> {
    let mut menu = Menu::new();
    for run in tree.runs() {
        for (index, node) in run.iter().enumerate() {
            let MenuNode::Category(name) = node else {
                continue;
            };
            let dishes = dishes_after(run, index, name)?;
            if menu.insert(name.clone(), dishes).is_some() {
                log::debug!("category {name:?} listed twice, keeping the later one");
            }
        }
    }
    Ok(menu)
}

fn dishes_after(run: &[MenuNode], category_index: usize, category: &str) -> Result<Vec<String>> {
    let mut dishes = vec![];
    for (position, node) in run.iter().enumerate().skip(category_index + 1) {
        match node {
            MenuNode::Category(_) => break,
            MenuNode::Dish(name) => dishes.push(name.clone()),
            MenuNode::Other => return Err(Error::missing_dish_label(category, position)),
        }
    }
    Ok(dishes)
}
