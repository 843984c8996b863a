use serde::ser::{Serialize, SerializeMap, Serializer};

/// Category name to dish names, in the order the page lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    categories: Vec<(String, Vec<String>)>,
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Adds a category. A name seen before keeps its position but takes the new dishes.
    pub fn insert(&mut self, category: String, dishes: Vec<String>) -> Option<Vec<String>> {
        match self.categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => Some(std::mem::replace(existing, dishes)),
            None => {
                self.categories.push((category, dishes));
                None
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, dishes)| dishes.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, dishes)| (name.as_str(), dishes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<C: Into<String>, D: Into<String>> FromIterator<(C, Vec<D>)> for Menu {
    fn from_iter<T: IntoIterator<Item = (C, Vec<D>)>>(iter: T) -> Self {
        let mut menu = Self::new();
        for (category, dishes) in iter {
            menu.insert(category.into(), dishes.into_iter().map(Into::into).collect());
        }
        menu
    }
}

impl Serialize for Menu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, dishes) in &self.categories {
            map.serialize_entry(name, dishes)?;
        }
        map.end()
    }
}
