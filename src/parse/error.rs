use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row inside a category's run has neither a dish link nor a category label.
    MissingDishLabel { category: String, position: usize },
}

impl Error {
    pub fn missing_dish_label(category: &str, position: usize) -> Self {
        Self::MissingDishLabel {
            category: category.to_string(),
            position,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDishLabel { category, position } => write!(
                f,
                "HTML Parse Error: row {position} under category {category:?} has no dish link"
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
