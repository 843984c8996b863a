use std::fmt::{self, Display, Formatter, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::parse::Menu;

/// Categories printed for every meal, in print order.
pub const WANTED_CATEGORIES: [&str; 8] = [
    "Entrees",
    "Veg,Vegan",
    "Starch And Potatoes",
    "Vegetables",
    "Plant protein",
    "Halal",
    "Desserts",
    "From the Grill",
];

pub const NO_MEAL_MESSAGE: &str = "No meal currently being served.";
pub const NO_MENU_MESSAGE: &str = "No menu currently available.";

/// Why a fetched menu cannot be reported. Both print [`NO_MENU_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    EmptyMenu,
    MissingCategory(String),
}

impl Display for Unavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMenu => write!(f, "the menu page lists no categories"),
            Self::MissingCategory(name) => write!(f, "the menu has no {name:?} category"),
        }
    }
}

impl std::error::Error for Unavailable {}

#[derive(Debug, PartialEq, Eq)]
pub struct Report<'a> {
    sections: Vec<(&'a str, &'a [String])>,
}

/// Selects `wanted` from `menu`, all or nothing.
pub fn pick<'a>(menu: &'a Menu, wanted: &[&'a str]) -> Result<Report<'a>, Unavailable> {
    if menu.is_empty() {
        return Err(Unavailable::EmptyMenu);
    }
    let sections = wanted
        .iter()
        .map(|&name| {
            menu.get(name)
                .map(|dishes| (name, dishes))
                .ok_or_else(|| Unavailable::MissingCategory(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Report { sections })
}

impl<'a> Report<'a> {
    pub fn sections(&self) -> &[(&'a str, &'a [String])] {
        &self.sections
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (name, dishes) in &self.sections {
            let _ = writeln!(out, "{name}:");
            for dish in *dishes {
                let _ = writeln!(out, "  {dish}");
            }
        }
        out
    }
}

impl Serialize for Report<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, dishes) in &self.sections {
            map.serialize_entry(name, dishes)?;
        }
        map.end()
    }
}
