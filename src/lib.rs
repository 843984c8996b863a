#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
mod error;
pub mod fetch;
pub mod parse;
pub mod report;
pub mod schedule;

use chrono::NaiveDate;

pub use error::{Error, Result};
use parse::Menu;
use schedule::MealSelection;

/// Downloads and parses the menu for `selection`, relative to `today`.
pub async fn load_menu(
    client: &reqwest::Client,
    config: &config::Config,
    selection: MealSelection<'_>,
    today: NaiveDate,
) -> Result<Menu> {
    let date = selection.date(today);
    let url = fetch::menu_url(&config.endpoint, date, config.menu_type, selection.meal.id());
    log::info!("Fetching {} menu for {}", selection.meal.name(), date.format("%m-%d-%Y"));
    let page = fetch::menu_page(client, url).await?;
    let menu = parse::menu_from_page(&page)?;
    log::debug!("Parsed {} categories", menu.len());
    Ok(menu)
}

/// Renders the wanted categories of `menu` in the configured output format.
///
/// A menu lacking any wanted category is [`Error::Unavailable`]; nothing is
/// rendered in that case.
pub fn render(menu: &Menu, output: config::OutputFormat) -> Result<String> {
    let report = report::pick(menu, &report::WANTED_CATEGORIES)?;
    match output {
        config::OutputFormat::Text => Ok(report.to_text()),
        config::OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
    }
}
