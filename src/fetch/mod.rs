use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://www.foodpro.huds.harvard.edu/foodpro/menu_items.asp";

/// Menu type the dining hall's own site requests.
pub const DEFAULT_MENU_TYPE: u32 = 30;

pub fn make_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().gzip(true).timeout(timeout).build()
}

/// `endpoint?date=MM-DD-YYYY&type=..&meal=..`
pub fn menu_url(endpoint: &Url, date: NaiveDate, menu_type: u32, meal_id: u32) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("date", &date.format("%m-%d-%Y").to_string())
        .append_pair("type", &menu_type.to_string())
        .append_pair("meal", &meal_id.to_string());
    url
}

/// Fetches one meal's menu page. Non-success statuses are errors.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: Url) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}
