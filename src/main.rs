#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use chrono::Local;
use huds_menu::{
    config::Config,
    fetch::make_client,
    load_menu, render,
    report::{NO_MEAL_MESSAGE, NO_MENU_MESSAGE},
    schedule::{to_minute, MealSchedule},
    Error,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");

    let now = Local::now();
    let Some(selection) = MealSchedule::default().select(to_minute(now.time())) else {
        println!("{NO_MEAL_MESSAGE}");
        return Ok(());
    };
    log::info!(
        "Selected {}{}",
        selection.meal,
        if selection.next_day { " tomorrow" } else { "" }
    );

    let client = make_client(config.timeout)?;
    let menu = load_menu(&client, &config, selection, now.date_naive()).await?;
    match render(&menu, config.output) {
        Ok(out) => print!("{out}"),
        Err(Error::Unavailable(e)) => {
            log::warn!("{e}");
            println!("{NO_MENU_MESSAGE}");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
