#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod export;
mod fetch;
mod parse;

use crate::config::ScrapeConfig;

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let config = ScrapeConfig::from_env()?;
    let client = fetch::make_client(&config.user_agent);

    log::info!("fetching faculty directory at {}", config.url);
    let page = fetch::directory_page(&client, &config.url).await?;

    let document = scraper::Html::parse_document(&page);
    let records = parse::faculty_records(&document, &config);
    log::info!("extracted {} faculty records", records.len());

    export::write_csv(&records, &config.output_path)?;
    log::info!("saved to {}", config.output_path.display());
    Ok(())
}
