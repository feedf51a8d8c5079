use std::{env, path::PathBuf};

use url::Url;

use crate::error::Result;

/// Directory page scraped when `DIRECTORY_URL` is unset.
pub static DIRECTORY_URL: &str = "https://www.gju.edu.jo/content/faculty-directory-14469";
/// The site serves an access-denied page to non-browser clients.
pub static USER_AGENT: &str = "Mozilla/5.0";
pub static OUTPUT_PATH: &str = "src/data/professors/professors.csv";
pub static SCHOOL: &str = "School of Electrical Engineering and Information Technology (SEEIT)";

pub static NO_EMAIL: &str = "No email available on gju.edu.com";
pub static NO_OFFICE: &str = "No office available on gju.edu.com";

/// Run parameters for one scrape. The directory page, output location and
/// school label are baked-in defaults overridable through the environment.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: Url,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub school: String,
    pub email_fallback: String,
    pub office_fallback: String,
}

impl ScrapeConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = env::var("DIRECTORY_URL") {
            config.url = Url::parse(&url)?;
        }
        if let Ok(path) = env::var("OUTPUT_PATH") {
            config.output_path = PathBuf::from(path);
        }
        if let Ok(school) = env::var("SCHOOL_NAME") {
            config.school = school;
        }
        Ok(config)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DIRECTORY_URL).expect("default directory url should be valid"),
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            school: SCHOOL.to_string(),
            email_fallback: NO_EMAIL.to_string(),
            office_fallback: NO_OFFICE.to_string(),
        }
    }
}
