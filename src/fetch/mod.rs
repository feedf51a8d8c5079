use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::Result;

static REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn make_client(user_agent: &str) -> Client {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("client creation should succeed")
}

/// Issues the single GET against the directory page. An error status from the
/// server is a hard failure; the body is never parsed on a non-2xx response.
pub async fn directory_page(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
