use scraper::{ElementRef, Html};
use serde::Serialize;

use super::clean::clean_text;
use crate::config::ScrapeConfig;
use crate::static_selector;

static_selector!(ROW_SELECTOR <- "div.views-row");
static_selector!(TITLE_SELECTOR <- "div.views-field-title");
static_selector!(PHONE_SELECTOR <- "div.faculty-telphone");
static_selector!(OFFICE_SELECTOR <- "div.faculty-office");
static_selector!(ANCHOR_SELECTOR <- "a[href]");

/// One faculty member's directory entry. Field order here is the CSV column
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultyRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub office: String,
    pub faculty: String,
    pub page_link: String,
}

impl FacultyRecord {
    /// Extracts one record from a `views-row` element. A row whose cleaned
    /// name comes out empty yields `None`; any other missing field degrades
    /// to its default instead of rejecting the row.
    pub fn from_html_element(element: ElementRef, config: &ScrapeConfig) -> Option<Self> {
        let name = element
            .select(&TITLE_SELECTOR)
            .next()
            .map(|title| clean_text(title, "Name "))
            .unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        let email = mailto_address(element)
            .filter(|address| !address.is_empty())
            .unwrap_or_else(|| config.email_fallback.clone());

        let phone = element
            .select(&PHONE_SELECTOR)
            .next()
            .map(|phone| clean_text(phone, "Phone "))
            .unwrap_or_default();

        let office = element
            .select(&OFFICE_SELECTOR)
            .next()
            .map(|office| clean_text(office, "Office "))
            .filter(|office| !office.is_empty())
            .unwrap_or_else(|| config.office_fallback.clone());

        Some(Self {
            name,
            email,
            phone,
            office,
            faculty: config.school.clone(),
            page_link: config.url.to_string(),
        })
    }
}

/// Address of the first `mailto:` anchor inside the row, scheme stripped and
/// the percent-encoded `@` decoded. The page only ever escapes the `@`, so no
/// general percent-decoding is done.
fn mailto_address(element: ElementRef) -> Option<String> {
    element
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.attr("href"))
        .find_map(|href| href.strip_prefix("mailto:"))
        .map(|address| address.replace("%40", "@"))
}

/// All faculty records on the page, in document order. A page with no
/// matching rows is an empty directory, not an error.
pub fn faculty_records(document: &Html, config: &ScrapeConfig) -> Vec<FacultyRecord> {
    document
        .root_element()
        .select(&ROW_SELECTOR)
        .filter_map(|row| FacultyRecord::from_html_element(row, config))
        .collect()
}
