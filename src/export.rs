use std::path::Path;

use crate::error::Result;
use crate::parse::FacultyRecord;

static HEADERS: [&str; 6] = ["name", "email", "phone", "office", "faculty", "page_link"];

/// Writes the records as CSV, overwriting whatever is at `path`. The header
/// row is written explicitly so an empty scrape still produces a header-only
/// file. The destination directory is expected to exist already.
pub fn write_csv(records: &[FacultyRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn sample_record(name: &str, email: &str) -> FacultyRecord {
        FacultyRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: "+962 6 429 4100".to_string(),
            office: "C 311".to_string(),
            faculty: crate::config::SCHOOL.to_string(),
            page_link: crate::config::DIRECTORY_URL.to_string(),
        }
    }

    #[test]
    fn test_write_and_read_back() {
        let path = env::temp_dir().join("gju_faculty_export_test.csv");
        let records = vec![
            sample_record("Dr. Jane O'Brien", "jane.obrien@gju.edu.jo"),
            sample_record("Omar Haddad", crate::config::NO_EMAIL),
        ];
        write_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(HEADERS.as_slice())
        );
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Dr. Jane O'Brien");
        assert_eq!(&rows[1][1], crate::config::NO_EMAIL);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_scrape_writes_header_only() {
        let path = env::temp_dir().join("gju_faculty_export_empty_test.csv");
        write_csv(&[], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), HEADERS.join(","));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let path = env::temp_dir()
            .join("gju_faculty_no_such_dir")
            .join("professors.csv");
        assert!(write_csv(&[], &path).is_err());
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let path = env::temp_dir().join("gju_faculty_export_idempotent_test.csv");
        let records = vec![sample_record("Omar Haddad", "omar.haddad@gju.edu.jo")];

        write_csv(&records, &path).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        write_csv(&records, &path).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);

        fs::remove_file(&path).unwrap();
    }
}
