mod clean;
mod directory;
mod static_selector;

pub use directory::faculty_records;
pub use directory::FacultyRecord;
