/// Application layer - the record file facade
pub mod record_file;

pub use record_file::RecordFile;
