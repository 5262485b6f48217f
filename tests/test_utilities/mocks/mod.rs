/// Mock implementations for testing
mod mock_record_reader;
mod mock_record_writer;

pub use mock_record_reader::MockRecordReader;
pub use mock_record_writer::MockRecordWriter;
