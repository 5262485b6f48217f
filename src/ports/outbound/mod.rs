/// Outbound ports (Driven ports) - record stream interfaces
///
/// These ports define the capability sets the facade is constructed with:
/// a line-readable record source and a line-writable record sink.
pub mod record_reader;
pub mod record_writer;

pub use record_reader::RecordReader;
pub use record_writer::RecordWriter;
