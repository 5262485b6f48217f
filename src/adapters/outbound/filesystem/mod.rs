/// Filesystem adapters for delimited record streams
mod line_joiner;
mod line_tokenizer;

pub use line_joiner::LineJoiner;
pub use line_tokenizer::LineTokenizer;
