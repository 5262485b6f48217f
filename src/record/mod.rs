/// Domain layer - value types and pure line codec logic
///
/// This module has no I/O; it defines the separator and mode value types
/// and the pure split/join functions the adapters build on.
pub mod line;
pub mod mode;
pub mod separator;

pub use mode::Mode;
pub use separator::Separator;
