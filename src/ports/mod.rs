/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which the
/// facade reaches record streams.
pub mod outbound;
