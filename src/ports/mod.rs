/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound ports (driven ports - infrastructure interfaces) exist
/// here; the CLI drives the use cases directly.
pub mod outbound;
