/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: registry HTTP calls,
/// docker/syft/trivy subprocesses, the JSON image store, report files,
/// and console progress output.
pub mod outbound;
