/// Process adapters - external scanner and runtime tools driven as
/// subprocesses with hard timeouts.
pub mod docker_cli;
pub mod runner;
pub mod syft_cli;
pub mod trivy_cli;

pub use docker_cli::DockerCli;
pub use runner::{CommandOutput, CommandRunner};
pub use syft_cli::SyftCli;
pub use trivy_cli::TrivyCli;
