/// Network adapters for registry API calls
mod registry_client;

pub use registry_client::RegistryHttpClient;
