mod priority;

pub use priority::{is_dotnet_runtime_package, PriorityPolicy};
