//! The recommendation bounded context: turning raw scanner output into a
//! ranked, per-language view of candidate base images.

pub mod domain;
pub mod policies;
pub mod services;
