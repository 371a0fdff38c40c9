// Adapters layer: concrete implementations for external systems (git, http).

pub mod git;
pub mod http;
