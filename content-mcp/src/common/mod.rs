//! Shared helpers used across the library

/// Environment variable loading
pub mod env_loader;

pub use env_loader::{
    load_env_flag, load_env_optional, load_env_parsed, load_env_required, load_env_string,
    parse_flag,
};
