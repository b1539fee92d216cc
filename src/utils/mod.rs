//! Utility modules for common functionality
//!
//! Provides logged file operations and narrow environment lookups.

pub mod env;
pub mod fs;

pub use env::EnvUtils;
pub use fs::FileSystemUtils;
