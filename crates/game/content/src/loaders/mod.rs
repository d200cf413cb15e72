//! Content loaders for reading arena data from files.
//!
//! Every loader reads a whole file, parses it with serde, and converts the
//! file-format structs into `arena-core` types.

pub mod config;
pub mod scenario;

pub use config::ConfigLoader;
pub use scenario::{Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
