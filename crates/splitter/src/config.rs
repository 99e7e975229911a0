use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SplitError};

/// Default number of lines per chunk file
pub const DEFAULT_LINES_PER_CHUNK: usize = 500_000;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "split_output";

/// Configuration for line splitting behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Maximum number of lines per chunk file
    pub lines_per_chunk: usize,

    /// Directory that receives the chunk files (created if absent)
    pub output_dir: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            lines_per_chunk: DEFAULT_LINES_PER_CHUNK,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SplitConfig {
    /// Create config with a custom chunk size, keeping the default output directory
    #[must_use]
    pub fn with_lines_per_chunk(lines_per_chunk: usize) -> Self {
        Self {
            lines_per_chunk,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.lines_per_chunk == 0 {
            return Err(SplitError::invalid_config("lines_per_chunk must be > 0"));
        }
        Ok(())
    }
}
