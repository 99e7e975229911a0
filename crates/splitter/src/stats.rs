use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of a completed split operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitStats {
    /// Total lines copied from the input
    pub total_lines: usize,

    /// Number of chunk files created
    pub files_created: usize,

    /// Directory holding the chunk files
    pub output_dir: PathBuf,

    /// Chunk file paths in creation order
    pub files: Vec<PathBuf>,
}

impl SplitStats {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            total_lines: 0,
            files_created: 0,
            output_dir: output_dir.into(),
            files: Vec::new(),
        }
    }

    /// Record a newly created chunk file
    pub fn add_chunk(&mut self, path: PathBuf) {
        self.files_created += 1;
        self.files.push(path);
    }

    /// Record one copied line
    pub fn add_line(&mut self) {
        self.total_lines += 1;
    }
}
