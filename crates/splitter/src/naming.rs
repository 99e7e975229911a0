use std::path::{Path, PathBuf};

/// Derives chunk file names from an input path.
///
/// The input's file name is split at its final period: `huge.txt` yields
/// `huge_part1.txt`, `huge_part2.txt`, ... while an extension-less input
/// like `README` yields `README_part1`, `README_part2`, ...
#[derive(Debug, Clone)]
pub struct ChunkNamer {
    dir: PathBuf,
    base: String,
    ext: Option<String>,
}

impl ChunkNamer {
    /// Create a namer for the given input file and output directory
    pub fn new(input: &Path, output_dir: &Path) -> Self {
        let base = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .filter(|ext| !ext.is_empty());

        Self {
            dir: output_dir.to_path_buf(),
            base,
            ext,
        }
    }

    /// File name for the `n`-th chunk (1-based)
    #[must_use]
    pub fn file_name(&self, n: usize) -> String {
        match &self.ext {
            Some(ext) => format!("{}_part{}.{}", self.base, n, ext),
            None => format!("{}_part{}", self.base, n),
        }
    }

    /// Full path for the `n`-th chunk (1-based)
    #[must_use]
    pub fn path_for(&self, n: usize) -> PathBuf {
        self.dir.join(self.file_name(n))
    }
}
