use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::naming::ChunkNamer;
use crate::stats::SplitStats;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Splits a text file into chunk files of at most `lines_per_chunk` lines each.
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a new splitter with configuration
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Split `input` into chunk files, discarding progress notifications
    pub fn split(&self, input: impl AsRef<Path>) -> Result<SplitStats> {
        self.split_with_progress(input, |_| {})
    }

    /// Split `input` into chunk files inside the configured output directory,
    /// invoking `on_chunk` with each chunk file's path as it is created.
    ///
    /// Lines are copied verbatim including their terminating newline bytes, so
    /// concatenating the chunk files in part order reproduces the input
    /// byte-for-byte. Reruns overwrite chunk files from earlier runs. If an
    /// error interrupts the run, chunk files already written are left on disk.
    pub fn split_with_progress(
        &self,
        input: impl AsRef<Path>,
        mut on_chunk: impl FnMut(&Path),
    ) -> Result<SplitStats> {
        self.config.validate()?;

        let input = input.as_ref();
        if !input.exists() {
            return Err(SplitError::NotFound(input.to_path_buf()));
        }

        fs::create_dir_all(&self.config.output_dir)?;

        let namer = ChunkNamer::new(input, &self.config.output_dir);
        let mut reader = BufReader::new(File::open(input)?);
        let mut stats = SplitStats::new(self.config.output_dir.clone());

        // One line of lookahead, so a chunk file is only created once a line
        // exists to fill it. Empty input produces no files.
        let mut line = String::new();
        let mut pending = reader.read_line(&mut line)? != 0;

        while pending {
            let path = namer.path_for(stats.files_created + 1);
            let mut writer = BufWriter::new(File::create(&path)?);
            log::debug!("creating chunk file {}", path.display());
            on_chunk(&path);
            stats.add_chunk(path);

            let mut written = 0;
            while pending && written < self.config.lines_per_chunk {
                writer.write_all(line.as_bytes())?;
                stats.add_line();
                written += 1;

                line.clear();
                pending = reader.read_line(&mut line)? != 0;
            }

            writer.flush()?;
        }

        log::info!(
            "split {} into {} lines across {} chunk files",
            input.display(),
            stats.total_lines,
            stats.files_created
        );

        Ok(stats)
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &SplitConfig {
        &self.config
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}
