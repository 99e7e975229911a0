//! # Line Splitter
//!
//! Partitions a text file into numbered chunk files holding at most a
//! configured number of lines each.
//!
//! Lines keep their original terminator bytes, so concatenating the chunk
//! files in part order reproduces the input byte-for-byte. Chunk files are
//! named after the input (`app.log` becomes `app_part1.log`, `app_part2.log`,
//! ...) and written into a configurable output directory.
//!
//! ## Example
//!
//! ```no_run
//! use linesplit_splitter::{SplitConfig, Splitter};
//!
//! let splitter = Splitter::new(SplitConfig::with_lines_per_chunk(100_000));
//! let stats = splitter.split("server.log").unwrap();
//!
//! println!(
//!     "{} lines across {} chunk files",
//!     stats.total_lines, stats.files_created
//! );
//! ```

mod config;
mod error;
mod naming;
mod splitter;
mod stats;

pub use config::{SplitConfig, DEFAULT_LINES_PER_CHUNK, DEFAULT_OUTPUT_DIR};
pub use error::{Result, SplitError};
pub use naming::ChunkNamer;
pub use splitter::Splitter;
pub use stats::SplitStats;
