use anyhow::Result;
use clap::Parser;
use linesplit_splitter::{SplitConfig, Splitter, DEFAULT_LINES_PER_CHUNK, DEFAULT_OUTPUT_DIR};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linesplit")]
#[command(about = "Split a text file into fixed-size line chunks", long_about = None)]
#[command(version)]
struct Cli {
    /// Text file to split
    input: PathBuf,

    /// Maximum number of lines per chunk file
    #[arg(short = 'n', long, default_value_t = DEFAULT_LINES_PER_CHUNK)]
    lines: usize,

    /// Directory that receives the chunk files (created if absent)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the run summary as JSON instead of progress text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1 rather than clap's default 2; --help and
            // --version keep exit code 0.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // JSON mode keeps stdout clean for parsing
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SplitConfig {
        lines_per_chunk: cli.lines,
        output_dir: cli.output_dir.clone(),
    };
    let splitter = Splitter::new(config);

    if cli.json {
        let stats = splitter.split(&cli.input)?;
        print_stdout(&serde_json::to_string_pretty(&stats)?)?;
        return Ok(());
    }

    print_stdout(&format!("Starting to split {}...", cli.input.display()))?;

    let stats = splitter.split_with_progress(&cli.input, |path| {
        let _ = print_stdout(&format!("Creating file: {}", path.display()));
    })?;

    print_stdout("\nSplit complete!")?;
    print_stdout(&format!("Total lines processed: {}", stats.total_lines))?;
    print_stdout(&format!("Number of files created: {}", stats.files_created))?;
    print_stdout(&format!(
        "Output files are in the '{}' directory",
        stats.output_dir.display()
    ))?;

    Ok(())
}

/// Print a line to stdout, tolerating a closed pipe (e.g. `linesplit x | head`)
fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
