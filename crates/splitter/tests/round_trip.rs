use linesplit_splitter::{SplitConfig, SplitStats, Splitter};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn numbered_input(lines: usize) -> String {
    (1..=lines).map(|n| format!("line {n}\n")).collect()
}

fn split_into(dir: &Path, contents: &str, lines_per_chunk: usize) -> SplitStats {
    let input = dir.join("input.txt");
    fs::write(&input, contents).expect("writing input failed");

    let config = SplitConfig {
        lines_per_chunk,
        output_dir: dir.join("split_output"),
    };
    Splitter::new(config).split(&input).expect("split failed")
}

fn reassemble(stats: &SplitStats) -> String {
    stats
        .files
        .iter()
        .map(|path| fs::read_to_string(path).expect("reading chunk failed"))
        .collect()
}

#[test]
fn chunks_reassemble_for_uneven_chunk_sizes() {
    for (total, per_chunk) in [(1, 1), (5, 2), (6, 3), (7, 3), (250, 100)] {
        let temp = tempdir().expect("tempdir failed");
        let contents = numbered_input(total);
        let stats = split_into(temp.path(), &contents, per_chunk);

        let expected_files = (total + per_chunk - 1) / per_chunk;
        assert_eq!(
            stats.files_created, expected_files,
            "file count for {total} lines in chunks of {per_chunk}"
        );
        assert_eq!(stats.total_lines, total);
        assert_eq!(
            reassemble(&stats),
            contents,
            "reassembly for {total} lines in chunks of {per_chunk}"
        );
    }
}

#[test]
fn every_chunk_but_the_last_is_full() {
    let temp = tempdir().expect("tempdir failed");
    let stats = split_into(temp.path(), &numbered_input(7), 3);

    let line_counts: Vec<usize> = stats
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .expect("reading chunk failed")
                .lines()
                .count()
        })
        .collect();
    assert_eq!(line_counts, vec![3, 3, 1]);
}

#[test]
fn rerunning_produces_identical_output() {
    let temp = tempdir().expect("tempdir failed");
    let contents = numbered_input(5);

    let first = split_into(temp.path(), &contents, 2);
    let second = split_into(temp.path(), &contents, 2);

    assert_eq!(first.files, second.files);
    assert_eq!(reassemble(&second), contents);

    let on_disk = fs::read_dir(temp.path().join("split_output"))
        .expect("listing output failed")
        .count();
    assert_eq!(on_disk, second.files.len(), "no stale chunk files");
}
