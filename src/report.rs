//! Text-file boundary: bounded line ingestion, the append-mode results store
//! and the overwrite sink.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::runner::{Algorithm, BenchResult};

/// Reads at most `limit` lines from `path`. A file with fewer lines is not an
/// error, the harness simply works with what it got.
pub fn read_lines(path: &Path, limit: usize) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();

    for line in reader.lines().take(limit) {
        lines.push(line?);
    }

    Ok(lines)
}

/// Appends one `algorithm,lineCount,case,seconds,comparisons` row per result.
///
/// Unmeasured metrics are written as empty fields, distinct from the console
/// sentinels.
pub fn append_rows(
    path: &Path,
    algorithm: Algorithm,
    line_count: usize,
    results: &[BenchResult],
) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    for result in results {
        let seconds = result.elapsed_s.map(|s| s.to_string()).unwrap_or_default();
        let comparisons = result
            .comparisons
            .map(|c| c.to_string())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{},{}",
            algorithm.name(),
            line_count,
            result.case,
            seconds,
            comparisons
        )?;
    }

    writer.flush()
}

/// Overwrites `path` with one line per element.
pub fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for line in lines {
        writeln!(writer, "{line}")?;
    }

    writer.flush()
}
